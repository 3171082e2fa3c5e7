//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (JSON body, URL params, etc.)
//! 2. Delegates to the service layer
//! 3. Returns HTTP response (JSON, status code)

/// Account read endpoints
pub mod accounts;
/// Health check endpoint
pub mod health;
/// Transaction creation endpoint
pub mod transactions;
