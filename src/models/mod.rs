//! Data models representing database entities.
//!
//! This module contains all data structures that map to database tables.

/// Customer model
pub mod customer;
/// Account model
pub mod account;
/// Ledger transaction model
pub mod transaction;
