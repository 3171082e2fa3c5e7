//! Transaction HTTP handlers.
//!
//! This module implements the transaction API endpoint:
//! - POST /transaction/ - Create a ledger transaction against an account

use crate::{
    db::DbPool, error::AppError, models::transaction::CreateTransactionRequest,
    services::transaction_service,
};
use axum::{Json, extract::State, http::StatusCode};

/// Create a transaction and apply it to the account balance.
///
/// # Request Body
///
/// ```json
/// {
///   "account": { "id": "r001" },
///   "timeTransaction": "2021-01-01T17:00:00",
///   "description": "Test transaksi sukses",
///   "nominal": "10000"
/// }
/// ```
///
/// # Response
///
/// - **Success (201 Created)**: empty body
/// - **Error (400)**: a field constraint was violated
/// - **Error (404)**: referenced account does not exist
/// - **Error (422)**: nominal is an exact multiple of 7500
pub async fn create_transaction(
    State(pool): State<DbPool>,
    Json(request): Json<CreateTransactionRequest>,
) -> Result<StatusCode, AppError> {
    // Explicit field validation before any persistence effect
    let new = request.validate().map_err(AppError::Validation)?;

    let transaction = transaction_service::create_transaction(&pool, new).await?;
    tracing::info!(
        transaction_id = %transaction.id,
        account_id = %transaction.account_id,
        "transaction created"
    );

    Ok(StatusCode::CREATED)
}
