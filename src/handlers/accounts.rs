//! Account HTTP handlers.
//!
//! This module implements the account read endpoints:
//! - GET /account/{id}/ - Get account balance and number
//! - GET /account/{id}/transaction/ - List the account's transactions

use crate::{
    db::DbPool,
    error::AppError,
    models::{account::AccountResponse, transaction::TransactionResponse},
    services::transaction_service,
};
use axum::{
    Json,
    extract::{Path, State},
};

/// Get a specific account by ID.
///
/// # URL Parameters
///
/// - `id` - Id of the account to retrieve
///
/// # Response
///
/// - **Success (200 OK)**: `{id, number, balance}` — the customer
///   relationship is internal and never serialized
/// - **Error (404)**: account not found
pub async fn get_account(
    State(pool): State<DbPool>,
    Path(account_id): Path<String>,
) -> Result<Json<AccountResponse>, AppError> {
    let account = transaction_service::get_account(&pool, &account_id).await?;

    Ok(Json(account.into()))
}

/// List all transactions booked against an account.
///
/// # Response
///
/// - **Success (200 OK)**: JSON array of transactions (may be empty)
/// - **Error (404)**: account not found — an unknown id is an error, never
///   an empty list
pub async fn list_account_transactions(
    State(pool): State<DbPool>,
    Path(account_id): Path<String>,
) -> Result<Json<Vec<TransactionResponse>>, AppError> {
    let transactions = transaction_service::list_transactions(&pool, &account_id).await?;

    // Convert each Transaction to TransactionResponse
    let responses: Vec<TransactionResponse> = transactions.into_iter().map(Into::into).collect();

    Ok(Json(responses))
}
