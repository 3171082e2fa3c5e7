//! Transaction service - Core business logic for the ledger.
//!
//! This service handles:
//! - Atomic transaction creation with balance updates
//! - The nominal business rule (multiples of 7500 are rejected)
//! - Account and transaction-history lookups
//!
//! # Atomicity Guarantees
//!
//! The create workflow runs inside one PostgreSQL transaction: account
//! lookup, rule check, transaction insert, and balance update commit or
//! roll back together.

use crate::{
    db::DbPool,
    error::AppError,
    models::{
        account::Account,
        transaction::{NewTransaction, Transaction},
    },
};
use rust_decimal::Decimal;
use uuid::Uuid;

/// The ledger rejects any nominal that is an exact multiple of this amount.
const FORBIDDEN_NOMINAL_MULTIPLE: Decimal = Decimal::from_parts(7500, 0, 0, false, 0);

/// Whether a nominal violates the multiple-of-7500 rule.
///
/// Zero is a multiple of 7500 and is therefore rejected here even though it
/// passes field validation (nominal >= 0).
pub fn violates_nominal_rule(nominal: Decimal) -> bool {
    nominal % FORBIDDEN_NOMINAL_MULTIPLE == Decimal::ZERO
}

/// Create a ledger transaction and apply it to the account balance.
///
/// # Process
///
/// 1. Start database transaction
/// 2. Lock the referenced account row (`FOR UPDATE`)
/// 3. Check the nominal rule before anything is inserted
/// 4. Insert the transaction row
/// 5. Add the nominal to the account balance
/// 6. Commit (or rollback on error)
///
/// The rule check precedes the insert, so a rejected transaction is never
/// written, even transiently.
///
/// # Errors
///
/// - `AccountNotFound`: referenced account doesn't exist
/// - `NominalMultipleOf7500`: nominal violates the business rule
/// - `Database`: database error occurred
pub async fn create_transaction(
    pool: &DbPool,
    new: NewTransaction,
) -> Result<Transaction, AppError> {
    // Start db transaction
    let mut tx = pool.begin().await?;

    // Lock the account row for the duration of this transaction.
    // FOR UPDATE ensures no concurrent request can modify the balance
    // between our read and our update.
    let account = sqlx::query_as::<_, Account>(
        "SELECT id, number, id_customer, balance FROM t_account WHERE id = $1 FOR UPDATE",
    )
    .bind(&new.account_id)
    .fetch_optional(&mut *tx)
    .await?
    .ok_or(AppError::AccountNotFound)?;

    // Business rule: exact multiples of 7500 are rejected before any write
    if violates_nominal_rule(new.nominal) {
        tx.rollback().await?;
        return Err(AppError::NominalMultipleOf7500);
    }

    // Record the transaction
    let transaction = sqlx::query_as::<_, Transaction>(
        r#"
        INSERT INTO t_transaction (id, time_transaction, id_account, description, nominal)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, time_transaction, id_account, description, nominal
        "#,
    )
    .bind(Uuid::new_v4().to_string())
    .bind(new.time_transaction)
    .bind(&account.id)
    .bind(&new.description)
    .bind(new.nominal)
    .fetch_one(&mut *tx)
    .await?;

    // Apply the nominal to the account balance
    sqlx::query("UPDATE t_account SET balance = balance + $1 WHERE id = $2")
        .bind(new.nominal)
        .bind(&account.id)
        .execute(&mut *tx)
        .await?;

    // Commit all changes atomically
    tx.commit().await?;

    Ok(transaction)
}

/// Get an account by id.
///
/// # Errors
///
/// - `AccountNotFound`: no account with this id exists
pub async fn get_account(pool: &DbPool, account_id: &str) -> Result<Account, AppError> {
    sqlx::query_as::<_, Account>("SELECT id, number, id_customer, balance FROM t_account WHERE id = $1")
        .bind(account_id)
        .fetch_optional(pool)
        .await?
        .ok_or(AppError::AccountNotFound)
}

/// List all transactions booked against an account, in insertion order.
///
/// The account is looked up first so an unknown id fails with
/// `AccountNotFound` instead of returning an empty list.
pub async fn list_transactions(
    pool: &DbPool,
    account_id: &str,
) -> Result<Vec<Transaction>, AppError> {
    let account = get_account(pool, account_id).await?;

    let transactions = sqlx::query_as::<_, Transaction>(
        "SELECT id, time_transaction, id_account, description, nominal FROM t_transaction WHERE id_account = $1",
    )
    .bind(&account.id)
    .fetch_all(pool)
    .await?;

    Ok(transactions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiples_of_7500_violate_the_rule() {
        assert!(violates_nominal_rule(Decimal::new(7_500, 0)));
        assert!(violates_nominal_rule(Decimal::new(15_000, 0)));
        assert!(violates_nominal_rule(Decimal::new(75_000, 0)));
    }

    #[test]
    fn zero_is_a_multiple_of_7500() {
        assert!(violates_nominal_rule(Decimal::ZERO));
    }

    #[test]
    fn non_multiples_pass_the_rule() {
        assert!(!violates_nominal_rule(Decimal::new(10_000, 0)));
        assert!(!violates_nominal_rule(Decimal::new(7_499, 0)));
        assert!(!violates_nominal_rule(Decimal::new(7_501, 0)));
        // Fractional nominals are never exact multiples
        assert!(!violates_nominal_rule(Decimal::new(750_050, 2)));
    }
}
