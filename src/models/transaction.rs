//! Transaction data models and API request/response types.
//!
//! This module defines:
//! - `Transaction`: Database entity representing a ledger transaction
//! - `CreateTransactionRequest`: Request body in the original wire format
//! - `NewTransaction`: Validated insert payload produced by `validate`
//! - `TransactionResponse`: Response body returned to clients

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents a transaction record from the database.
///
/// # Database Table
///
/// Maps to the `t_transaction` table. Each transaction:
/// - References exactly one account (via `id_account`)
/// - Stores the nominal as an exact decimal (`NUMERIC`, never floats)
/// - Is insert-only: there are no update or delete endpoints
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Unique identifier for this transaction
    pub id: String,

    /// When the transaction took place (no time zone, as supplied by the client)
    pub time_transaction: NaiveDateTime,

    /// Foreign key to the account this transaction belongs to
    #[sqlx(rename = "id_account")]
    pub account_id: String,

    /// Human-readable description (non-empty, at most 255 characters)
    pub description: String,

    /// Monetary amount of the transaction (>= 0)
    pub nominal: Decimal,
}

/// Nested account reference inside a create-transaction request.
#[derive(Debug, Deserialize)]
pub struct AccountRef {
    /// Id of the account the transaction applies to
    pub id: Option<String>,
}

/// Request body for `POST /transaction/`.
///
/// Field names follow the original wire format: a nested `account.id`
/// reference, `timeTransaction` as an ISO-8601 local timestamp, and
/// `nominal` as a decimal string (a JSON number is also accepted).
///
/// # JSON Example
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
/// All fields deserialize as optional so that a missing field surfaces as a
/// validation violation (400) instead of a body-rejection error.
#[derive(Debug, Deserialize)]
pub struct CreateTransactionRequest {
    /// Account the transaction applies to
    pub account: Option<AccountRef>,

    /// Transaction timestamp
    #[serde(rename = "timeTransaction")]
    pub time_transaction: Option<NaiveDateTime>,

    /// Description of the transaction
    pub description: Option<String>,

    /// Amount to book against the account
    pub nominal: Option<Decimal>,
}

/// A create-transaction payload that passed field validation.
///
/// Produced only by [`CreateTransactionRequest::validate`]; the service layer
/// accepts this type so unvalidated data cannot reach the database.
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub account_id: String,
    pub time_transaction: NaiveDateTime,
    pub description: String,
    pub nominal: Decimal,
}

impl CreateTransactionRequest {
    /// Check field constraints, returning the validated insert payload or
    /// every violation found.
    ///
    /// Rules:
    /// - `account.id`: present and non-empty
    /// - `timeTransaction`: present
    /// - `description`: present, non-empty, at most 255 characters
    /// - `nominal`: present and >= 0
    pub fn validate(self) -> Result<NewTransaction, Vec<String>> {
        let mut violations = Vec::new();

        let account_id = match self.account.and_then(|a| a.id) {
            Some(id) if !id.is_empty() => Some(id),
            Some(_) => {
                violations.push("account.id must not be empty".to_string());
                None
            }
            None => {
                violations.push("account.id is required".to_string());
                None
            }
        };

        if self.time_transaction.is_none() {
            violations.push("timeTransaction is required".to_string());
        }

        let description = match self.description {
            Some(d) if d.is_empty() => {
                violations.push("description must not be empty".to_string());
                None
            }
            Some(d) if d.len() > 255 => {
                violations.push("description must be at most 255 characters".to_string());
                None
            }
            Some(d) => Some(d),
            None => {
                violations.push("description is required".to_string());
                None
            }
        };

        match self.nominal {
            Some(n) if n < Decimal::ZERO => {
                violations.push("nominal must not be negative".to_string());
            }
            Some(_) => {}
            None => violations.push("nominal is required".to_string()),
        }

        if violations.is_empty() {
            // All fields verified present above
            Ok(NewTransaction {
                account_id: account_id.unwrap(),
                time_transaction: self.time_transaction.unwrap(),
                description: description.unwrap(),
                nominal: self.nominal.unwrap(),
            })
        } else {
            Err(violations)
        }
    }
}

/// Response body for transaction listings.
///
/// # JSON Example
///
/// ```json
/// {
///   "id": "770e8400-e29b-41d4-a716-446655440002",
///   "timeTransaction": "2021-01-01T17:00:00",
///   "accountId": "r001",
///   "description": "Test transaksi sukses",
///   "nominal": "10000"
/// }
/// ```
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionResponse {
    pub id: String,
    pub time_transaction: NaiveDateTime,
    pub account_id: String,
    pub description: String,
    pub nominal: Decimal,
}

impl From<Transaction> for TransactionResponse {
    fn from(transaction: Transaction) -> Self {
        Self {
            id: transaction.id,
            time_transaction: transaction.time_transaction,
            account_id: transaction.account_id,
            description: transaction.description,
            nominal: transaction.nominal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(json: serde_json::Value) -> CreateTransactionRequest {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn accepts_original_wire_format() {
        let new = request(serde_json::json!({
            "account": { "id": "r001" },
            "timeTransaction": "2021-01-01T17:00:00",
            "description": "Test transaksi sukses",
            "nominal": "10000"
        }))
        .validate()
        .unwrap();

        assert_eq!(new.account_id, "r001");
        assert_eq!(new.description, "Test transaksi sukses");
        assert_eq!(new.nominal, Decimal::new(10_000, 0));
        assert_eq!(
            new.time_transaction.to_string(),
            "2021-01-01 17:00:00".to_string()
        );
    }

    #[test]
    fn accepts_numeric_nominal() {
        let new = request(serde_json::json!({
            "account": { "id": "r001" },
            "timeTransaction": "2021-01-01T17:00:00",
            "description": "numeric nominal",
            "nominal": 2500.75
        }))
        .validate()
        .unwrap();

        assert_eq!(new.nominal, Decimal::new(250_075, 2));
    }

    #[test]
    fn zero_nominal_is_valid() {
        let result = request(serde_json::json!({
            "account": { "id": "r001" },
            "timeTransaction": "2021-01-01T17:00:00",
            "description": "zero",
            "nominal": "0"
        }))
        .validate();

        assert!(result.is_ok());
    }

    #[test]
    fn negative_nominal_is_a_violation() {
        let violations = request(serde_json::json!({
            "account": { "id": "r001" },
            "timeTransaction": "2021-01-01T17:00:00",
            "description": "negative",
            "nominal": "-1"
        }))
        .validate()
        .unwrap_err();

        assert_eq!(violations, vec!["nominal must not be negative"]);
    }

    #[test]
    fn missing_fields_collect_all_violations() {
        let violations = request(serde_json::json!({})).validate().unwrap_err();
        assert_eq!(violations.len(), 4);
    }

    #[test]
    fn empty_account_id_is_a_violation() {
        let violations = request(serde_json::json!({
            "account": { "id": "" },
            "timeTransaction": "2021-01-01T17:00:00",
            "description": "desc",
            "nominal": "1"
        }))
        .validate()
        .unwrap_err();

        assert_eq!(violations, vec!["account.id must not be empty"]);
    }

    #[test]
    fn overlong_description_is_a_violation() {
        let violations = request(serde_json::json!({
            "account": { "id": "r001" },
            "timeTransaction": "2021-01-01T17:00:00",
            "description": "x".repeat(256),
            "nominal": "1"
        }))
        .validate()
        .unwrap_err();

        assert_eq!(
            violations,
            vec!["description must be at most 255 characters"]
        );
    }

    #[test]
    fn response_uses_wire_field_names() {
        let transaction = Transaction {
            id: "t001".to_string(),
            time_transaction: "2021-01-01T17:00:00".parse().unwrap(),
            account_id: "r001".to_string(),
            description: "Test transaksi sukses".to_string(),
            nominal: Decimal::new(10_000, 0),
        };

        let json = serde_json::to_value(TransactionResponse::from(transaction)).unwrap();
        assert_eq!(json["timeTransaction"], "2021-01-01T17:00:00");
        assert_eq!(json["accountId"], "r001");
        assert_eq!(json["nominal"], "10000");
    }
}
