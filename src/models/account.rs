//! Account data models and API response types.
//!
//! This module defines:
//! - `Account`: Database entity representing an account
//! - `AccountResponse`: Response body returned to clients

use rust_decimal::Decimal;
use serde::Serialize;

/// Represents an account record from the database.
///
/// # Database Table
///
/// Maps to the `t_account` table. Each account:
/// - Belongs to exactly one customer (via `id_customer`, unique per customer)
/// - Has an exact-decimal balance (`NUMERIC`, never floats)
///
/// # Balance
///
/// `balance` is the only mutable field; it is updated exclusively by the
/// create-transaction workflow and always equals the sum of the account's
/// committed transaction nominals.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct Account {
    /// Unique identifier for this account
    pub id: String,

    /// Unique account number (3-50 characters)
    pub number: String,

    /// Foreign key to the customer that owns this account
    ///
    /// Internal relationship field; never serialized to API clients.
    #[sqlx(rename = "id_customer")]
    #[serde(skip_serializing)]
    pub customer_id: String,

    /// Current balance as an exact decimal
    pub balance: Decimal,
}

/// Response body for account endpoints.
///
/// # JSON Example
///
/// ```json
/// {
///   "id": "r001",
///   "number": "acc-001",
///   "balance": "10000"
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct AccountResponse {
    /// Account unique identifier
    pub id: String,

    /// Account number
    pub number: String,

    /// Current balance (decimal string)
    pub balance: Decimal,
}

/// Convert database Account to API AccountResponse.
///
/// This transformation removes the internal `customer_id` relationship field.
impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            number: account.number,
            balance: account.balance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_excludes_customer_reference() {
        let account = Account {
            id: "r001".to_string(),
            number: "acc-001".to_string(),
            customer_id: "c001".to_string(),
            balance: Decimal::new(10_000, 0),
        };

        let json = serde_json::to_value(AccountResponse::from(account)).unwrap();
        assert_eq!(json["id"], "r001");
        assert_eq!(json["number"], "acc-001");
        assert_eq!(json["balance"], "10000");
        assert!(json.get("customer_id").is_none());
    }
}
