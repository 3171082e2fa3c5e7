//! Customer data model.
//!
//! Customers are the owners of accounts. There are no customer HTTP
//! endpoints; rows are seeded directly into `t_customer`, so this module
//! carries the entity mapping and the field rules the schema expects.

use serde::Serialize;

/// Represents a customer record from the database.
///
/// # Database Table
///
/// Maps to the `t_customer` table. Each customer:
/// - Has a unique customer number
/// - Owns exactly one account (enforced by a unique constraint on
///   `t_account.id_customer`)
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct Customer {
    /// Unique identifier for this customer
    pub id: String,

    /// Unique customer number (3-50 characters)
    pub number: String,

    /// Customer display name (3-50 characters)
    pub name: String,
}

impl Customer {
    /// Check field constraints, returning every violation found.
    ///
    /// An empty vector means the customer is valid. Rules:
    /// - `number`: non-empty, 3-50 characters
    /// - `name`: non-empty, 3-50 characters
    pub fn validate(&self) -> Vec<String> {
        let mut violations = Vec::new();

        if self.number.is_empty() {
            violations.push("number must not be empty".to_string());
        } else if self.number.len() < 3 || self.number.len() > 50 {
            violations.push("number must be between 3 and 50 characters".to_string());
        }

        if self.name.is_empty() {
            violations.push("name must not be empty".to_string());
        } else if self.name.len() < 3 || self.name.len() > 50 {
            violations.push("name must be between 3 and 50 characters".to_string());
        }

        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer(number: &str, name: &str) -> Customer {
        Customer {
            id: "c001".to_string(),
            number: number.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn valid_customer_has_no_violations() {
        assert!(customer("cust-01", "Sammi Dev").validate().is_empty());
    }

    #[test]
    fn empty_fields_are_rejected() {
        let violations = customer("", "").validate();
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn length_bounds_are_enforced() {
        assert_eq!(customer("ab", "Sammi Dev").validate().len(), 1);
        let long = "x".repeat(51);
        assert_eq!(customer("cust-01", &long).validate().len(), 1);
    }
}
