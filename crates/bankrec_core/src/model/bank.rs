//! Bank record domain model.
//!
//! # Responsibility
//! - Define the single entity held by the record store.
//! - Pin the external JSON field names used by existing clients.
//!
//! # Invariants
//! - `account_number` is the identity of a record and is never rewritten in
//!   place; an update replaces the whole record.
//! - `routing_number` and `balance` are opaque to the store.

use serde::{Deserialize, Serialize};

/// Natural key of a bank record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type AccountNumber = String;

/// A single bank account record.
///
/// Serialized with camelCase field names (`accountNumber`, `routingNumber`,
/// `balance`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankRecord {
    /// Unique key; exact, case-sensitive match is used for lookups.
    pub account_number: AccountNumber,
    /// Opaque routing number, not validated.
    pub routing_number: i32,
    /// Currency amount. Precision and rounding are left to callers.
    pub balance: f64,
}

impl BankRecord {
    pub fn new(
        account_number: impl Into<AccountNumber>,
        routing_number: i32,
        balance: f64,
    ) -> Self {
        Self {
            account_number: account_number.into(),
            routing_number,
            balance,
        }
    }

    /// Returns whether this record is keyed by `account_number`.
    pub fn has_key(&self, account_number: &str) -> bool {
        self.account_number == account_number
    }
}
