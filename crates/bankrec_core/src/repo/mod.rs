//! Record store abstraction and its in-memory implementation.
//!
//! # Responsibility
//! - Define the CRUD contract over bank records.
//! - Own the authoritative record collection.
//!
//! # Invariants
//! - At most one record per account number.
//! - get/update/delete on an absent key return `StoreError::NotFound`, never
//!   a silent no-op.

pub mod bank_repo;
