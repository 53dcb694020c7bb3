//! Domain model for bank account records.
//!
//! # Responsibility
//! - Define the canonical record shape shared by store, service and transport.
//!
//! # Invariants
//! - Every record is identified by its account number.
//! - Records are replaced wholesale, never patched field-by-field.

pub mod bank;
