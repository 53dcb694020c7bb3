//! Bank use-case service.
//!
//! # Responsibility
//! - Provide stable CRUD entry points for transport callers.
//! - Delegate every operation to the repository implementation.
//!
//! # Invariants
//! - Results and errors are forwarded unchanged in kind.
//! - Service layer remains storage-agnostic.

use crate::model::bank::BankRecord;
use crate::repo::bank_repo::{BankRepository, StoreResult};

/// Use-case service wrapper for bank record CRUD operations.
pub struct BankService<R: BankRepository> {
    repo: R,
}

impl<R: BankRepository> BankService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Lists every record currently held.
    pub fn get_banks(&self) -> StoreResult<Vec<BankRecord>> {
        self.repo.list_banks()
    }

    pub fn get_bank(&self, account_number: &str) -> StoreResult<BankRecord> {
        self.repo.get_bank(account_number)
    }

    /// Adds a new record; `AlreadyExists` when the key is taken.
    pub fn add_bank(&self, bank: BankRecord) -> StoreResult<BankRecord> {
        self.repo.add_bank(bank)
    }

    /// Replaces the record keyed by `bank.account_number`.
    ///
    /// Returns repository-level not-found errors unchanged.
    pub fn update_bank(&self, bank: BankRecord) -> StoreResult<BankRecord> {
        self.repo.update_bank(bank)
    }

    pub fn delete_bank(&self, account_number: &str) -> StoreResult<()> {
        self.repo.delete_bank(account_number)
    }

    /// Borrows the underlying repository.
    pub fn repo(&self) -> &R {
        &self.repo
    }
}
