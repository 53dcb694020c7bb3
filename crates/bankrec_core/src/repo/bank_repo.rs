//! Bank repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the bank record collection.
//! - Serialize every read and write on a single lock.
//!
//! # Invariants
//! - Key uniqueness holds after every successful `add_bank`.
//! - `update_bank` reports `NotFound` only after the whole collection has
//!   been scanned without a match.
//! - Listing order is insertion order; updates keep a record's position.

use crate::model::bank::{AccountNumber, BankRecord};
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::{Mutex, MutexGuard, PoisonError};

pub type StoreResult<T> = Result<T, StoreError>;

/// Domain error for bank record operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No record matches the given account number.
    NotFound(AccountNumber),
    /// A record with the given account number is already present.
    AlreadyExists(AccountNumber),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(account_number) => {
                write!(f, "could not find a bank with account number {account_number}")
            }
            Self::AlreadyExists(account_number) => {
                write!(f, "bank account already exists: {account_number}")
            }
        }
    }
}

impl Error for StoreError {}

/// Repository interface for bank record CRUD operations.
pub trait BankRepository: Send + Sync {
    fn list_banks(&self) -> StoreResult<Vec<BankRecord>>;
    fn get_bank(&self, account_number: &str) -> StoreResult<BankRecord>;
    fn add_bank(&self, bank: BankRecord) -> StoreResult<BankRecord>;
    fn update_bank(&self, bank: BankRecord) -> StoreResult<BankRecord>;
    fn delete_bank(&self, account_number: &str) -> StoreResult<()>;
}

/// Memory-resident bank repository.
///
/// All operations take the same lock, so no reader observes a partially
/// applied mutation and concurrent adds of one key cannot both succeed.
#[derive(Debug, Default)]
pub struct InMemoryBankRepository {
    banks: Mutex<Vec<BankRecord>>,
}

impl InMemoryBankRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository seeded with `banks`.
    ///
    /// Later records whose key was already seeded are dropped, so the
    /// uniqueness invariant holds from the start.
    pub fn with_banks(banks: impl IntoIterator<Item = BankRecord>) -> Self {
        let mut seeded: Vec<BankRecord> = Vec::new();
        for bank in banks {
            if !seeded.iter().any(|it| it.has_key(&bank.account_number)) {
                seeded.push(bank);
            }
        }

        Self {
            banks: Mutex::new(seeded),
        }
    }

    /// Creates a repository holding the sample accounts served by default.
    pub fn with_sample_data() -> Self {
        Self::with_banks(sample_banks())
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // Every mutation is a single push/assign/remove under the guard, so a
    // poisoned lock still protects a consistent collection.
    fn lock(&self) -> MutexGuard<'_, Vec<BankRecord>> {
        self.banks.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl BankRepository for InMemoryBankRepository {
    fn list_banks(&self) -> StoreResult<Vec<BankRecord>> {
        Ok(self.lock().clone())
    }

    fn get_bank(&self, account_number: &str) -> StoreResult<BankRecord> {
        self.lock()
            .iter()
            .find(|it| it.has_key(account_number))
            .cloned()
            .ok_or_else(|| not_found("get", account_number))
    }

    fn add_bank(&self, bank: BankRecord) -> StoreResult<BankRecord> {
        let mut banks = self.lock();
        if banks.iter().any(|it| it.has_key(&bank.account_number)) {
            debug!("event=bank_add module=repo status=rejected reason=already_exists");
            return Err(StoreError::AlreadyExists(bank.account_number));
        }

        banks.push(bank.clone());
        info!("event=bank_add module=repo status=ok count={}", banks.len());
        Ok(bank)
    }

    fn update_bank(&self, bank: BankRecord) -> StoreResult<BankRecord> {
        let mut banks = self.lock();
        let Some(slot) = banks.iter_mut().find(|it| it.has_key(&bank.account_number)) else {
            return Err(not_found("update", &bank.account_number));
        };

        *slot = bank.clone();
        info!("event=bank_update module=repo status=ok");
        Ok(bank)
    }

    fn delete_bank(&self, account_number: &str) -> StoreResult<()> {
        let mut banks = self.lock();
        let Some(index) = banks.iter().position(|it| it.has_key(account_number)) else {
            return Err(not_found("delete", account_number));
        };

        banks.remove(index);
        info!("event=bank_delete module=repo status=ok count={}", banks.len());
        Ok(())
    }
}

/// Sample accounts loaded when the server starts with seeding enabled.
pub fn sample_banks() -> Vec<BankRecord> {
    vec![
        BankRecord::new("123", 17, 3.0),
        BankRecord::new("1234", 17, 1.0),
        BankRecord::new("12345", 12, 3.0),
        BankRecord::new("123456", 124, 31.0),
    ]
}

fn not_found(operation: &str, account_number: &str) -> StoreError {
    debug!("event=bank_{operation} module=repo status=rejected reason=not_found");
    StoreError::NotFound(account_number.to_string())
}

#[cfg(test)]
mod tests {
    use super::{BankRepository, InMemoryBankRepository, StoreError};
    use crate::model::bank::BankRecord;

    #[test]
    fn with_banks_drops_repeated_keys() {
        let repo = InMemoryBankRepository::with_banks([
            BankRecord::new("1", 1, 1.0),
            BankRecord::new("1", 2, 2.0),
            BankRecord::new("2", 3, 3.0),
        ]);

        assert_eq!(repo.len(), 2);
        assert_eq!(repo.get_bank("1").unwrap(), BankRecord::new("1", 1, 1.0));
    }

    #[test]
    fn update_matches_first_record_of_many() {
        let repo = InMemoryBankRepository::with_sample_data();

        let updated = BankRecord::new("123", 99, 0.5);
        repo.update_bank(updated.clone()).unwrap();

        assert_eq!(repo.get_bank("123").unwrap(), updated);
        assert_eq!(repo.len(), 4);
    }

    #[test]
    fn lookups_are_case_sensitive() {
        let repo = InMemoryBankRepository::with_banks([BankRecord::new("abc", 1, 1.0)]);

        assert_eq!(
            repo.get_bank("ABC").unwrap_err(),
            StoreError::NotFound("ABC".to_string())
        );
    }

    #[test]
    fn error_messages_carry_the_key() {
        assert_eq!(
            StoreError::NotFound("42".to_string()).to_string(),
            "could not find a bank with account number 42"
        );
        assert_eq!(
            StoreError::AlreadyExists("42".to_string()).to_string(),
            "bank account already exists: 42"
        );
    }
}
