//! In-memory account store.
//!
//! A thin data-access layer over an insertion-ordered collection.
//! Lookups are linear scans, every read hands out clones, and no
//! business rules live here; uniqueness and validation belong to the
//! service layer. The store is single-threaded, so interior mutability
//! keeps the whole API on `&self` without locking.

use std::cell::RefCell;

use crate::models::{Account, AccountUid};

/// The authoritative collection of accounts for one session.
#[derive(Debug, Default)]
pub struct AccountStore {
    accounts: RefCell<Vec<Account>>,
}

impl AccountStore {
    pub fn new() -> Self {
        Self {
            accounts: RefCell::new(Vec::new()),
        }
    }

    /// Appends an account and returns the stored entity.
    pub fn insert(&self, account: Account) -> Account {
        self.accounts.borrow_mut().push(account.clone());
        account
    }

    /// Overwrites the account with the given uid wholesale, keeping its
    /// position, and returns a snapshot of the pre-update state.
    ///
    /// Returns `None` when no account matches; absence is not an error
    /// at this layer.
    pub fn update(&self, uid: AccountUid, account: Account) -> Option<Account> {
        let mut accounts = self.accounts.borrow_mut();
        let slot = accounts.iter_mut().find(|stored| stored.uid() == uid)?;
        let snapshot = slot.clone();
        *slot = account;
        Some(snapshot)
    }

    /// Removes any account with the given uid; a no-op when none matches.
    pub fn delete(&self, uid: AccountUid) {
        self.accounts.borrow_mut().retain(|stored| stored.uid() != uid);
    }

    /// Looks up an account by uid, returning a clone.
    pub fn get(&self, uid: AccountUid) -> Option<Account> {
        self.accounts
            .borrow()
            .iter()
            .find(|stored| stored.uid() == uid)
            .cloned()
    }

    /// Returns a fresh copy of the whole collection in insertion order.
    pub fn get_all(&self) -> Vec<Account> {
        self.accounts.borrow().clone()
    }

    /// Returns true if an account with the given uid is stored.
    pub fn uid_exists(&self, uid: AccountUid) -> bool {
        self.accounts.borrow().iter().any(|stored| stored.uid() == uid)
    }

    /// Returns true if any stored holder carries the given ssn.
    pub fn ssn_exists(&self, ssn: &str) -> bool {
        self.accounts.borrow().iter().any(|stored| stored.holder.ssn == ssn)
    }

    /// Returns true if any stored account carries the given iban.
    pub fn iban_exists(&self, iban: &str) -> bool {
        self.accounts.borrow().iter().any(|stored| stored.iban == iban)
    }

    pub fn len(&self) -> usize {
        self.accounts.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.borrow().is_empty()
    }
}
