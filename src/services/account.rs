//! Account service.
//!
//! Business rules over the account store: uniqueness checks, amount
//! validation, ownership verification, and the mapping between transfer
//! shapes and entities. Every mutating operation lands one entry in the
//! activity journal; failed operations leave both the store and the
//! journal untouched.

use crate::audit::{Activity, ActivityJournal, ActivityKind};
use crate::dto::{AccountUpdate, NewAccount, NewUser, UserUpdate};
use crate::error::{TellerError, TellerResult};
use crate::models::{Account, AccountUid, RandomUids, UidSource, User};
use crate::storage::AccountStore;

/// Service for account management.
pub struct AccountService<'a> {
    store: &'a AccountStore,
    uids: Box<dyn UidSource>,
    journal: ActivityJournal,
}

impl<'a> AccountService<'a> {
    /// Creates a service over the given store with random uid generation.
    pub fn new(store: &'a AccountStore) -> Self {
        Self::with_uid_source(store, Box::new(RandomUids))
    }

    /// Creates a service with an explicit uid source. Tests inject a
    /// deterministic source here.
    pub fn with_uid_source(store: &'a AccountStore, uids: Box<dyn UidSource>) -> Self {
        Self {
            store,
            uids,
            journal: ActivityJournal::new(),
        }
    }

    /// Opens an account from the given shape, minting fresh uids for the
    /// account and its holder.
    ///
    /// Fails with [`TellerError::DuplicateAccount`] when the minted uid
    /// is already stored.
    pub fn insert_account(&self, data: NewAccount) -> TellerResult<Account> {
        let account = self.account_from_new(data);

        if self.store.uid_exists(account.uid()) {
            return Err(TellerError::duplicate_account(account.uid()));
        }

        let inserted = self.store.insert(account);
        self.journal.record(
            ActivityKind::Insert,
            inserted.uid(),
            format!(
                "iban {} opened with balance {:.2}",
                inserted.iban, inserted.balance
            ),
        );
        Ok(inserted)
    }

    /// Replaces the iban, holder, and balance of the account with the
    /// given uid, and returns a snapshot of the account as it was before
    /// the update. The stored uid is preserved unless the update names an
    /// explicit replacement; the holder is rebuilt with a fresh uid.
    ///
    /// Fails with [`TellerError::AccountNotFound`] when the uid is
    /// unknown, [`TellerError::IbanAlreadyExists`] when the new iban
    /// belongs to a different account, and
    /// [`TellerError::DuplicateAccount`] when the replacement uid does.
    pub fn update_account(&self, uid: AccountUid, data: AccountUpdate) -> TellerResult<Account> {
        let current = self
            .store
            .get(uid)
            .ok_or_else(|| TellerError::account_not_found(uid))?;

        // A new iban may only collide with the account being updated.
        if self.store.iban_exists(&data.iban) && current.iban != data.iban {
            return Err(TellerError::iban_already_exists(&data.iban));
        }

        // An explicit replacement uid may not collide with another account.
        let next_uid = data.uid.unwrap_or(uid);
        if next_uid != uid && self.store.uid_exists(next_uid) {
            return Err(TellerError::duplicate_account(next_uid));
        }

        let holder = self.user_from_update(data.holder);
        let replacement = Account::new(next_uid, data.iban, holder, data.balance);
        let detail = format!(
            "iban {} -> {}, balance {:.2} -> {:.2}",
            current.iban, replacement.iban, current.balance, replacement.balance
        );

        let previous = self
            .store
            .update(uid, replacement)
            .ok_or_else(|| TellerError::account_not_found(uid))?;

        self.journal.record(ActivityKind::Update, next_uid, detail);
        Ok(previous)
    }

    /// Closes the account with the given uid.
    ///
    /// Fails with [`TellerError::AccountNotFound`] when the uid is
    /// unknown.
    pub fn delete_account(&self, uid: AccountUid) -> TellerResult<()> {
        let account = self
            .store
            .get(uid)
            .ok_or_else(|| TellerError::account_not_found(uid))?;

        self.store.delete(uid);
        self.journal.record(
            ActivityKind::Delete,
            uid,
            format!("iban {} closed", account.iban),
        );
        Ok(())
    }

    /// Looks up an account by iban.
    ///
    /// Fails with [`TellerError::AccountNotFound`] carrying the iban when
    /// no account matches.
    pub fn account_by_iban(&self, iban: &str) -> TellerResult<Account> {
        self.store
            .get_all()
            .into_iter()
            .find(|account| account.iban == iban)
            .ok_or_else(|| TellerError::account_not_found(iban))
    }

    /// Returns every account in insertion order.
    pub fn all_accounts(&self) -> Vec<Account> {
        self.store.get_all()
    }

    /// Adds the amount to the balance of the account with the given uid
    /// and returns the updated account.
    ///
    /// The amount is validated before the account is looked up: a
    /// negative amount fails with [`TellerError::NegativeAmount`] even
    /// when the uid is unknown.
    pub fn deposit(&self, uid: AccountUid, amount: f64) -> TellerResult<Account> {
        if amount < 0.0 {
            return Err(TellerError::negative_amount(amount));
        }

        let mut account = self
            .store
            .get(uid)
            .ok_or_else(|| TellerError::account_not_found(uid))?;
        let before = account.balance;
        account.balance += amount;

        if self.store.update(uid, account.clone()).is_none() {
            return Err(TellerError::account_not_found(uid));
        }

        self.journal.record(
            ActivityKind::Deposit,
            uid,
            format!("balance {:.2} -> {:.2}", before, account.balance),
        );
        Ok(account)
    }

    /// Takes the amount out of the account with the given iban, after the
    /// caller proves ownership with the holder's ssn, and returns the
    /// updated account.
    ///
    /// The checks run in a fixed order: amount sign, account existence,
    /// ssn ownership, balance sufficiency. Withdrawing the exact balance
    /// is allowed.
    pub fn withdraw(&self, iban: &str, ssn: &str, amount: f64) -> TellerResult<Account> {
        if amount < 0.0 {
            return Err(TellerError::negative_amount(amount));
        }

        let mut account = self.account_by_iban(iban)?;

        if account.holder.ssn != ssn {
            return Err(TellerError::ssn_mismatch(ssn));
        }

        if account.balance < amount {
            return Err(TellerError::insufficient_balance(account.balance, amount));
        }

        let before = account.balance;
        account.balance -= amount;
        let uid = account.uid();

        if self.store.update(uid, account.clone()).is_none() {
            return Err(TellerError::account_not_found(iban));
        }

        self.journal.record(
            ActivityKind::Withdraw,
            uid,
            format!("balance {:.2} -> {:.2}", before, account.balance),
        );
        Ok(account)
    }

    /// Returns the journal of completed operations, oldest first.
    pub fn activity(&self) -> Vec<Activity> {
        self.journal.entries()
    }

    fn account_from_new(&self, data: NewAccount) -> Account {
        let holder = self.user_from_new(data.holder);
        Account::new(self.uids.account_uid(), data.iban, holder, data.balance)
    }

    fn user_from_new(&self, data: NewUser) -> User {
        User::new(self.uids.user_uid(), data.firstname, data.lastname, data.ssn)
    }

    fn user_from_update(&self, data: UserUpdate) -> User {
        User::new(self.uids.user_uid(), data.firstname, data.lastname, data.ssn)
    }
}
