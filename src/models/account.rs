//! Bank-account model.

use std::fmt;

use super::ids::AccountUid;
use super::user::User;

/// A bank account: an iban, its holder, and the current balance.
///
/// The holder is owned by value, so clones handed out by the store can
/// never alias the stored entity.
#[derive(Debug, Clone)]
pub struct Account {
    uid: AccountUid,
    pub iban: String,
    pub holder: User,
    pub balance: f64,
}

impl Account {
    /// Creates an account with the given uid, iban, holder, and balance.
    pub fn new(uid: AccountUid, iban: impl Into<String>, holder: User, balance: f64) -> Self {
        Self {
            uid,
            iban: iban.into(),
            holder,
            balance,
        }
    }

    /// The uid assigned at construction.
    pub fn uid(&self) -> AccountUid {
        self.uid
    }
}

/// Equality covers iban, holder, and balance; the uid is excluded.
impl PartialEq for Account {
    fn eq(&self, other: &Self) -> bool {
        self.iban == other.iban && self.holder == other.holder && self.balance == other.balance
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] {}, balance {:.2}",
            self.iban, self.uid, self.holder, self.balance
        )
    }
}
