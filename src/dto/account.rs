//! Transfer shapes for accounts.

use crate::models::{Account, AccountUid};

use super::user::{NewUser, UserUpdate, UserView};

/// Everything needed to open an account. Carries no uid; the service
/// mints one.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAccount {
    pub iban: String,
    pub holder: NewUser,
    pub balance: f64,
}

impl NewAccount {
    pub fn new(iban: impl Into<String>, holder: NewUser, balance: f64) -> Self {
        Self {
            iban: iban.into(),
            holder,
            balance,
        }
    }
}

/// Replacement state for an existing account.
///
/// `uid` is the explicit-rename path: `None` keeps the stored uid, `Some`
/// replaces it subject to the service's duplicate check.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountUpdate {
    pub uid: Option<AccountUid>,
    pub iban: String,
    pub holder: UserUpdate,
    pub balance: f64,
}

impl AccountUpdate {
    pub fn new(
        uid: Option<AccountUid>,
        iban: impl Into<String>,
        holder: UserUpdate,
        balance: f64,
    ) -> Self {
        Self {
            uid,
            iban: iban.into(),
            holder,
            balance,
        }
    }
}

/// Read-only view of an account for the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountView {
    pub uid: AccountUid,
    pub iban: String,
    pub holder: UserView,
    pub balance: f64,
}

impl From<&Account> for AccountView {
    fn from(account: &Account) -> Self {
        Self {
            uid: account.uid(),
            iban: account.iban.clone(),
            holder: UserView::from(&account.holder),
            balance: account.balance,
        }
    }
}
