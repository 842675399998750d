//! Transfer shapes for account holders.

use crate::models::{User, UserUid};

/// Holder details for opening an account. Carries no uid; the service
/// mints one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub firstname: String,
    pub lastname: String,
    pub ssn: String,
}

impl NewUser {
    pub fn new(
        firstname: impl Into<String>,
        lastname: impl Into<String>,
        ssn: impl Into<String>,
    ) -> Self {
        Self {
            firstname: firstname.into(),
            lastname: lastname.into(),
            ssn: ssn.into(),
        }
    }
}

/// Holder details for an update. The stored holder is replaced wholesale
/// with a record built from these values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserUpdate {
    pub firstname: String,
    pub lastname: String,
    pub ssn: String,
}

impl UserUpdate {
    pub fn new(
        firstname: impl Into<String>,
        lastname: impl Into<String>,
        ssn: impl Into<String>,
    ) -> Self {
        Self {
            firstname: firstname.into(),
            lastname: lastname.into(),
            ssn: ssn.into(),
        }
    }
}

/// Read-only view of a holder for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserView {
    pub uid: UserUid,
    pub firstname: String,
    pub lastname: String,
    pub ssn: String,
}

impl From<&User> for UserView {
    fn from(user: &User) -> Self {
        Self {
            uid: user.uid(),
            firstname: user.firstname.clone(),
            lastname: user.lastname.clone(),
            ssn: user.ssn.clone(),
        }
    }
}
