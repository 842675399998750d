//! Account-holder model.

use std::fmt;

use super::ids::UserUid;

/// A bank customer who holds an account.
///
/// The uid is assigned once at construction and never changes; the
/// remaining fields are plain data.
#[derive(Debug, Clone)]
pub struct User {
    uid: UserUid,
    pub firstname: String,
    pub lastname: String,
    pub ssn: String,
}

impl User {
    /// Creates a holder with the given uid and personal details.
    pub fn new(
        uid: UserUid,
        firstname: impl Into<String>,
        lastname: impl Into<String>,
        ssn: impl Into<String>,
    ) -> Self {
        Self {
            uid,
            firstname: firstname.into(),
            lastname: lastname.into(),
            ssn: ssn.into(),
        }
    }

    /// The uid assigned at construction.
    pub fn uid(&self) -> UserUid {
        self.uid
    }
}

/// Equality covers the personal fields only; the uid is excluded.
impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.firstname == other.firstname
            && self.lastname == other.lastname
            && self.ssn == other.ssn
    }
}

impl Eq for User {}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} (ssn {})", self.firstname, self.lastname, self.ssn)
    }
}
