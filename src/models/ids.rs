//! Strongly-typed uids for the entity model.
//!
//! Each entity gets its own uid newtype so an account uid can never be
//! passed where a holder uid is expected. Fresh uids are only minted
//! through a [`UidSource`], which lets tests swap the process-wide
//! randomness for a deterministic counter.

use std::cell::Cell;
use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

macro_rules! define_uid {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(Uuid);

        impl $name {
            /// Wraps an existing uuid.
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Parses a uid from its canonical string form.
            pub fn parse(s: &str) -> Result<Self, uuid::Error> {
                Uuid::parse_str(s).map(Self)
            }

            /// Returns the underlying uuid.
            pub fn as_uuid(&self) -> Uuid {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }
    };
}

define_uid!(
    /// Identifies a bank account.
    AccountUid
);

define_uid!(
    /// Identifies an account holder.
    UserUid
);

/// A supply of fresh uids.
///
/// The services mint every uid through this trait, so swapping the
/// implementation changes how the whole application generates identity.
pub trait UidSource {
    /// Mints a uid for a new account.
    fn account_uid(&self) -> AccountUid;

    /// Mints a uid for a new holder.
    fn user_uid(&self) -> UserUid;
}

/// The production source: random version-4 uuids.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomUids;

impl UidSource for RandomUids {
    fn account_uid(&self) -> AccountUid {
        AccountUid(Uuid::new_v4())
    }

    fn user_uid(&self) -> UserUid {
        UserUid(Uuid::new_v4())
    }
}

/// A deterministic source backed by a counter, for tests.
///
/// Two sources created fresh hand out the same uids in the same order.
/// The counter starts at one so the nil uuid is never produced.
#[derive(Debug)]
pub struct SequentialUids {
    next: Cell<u64>,
}

impl SequentialUids {
    pub fn new() -> Self {
        Self { next: Cell::new(1) }
    }

    fn mint(&self) -> Uuid {
        let n = self.next.get();
        self.next.set(n + 1);
        Uuid::from_u64_pair(0, n)
    }
}

impl Default for SequentialUids {
    fn default() -> Self {
        Self::new()
    }
}

impl UidSource for SequentialUids {
    fn account_uid(&self) -> AccountUid {
        AccountUid(self.mint())
    }

    fn user_uid(&self) -> UserUid {
        UserUid(self.mint())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_parse_round_trip() {
        let uid = RandomUids.account_uid();
        let parsed = AccountUid::parse(&uid.to_string()).unwrap();
        assert_eq!(uid, parsed);
    }

    #[test]
    fn test_from_str() {
        let uid: UserUid = "00000000-0000-0000-0000-000000000001".parse().unwrap();
        assert_eq!(uid.to_string(), "00000000-0000-0000-0000-000000000001");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(AccountUid::parse("not-a-uuid").is_err());
        assert!("also not a uuid".parse::<UserUid>().is_err());
    }

    #[test]
    fn test_random_uids_are_unique() {
        let uids = RandomUids;
        assert_ne!(uids.account_uid(), uids.account_uid());
        assert_ne!(uids.user_uid(), uids.user_uid());
    }

    #[test]
    fn test_sequential_uids_are_deterministic() {
        let first = SequentialUids::new();
        let second = SequentialUids::new();
        assert_eq!(first.account_uid(), second.account_uid());
        assert_eq!(first.user_uid(), second.user_uid());
    }

    #[test]
    fn test_sequential_uids_advance() {
        let uids = SequentialUids::new();
        let a = uids.account_uid();
        let b = uids.account_uid();
        assert_ne!(a, b);
    }

    #[test]
    fn test_sequential_uids_skip_the_nil_uuid() {
        let uids = SequentialUids::new();
        assert_ne!(uids.account_uid().as_uuid(), Uuid::nil());
    }
}
