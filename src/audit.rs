//! In-memory activity journal.
//!
//! Every mutating service operation lands one entry here. The journal is
//! as volatile as the store itself; it exists so a session can answer
//! "what just happened" without any persistence.

use std::cell::RefCell;
use std::fmt;

use chrono::{DateTime, Utc};

use crate::models::AccountUid;

/// The kinds of account operations that get journaled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    Insert,
    Update,
    Delete,
    Deposit,
    Withdraw,
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ActivityKind::Insert => "INSERT",
            ActivityKind::Update => "UPDATE",
            ActivityKind::Delete => "DELETE",
            ActivityKind::Deposit => "DEPOSIT",
            ActivityKind::Withdraw => "WITHDRAW",
        };
        f.pad(name)
    }
}

/// A single journaled operation.
#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    /// When the operation completed.
    pub at: DateTime<Utc>,
    pub kind: ActivityKind,
    /// The account the operation touched.
    pub account: AccountUid,
    /// Short human-readable summary, e.g. "balance 100.00 -> 150.00".
    pub detail: String,
}

impl Activity {
    pub fn new(kind: ActivityKind, account: AccountUid, detail: impl Into<String>) -> Self {
        Self {
            at: Utc::now(),
            kind,
            account,
            detail: detail.into(),
        }
    }

    /// One-line rendering for terminal output.
    pub fn render(&self) -> String {
        format!(
            "[{}] {:<8} {} {}",
            self.at.format("%Y-%m-%d %H:%M:%S UTC"),
            self.kind,
            self.account,
            self.detail
        )
    }
}

/// Append-only journal of activities, oldest first.
#[derive(Debug, Default)]
pub struct ActivityJournal {
    entries: RefCell<Vec<Activity>>,
}

impl ActivityJournal {
    pub fn new() -> Self {
        Self {
            entries: RefCell::new(Vec::new()),
        }
    }

    /// Appends one entry stamped with the current time.
    pub fn record(&self, kind: ActivityKind, account: AccountUid, detail: impl Into<String>) {
        self.entries
            .borrow_mut()
            .push(Activity::new(kind, account, detail));
    }

    /// Returns a copy of all entries, oldest first.
    pub fn entries(&self) -> Vec<Activity> {
        self.entries.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}
