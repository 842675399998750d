//! Error types for account operations.

use thiserror::Error;

/// Convenience alias for results carrying a [`TellerError`].
pub type TellerResult<T> = Result<T, TellerError>;

/// Everything that can go wrong while managing accounts.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TellerError {
    /// No account matches the given uid or iban.
    #[error("account with identifier `{identifier}` was not found")]
    AccountNotFound { identifier: String },

    /// An account with the same uid is already stored.
    #[error("account with uid `{uid}` already exists")]
    DuplicateAccount { uid: String },

    /// Another account already uses the given iban.
    #[error("account with iban `{iban}` already exists")]
    IbanAlreadyExists { iban: String },

    /// Deposits and withdrawals only accept non-negative amounts.
    #[error("amount {amount:.2} is negative")]
    NegativeAmount { amount: f64 },

    /// The balance does not cover the requested amount.
    #[error("insufficient balance {balance:.2} for amount {amount:.2}")]
    InsufficientBalance { balance: f64, amount: f64 },

    /// The given ssn does not belong to the account holder.
    #[error("ssn {ssn} does not match the account holder")]
    SsnMismatch { ssn: String },
}

impl TellerError {
    /// Creates an [`TellerError::AccountNotFound`] error.
    pub fn account_not_found(identifier: impl ToString) -> Self {
        Self::AccountNotFound {
            identifier: identifier.to_string(),
        }
    }

    /// Creates a [`TellerError::DuplicateAccount`] error.
    pub fn duplicate_account(uid: impl ToString) -> Self {
        Self::DuplicateAccount {
            uid: uid.to_string(),
        }
    }

    /// Creates an [`TellerError::IbanAlreadyExists`] error.
    pub fn iban_already_exists(iban: impl ToString) -> Self {
        Self::IbanAlreadyExists {
            iban: iban.to_string(),
        }
    }

    /// Creates a [`TellerError::NegativeAmount`] error.
    pub fn negative_amount(amount: f64) -> Self {
        Self::NegativeAmount { amount }
    }

    /// Creates an [`TellerError::InsufficientBalance`] error.
    pub fn insufficient_balance(balance: f64, amount: f64) -> Self {
        Self::InsufficientBalance { balance, amount }
    }

    /// Creates a [`TellerError::SsnMismatch`] error.
    pub fn ssn_mismatch(ssn: impl ToString) -> Self {
        Self::SsnMismatch {
            ssn: ssn.to_string(),
        }
    }

    /// Returns true if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::AccountNotFound { .. })
    }

    /// Returns true if this is a uid or iban uniqueness violation.
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::DuplicateAccount { .. } | Self::IbanAlreadyExists { .. }
        )
    }
}
