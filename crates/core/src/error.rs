//! Ledger error model.

use thiserror::Error;

/// Result type used across the ledger.
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Ledger-level error.
///
/// The first six variants are deterministic business failures with fixed
/// messages. `Store` is the only infrastructure failure and its detail is
/// never shown to callers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// `create` was called for an identifier that already has an account.
    #[error("Account already exists.")]
    AccountAlreadyExists,

    /// No account is registered under the identifier.
    #[error("Account not found.")]
    AccountNotFound,

    /// Withdrawal exceeds the current balance.
    #[error("Account does not have sufficient balance.")]
    InsufficientBalance,

    /// Amount is zero or negative under the strict amount policy.
    #[error("Amount must be greater than zero.")]
    InvalidAmount,

    /// Balance would leave the representable decimal range.
    #[error("Amount exceeds the supported range.")]
    AmountOverflow,

    /// Customer identifier is empty.
    #[error("Customer id must not be empty.")]
    InvalidCustomerId,

    /// The backing store could not be accessed (e.g. poisoned lock).
    #[error("store failure: {0}")]
    Store(String),
}

impl LedgerError {
    pub fn store(msg: impl Into<String>) -> Self {
        Self::Store(msg.into())
    }

    /// True for failures caused by caller input rather than the ledger itself.
    pub fn is_rejection(&self) -> bool {
        !matches!(self, Self::Store(_))
    }
}
