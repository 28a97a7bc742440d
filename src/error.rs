//! Error types: crate-level failures and per-operation rejections.

use thiserror::Error;

/// Result type alias for crate-level operations
pub type Result<T> = std::result::Result<T, TellerError>;

/// Failures that abort a run.
#[derive(Error, Debug)]
pub enum TellerError {
    /// Failed to open or read the session script
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV reading or writing error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Missing session script argument
    #[error("Missing session script argument. Usage: teller <session.csv>")]
    MissingArgument,
}

/// Why an operation was refused.
///
/// Rejections are surfaced as values so callers and tests can tell the
/// reasons apart; during script replay they are logged and skipped. No
/// rejection mutates account data.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// An operation other than login was requested with nobody logged in
    #[error("no account is logged in")]
    NotLoggedIn,

    /// Login username unknown or PIN mismatch
    #[error("unknown username or wrong PIN")]
    InvalidCredentials,

    /// Transfer or loan amount was zero or negative
    #[error("amount must be positive")]
    InvalidAmount,

    /// Transfer recipient username matched no account
    #[error("recipient username not found")]
    UnknownRecipient,

    /// Transfer recipient resolved to the sending account
    #[error("cannot transfer to the sending account")]
    SelfTransfer,

    /// Sender balance does not cover the transfer amount
    #[error("balance does not cover the transfer")]
    InsufficientBalance,

    /// No past movement reaches 10% of the requested loan
    #[error("no deposit large enough to qualify for this loan")]
    LoanIneligible,

    /// Close credentials do not match the logged-in account
    #[error("credentials do not match the logged-in account")]
    CloseCredentialMismatch,
}
