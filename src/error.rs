//! Error types for the wallet drills.

use crate::amount::Btc;
use thiserror::Error;

/// Result type alias for wallet operations
pub type Result<T> = std::result::Result<T, WalletError>;

/// Errors that can occur while computing or rendering the drills.
#[derive(Error, Debug)]
pub enum WalletError {
    /// Failed to write the report
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing error
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// Ledger data is structurally unusable
    #[error("Invalid ledger record at row {row}: {message}")]
    InvalidRecord { row: usize, message: String },

    /// Text that is not a BTC amount
    #[error("Invalid BTC amount `{input}`: {reason}")]
    InvalidAmount { input: String, reason: String },

    /// Exact BTC arithmetic left the representable range
    #[error("BTC amount overflowed while computing the {0}")]
    AmountOverflow(&'static str),

    /// Floating amount is NaN or infinite
    #[error("Amount {0} is not a finite number")]
    NonFiniteAmount(f64),

    /// Amount does not fit in an i64 satoshi count
    #[error("Amount {0} does not fit in a satoshi count")]
    SatoshiOverflow(String),

    /// Transfers must move a non-negative amount
    #[error("Cannot send a negative amount: {0} BTC")]
    NegativeAmount(Btc),

    /// Balance does not cover amount plus fee
    #[error("Insufficient funds: need {needed} BTC, have {available} BTC")]
    InsufficientFunds { needed: Btc, available: Btc },
}
