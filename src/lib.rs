//! # Wallet Basics
//!
//! BTC wallet arithmetic drills: satoshi conversion, fee and balance
//! calculation, a running-balance ledger and a few plain numeric exercises,
//! rendered as fixed-point, column-aligned console reports.
//!
//! ## Design Principles
//!
//! - **Exact money**: balances and fees use 8-place fixed point via `rust_decimal`
//! - **Truncating casts**: floating BTC amounts become satoshis by truncation
//! - **Fixed-width output**: right-aligned columns of width 20
//!
//! ## Example
//!
//! ```
//! use std::str::FromStr;
//! use rust_decimal::Decimal;
//! use wallet_basics::{Btc, Wallet};
//!
//! let mut wallet = Wallet::new(Btc::from_str("0.05").unwrap(), 'P');
//! let quote = wallet.send(Btc::from_str("0.01").unwrap(), Decimal::new(1, 2)).unwrap();
//! assert_eq!(quote.fee.to_string(), "0.00010000");
//! assert_eq!(wallet.balance.to_string(), "0.03990000");
//! ```

pub mod amount;
pub mod calc;
pub mod error;
pub mod format;
pub mod ledger;
pub mod report;
pub mod wallet;

pub use amount::{Btc, SATOSHIS_PER_BTC};
pub use error::{Result, WalletError};
pub use ledger::{Ledger, LedgerRecord, LedgerSummary};
pub use report::Scenario;
pub use wallet::{TransactionQuote, Wallet};
