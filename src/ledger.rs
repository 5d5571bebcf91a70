//! Transaction ledger with running balance and extremes.
//!
//! Entries are signed: deposits are positive, withdrawals negative. The
//! running balance starts at zero.

use crate::amount::Btc;
use crate::error::{Result, WalletError};
use csv::{ReaderBuilder, Trim};
use log::{debug, warn};
use serde::Deserialize;
use std::io::Read;

/// Sample ledger rendered by the CLI.
pub const SAMPLE_LEDGER: &str = include_str!("../data/ledger.csv");

/// Raw ledger row as read from CSV.
#[derive(Debug, Deserialize)]
pub struct LedgerRecord {
    /// `deposit` or `withdrawal`
    #[serde(rename = "type")]
    pub kind: String,

    /// Unsigned amount; the sign comes from `kind`.
    pub amount: Option<Btc>,
}

impl LedgerRecord {
    /// Returns the signed ledger entry for this row.
    ///
    /// Returns `None` for unknown types, missing amounts and negative amounts.
    pub fn signed_amount(&self) -> Option<Btc> {
        let amount = self.amount?;
        if amount.is_negative() {
            return None;
        }

        match self.kind.trim().to_lowercase().as_str() {
            "deposit" => Some(amount),
            "withdrawal" => Some(-amount),
            _ => None,
        }
    }
}

/// Final balance and extreme entries of a ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedgerSummary {
    pub balance: Btc,
    pub largest: Option<Btc>,
    pub smallest: Option<Btc>,
}

/// An ordered list of signed transactions.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    entries: Vec<Btc>,
}

impl Ledger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Ledger {
            entries: Vec::new(),
        }
    }

    /// Reads `type,amount` rows from CSV.
    ///
    /// Invalid rows are logged at warn level and skipped. A header without
    /// `type` and `amount` columns is an error.
    pub fn from_csv<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(reader);

        let headers = csv_reader.headers()?;
        for column in ["type", "amount"] {
            if !headers.iter().any(|h| h == column) {
                return Err(WalletError::InvalidRecord {
                    row: 1,
                    message: format!("missing `{}` column", column),
                });
            }
        }

        let mut ledger = Ledger::new();
        for (row_idx, result) in csv_reader.deserialize::<LedgerRecord>().enumerate() {
            let row_num = row_idx + 2; // 1-indexed, accounting for header row

            match result {
                Ok(record) => match record.signed_amount() {
                    Some(entry) => {
                        debug!("Row {}: {} {}", row_num, record.kind, entry);
                        ledger.push(entry);
                    }
                    None => warn!("Row {}: Failed to parse ledger record", row_num),
                },
                Err(e) => warn!("Row {}: CSV parse error: {}", row_num, e),
            }
        }

        Ok(ledger)
    }

    /// Appends a signed entry.
    pub fn push(&mut self, entry: Btc) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[Btc] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Running balance after every entry.
    pub fn balance(&self) -> Btc {
        self.entries.iter().copied().sum()
    }

    /// Largest signed entry, `None` when empty.
    pub fn largest(&self) -> Option<Btc> {
        self.entries.iter().copied().max()
    }

    /// Smallest signed entry, `None` when empty.
    pub fn smallest(&self) -> Option<Btc> {
        self.entries.iter().copied().min()
    }

    pub fn summary(&self) -> LedgerSummary {
        LedgerSummary {
            balance: self.balance(),
            largest: self.largest(),
            smallest: self.smallest(),
        }
    }
}
