//! Wallet model and the fee/balance transaction calculation.
//!
//! A transfer debits `amount + fee` where `fee = amount * fee_rate`.

use crate::amount::Btc;
use crate::error::{Result, WalletError};
use log::debug;
use rust_decimal::Decimal;

/// A single-balance BTC wallet.
#[derive(Debug, Clone)]
pub struct Wallet {
    /// Current balance.
    pub balance: Btc,

    /// `true` until the first successful transfer.
    pub is_new: bool,

    /// One-letter wallet type tag, e.g. `'P'`.
    pub kind: char,
}

/// The outcome of pricing a transfer against a wallet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransactionQuote {
    pub amount: Btc,
    pub fee: Btc,
    /// `amount + fee`
    pub total: Btc,
    pub new_balance: Btc,
}

impl Wallet {
    /// Creates a new wallet holding `balance`.
    pub fn new(balance: Btc, kind: char) -> Self {
        Wallet {
            balance,
            is_new: true,
            kind,
        }
    }

    /// Returns the balance as an exact satoshi count.
    pub fn balance_satoshis(&self) -> Result<i64> {
        self.balance.to_satoshis()
    }

    /// Returns `true` if the balance covers a debit of `total`.
    pub fn has_sufficient_funds(&self, total: Btc) -> bool {
        self.balance >= total
    }

    /// Prices a transfer without touching the balance.
    ///
    /// `new_balance` may be negative when the wallet cannot afford the transfer.
    /// Amounts too large for exact arithmetic fail with `AmountOverflow`.
    pub fn quote(&self, amount: Btc, fee_rate: Decimal) -> Result<TransactionQuote> {
        let fee = amount.percent(fee_rate)?;
        let total = amount
            .checked_add(fee)
            .ok_or(WalletError::AmountOverflow("total debit"))?;
        let new_balance = self
            .balance
            .checked_sub(total)
            .ok_or(WalletError::AmountOverflow("new balance"))?;

        Ok(TransactionQuote {
            amount,
            fee,
            total,
            new_balance,
        })
    }

    /// Sends `amount`, debiting it together with its fee.
    ///
    /// Fails without changing the balance if the amount is negative or the
    /// balance does not cover amount plus fee.
    pub fn send(&mut self, amount: Btc, fee_rate: Decimal) -> Result<TransactionQuote> {
        if amount.is_negative() {
            return Err(WalletError::NegativeAmount(amount));
        }

        let quote = self.quote(amount, fee_rate)?;
        if !self.has_sufficient_funds(quote.total) {
            debug!(
                "Rejected transfer of {} (fee {}): balance {}",
                amount, quote.fee, self.balance
            );
            return Err(WalletError::InsufficientFunds {
                needed: quote.total,
                available: self.balance,
            });
        }

        self.balance = quote.new_balance;
        self.is_new = false;
        debug!(
            "Sent {} with fee {}, new balance {}",
            amount, quote.fee, self.balance
        );

        Ok(quote)
    }
}
