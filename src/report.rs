//! The drills rendered by the CLI.
//!
//! Each writer prints one titled section for a [`Scenario`]. All amounts in
//! BTC are printed at 8 decimal places except where a drill explicitly
//! shows the 2-place form.

use crate::amount::Btc;
use crate::calc::{self, Operations};
use crate::error::Result;
use crate::format::{fixed, group_thousands, table_row};
use crate::ledger::Ledger;
use crate::wallet::Wallet;
use log::debug;
use rust_decimal::Decimal;
use std::io::Write;

/// Inputs for every drill.
#[derive(Debug, Clone)]
pub struct Scenario {
    /// Starting wallet balance.
    pub wallet_balance: Btc,
    pub wallet_kind: char,

    /// Amount sent in the transaction drills.
    pub transfer_amount: Btc,

    /// Fee as a fraction of the amount (0.01 = 1%).
    pub fee_rate: Decimal,

    /// Floating amount cast to satoshis.
    pub conversion_btc: f64,

    pub celsius: f64,

    /// Amount shown in the multi-currency drill and its USD rate.
    pub display_btc: f64,
    pub usd_rate: f64,

    pub operands: (f64, f64),
}

impl Default for Scenario {
    fn default() -> Self {
        Scenario {
            wallet_balance: Btc::new(Decimal::new(5, 2)),
            wallet_kind: 'P',
            transfer_amount: Btc::new(Decimal::new(1, 2)),
            fee_rate: Decimal::new(1, 2),
            conversion_btc: 0.01,
            celsius: 40.0,
            display_btc: 0.5,
            usd_rate: 45000.0,
            operands: (10.5, 2.5),
        }
    }
}

impl Scenario {
    /// A fresh wallet holding the starting balance.
    pub fn wallet(&self) -> Wallet {
        Wallet::new(self.wallet_balance, self.wallet_kind)
    }
}

/// Prints the starting wallet: balance in BTC and satoshis, new flag, type.
pub fn write_wallet_card<W: Write>(scenario: &Scenario, w: &mut W) -> Result<()> {
    let wallet = scenario.wallet();

    writeln!(w, "=== My first Wallet ===")?;
    writeln!(w, "Balance (BTC): {}", wallet.balance)?;
    writeln!(
        w,
        "Balance (satoshis): {}",
        group_thousands(wallet.balance_satoshis()?)
    )?;
    writeln!(w, "New Wallet: {}", wallet.is_new)?;
    writeln!(w, "Wallet Type: {}", wallet.kind)?;
    Ok(())
}

/// Prints the truncating BTC-to-satoshi cast and whether the wallet covers it.
pub fn write_transaction_calculator<W: Write>(scenario: &Scenario, w: &mut W) -> Result<()> {
    let satoshis = calc::btc_to_satoshis(scenario.conversion_btc)?;
    let can_proceed = scenario
        .wallet()
        .has_sufficient_funds(Btc::from_satoshis(satoshis));

    writeln!(w, "=== Transaction Calculator ===")?;
    writeln!(w, "Transaction Amount (BTC): {}", scenario.conversion_btc)?;
    writeln!(w, "Amount in satoshis: {}", group_thousands(satoshis))?;
    writeln!(w, "Can proceed: {}", can_proceed)?;
    Ok(())
}

/// Prints the Celsius to Fahrenheit conversion.
pub fn write_temperature<W: Write>(scenario: &Scenario, w: &mut W) -> Result<()> {
    let fahrenheit = calc::celsius_to_fahrenheit(scenario.celsius);

    writeln!(w, "=== Temperature ===")?;
    writeln!(w, "{}°C = {}°F", scenario.celsius, fahrenheit)?;
    Ok(())
}

/// Prints a BTC amount at 8 places next to its USD value at 2.
pub fn write_currency_display<W: Write>(scenario: &Scenario, w: &mut W) -> Result<()> {
    let usd = calc::btc_to_fiat(scenario.display_btc, scenario.usd_rate);

    writeln!(w, "=== Multi Currency Display ===")?;
    writeln!(w, "BTC: {}", fixed(scenario.display_btc, 8))?;
    writeln!(w, "USD: ${}", fixed(usd, 2))?;
    Ok(())
}

/// Prints the four basic operations and the float-to-integer cast.
pub fn write_arithmetic<W: Write>(scenario: &Scenario, w: &mut W) -> Result<()> {
    let (a, b) = scenario.operands;
    let ops = Operations::of(a, b);

    writeln!(w, "=== Arithmetic ===")?;
    writeln!(
        w,
        "Sum: {}, Difference: {}, Product: {}, Quotient: {}",
        ops.sum, ops.difference, ops.product, ops.quotient
    )?;
    writeln!(
        w,
        "Converted BTC to int: {}",
        calc::btc_to_satoshis(scenario.conversion_btc)?
    )?;
    writeln!(
        w,
        "Formatted BTC Amount: {}",
        fixed(scenario.conversion_btc, 2)
    )?;
    Ok(())
}

/// Sends the transfer from a fresh wallet and prints the result.
pub fn write_transaction<W: Write>(scenario: &Scenario, w: &mut W) -> Result<()> {
    let mut wallet = scenario.wallet();
    let receipt = wallet.send(scenario.transfer_amount, scenario.fee_rate)?;

    writeln!(w, "=== Transaction ===")?;
    writeln!(w, "Transaction Amount (BTC): {}", receipt.amount.fixed(2))?;
    writeln!(w, "Transaction Fee (BTC): {}", receipt.fee)?;
    writeln!(w, "New Balance (BTC): {}", wallet.balance)?;
    writeln!(
        w,
        "Transaction History: Transaction: {} BTC, Fee: {} BTC",
        receipt.amount.fixed(6),
        receipt.fee.fixed(6)
    )?;
    Ok(())
}

/// Prints the quote as a width-20 table, values at 8 places.
pub fn write_transaction_summary<W: Write>(scenario: &Scenario, w: &mut W) -> Result<()> {
    let quote = scenario
        .wallet()
        .quote(scenario.transfer_amount, scenario.fee_rate)?;

    writeln!(w, "=== Transaction Summary ===")?;
    writeln!(
        w,
        "{}",
        table_row(&[
            "Description",
            "Amount (BTC)",
            "Transaction Fee (BTC)",
            "New Balance (BTC)",
        ])
    )?;
    writeln!(
        w,
        "{}",
        table_row(&[
            "Transaction".to_string(),
            quote.amount.fixed(8),
            quote.fee.fixed(8),
            quote.new_balance.fixed(8),
        ])
    )?;
    Ok(())
}

/// Prints the ledger balance and its largest and smallest entries.
pub fn write_ledger<W: Write>(ledger: &Ledger, w: &mut W) -> Result<()> {
    let summary = ledger.summary();
    let show = |entry: Option<Btc>| {
        entry.map_or_else(|| "none".to_string(), |e| format!("{} BTC", e))
    };

    writeln!(w, "=== Ledger ===")?;
    writeln!(w, "Final Balance: {} BTC", summary.balance)?;
    writeln!(w, "Largest Transaction: {}", show(summary.largest))?;
    writeln!(w, "Smallest Transaction: {}", show(summary.smallest))?;
    Ok(())
}

/// Renders every drill, separated by blank lines.
pub fn write_all<W: Write>(scenario: &Scenario, ledger: &Ledger, w: &mut W) -> Result<()> {
    debug!("Rendering drills for {:?}", scenario);

    write_wallet_card(scenario, w)?;
    writeln!(w)?;
    write_transaction_calculator(scenario, w)?;
    writeln!(w)?;
    write_temperature(scenario, w)?;
    writeln!(w)?;
    write_currency_display(scenario, w)?;
    writeln!(w)?;
    write_arithmetic(scenario, w)?;
    writeln!(w)?;
    write_transaction(scenario, w)?;
    writeln!(w)?;
    write_transaction_summary(scenario, w)?;
    writeln!(w)?;
    write_ledger(ledger, w)?;

    w.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WalletError;
    use crate::ledger::SAMPLE_LEDGER;
    use std::io::Cursor;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> Result<()>,
    {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_wallet_card() {
        let out = render(|w| write_wallet_card(&Scenario::default(), w));
        assert_eq!(
            out,
            "=== My first Wallet ===\n\
             Balance (BTC): 0.05000000\n\
             Balance (satoshis): 5,000,000\n\
             New Wallet: true\n\
             Wallet Type: P\n"
        );
    }

    #[test]
    fn test_transaction_calculator() {
        let out = render(|w| write_transaction_calculator(&Scenario::default(), w));
        assert!(out.contains("Transaction Amount (BTC): 0.01\n"));
        assert!(out.contains("Amount in satoshis: 1,000,000\n"));
        assert!(out.contains("Can proceed: true\n"));
    }

    #[test]
    fn test_transaction_calculator_cannot_proceed() {
        let scenario = Scenario {
            conversion_btc: 0.06,
            ..Scenario::default()
        };
        let out = render(|w| write_transaction_calculator(&scenario, w));
        assert!(out.contains("Can proceed: false\n"));
    }

    #[test]
    fn test_temperature() {
        let out = render(|w| write_temperature(&Scenario::default(), w));
        assert!(out.contains("40°C = 104°F\n"));
    }

    #[test]
    fn test_currency_display() {
        let out = render(|w| write_currency_display(&Scenario::default(), w));
        assert!(out.contains("BTC: 0.50000000\n"));
        assert!(out.contains("USD: $22500.00\n"));
    }

    #[test]
    fn test_arithmetic() {
        let out = render(|w| write_arithmetic(&Scenario::default(), w));
        assert!(out.contains("Sum: 13, Difference: 8, Product: 26.25, Quotient: 4.2\n"));
        assert!(out.contains("Converted BTC to int: 1000000\n"));
        assert!(out.contains("Formatted BTC Amount: 0.01\n"));
    }

    #[test]
    fn test_transaction() {
        let out = render(|w| write_transaction(&Scenario::default(), w));
        assert!(out.contains("Transaction Amount (BTC): 0.01\n"));
        assert!(out.contains("Transaction Fee (BTC): 0.00010000\n"));
        assert!(out.contains("New Balance (BTC): 0.03990000\n"));
        assert!(out.contains(
            "Transaction History: Transaction: 0.010000 BTC, Fee: 0.000100 BTC\n"
        ));
    }

    #[test]
    fn test_transaction_propagates_insufficient_funds() {
        let scenario = Scenario {
            transfer_amount: Btc::new(Decimal::new(5, 2)),
            ..Scenario::default()
        };
        let mut out = Vec::new();
        let err = write_transaction(&scenario, &mut out).unwrap_err();
        assert!(matches!(err, WalletError::InsufficientFunds { .. }));
        assert!(out.is_empty());
    }

    #[test]
    fn test_transaction_summary_table() {
        let out = render(|w| write_transaction_summary(&Scenario::default(), w));
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "=== Transaction Summary ===");
        assert_eq!(
            lines[1],
            "         Description        Amount (BTC)Transaction Fee (BTC)   New Balance (BTC)"
        );
        assert_eq!(
            lines[2],
            "         Transaction          0.01000000          0.00010000          0.03990000"
        );
    }

    #[test]
    fn test_ledger() {
        let ledger = Ledger::from_csv(Cursor::new(SAMPLE_LEDGER)).unwrap();
        let out = render(|w| write_ledger(&ledger, w));
        assert!(out.contains("Final Balance: 0.90000000 BTC\n"));
        assert!(out.contains("Largest Transaction: 0.50000000 BTC\n"));
        assert!(out.contains("Smallest Transaction: -0.20000000 BTC\n"));
    }

    #[test]
    fn test_empty_ledger() {
        let out = render(|w| write_ledger(&Ledger::new(), w));
        assert!(out.contains("Final Balance: 0.00000000 BTC\n"));
        assert!(out.contains("Largest Transaction: none\n"));
    }

    #[test]
    fn test_write_all_sections_in_order() {
        let ledger = Ledger::from_csv(Cursor::new(SAMPLE_LEDGER)).unwrap();
        let out = render(|w| write_all(&Scenario::default(), &ledger, w));

        let titles: Vec<&str> = out.lines().filter(|l| l.starts_with("===")).collect();
        assert_eq!(
            titles,
            [
                "=== My first Wallet ===",
                "=== Transaction Calculator ===",
                "=== Temperature ===",
                "=== Multi Currency Display ===",
                "=== Arithmetic ===",
                "=== Transaction ===",
                "=== Transaction Summary ===",
                "=== Ledger ===",
            ]
        );
        assert_eq!(out.matches("\n\n").count(), 7);
    }
}
