//! Unit conversions and basic arithmetic on floating values.

use crate::amount::SATOSHIS_PER_BTC;
use crate::error::{Result, WalletError};

/// Converts a floating amount into integer base units.
///
/// The product is truncated toward zero, never rounded, so fractional base
/// units are dropped.
pub fn to_base_units(amount: f64, units_per_coin: i64) -> Result<i64> {
    let product = amount * units_per_coin as f64;
    if !product.is_finite() {
        return Err(WalletError::NonFiniteAmount(amount));
    }

    // i64::MAX as f64 rounds up to 2^63, which is already out of range
    if product >= i64::MAX as f64 || product < i64::MIN as f64 {
        return Err(WalletError::SatoshiOverflow(amount.to_string()));
    }

    Ok(product as i64)
}

/// Converts a BTC amount into satoshis, truncating.
///
/// ```
/// use wallet_basics::calc::btc_to_satoshis;
/// assert_eq!(btc_to_satoshis(0.01).unwrap(), 1_000_000);
/// ```
pub fn btc_to_satoshis(btc: f64) -> Result<i64> {
    to_base_units(btc, SATOSHIS_PER_BTC)
}

/// Converts a satoshi count back into floating BTC.
pub fn satoshis_to_btc(satoshis: i64) -> f64 {
    satoshis as f64 / SATOSHIS_PER_BTC as f64
}

/// `F = C * 9/5 + 32`
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

/// `C = (F - 32) * 5/9`
pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) * 5.0 / 9.0
}

/// Values a BTC amount in a fiat currency at the given exchange rate.
pub fn btc_to_fiat(btc: f64, rate: f64) -> f64 {
    btc * rate
}

/// The four basic operations applied to one pair of operands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Operations {
    pub sum: f64,
    pub difference: f64,
    pub product: f64,
    /// IEEE-754 semantics: dividing by zero yields an infinity or NaN.
    pub quotient: f64,
}

impl Operations {
    pub fn of(a: f64, b: f64) -> Self {
        Operations {
            sum: a + b,
            difference: a - b,
            product: a * b,
            quotient: a / b,
        }
    }
}
