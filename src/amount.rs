//! Fixed-point BTC amount with satoshi precision.
//!
//! Uses `rust_decimal` internally with scale enforcement so that balances and
//! fees are computed exactly instead of through binary floating point.

use crate::error::{Result, WalletError};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

/// Number of satoshis in one BTC.
pub const SATOSHIS_PER_BTC: i64 = 100_000_000;

/// A BTC amount that always carries exactly 8 decimal places.
///
/// One unit in the last place is one satoshi. Values may be negative, which
/// is how the ledger represents withdrawals.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use wallet_basics::Btc;
///
/// let amount = Btc::from_str("0.01").unwrap();
/// assert_eq!(amount.to_string(), "0.01000000");
/// assert_eq!(amount.fixed(2), "0.01");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Btc(Decimal);

impl Btc {
    /// The number of decimal places to maintain.
    pub const SCALE: u32 = 8;

    /// Zero value.
    pub const ZERO: Self = Btc(Decimal::ZERO);

    /// Creates a new `Btc` from a `Decimal`, normalizing to 8 decimal places.
    ///
    /// Zero is always stored unsigned, so `-0` never reaches a report.
    pub fn new(value: Decimal) -> Self {
        let mut normalized = value;
        normalized.rescale(Self::SCALE);
        if normalized.is_zero() {
            normalized.set_sign_positive(true);
        }
        Btc(normalized)
    }

    /// Creates an amount from a whole number of satoshis.
    pub fn from_satoshis(satoshis: i64) -> Self {
        Btc(Decimal::new(satoshis, Self::SCALE))
    }

    /// Returns the amount as a satoshi count.
    ///
    /// Digits below one satoshi are truncated toward zero.
    pub fn to_satoshis(&self) -> Result<i64> {
        self.0
            .checked_mul(Decimal::from(SATOSHIS_PER_BTC))
            .and_then(|sats| sats.trunc().to_i64())
            .ok_or_else(|| WalletError::SatoshiOverflow(self.to_string()))
    }

    /// Returns `true` if this value is zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns `true` if this value is below zero.
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Computes a percentage of this amount, e.g. a fee at `rate = 0.01` (1%).
    pub fn percent(&self, rate: Decimal) -> Result<Btc> {
        self.0
            .checked_mul(rate)
            .map(Btc::new)
            .ok_or(WalletError::AmountOverflow("fee"))
    }

    /// Adds two amounts, failing instead of panicking on overflow.
    pub fn checked_add(self, rhs: Btc) -> Option<Btc> {
        self.0.checked_add(rhs.0).map(Btc::new)
    }

    /// Subtracts two amounts, failing instead of panicking on overflow.
    pub fn checked_sub(self, rhs: Btc) -> Option<Btc> {
        self.0.checked_sub(rhs.0).map(Btc::new)
    }

    /// Renders the amount with exactly `precision` decimal places.
    ///
    /// Rounds half away from zero when `precision` is below 8 and pads with
    /// zeros above it.
    pub fn fixed(&self, precision: usize) -> String {
        let dp = u32::try_from(precision).unwrap_or(u32::MAX);
        let mut rounded = self
            .0
            .round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
        if rounded.is_zero() {
            rounded.set_sign_positive(true);
        }
        format!("{:.*}", precision, rounded)
    }
}

impl FromStr for Btc {
    type Err = WalletError;

    /// Parses a BTC amount such as `0.01`, with or without surrounding spaces.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        Decimal::from_str(trimmed)
            .map(Btc::new)
            .map_err(|e| WalletError::InvalidAmount {
                input: trimmed.to_string(),
                reason: e.to_string(),
            })
    }
}

impl fmt::Display for Btc {
    /// Always 8 places, one per satoshi digit.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fixed(Self::SCALE as usize))
    }
}

impl Add for Btc {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Btc::new(self.0 + rhs.0)
    }
}

impl AddAssign for Btc {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Btc {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Btc::new(self.0 - rhs.0)
    }
}

impl SubAssign for Btc {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Neg for Btc {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Btc::new(-self.0)
    }
}

impl Sum for Btc {
    fn sum<I: Iterator<Item = Btc>>(iter: I) -> Self {
        iter.fold(Btc::ZERO, |acc, amount| acc + amount)
    }
}

/// Amounts arrive as text (`"0.5"`), never as floats, so no precision is
/// lost between the CSV field and the ledger.
impl<'de> Deserialize<'de> for Btc {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let field = String::deserialize(deserializer)?;
        field.parse::<Btc>().map_err(serde::de::Error::custom)
    }
}
