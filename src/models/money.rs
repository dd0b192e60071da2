//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) so totals are exact. On disk the
//! amount is a plain JSON decimal number (`3.5`), which keeps the persisted
//! file readable by other tools.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Largest amount, in cents, accepted from user input (ten trillion)
///
/// Every value up to this bound survives the round trip through a JSON
/// number (an f64) unchanged.
pub const MAX_INPUT_CENTS: i64 = 1_000_000_000_000_000;

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use expense_tracker::models::Money;
    /// let amount = Money::from_cents(1050); // $10.50
    /// assert_eq!(amount.to_string(), "$10.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from a decimal number, rounding to the nearest cent
    pub fn from_decimal(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        let cents = (value * 100.0).round();
        if cents.abs() >= i64::MAX as f64 {
            return None;
        }
        Some(Self(cents as i64))
    }

    pub const fn zero() -> Self {
        Self(0)
    }

    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole dollars portion (truncated toward zero)
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// The amount as a decimal number of currency units
    pub fn as_decimal(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Add two amounts, returning `None` on overflow
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Total a sequence of amounts, returning `None` on overflow
    pub fn checked_sum<I>(amounts: I) -> Option<Self>
    where
        I: IntoIterator<Item = Money>,
    {
        amounts
            .into_iter()
            .try_fold(Money::zero(), |acc, m| acc.checked_add(m))
    }

    /// Parse a money amount from a string
    ///
    /// Accepts any decimal number, optionally signed and prefixed with `$`:
    /// "10.50", "-10.50", "+10", "$10.50", ".5", "1e3". The value is rounded
    /// to the nearest cent; a positive value that rounds to zero is an error.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let input = s.trim();
        let invalid = || MoneyParseError::InvalidFormat(input.to_string());

        let (negative, rest) = match input.chars().next() {
            Some('-') => (true, &input[1..]),
            Some('+') => (false, &input[1..]),
            _ => (false, input),
        };
        let rest = rest.strip_prefix('$').unwrap_or(rest);

        // the sign was consumed above; f64 parsing would accept a second one
        if rest.starts_with(['+', '-']) {
            return Err(invalid());
        }

        let value: f64 = rest.parse().map_err(|_| invalid())?;
        if !value.is_finite() {
            return Err(invalid());
        }

        let money = Money::from_decimal(value)
            .filter(|m| m.0 <= MAX_INPUT_CENTS)
            .ok_or_else(|| MoneyParseError::TooLarge(input.to_string()))?;

        if !negative && value > 0.0 && money.0 == 0 {
            return Err(MoneyParseError::BelowOneCent(input.to_string()));
        }

        Ok(if negative { Self(-money.0) } else { money })
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!(
            "{}{}{}.{:02}",
            sign,
            symbol,
            self.dollars().abs(),
            self.cents_part()
        )
    }

    /// Format as a bare decimal with two places, e.g. "3.50"
    pub fn format_plain(&self) -> String {
        self.format_with_symbol("")
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with_symbol("$"))
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_decimal())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Money::from_decimal(value)
            .ok_or_else(|| serde::de::Error::custom(format!("amount out of range: {}", value)))
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    BelowOneCent(String),
    TooLarge(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat(s) => write!(f, "Invalid amount: '{}'", s),
            Self::BelowOneCent(s) => write!(f, "Amount '{}' is less than one cent.", s),
            Self::TooLarge(s) => write!(f, "Amount '{}' is too large.", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}
