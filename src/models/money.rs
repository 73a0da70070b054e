//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) so budget arithmetic and the
//! warning thresholds are exact. On disk amounts are plain decimal numbers
//! of currency units (`12.5`), which is what the budget and transaction
//! files have always contained.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use budget_tracker::models::Money;
    /// let amount = Money::from_cents(1050); // $10.50
    /// assert_eq!(amount.to_string(), "$10.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from dollars and cents
    pub const fn from_dollars_cents(dollars: i64, cents: i64) -> Self {
        Self(dollars * 100 + cents)
    }

    /// Create a Money amount from a decimal number of currency units,
    /// rounded to the nearest cent
    ///
    /// Returns `None` for NaN/infinite input or values that overflow.
    pub fn from_decimal(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        let cents = (value * 100.0).round();
        // i64::MAX as f64 rounds up to 2^63, which does not fit
        if cents < i64::MIN as f64 || cents >= i64::MAX as f64 {
            return None;
        }
        Some(Self(cents as i64))
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the amount as a decimal number of currency units
    pub fn to_decimal(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Get the whole dollars portion (truncated toward zero)
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Sum of two amounts, `None` on overflow
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Self(cents)),
            None => None,
        }
    }

    /// Difference of two amounts, `None` on overflow
    pub const fn checked_sub(self, other: Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(cents) => Some(Self(cents)),
            None => None,
        }
    }

    /// Total of all amounts, `None` if any partial sum overflows
    pub fn checked_sum<'a, I>(amounts: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Money>,
    {
        amounts
            .into_iter()
            .try_fold(Self::zero(), |acc, m| acc.checked_add(*m))
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "$10.50", "-$10.50", "$-10.50",
    /// "10", ".5". More than two decimals round to the nearest cent, the
    /// same way amounts read from disk do.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let original = s.trim();
        let invalid = || MoneyParseError::InvalidFormat(original.to_string());

        let (negative, rest) = match original.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, original),
        };
        let rest = rest.strip_prefix('$').unwrap_or(rest);
        // At most one sign, either side of the currency symbol
        let (negative, rest) = match rest.strip_prefix('-') {
            Some(_) if negative => return Err(invalid()),
            Some(rest) => (true, rest),
            None => (negative, rest),
        };

        let s = rest.trim();
        if s.is_empty() {
            return Err(MoneyParseError::Empty);
        }

        let (whole, frac) = s.split_once('.').unwrap_or((s, ""));
        let is_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
        if !is_digits(whole) || !is_digits(frac) || (whole.is_empty() && frac.is_empty()) {
            return Err(invalid());
        }

        let dollars: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid())?
        };

        let digit = |i: usize| frac.as_bytes().get(i).map_or(0, |b| i64::from(b - b'0'));
        let round_up = i64::from(digit(2) >= 5);
        let cents = digit(0) * 10 + digit(1) + round_up;

        let total = dollars
            .checked_mul(100)
            .and_then(|d| d.checked_add(cents))
            .ok_or_else(invalid)?;

        Ok(Self(if negative { -total } else { total }))
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!(
                "-{}{}.{:02}",
                symbol,
                self.dollars().abs(),
                self.cents_part()
            )
        } else {
            format!("{}{}.{:02}", symbol, self.dollars(), self.cents_part())
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol("$"))
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_decimal())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Money::from_decimal(value)
            .ok_or_else(|| de::Error::custom(format!("amount out of range: {}", value)))
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    Empty,
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::Empty => write!(f, "Amount cannot be empty"),
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}
