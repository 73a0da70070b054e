//! Budget period representation
//!
//! A period is one calendar month of one year. It is the partition key for
//! all persisted ledger data.

use chrono::{Datelike, Local, NaiveDate};
use std::fmt;

/// English month names, index 0 = January
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A monthly budget period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Period {
    year: i32,
    month: u32,
}

impl Period {
    /// Create a period, validating the month (1-12)
    pub fn new(year: i32, month: u32) -> Result<Self, PeriodParseError> {
        if !(1..=12).contains(&month) {
            return Err(PeriodParseError::InvalidMonth(month));
        }
        Ok(Self { year, month })
    }

    /// Get the period containing today's local date
    pub fn current() -> Self {
        Self::containing(Local::now().date_naive())
    }

    /// Get the period containing a specific date
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// English month name ("January")
    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[(self.month - 1) as usize]
    }

    /// Same year, different month
    pub fn with_month(&self, month: u32) -> Result<Self, PeriodParseError> {
        Self::new(self.year, month)
    }

    /// Key used to name the period's storage directory ("2025_January")
    pub fn storage_key(&self) -> String {
        format!("{}_{}", self.year, self.month_name())
    }

    /// Inverse of [`Period::storage_key`]
    pub fn from_storage_key(key: &str) -> Option<Self> {
        let (year, name) = key.split_once('_')?;
        let year: i32 = year.parse().ok()?;
        let month = MONTH_NAMES.iter().position(|m| *m == name)? as u32 + 1;
        Some(Self { year, month })
    }

    /// Get the next period
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Get the previous period
    pub fn prev(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// Parse a period string relative to `reference`
    ///
    /// Formats:
    /// - "2025-01"
    /// - "January", "jan" (reference year)
    /// - "January 2025", "Jan 2025"
    /// - "current"/"now"/"this", "last"/"prev"/"previous", "next"
    pub fn parse_relative(s: &str, reference: Period) -> Result<Self, PeriodParseError> {
        let trimmed = s.trim();
        let lower = trimmed.to_lowercase();

        match lower.as_str() {
            "" => return Err(PeriodParseError::InvalidFormat(s.to_string())),
            "current" | "now" | "this" => return Ok(reference),
            "last" | "prev" | "previous" => return Ok(reference.prev()),
            "next" => return Ok(reference.next()),
            _ => {}
        }

        if let Some((year, month)) = lower.split_once('-') {
            let year: i32 = year
                .parse()
                .map_err(|_| PeriodParseError::InvalidFormat(trimmed.to_string()))?;
            let month: u32 = month
                .parse()
                .map_err(|_| PeriodParseError::InvalidFormat(trimmed.to_string()))?;
            return Self::new(year, month);
        }

        let mut words = lower.split_whitespace();
        let month_word = words.next().unwrap_or_default();
        let month = month_from_name(month_word)
            .ok_or_else(|| PeriodParseError::InvalidFormat(trimmed.to_string()))?;

        let year = match (words.next(), words.next()) {
            (None, _) => reference.year,
            (Some(year), None) => year
                .parse()
                .map_err(|_| PeriodParseError::InvalidFormat(trimmed.to_string()))?,
            (Some(_), Some(_)) => {
                return Err(PeriodParseError::InvalidFormat(trimmed.to_string()))
            }
        };

        Self::new(year, month)
    }
}

/// Look up a month number from a full or three-letter English name
fn month_from_name(name: &str) -> Option<u32> {
    MONTH_NAMES
        .iter()
        .position(|m| {
            let m = m.to_lowercase();
            name == m || (name.len() == 3 && m.starts_with(name))
        })
        .map(|i| i as u32 + 1)
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month_name(), self.year)
    }
}

impl Ord for Period {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.year, self.month).cmp(&(other.year, other.month))
    }
}

impl PartialOrd for Period {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Error type for period parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodParseError {
    InvalidFormat(String),
    InvalidMonth(u32),
}

impl fmt::Display for PeriodParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodParseError::InvalidFormat(s) => write!(f, "Invalid period format: {}", s),
            PeriodParseError::InvalidMonth(m) => write!(f, "Invalid month: {}", m),
        }
    }
}

impl std::error::Error for PeriodParseError {}
