//! Source of "today" for dating expenses

use chrono::{Local, NaiveDate};

/// Supplies the current date
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Local system date
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always returns the same date
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
