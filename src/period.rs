//! Month selection and navigation for the summary views.

use std::cmp::Ordering;
use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use time::{Date, Month};

use crate::Error;

/// A calendar month in a specific year, e.g. January 2024.
///
/// This is the period selector used by the summary views. Its canonical text
/// form is the zero-padded "YYYY-MM" used in query strings and JSON, which
/// sorts chronologically when compared as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct YearMonth {
    year: i32,
    month: Month,
}

impl YearMonth {
    /// Create a year-month from its parts.
    pub fn new(year: i32, month: Month) -> Self {
        Self { year, month }
    }

    /// The year-month that `date` falls in.
    pub fn of(date: Date) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The year component.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The month component.
    pub fn month(&self) -> Month {
        self.month
    }

    /// Whether `date` falls within this month.
    pub fn contains(&self, date: Date) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// The month `delta` months after this one. Negative values go back in
    /// time.
    ///
    /// Year boundaries carry over for steps of any size: December 2024 plus
    /// one is January 2025, and January 2024 minus one is December 2023.
    pub fn advance(&self, delta: i32) -> Self {
        let months = self.year * 12 + (self.month as i32 - 1) + delta;
        let year = months.div_euclid(12);
        let month = Month::try_from((months.rem_euclid(12) + 1) as u8).unwrap();

        Self { year, month }
    }
}

impl Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month as u8)
    }
}

impl FromStr for YearMonth {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let error = || Error::InvalidPeriod(text.to_owned());

        let (year_text, month_text) = text.split_once('-').ok_or_else(error)?;

        if year_text.len() != 4 || month_text.len() != 2 {
            return Err(error());
        }

        let year = year_text.parse().map_err(|_| error())?;
        let month_number: u8 = month_text.parse().map_err(|_| error())?;
        let month = Month::try_from(month_number).map_err(|_| error())?;

        Ok(Self { year, month })
    }
}

impl TryFrom<String> for YearMonth {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<YearMonth> for String {
    fn from(value: YearMonth) -> Self {
        value.to_string()
    }
}

impl PartialOrd for YearMonth {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for YearMonth {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.year, self.month as u8).cmp(&(other.year, other.month as u8))
    }
}
