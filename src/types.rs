use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_COMMON_YEAR, DAYS_IN_LEAP_YEAR, DAYS_IN_MONTH, FEBRUARY_DAYS_LEAP,
    GREGORIAN_CYCLE, LEAP_YEAR_CYCLE, MAX_MONTH, MAX_YEAR, MIN_MONTH, MIN_YEAR,
};
use crate::{MonthName, ParseError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;

/// A year value guaranteed to be in the range `MIN_YEAR..=MAX_YEAR` (1901..=2999)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(u16);

impl Year {
    /// Creates a new Year, validating that it's within `MIN_YEAR..=MAX_YEAR`
    ///
    /// # Errors
    /// Returns `ParseError::YearOutOfRange` if the value is outside the range.
    pub fn new(value: u16) -> Result<Self, ParseError> {
        Self::from_i64(i64::from(value))
    }

    pub(crate) fn from_i64(value: i64) -> Result<Self, ParseError> {
        if !(i64::from(MIN_YEAR)..=i64::from(MAX_YEAR)).contains(&value) {
            return Err(ParseError::YearOutOfRange(value));
        }
        u16::try_from(value)
            .map(Self)
            .map_err(|_| ParseError::YearOutOfRange(value))
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0
    }

    /// Whether this is a Gregorian leap year
    #[inline]
    pub const fn is_leap(self) -> bool {
        is_leap_year(self.0 as i64)
    }

    /// Number of days in `month` of this year
    pub const fn days_in_month(self, month: MonthName) -> u8 {
        days_in_month(self.is_leap(), month)
    }

    /// Number of days in this year
    pub const fn days_in_year(self) -> u16 {
        days_in_year(self.is_leap())
    }
}

impl TryFrom<u16> for Year {
    type Error = ParseError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month value guaranteed to be in the range `MIN_MONTH..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `ParseError::MonthOutOfRange` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        Self::from_i64(i64::from(value))
    }

    pub(crate) fn from_i64(value: i64) -> Result<Self, ParseError> {
        if !(i64::from(MIN_MONTH)..=i64::from(MAX_MONTH)).contains(&value) {
            return Err(ParseError::MonthOutOfRange(value));
        }
        u8::try_from(value)
            .ok()
            .and_then(NonZeroU8::new)
            .map(Self)
            .ok_or(ParseError::MonthOutOfRange(value))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Returns the named month
    pub fn name(self) -> MonthName {
        // Construction guarantees 1..=12.
        MonthName::ALL[usize::from(self.get() - 1)]
    }
}

impl TryFrom<u8> for Month {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl From<MonthName> for Month {
    fn from(name: MonthName) -> Self {
        Self(NonZeroU8::MIN.saturating_add(name.number() - 1))
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Helper functions

/// Gregorian leap-year rule. Defined for any integer, not only accepted years.
pub const fn is_leap_year(year: i64) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Days in `month`, with February lengthened when `is_leap` is set.
pub const fn days_in_month(is_leap: bool, month: MonthName) -> u8 {
    match month {
        MonthName::February if is_leap => FEBRUARY_DAYS_LEAP,
        _ => DAYS_IN_MONTH[month.number() as usize],
    }
}

pub(crate) const fn days_in_year(is_leap: bool) -> u16 {
    if is_leap {
        DAYS_IN_LEAP_YEAR
    } else {
        DAYS_IN_COMMON_YEAR
    }
}
