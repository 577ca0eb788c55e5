use serde::{Deserialize, Serialize};

use crate::types::{days_in_month, days_in_year, is_leap_year};
use crate::{MonthName, ParseError, RawInput, Year};

/// A year as supplied by a caller, kept raw until it is queried.
///
/// Validation accepts years in `1901..=2999`. The calendar queries apply
/// the Gregorian rules to whatever integer the raw value holds and do not
/// require the year to be valid first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct YearPart {
    year: RawInput,
}

impl YearPart {
    /// Wraps a raw year value without interpreting it.
    pub fn new(year: impl Into<RawInput>) -> Self {
        Self { year: year.into() }
    }

    /// A part with no value supplied.
    pub const fn empty() -> Self {
        Self { year: RawInput::Absent }
    }

    /// Returns the value passed in, unchanged.
    pub const fn year(&self) -> &RawInput {
        &self.year
    }

    /// Parses and range-checks the stored value.
    ///
    /// # Errors
    /// Returns the parse error from [`RawInput::parse_int`] or
    /// `ParseError::YearOutOfRange` when the integer is outside `1901..=2999`.
    pub fn validate(&self) -> Result<Year, ParseError> {
        let result = self.year.parse_int().and_then(Year::from_i64);
        if let Err(err) = &result {
            log::debug!("rejected year {:?}: {err}", self.year);
        }
        result
    }

    /// Whether the stored value is an integer year in `1901..=2999`.
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Gregorian leap-year test on the stored value.
    ///
    /// # Errors
    /// Returns the parse error when the stored value is not an integer.
    pub fn try_is_leap_year(&self) -> Result<bool, ParseError> {
        self.year.parse_int().map(is_leap_year)
    }

    /// Gregorian leap-year test on the stored value.
    ///
    /// A value that does not parse as an integer is not a leap year.
    pub fn is_leap_year(&self) -> bool {
        self.try_is_leap_year().unwrap_or_else(|err| {
            log::trace!("treating year {:?} as common year: {err}", self.year);
            false
        })
    }

    /// Number of days in `month` for the stored year.
    ///
    /// # Errors
    /// Returns the parse error when the stored value is not an integer.
    pub fn try_number_of_days_in_month(&self, month: MonthName) -> Result<u8, ParseError> {
        self.try_is_leap_year().map(|leap| days_in_month(leap, month))
    }

    /// Number of days in `month` for the stored year.
    ///
    /// February follows [`YearPart::is_leap_year`], so an unparseable year
    /// gives it 28 days.
    pub fn number_of_days_in_month(&self, month: MonthName) -> u8 {
        days_in_month(self.is_leap_year(), month)
    }

    /// 366 for leap years, 365 otherwise.
    pub fn number_of_days_in_year(&self) -> u16 {
        days_in_year(self.is_leap_year())
    }
}

impl From<RawInput> for YearPart {
    fn from(year: RawInput) -> Self {
        Self { year }
    }
}
