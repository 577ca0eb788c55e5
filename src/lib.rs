//! Validators for raw month and year inputs.
//!
//! [`MonthPart`] and [`YearPart`] wrap whatever a caller supplied (nothing,
//! a number or some text) and decide on demand whether it is a month in
//! `1..=12` or a year in `1901..=2999`. [`YearPart`] also answers leap-year
//! and days-in-month questions, keyed by [`MonthName`].
//!
//! ```
//! use calendar_parts::{MonthName, MonthPart, YearPart};
//!
//! assert!(MonthPart::new("10").is_valid());
//! assert!(!MonthPart::new("blah").is_valid());
//!
//! let year = YearPart::new(2000);
//! assert!(year.is_valid());
//! assert!(year.is_leap_year());
//! assert_eq!(year.number_of_days_in_month(MonthName::February), 29);
//! ```

mod consts;
mod month;
mod month_name;
mod prelude;
mod raw;
mod types;
mod year;

pub use consts::*;
pub use month::MonthPart;
pub use month_name::MonthName;
pub use raw::RawInput;
pub use types::{Month, Year, days_in_month, is_leap_year};
pub use year::YearPart;

/// Reasons a raw value is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// No value was supplied.
    #[error("No value supplied")]
    Missing,

    /// Text was supplied but it is blank.
    #[error("Empty input")]
    Empty,

    /// Text was supplied but it is not an integer.
    #[error("Not an integer: {0:?}")]
    NotAnInteger(String),

    #[error("Invalid month: {0} (must be {min}-{max})", min = MIN_MONTH, max = MAX_MONTH)]
    MonthOutOfRange(i64),

    #[error("Invalid year: {0} (must be {min}-{max})", min = MIN_YEAR, max = MAX_YEAR)]
    YearOutOfRange(i64),

    #[error("Unknown month name: {0:?}")]
    UnknownMonthName(String),
}
