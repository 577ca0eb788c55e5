use serde::{Deserialize, Serialize};

use crate::{Month, MonthName, ParseError, RawInput};

/// A month as supplied by a caller, kept raw until it is queried.
///
/// Construction never fails. Use [`MonthPart::is_valid`] or
/// [`MonthPart::validate`] to find out whether the value is a month in
/// `1..=12`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MonthPart {
    month: RawInput,
}

impl MonthPart {
    /// Wraps a raw month value without interpreting it.
    pub fn new(month: impl Into<RawInput>) -> Self {
        Self { month: month.into() }
    }

    /// A part with no value supplied.
    pub const fn empty() -> Self {
        Self {
            month: RawInput::Absent,
        }
    }

    /// Returns the value passed in, unchanged.
    pub const fn month(&self) -> &RawInput {
        &self.month
    }

    /// Parses and range-checks the stored value.
    ///
    /// # Errors
    /// Returns the parse error from [`RawInput::parse_int`] or
    /// `ParseError::MonthOutOfRange` when the integer is outside `1..=12`.
    pub fn validate(&self) -> Result<Month, ParseError> {
        let result = self.month.parse_int().and_then(Month::from_i64);
        if let Err(err) = &result {
            log::debug!("rejected month {:?}: {err}", self.month);
        }
        result
    }

    /// Whether the stored value is an integer month in `1..=12`.
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// The named month, if the stored value is valid.
    pub fn month_name(&self) -> Option<MonthName> {
        self.validate().ok().map(Month::name)
    }
}

impl From<RawInput> for MonthPart {
    fn from(month: RawInput) -> Self {
        Self { month }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_returns_month_passed_in() {
        let part = MonthPart::new(3);
        assert_eq!(part.month(), &RawInput::Number(3));

        let part = MonthPart::new("03");
        assert_eq!(part.month(), &RawInput::Text("03".to_owned()));
    }

    #[test]
    fn test_empty_is_invalid() {
        assert!(!MonthPart::empty().is_valid());
        assert!(!MonthPart::default().is_valid());
        assert!(!MonthPart::new(None::<u8>).is_valid());
        assert_eq!(MonthPart::empty().validate(), Err(ParseError::Missing));
    }

    #[test]
    fn test_unparseable_is_invalid() {
        let part = MonthPart::new("blah");
        assert!(!part.is_valid());
        assert_eq!(part.validate(), Err(ParseError::NotAnInteger("blah".to_owned())));
    }

    #[rstest]
    #[case::zero(0)]
    #[case::negative(-1)]
    #[case::thirteen(13)]
    #[case::large(1000)]
    fn test_out_of_range_is_invalid(#[case] value: i32) {
        let part = MonthPart::new(value);
        assert!(!part.is_valid(), "{value} should not be a valid month");
        assert_eq!(part.validate(), Err(ParseError::MonthOutOfRange(i64::from(value))));
    }

    #[test]
    fn test_every_month_is_valid() {
        for m in 1..=12 {
            let part = MonthPart::new(m);
            assert!(part.is_valid(), "{m} is a valid month");
        }
    }

    #[test]
    fn test_valid_month_as_string() {
        assert!(MonthPart::new("10").is_valid());
        assert!(MonthPart::new(" 7 ").is_valid());
    }

    #[test]
    fn test_numeric_and_string_forms_agree() {
        for m in -2..=15 {
            assert_eq!(
                MonthPart::new(m).is_valid(),
                MonthPart::new(m.to_string()).is_valid(),
                "numeric and string forms of {m} disagree"
            );
        }
    }

    #[test]
    fn test_validate_returns_month() {
        let month = MonthPart::new("10").validate().expect("10 should validate");
        assert_eq!(month.get(), 10);
    }

    #[test]
    fn test_month_name() {
        assert_eq!(MonthPart::new(2).month_name(), Some(MonthName::February));
        assert_eq!(MonthPart::new("12").month_name(), Some(MonthName::December));
        assert_eq!(MonthPart::new(13).month_name(), None);
    }

    #[test]
    fn test_is_valid_is_idempotent() {
        let part = MonthPart::new("11");
        assert_eq!(part.is_valid(), part.is_valid());
        assert_eq!(part.month(), &RawInput::Text("11".to_owned()));
    }

    #[test]
    fn test_serde_transparent() {
        let json = serde_json::to_string(&MonthPart::new("blah")).expect("failed to serialize month part");
        assert_eq!(json, r#""blah""#);

        let parsed: MonthPart = serde_json::from_str("4").expect("failed to deserialize month part");
        assert_eq!(parsed, MonthPart::new(4));
        assert!(parsed.is_valid());

        let parsed: MonthPart = serde_json::from_str("null").expect("failed to deserialize absent month");
        assert_eq!(parsed, MonthPart::empty());
    }
}
