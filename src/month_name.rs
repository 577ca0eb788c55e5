use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{ParseError, prelude::*};

/// The twelve calendar months, numbered 1 (January) through 12 (December).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum MonthName {
    January   = 1,
    February  = 2,
    March     = 3,
    April     = 4,
    May       = 5,
    June      = 6,
    July      = 7,
    August    = 8,
    September = 9,
    October   = 10,
    November  = 11,
    December  = 12,
}

impl MonthName {
    /// All months in calendar order.
    pub const ALL: [Self; 12] = [
        Self::January,
        Self::February,
        Self::March,
        Self::April,
        Self::May,
        Self::June,
        Self::July,
        Self::August,
        Self::September,
        Self::October,
        Self::November,
        Self::December,
    ];

    /// Returns the 1-based month number.
    #[inline]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Looks up a month by its 1-based number.
    pub const fn from_number(n: u8) -> Option<Self> {
        match n {
            1..=12 => Some(Self::ALL[(n - 1) as usize]),
            _ => None,
        }
    }
}

impl TryFrom<u8> for MonthName {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_number(value).ok_or(ParseError::MonthOutOfRange(i64::from(value)))
    }
}

impl From<MonthName> for u8 {
    fn from(month: MonthName) -> Self {
        month.number()
    }
}

impl FromStr for MonthName {
    type Err = ParseError;

    /// Accepts the English month name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|m| m.to_string().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseError::UnknownMonthName(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_are_one_based() {
        assert_eq!(MonthName::January.number(), 1);
        assert_eq!(MonthName::February.number(), 2);
        assert_eq!(MonthName::December.number(), 12);
    }

    #[test]
    fn test_all_is_in_calendar_order() {
        for (idx, month) in MonthName::ALL.into_iter().enumerate() {
            assert_eq!(usize::from(month.number()), idx + 1, "{month} is out of order");
        }
    }

    #[test]
    fn test_from_number() {
        for n in 1..=12 {
            let month = MonthName::from_number(n).expect("months 1-12 should resolve");
            assert_eq!(month.number(), n);
        }
        assert_eq!(MonthName::from_number(0), None);
        assert_eq!(MonthName::from_number(13), None);
    }

    #[test]
    fn test_try_from_u8() {
        let month: MonthName = 4.try_into().expect("4 should be April");
        assert_eq!(month, MonthName::April);

        let result: Result<MonthName, _> = 13.try_into();
        assert_eq!(result, Err(ParseError::MonthOutOfRange(13)));
    }

    #[test]
    fn test_into_u8() {
        let value: u8 = MonthName::September.into();
        assert_eq!(value, 9);
    }

    #[test]
    fn test_display() {
        assert_eq!(MonthName::January.to_string(), "January");
        assert_eq!(MonthName::September.to_string(), "September");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("March".parse::<MonthName>(), Ok(MonthName::March));
        assert_eq!("march".parse::<MonthName>(), Ok(MonthName::March));
        assert_eq!(" DECEMBER ".parse::<MonthName>(), Ok(MonthName::December));

        let result = "Smarch".parse::<MonthName>();
        assert_eq!(result, Err(ParseError::UnknownMonthName("Smarch".to_owned())));
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&MonthName::February).expect("failed to serialize month name");
        assert_eq!(json, "2");

        let parsed: MonthName = serde_json::from_str(&json).expect("failed to deserialize month name");
        assert_eq!(parsed, MonthName::February);

        let result: Result<MonthName, _> = serde_json::from_str("0");
        assert!(result.is_err());
    }
}
