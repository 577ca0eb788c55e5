use serde::{Deserialize, Serialize};

use crate::ParseError;

/// An unvalidated value as handed to a month or year part.
///
/// The value is kept exactly as supplied. Interpretation happens at query
/// time through [`RawInput::parse_int`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawInput {
    /// Nothing was supplied
    #[default]
    Absent,
    /// A numeric value
    Number(i64),
    /// A textual value, stored verbatim
    Text(String),
}

impl RawInput {
    /// Returns true when nothing was supplied.
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Interprets the stored value as an integer.
    ///
    /// Numbers pass through unchanged. Text is trimmed and must then be a
    /// clean base-10 integer with an optional sign.
    ///
    /// # Errors
    /// Returns `ParseError::Missing` for an absent value, `ParseError::Empty`
    /// for blank text and `ParseError::NotAnInteger` for anything else that
    /// does not parse.
    pub fn parse_int(&self) -> Result<i64, ParseError> {
        match self {
            Self::Absent => Err(ParseError::Missing),
            Self::Number(n) => Ok(*n),
            Self::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Err(ParseError::Empty);
                }
                trimmed.parse::<i64>().map_err(|_| {
                    log::trace!("raw input {s:?} is not an integer");
                    ParseError::NotAnInteger(s.clone())
                })
            },
        }
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for RawInput {
                fn from(value: $ty) -> Self {
                    Self::Number(i64::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<()> for RawInput {
    fn from((): ()) -> Self {
        Self::Absent
    }
}

impl From<&str> for RawInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for RawInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<T: Into<Self>> From<Option<T>> for RawInput {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}
