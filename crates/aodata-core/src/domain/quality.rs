use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::ValidationError;

const MAX_QUALITY: u8 = 5;

/// Item condition tier as understood by the market API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Quality(u8);

impl Quality {
    pub fn new(value: u8) -> Result<Self, ValidationError> {
        if value > MAX_QUALITY {
            return Err(ValidationError::QualityOutOfRange {
                value: i64::from(value),
            });
        }
        Ok(Self(value))
    }

    /// Parse a quality from user input such as `"3"`.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        let value: i64 = trimmed
            .parse()
            .map_err(|_| ValidationError::QualityNotNumeric {
                value: trimmed.to_owned(),
            })?;

        if !(0..=i64::from(MAX_QUALITY)).contains(&value) {
            return Err(ValidationError::QualityOutOfRange { value });
        }

        Ok(Self(value as u8))
    }

    pub const fn value(self) -> u8 {
        self.0
    }
}

impl Display for Quality {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_in_range_quality() {
        let parsed = Quality::parse(" 3 ").expect("quality should parse");
        assert_eq!(parsed.value(), 3);
    }

    #[test]
    fn rejects_out_of_range_quality() {
        let err = Quality::parse("6").expect_err("must fail");
        assert!(matches!(err, ValidationError::QualityOutOfRange { value: 6 }));
    }

    #[test]
    fn rejects_negative_quality() {
        let err = Quality::parse("-1").expect_err("must fail");
        assert!(matches!(err, ValidationError::QualityOutOfRange { value: -1 }));
    }

    #[test]
    fn rejects_non_numeric_quality() {
        let err = Quality::parse("three").expect_err("must fail");
        assert!(matches!(err, ValidationError::QualityNotNumeric { .. }));
    }
}
