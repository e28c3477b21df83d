//! Parsing of user-entered stroke thickness.

use thiserror::Error;

/// Reasons a thickness text cannot be used.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThicknessError {
    #[error("thickness '{0}' is not a whole number")]
    NotANumber(String),
    #[error("thickness must be positive, got {0}")]
    NotPositive(i64),
    #[error("thickness {0} is too large")]
    TooLarge(i64),
}

/// Parses thickness text as entered in the toolbar field or on the command line.
///
/// Surrounding whitespace is ignored. The value must be a positive integer
/// that fits in a `u32`.
pub fn parse_thickness(text: &str) -> Result<u32, ThicknessError> {
    let trimmed = text.trim();
    let value: i64 = trimmed
        .parse()
        .map_err(|_| ThicknessError::NotANumber(trimmed.to_string()))?;

    if value <= 0 {
        return Err(ThicknessError::NotPositive(value));
    }
    u32::try_from(value).map_err(|_| ThicknessError::TooLarge(value))
}
