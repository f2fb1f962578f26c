//! Rendering options for integer literals and names of special floating point values.

use crate::formatting::{
    number::to_formatted_number, DIGIT_GROUP_SIZE_DECIMAL, DIGIT_GROUP_SIZE_HEX, NAN,
    NEGATIVE_INFINITY, POSITIVE_INFINITY,
};

/// Rendering options for numeric literals.
///
/// The defaults match what a plain C# view shows: decimal output without separators.
///
/// # Examples
///
/// ```rust
/// use dotscope_display::formatting::FormatterOptions;
///
/// let options = FormatterOptions::new()
///     .with_hexadecimal(true)
///     .with_digit_separators(true);
/// assert_eq!(options.format_u64(0xDEAD_BEEF), "0xDEAD_BEEF");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormatterOptions {
    /// Insert `_` between digit groups
    pub digit_separators: bool,
    /// Render integers as `0x`-prefixed uppercase hex
    pub hexadecimal: bool,
}

impl FormatterOptions {
    /// Decimal output without separators
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable digit separators
    #[must_use]
    pub fn with_digit_separators(mut self, enabled: bool) -> Self {
        self.digit_separators = enabled;
        self
    }

    /// Switch between hexadecimal and decimal output
    #[must_use]
    pub fn with_hexadecimal(mut self, enabled: bool) -> Self {
        self.hexadecimal = enabled;
        self
    }

    /// Render an unsigned integer
    #[must_use]
    pub fn format_u64(&self, value: u64) -> String {
        if self.hexadecimal {
            to_formatted_number(
                self.digit_separators,
                "0x",
                &format!("{value:X}"),
                DIGIT_GROUP_SIZE_HEX,
            )
        } else {
            to_formatted_number(
                self.digit_separators,
                "",
                &value.to_string(),
                DIGIT_GROUP_SIZE_DECIMAL,
            )
        }
    }

    /// Render a signed integer. Hex output shows the two's complement bit pattern.
    #[must_use]
    pub fn format_i64(&self, value: i64) -> String {
        if self.hexadecimal {
            to_formatted_number(
                self.digit_separators,
                "0x",
                &format!("{value:X}"),
                DIGIT_GROUP_SIZE_HEX,
            )
        } else {
            to_formatted_number(
                self.digit_separators,
                "",
                &value.to_string(),
                DIGIT_GROUP_SIZE_DECIMAL,
            )
        }
    }
}

/// The display name of non-finite floating point values, `None` for finite ones
#[must_use]
pub fn special_float_name(value: f64) -> Option<&'static str> {
    if value.is_nan() {
        Some(NAN)
    } else if value == f64::INFINITY {
        Some(POSITIVE_INFINITY)
    } else if value == f64::NEG_INFINITY {
        Some(NEGATIVE_INFINITY)
    } else {
        None
    }
}
