//! Digit grouping for numeric literals.
//!
//! Literals are grouped from the right, the way C# 7 digit separators are written:
//! `1_000_000`, `0xDEAD_BEEF`. A separator is never placed directly after a leading
//! minus sign, so `-123456` becomes `-123_456` and not `-_123_456`.

use std::borrow::Cow;

use crate::formatting::DIGIT_SEPARATOR;

/// Combine `prefix` and `number`, grouping the digits of `number` into groups of
/// `digit_group_size` from the right when `digit_separators` is set.
///
/// Nothing is inserted when `number` has at most `digit_group_size` characters, and a
/// group size of zero disables grouping.
///
/// # Examples
///
/// ```rust
/// use dotscope_display::formatting::to_formatted_number;
///
/// assert_eq!(to_formatted_number(true, "0x", "DEADBEEF", 4), "0xDEAD_BEEF");
/// assert_eq!(to_formatted_number(true, "", "-123456", 3), "-123_456");
/// assert_eq!(to_formatted_number(false, "", "123456", 3), "123456");
/// ```
#[must_use]
pub fn to_formatted_number(
    digit_separators: bool,
    prefix: &str,
    number: &str,
    digit_group_size: usize,
) -> String {
    let number = if digit_separators {
        add_digit_separators(number, digit_group_size)
    } else {
        Cow::Borrowed(number)
    };

    let mut res = String::with_capacity(prefix.len() + number.len());
    res.push_str(prefix);
    res.push_str(&number);
    res
}

fn add_digit_separators(number: &str, digit_group_size: usize) -> Cow<'_, str> {
    let digits: Vec<char> = number.chars().collect();
    if digit_group_size == 0 || digits.len() <= digit_group_size {
        return Cow::Borrowed(number);
    }

    let mut res = String::with_capacity(number.len() + digits.len() / digit_group_size);
    for (i, &c) in digits.iter().enumerate() {
        let remaining = digits.len() - i;
        if i != 0 && remaining % digit_group_size == 0 && digits[i - 1] != '-' {
            res.push_str(DIGIT_SEPARATOR);
        }
        res.push(c);
    }

    Cow::Owned(res)
}
