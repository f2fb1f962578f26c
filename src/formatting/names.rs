//! Display-safe names.
//!
//! Metadata names are attacker controlled: obfuscators emit control characters,
//! multi-kilobyte identifiers and paths that no file system would accept. Everything
//! here is total and never validates its input.

use crate::formatting::{MAX_NAME_LEN, NULL_NAME};

/// Make a metadata name safe to display.
///
/// Characters below U+0020 are escaped as `\uXXXX` (uppercase hex), everything else is
/// kept. The result is capped at [`MAX_NAME_LEN`] characters, cutting through an escape
/// sequence if that is where the limit falls. A missing name renders as `<<NULL>>`.
///
/// # Examples
///
/// ```rust
/// use dotscope_display::formatting::filter_name;
///
/// assert_eq!(filter_name(Some("a\tb")), "a\\u0009b");
/// assert_eq!(filter_name(None), "<<NULL>>");
/// ```
#[must_use]
pub fn filter_name(name: Option<&str>) -> String {
    let Some(name) = name else {
        return NULL_NAME.to_string();
    };

    let mut res = String::with_capacity(name.len().min(MAX_NAME_LEN));
    let mut len = 0;
    for c in name.chars() {
        if len >= MAX_NAME_LEN {
            break;
        }
        if c >= ' ' {
            res.push(c);
            len += 1;
        } else {
            res.push_str(&format!("\\u{:04X}", u32::from(c)));
            len += 6;
        }
    }

    // Only the trailing escape can overshoot, and it is ASCII
    if len > MAX_NAME_LEN {
        res.truncate(res.len() - (len - MAX_NAME_LEN));
    }
    res
}

/// Strip the generic arity suffix from a type name: ``List`1`` becomes `List`.
///
/// Names starting with `<` are compiler generated (``<>c__DisplayClass`1``) and kept as
/// they are; their backtick is not an arity marker.
#[must_use]
pub fn remove_generic_tick(name: &str) -> &str {
    let Some(index) = name.rfind('`') else {
        return name;
    };
    if name.starts_with('<') {
        return name;
    }
    &name[..index]
}

/// The part of `path` after the last `/` or `\`.
///
/// Unlike a path API this accepts any content, including characters that are invalid
/// in file names on the host system.
#[must_use]
pub fn get_file_name(path: &str) -> &str {
    match path.rfind(|c: char| c == '/' || c == '\\') {
        Some(index) => &path[index + 1..],
        None => path,
    }
}
