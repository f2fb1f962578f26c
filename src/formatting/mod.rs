//! Display helpers for decompiled .NET code.
//!
//! Everything a text renderer needs before it writes a token: numeric literals with digit
//! separators, names that are safe to print, recognition of C# tuple and nullable
//! syntax, and member classification for badges and tooltips.
//!
//! # Key Components
//!
//! - [`to_formatted_number`] / [`FormatterOptions`] - Numeric literal rendering
//! - [`filter_name`], [`remove_generic_tick`], [`get_file_name`] - Name sanitizing
//! - [`value_tuple_rank`], [`is_system_nullable`] - Tuple and nullable recognition
//! - [`MemberClassifier`] - Deprecation, extension methods, awaitables, overloads
//! - [`accessor_of`], [`variable_display_name`] - Resolver-free classification
//!
//! All functions are pure over an immutable metadata graph and may be called from any
//! number of threads at once.
//!
//! # Examples
//!
//! ```rust
//! use dotscope_display::formatting::{filter_name, remove_generic_tick, FormatterOptions};
//!
//! let options = FormatterOptions::new().with_digit_separators(true);
//! assert_eq!(options.format_i64(-1234567), "-1_234_567");
//! assert_eq!(remove_generic_tick("Dictionary`2"), "Dictionary");
//! assert_eq!(filter_name(Some("bad\u{1}name")), "bad\\u0001name");
//! ```

mod classify;
mod names;
mod number;
mod options;
mod overloads;
mod resources;
mod tuple;

pub use classify::{
    accessor_of, is_awaitable_type_name, property_accessor_name, variable_display_name,
    Accessor, AccessorKind, AttributeTarget, EventAccessor, MemberClassifier,
    MemberSpecialFlags, PropertyAccessor,
};
pub use names::{filter_name, get_file_name, remove_generic_tick};
pub use number::to_formatted_number;
pub use options::{special_float_name, FormatterOptions};
pub use overloads::OverloadSummary;
pub use resources::{EnglishResources, ResourceKey, ResourceLookup};
pub use tuple::{
    is_system_nullable, is_system_value_tuple, tuple_rank_checked, value_tuple_rank,
    value_tuple_simple_rank, MAX_TUPLE_NESTING,
};

/// Digits per group in hexadecimal literals
pub const DIGIT_GROUP_SIZE_HEX: usize = 4;
/// Digits per group in decimal literals
pub const DIGIT_GROUP_SIZE_DECIMAL: usize = 3;
/// C# 7 digit separator
pub const DIGIT_SEPARATOR: &str = "_";

/// Rendering of `double.NaN`
pub const NAN: &str = "NaN";
/// Rendering of `double.NegativeInfinity`
pub const NEGATIVE_INFINITY: &str = "-Infinity";
/// Rendering of `double.PositiveInfinity`
pub const POSITIVE_INFINITY: &str = "Infinity";

/// Maximum depth of type hierarchy walks
pub const MAX_RECURSION: usize = 200;
/// Maximum length of a single rendered literal before a renderer abbreviates it
pub const MAX_OUTPUT_LEN: usize = 4096;
/// Maximum length of a sanitized name, in characters
pub const MAX_NAME_LEN: usize = 0x100;
/// Rendering of a missing name
pub const NULL_NAME: &str = "<<NULL>>";
/// Rendering of a variable with neither name nor slot
pub const UNKNOWN_VARIABLE_NAME: &str = "???";
