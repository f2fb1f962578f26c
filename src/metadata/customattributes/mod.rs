//! Custom attributes as seen by the renderer.
//!
//! The renderer never decodes attribute blobs. An attribute is identified solely by the
//! full name of its declared type, and optionally links to that type so that attribute
//! hierarchies can be walked (see [`crate::formatting::MemberClassifier::is_default_parameter`]).
//!
//! # Examples
//!
//! ```rust
//! use dotscope_display::metadata::{
//!     customattributes::{has_attribute, CustomAttribute, OBSOLETE_ATTRIBUTE},
//!     token::Token,
//! };
//! use std::sync::Arc;
//!
//! let attributes = Arc::new(boxcar::Vec::new());
//! attributes.push(Arc::new(CustomAttribute::named(
//!     Token::new(0x0C00_0001),
//!     OBSOLETE_ATTRIBUTE,
//! )));
//! assert!(has_attribute(&attributes, OBSOLETE_ATTRIBUTE));
//! ```

mod types;

pub use types::*;

/// Marks members that should no longer be used
pub const OBSOLETE_ATTRIBUTE: &str = "System.ObsoleteAttribute";
/// Emitted by compilers on extension methods and their declaring types
pub const EXTENSION_ATTRIBUTE: &str = "System.Runtime.CompilerServices.ExtensionAttribute";
/// Base of attributes carrying an optional parameter's default value
pub const CUSTOM_CONSTANT_ATTRIBUTE: &str =
    "System.Runtime.CompilerServices.CustomConstantAttribute";
/// Carries a `decimal` default value, which has no metadata constant encoding
pub const DECIMAL_CONSTANT_ATTRIBUTE: &str =
    "System.Runtime.CompilerServices.DecimalConstantAttribute";

/// True if any attribute in `attributes` is exactly of type `fullname`.
///
/// Derived attribute types do not match.
pub fn has_attribute(attributes: &CustomAttributeList, fullname: &str) -> bool {
    attributes
        .iter()
        .any(|(_, attribute)| attribute.type_fullname == fullname)
}
