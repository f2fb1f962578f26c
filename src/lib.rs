// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # dotscope-display
//!
//! [![Crates.io](https://img.shields.io/crates/v/dotscope-display.svg)](https://crates.io/crates/dotscope-display)
//! [![Documentation](https://docs.rs/dotscope-display/badge.svg)](https://docs.rs/dotscope-display)
//! [![License](https://img.shields.io/badge/license-Apache--2.0-blue.svg)](https://github.com/BinFlip/dotscope/blob/main/LICENSE-APACHE)
//!
//! Naming, formatting and classification helpers for rendering decompiled .NET code.
//!
//! A decompiler's text output is produced token by token. Before a token is written, the
//! renderer has to decide how it looks: whether a number gets digit separators, whether
//! a name from an obfuscated assembly is safe to print, whether ``ValueTuple`3<int, int, int>``
//! is shown as `(int, int, int)`, whether a method gets an "extension" or "awaitable"
//! badge. This crate answers those questions over an in-memory view of the metadata.
//!
//! ## Features
//!
//! - **Numeric literals** - Digit separators for decimal and hexadecimal output
//! - **Name sanitizing** - Control character escaping, length caps, generic arity stripping
//! - **Tuple recognition** - Rank of arbitrarily nested `System.ValueTuple` instantiations
//! - **Member classification** - Accessors, deprecation, extension methods, awaitables,
//!   default parameters and overload counts
//! - **Thread safe** - All helpers are pure over an immutable, `Send + Sync` metadata graph
//!
//! ## Quick Start
//!
//! ```rust
//! use dotscope_display::prelude::*;
//!
//! let options = FormatterOptions::new()
//!     .with_hexadecimal(true)
//!     .with_digit_separators(true);
//! assert_eq!(options.format_u64(0x7FFF_FFFF), "0x7FFF_FFFF");
//!
//! assert_eq!(remove_generic_tick("List`1"), "List");
//! assert_eq!(variable_display_name(&SourceVariable::local(2)), "V_2");
//! ```
//!
//! ## Resolving references
//!
//! Classification that crosses assembly boundaries goes through
//! [`metadata::typesystem::MetadataResolver`].
//! [`metadata::typesystem::GraphResolver`] follows the links recorded in the graph,
//! [`metadata::typesystem::TypeRegistry`] additionally binds `TypeRef`s by full name.
//!
//! ```rust
//! use std::sync::Arc;
//! use dotscope_display::prelude::*;
//!
//! let registry = TypeRegistry::new();
//! let task = Arc::new(CilType::new(
//!     Token::new(0x0200_0001),
//!     CilFlavor::Class,
//!     "System.Threading.Tasks",
//!     "Task",
//!     Some("System.Runtime"),
//! ));
//! registry.insert(&task);
//!
//! let classifier = MemberClassifier::new(&registry);
//! assert!(classifier.is_awaitable(&TypeSignature::Class(CilTypeRef::new(&task))));
//! ```
//!
//! ## Logging
//!
//! Diagnostics go through the [`log`] facade: `trace` when a lookup falls back to a
//! default, `warn` when a hierarchy walk hits its depth limit. Install any logger
//! implementation to see them.

pub(crate) mod error;

/// Shared functionality which is used in unit-tests
#[cfg(test)]
pub(crate) mod test;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust
/// use dotscope_display::prelude::*;
///
/// assert_eq!(filter_name(Some("a\u{0}")), "a\\u0000");
/// ```
pub mod prelude;

/// Formatting and classification helpers used by the text renderer
///
/// # Key Components
///
/// - Numeric literals: [`formatting::to_formatted_number`], [`formatting::FormatterOptions`]
/// - Names: [`formatting::filter_name`], [`formatting::remove_generic_tick`],
///   [`formatting::get_file_name`]
/// - Tuples: [`formatting::value_tuple_rank`], [`formatting::is_system_nullable`]
/// - Members: [`formatting::MemberClassifier`], [`formatting::accessor_of`]
pub mod formatting;

/// The slice of the .NET metadata model the renderer works on
///
/// Types, members, signatures and custom attributes, linked into a graph by whoever
/// loaded the assembly.
pub mod metadata;

/// `dotscope-display` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `dotscope-display` Error type
///
/// Almost every helper in this crate is total. The few checked variants report through
/// this type.
pub use error::Error;
