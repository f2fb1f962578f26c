//! Read-only views into a loaded .NET metadata graph.
//!
//! The display helpers do not parse assemblies. They operate on a graph of owned,
//! resolved entities that mirrors the ECMA-335 tables closely enough for rendering:
//!
//! - [`token`] - Metadata table row references used throughout .NET
//! - [`typesystem`] - Types, weak type links, the type registry and the resolver capability
//! - [`signatures`] - Method, field and type signatures with generic instantiations
//! - [`members`] - Methods, fields, properties, events, parameters and member references
//! - [`customattributes`] - Attributes identified by their type's full name
//! - [`constant`] - Literal default values

/// Literal constants of fields and parameters
pub mod constant;
/// Custom attributes applied to types and members
pub mod customattributes;
/// Methods, fields, properties, events, parameters and decompiler variables
pub mod members;
/// Method and type signatures
pub mod signatures;
/// Commonly used metadata token type
pub mod token;
/// The .NET type system view
pub mod typesystem;
