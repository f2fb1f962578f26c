//! # dotscope-display Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits
//! of the library. Import it to get quick access to the formatting helpers and the
//! metadata model they work on.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all dotscope-display operations
pub use crate::Error;

/// The result type used throughout dotscope-display
pub use crate::Result;

// ================================================================================================
// Formatting
// ================================================================================================

/// Numeric literal rendering
pub use crate::formatting::{special_float_name, to_formatted_number, FormatterOptions};

/// Name sanitizing
pub use crate::formatting::{filter_name, get_file_name, remove_generic_tick};

/// Tuple and nullable recognition
pub use crate::formatting::{
    is_system_nullable, is_system_value_tuple, tuple_rank_checked, value_tuple_rank,
    value_tuple_simple_rank,
};

/// Member classification
pub use crate::formatting::{
    accessor_of, property_accessor_name, variable_display_name, Accessor, AccessorKind,
    MemberClassifier, MemberSpecialFlags, OverloadSummary,
};

/// Localized tooltip strings
pub use crate::formatting::{EnglishResources, ResourceKey, ResourceLookup};

// ================================================================================================
// Metadata Model
// ================================================================================================

/// Metadata token type for referencing table entries
pub use crate::metadata::token::Token;

/// Type system
pub use crate::metadata::typesystem::{
    CilFlavor, CilType, CilTypeRc, CilTypeRef, GraphResolver, MetadataResolver, TypeRegistry,
};

/// Members
pub use crate::metadata::members::{
    Event, Field, FieldReference, MemberRef, Method, MethodRc, MethodRef, MethodReference,
    Param, Property, SourceVariable, VariableKind,
};

/// Signatures
pub use crate::metadata::signatures::{
    SignatureGenericInst, SignatureMethod, SignatureParameter, TypeSignature,
};

/// Custom attributes and constants
pub use crate::metadata::{
    constant::ConstantValue,
    customattributes::{has_attribute, CustomAttribute},
};
