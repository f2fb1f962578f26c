//! Method and type signatures in their resolved, owned form.
//!
//! Signatures encode type information, method parameters and calling conventions. The
//! renderer receives them already decoded from the blob heap, with every `TypeDefOrRef`
//! coded index replaced by a weak link to the corresponding
//! [`CilType`](crate::metadata::typesystem::CilType).
//!
//! # Signature Types
//!
//! - [`TypeSignature`] - A single type, including generic instantiations
//! - [`SignatureMethod`] - Parameter types, return type and calling convention
//! - [`SignatureField`] - Field type information
//!
//! Equality of signatures is structural and compares referenced types by full name,
//! never by declaring type. Two methods with equal names and equal signatures are the
//! same overload, even if one overrides the other in a derived type.
//!
//! # References
//!
//! - ECMA-335 6th Edition, Partition II, Section 23.2 - Blobs and Signatures

mod types;

pub use types::*;
