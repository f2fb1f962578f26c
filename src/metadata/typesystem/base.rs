use std::sync::{Arc, Weak};

use crate::metadata::typesystem::{CilType, CilTypeRc};

/// A smart reference to a `CilType` that automatically handles weak references
/// to prevent circular reference memory leaks while providing a clean API.
///
/// Two `CilTypeRef`s compare equal when they point at the same type, or when both
/// targets are alive and share the same full name. Signatures coming from different
/// modules name the same type through distinct rows, and overload identity must not
/// depend on which row was used.
#[derive(Clone, Debug)]
pub struct CilTypeRef {
    weak_ref: Weak<CilType>,
}

impl CilTypeRef {
    /// Create a new `CilTypeRef` from a strong reference
    pub fn new(strong_ref: &CilTypeRc) -> Self {
        Self {
            weak_ref: Arc::downgrade(strong_ref),
        }
    }

    /// Get a strong reference to the type, returning None if the type has been dropped
    #[must_use]
    pub fn upgrade(&self) -> Option<CilTypeRc> {
        self.weak_ref.upgrade()
    }

    /// True if this reference points at exactly `other`
    #[must_use]
    pub fn is(&self, other: &CilTypeRc) -> bool {
        std::ptr::eq(self.weak_ref.as_ptr(), Arc::as_ptr(other))
    }
}

impl From<CilTypeRc> for CilTypeRef {
    fn from(strong_ref: CilTypeRc) -> Self {
        Self::new(&strong_ref)
    }
}

impl From<&CilTypeRc> for CilTypeRef {
    fn from(strong_ref: &CilTypeRc) -> Self {
        Self::new(strong_ref)
    }
}

impl PartialEq for CilTypeRef {
    fn eq(&self, other: &Self) -> bool {
        if Weak::ptr_eq(&self.weak_ref, &other.weak_ref) {
            return true;
        }

        match (self.upgrade(), other.upgrade()) {
            (Some(left), Some(right)) => {
                left.namespace == right.namespace && left.name == right.name
            }
            _ => false,
        }
    }
}

#[allow(missing_docs)]
/// Represents the broad category of a type as far as rendering is concerned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CilFlavor {
    // Base primitive types
    Void,
    Boolean,
    Char,
    I1,
    U1,
    I2,
    U2,
    I4,
    U4,
    I8,
    U8,
    R4,
    R8,
    I,
    U,
    Object,
    String,

    // Type categories
    Class,
    ValueType,
    Interface,

    // Fallback
    #[default]
    Unknown,
}
