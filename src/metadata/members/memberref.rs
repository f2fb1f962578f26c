use std::sync::{Arc, OnceLock};

use crate::metadata::{
    members::{FieldRc, MethodRc},
    signatures::{SignatureField, SignatureMethod},
    token::Token,
};

/// A reference-counted pointer to a `MemberRef`
pub type MemberRefRc = Arc<MemberRef>;

/// The signature carried by a `MemberRef` row
#[derive(Debug, Clone, PartialEq)]
pub enum MemberRefSignature {
    /// Reference to a method
    Method(SignatureMethod),
    /// Reference to a field
    Field(SignatureField),
}

/// The definition a `MemberRef` was bound to by the loader
#[derive(Debug, Clone)]
pub enum MemberRefTarget {
    /// A method definition
    Method(MethodRc),
    /// A field definition
    Field(FieldRc),
}

/// A `MemberRef` row: a reference to a method or field, possibly in another assembly
#[derive(Debug)]
pub struct MemberRef {
    /// Token
    pub token: Token,
    /// The referenced member's name
    pub name: String,
    /// The signature as written at the reference site
    pub signature: MemberRefSignature,
    /// The definition this reference resolved to
    target: OnceLock<MemberRefTarget>,
}

impl MemberRef {
    /// Create an unresolved member reference
    pub fn new(token: Token, name: &str, signature: MemberRefSignature) -> Self {
        MemberRef {
            token,
            name: name.to_string(),
            signature,
            target: OnceLock::new(),
        }
    }

    /// Bind this reference to its definition. Returns false if already bound.
    pub fn resolve_to(&self, target: MemberRefTarget) -> bool {
        self.target.set(target).is_ok()
    }

    /// The bound definition, if any
    pub fn target(&self) -> Option<&MemberRefTarget> {
        self.target.get()
    }

    /// The method signature, if this references a method
    pub fn method_signature(&self) -> Option<&SignatureMethod> {
        match &self.signature {
            MemberRefSignature::Method(signature) => Some(signature),
            MemberRefSignature::Field(_) => None,
        }
    }

    /// The resolved method definition, if this reference was bound to one
    pub fn resolved_method(&self) -> Option<MethodRc> {
        match self.target.get()? {
            MemberRefTarget::Method(method) => Some(method.clone()),
            MemberRefTarget::Field(_) => None,
        }
    }

    /// The resolved field definition, if this reference was bound to one
    pub fn resolved_field(&self) -> Option<FieldRc> {
        match self.target.get()? {
            MemberRefTarget::Field(field) => Some(field.clone()),
            MemberRefTarget::Method(_) => None,
        }
    }
}
