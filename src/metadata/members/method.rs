use std::sync::{Arc, OnceLock, Weak};

use crate::metadata::{
    customattributes::CustomAttributeList,
    members::{MemberRefRc, ParamList},
    signatures::SignatureMethod,
    token::Token,
    typesystem::{CilTypeRc, CilTypeRef},
};

/// A reference-counted pointer to a `Method`
pub type MethodRc = Arc<Method>;
/// A vector that holds the methods a type owns
pub type MethodList = Arc<boxcar::Vec<MethodRc>>;

/// Weak link to a `Method`, used by properties and events to name their accessors
#[derive(Clone, Debug)]
pub struct MethodRef {
    weak_ref: Weak<Method>,
}

impl MethodRef {
    /// Create a new `MethodRef` from a strong reference
    pub fn new(strong_ref: &MethodRc) -> Self {
        Self {
            weak_ref: Arc::downgrade(strong_ref),
        }
    }

    /// Get a strong reference to the method, returning None if it has been dropped
    #[must_use]
    pub fn upgrade(&self) -> Option<MethodRc> {
        self.weak_ref.upgrade()
    }

    /// True if this reference points at exactly `method`
    #[must_use]
    pub fn is(&self, method: &MethodRc) -> bool {
        std::ptr::eq(self.weak_ref.as_ptr(), Arc::as_ptr(method))
    }
}

/// A method definition (`MethodDef` row) with resolved signature and owned data
pub struct Method {
    /// Token
    pub token: Token,
    /// The name of this method
    pub name: String,
    /// The decoded signature
    pub signature: SignatureMethod,
    /// The type that declares this method
    declaring_type: OnceLock<CilTypeRef>,
    /// The `Param` rows of this method (sequence 0 is the return value, if present)
    pub params: ParamList,
    /// Custom attributes applied to this method
    pub custom_attributes: CustomAttributeList,
}

impl Method {
    /// Create a method without parameters rows or attributes
    pub fn new(token: Token, name: &str, signature: SignatureMethod) -> Self {
        Method {
            token,
            name: name.to_string(),
            signature,
            declaring_type: OnceLock::new(),
            params: Arc::new(boxcar::Vec::new()),
            custom_attributes: Arc::new(boxcar::Vec::new()),
        }
    }

    /// Record the declaring type. Returns false if one was already set.
    pub fn set_declaring_type(&self, declaring_type: &CilTypeRc) -> bool {
        self.declaring_type
            .set(CilTypeRef::new(declaring_type))
            .is_ok()
    }

    /// The declaring type, if set and still alive
    pub fn declaring_type(&self) -> Option<CilTypeRc> {
        self.declaring_type.get().and_then(CilTypeRef::upgrade)
    }
}

impl std::fmt::Debug for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Method")
            .field("token", &self.token)
            .field("name", &self.name)
            .field("signature", &self.signature)
            .finish_non_exhaustive()
    }
}

/// A method as it appears in an operand or signature: either a definition of the
/// current module or a `MemberRef` that may or may not have been resolved.
#[derive(Clone, Debug)]
pub enum MethodReference {
    /// A `MethodDef` row
    Definition(MethodRc),
    /// A `MemberRef` row with a method signature
    Member(MemberRefRc),
}

impl MethodReference {
    /// The referenced method's name
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            MethodReference::Definition(method) => &method.name,
            MethodReference::Member(member) => &member.name,
        }
    }

    /// The signature as seen at the reference site. A `MemberRef` carrying a field
    /// signature has none.
    #[must_use]
    pub fn signature(&self) -> Option<&SignatureMethod> {
        match self {
            MethodReference::Definition(method) => Some(&method.signature),
            MethodReference::Member(member) => member.method_signature(),
        }
    }

    /// The definition this reference points at, following a resolved `MemberRef`
    #[must_use]
    pub fn definition(&self) -> Option<MethodRc> {
        match self {
            MethodReference::Definition(method) => Some(method.clone()),
            MethodReference::Member(member) => member.resolved_method(),
        }
    }
}

impl From<MethodRc> for MethodReference {
    fn from(method: MethodRc) -> Self {
        MethodReference::Definition(method)
    }
}

impl From<MemberRefRc> for MethodReference {
    fn from(member: MemberRefRc) -> Self {
        MethodReference::Member(member)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        metadata::{
            members::{MemberRef, MemberRefSignature, MemberRefTarget},
            signatures::TypeSignature,
        },
        test::{create_method, create_type},
    };

    #[test]
    fn test_method_ref_identity() {
        let first = create_method("Run", SignatureMethod::default());
        let second = create_method("Run", SignatureMethod::default());
        let link = MethodRef::new(&first);

        assert!(link.is(&first));
        assert!(!link.is(&second));
        assert!(Arc::ptr_eq(&link.upgrade().unwrap(), &first));
    }

    #[test]
    fn test_declaring_type_is_weak() {
        let ty = create_type("App", "Widget");
        let method = create_method("Run", SignatureMethod::default());
        assert!(method.set_declaring_type(&ty));
        assert!(method.declaring_type().is_some());

        drop(ty);
        assert!(method.declaring_type().is_none());
    }

    #[test]
    fn test_reference_to_member_ref() {
        let definition = create_method(
            "Run",
            SignatureMethod::instance(TypeSignature::Void, vec![]),
        );
        let member = Arc::new(MemberRef::new(
            Token::new(0x0A00_0001),
            "Run",
            MemberRefSignature::Method(SignatureMethod::instance(TypeSignature::Void, vec![])),
        ));
        let reference = MethodReference::from(member.clone());

        assert_eq!(reference.name(), "Run");
        assert!(reference.signature().is_some());
        assert!(reference.definition().is_none());

        member.resolve_to(MemberRefTarget::Method(definition.clone()));
        assert!(Arc::ptr_eq(&reference.definition().unwrap(), &definition));
    }
}
