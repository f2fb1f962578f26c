use crate::metadata::typesystem::CilTypeRef;

/// Represents a parsed type in various signatures
#[derive(Debug, Clone, PartialEq, Default)]
pub enum TypeSignature {
    #[default]
    /// Not defined
    Unknown,
    /// void
    Void,
    /// bool
    Boolean,
    /// char
    Char,
    /// signed 8bit integer
    I1,
    /// unsigned 8bit integer
    U1,
    /// signed 16bit integer
    I2,
    /// unsigned 16bit integer
    U2,
    /// signed 32bit integer
    I4,
    /// unsigned 32bit integer
    U4,
    /// signed 64bit integer
    I8,
    /// unsigned 64bit integer
    U8,
    /// 32bit floating-point
    R4,
    /// 64bit floating-point
    R8,
    /// System.String
    String,
    /// signed integer, sized to executing platform
    I,
    /// unsigned integer, sized to executing platform
    U,
    /// System.Object
    Object,
    /// Type is referenced during runtime
    TypedByRef,
    /// A pointer to a type
    Ptr(Box<TypeSignature>),
    /// Type by reference
    ByRef(Box<TypeSignature>),
    /// Single dimension array
    SzArray(Box<TypeSignature>),
    /// Multi dimensional array with its rank
    Array(Box<TypeSignature>, u32),
    /// CIL value-type
    ValueType(CilTypeRef),
    /// CIL Class
    Class(CilTypeRef),
    /// Generic type parameter, by position
    GenericParamType(u32),
    /// Generic method parameter, by position
    GenericParamMethod(u32),
    /// Generic type and its arguments
    GenericInst(SignatureGenericInst),
    /// A pinned type
    Pinned(Box<TypeSignature>),
}

impl TypeSignature {
    /// Returns the instantiation if this signature is a `GENERICINST`
    #[must_use]
    pub fn as_generic_inst(&self) -> Option<&SignatureGenericInst> {
        match self {
            TypeSignature::GenericInst(inst) => Some(inst),
            _ => None,
        }
    }
}

/// A generic instantiation, e.g. ``ValueTuple`2<int, string>``
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SignatureGenericInst {
    /// The generic type being instantiated (`VALUETYPE` or `CLASS`)
    pub base: Box<TypeSignature>,
    /// The generic arguments, in declaration order
    pub args: Vec<TypeSignature>,
}

impl SignatureGenericInst {
    /// Create a new instantiation of `base` with `args`
    #[must_use]
    pub fn new(base: TypeSignature, args: Vec<TypeSignature>) -> Self {
        SignatureGenericInst {
            base: Box::new(base),
            args,
        }
    }
}

/// Parameter with optional by-ref marker
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SignatureParameter {
    /// Parameter is passed by reference
    pub by_ref: bool,
    /// The type of the parameter
    pub base: TypeSignature,
}

impl From<TypeSignature> for SignatureParameter {
    fn from(base: TypeSignature) -> Self {
        SignatureParameter {
            by_ref: false,
            base,
        }
    }
}

/// Represents a method signature (II.23.2.1)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SignatureMethod {
    /// Used to encode the keyword instance in the calling convention, see §II.15.3
    pub has_this: bool,
    /// Used to encode the keyword vararg in the calling convention, see §II.15.3
    pub vararg: bool,
    /// Number of generic parameters of the method
    pub param_count_generic: u32,
    /// The return type of this `Method`
    pub return_type: SignatureParameter,
    /// The parameters of this `Method`
    pub params: Vec<SignatureParameter>,
}

impl SignatureMethod {
    /// Convenience constructor for a non-generic instance method
    #[must_use]
    pub fn instance(return_type: TypeSignature, params: Vec<TypeSignature>) -> Self {
        SignatureMethod {
            has_this: true,
            return_type: return_type.into(),
            params: params.into_iter().map(SignatureParameter::from).collect(),
            ..SignatureMethod::default()
        }
    }

    /// Convenience constructor for a non-generic static method
    #[must_use]
    pub fn static_method(return_type: TypeSignature, params: Vec<TypeSignature>) -> Self {
        SignatureMethod {
            has_this: false,
            ..SignatureMethod::instance(return_type, params)
        }
    }
}

/// Field signature (II.23.2.4)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SignatureField {
    /// The signature of this type
    pub base: TypeSignature,
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::metadata::{
        token::Token,
        typesystem::{CilFlavor, CilType},
    };

    #[test]
    fn test_signature_equality_ignores_type_rows() {
        let def = Arc::new(CilType::new(
            Token::new(0x0200_0001),
            CilFlavor::Class,
            "App",
            "Widget",
            None,
        ));
        let reference = Arc::new(CilType::new(
            Token::new(0x0100_0001),
            CilFlavor::Class,
            "App",
            "Widget",
            None,
        ));

        let a = SignatureMethod::instance(
            TypeSignature::Void,
            vec![TypeSignature::Class(CilTypeRef::new(&def))],
        );
        let b = SignatureMethod::instance(
            TypeSignature::Void,
            vec![TypeSignature::Class(CilTypeRef::new(&reference))],
        );
        assert_eq!(a, b);
    }

    #[test]
    fn test_signature_equality_checks_shape() {
        let a = SignatureMethod::instance(TypeSignature::Void, vec![TypeSignature::I4]);
        let b = SignatureMethod::instance(TypeSignature::Void, vec![TypeSignature::I8]);
        let c = SignatureMethod::static_method(TypeSignature::Void, vec![TypeSignature::I4]);
        let d = SignatureMethod {
            param_count_generic: 1,
            ..a.clone()
        };

        assert_ne!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
    }

    #[test]
    fn test_as_generic_inst() {
        let inst = TypeSignature::GenericInst(SignatureGenericInst::new(
            TypeSignature::Object,
            vec![TypeSignature::I4],
        ));
        assert_eq!(inst.as_generic_inst().map(|g| g.args.len()), Some(1));
        assert!(TypeSignature::I4.as_generic_inst().is_none());
    }
}
