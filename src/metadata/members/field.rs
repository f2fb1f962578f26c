use std::sync::{Arc, OnceLock};

use crate::metadata::{
    constant::ConstantValue, customattributes::CustomAttributeList, members::MemberRefRc,
    signatures::SignatureField, token::Token,
};

/// A reference-counted pointer to a `Field`
pub type FieldRc = Arc<Field>;
/// A vector that holds the fields a type owns
pub type FieldList = Arc<boxcar::Vec<FieldRc>>;

/// The Field table defines fields for types in the `TypeDef` table, with resolved
/// signature and owned data
pub struct Field {
    /// Token
    pub token: Token,
    /// The name of this field
    pub name: String,
    /// The decoded signature
    pub signature: SignatureField,
    /// A default value from the `Constant` table
    pub default: OnceLock<ConstantValue>,
    /// Custom attributes applied to this field
    pub custom_attributes: CustomAttributeList,
}

impl Field {
    /// Create a field without default value or attributes
    pub fn new(token: Token, name: &str, signature: SignatureField) -> Self {
        Field {
            token,
            name: name.to_string(),
            signature,
            default: OnceLock::new(),
            custom_attributes: Arc::new(boxcar::Vec::new()),
        }
    }
}

impl std::fmt::Debug for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Field")
            .field("token", &self.token)
            .field("name", &self.name)
            .field("signature", &self.signature)
            .field("default", &self.default)
            .finish_non_exhaustive()
    }
}

/// A field as it appears in an operand: a definition or a `MemberRef`
#[derive(Clone, Debug)]
pub enum FieldReference {
    /// A `Field` row
    Definition(FieldRc),
    /// A `MemberRef` row with a field signature
    Member(MemberRefRc),
}

impl FieldReference {
    /// The referenced field's name
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            FieldReference::Definition(field) => &field.name,
            FieldReference::Member(member) => &member.name,
        }
    }

    /// The definition this reference points at, following a resolved `MemberRef`
    #[must_use]
    pub fn definition(&self) -> Option<FieldRc> {
        match self {
            FieldReference::Definition(field) => Some(field.clone()),
            FieldReference::Member(member) => member.resolved_field(),
        }
    }
}

impl From<FieldRc> for FieldReference {
    fn from(field: FieldRc) -> Self {
        FieldReference::Definition(field)
    }
}

impl From<MemberRefRc> for FieldReference {
    fn from(member: MemberRefRc) -> Self {
        FieldReference::Member(member)
    }
}
