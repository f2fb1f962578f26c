use std::sync::Arc;

use crate::metadata::{
    token::Token,
    typesystem::{CilTypeRc, CilTypeRef},
};

/// A reference-counted pointer to a `CustomAttribute`
pub type CustomAttributeRc = Arc<CustomAttribute>;
/// A vector that holds a list of `CustomAttribute` instances for storage on parent objects
pub type CustomAttributeList = Arc<boxcar::Vec<CustomAttributeRc>>;

/// A custom attribute applied to a type, member or parameter
#[derive(Debug, Clone)]
pub struct CustomAttribute {
    /// Token of the `CustomAttribute` row
    pub token: Token,
    /// Full name of the attribute's declared type, e.g. `System.ObsoleteAttribute`
    pub type_fullname: String,
    /// The attribute type itself, when the loader linked it
    pub attribute_type: Option<CilTypeRef>,
}

impl CustomAttribute {
    /// Create an attribute instance of `attribute_type`
    #[must_use]
    pub fn new(token: Token, attribute_type: &CilTypeRc) -> Self {
        CustomAttribute {
            token,
            type_fullname: attribute_type.fullname(),
            attribute_type: Some(CilTypeRef::new(attribute_type)),
        }
    }

    /// Create an attribute known only by its type name
    #[must_use]
    pub fn named(token: Token, type_fullname: &str) -> Self {
        CustomAttribute {
            token,
            type_fullname: type_fullname.to_string(),
            attribute_type: None,
        }
    }

    /// The attribute type, if linked and still alive
    #[must_use]
    pub fn attribute_type(&self) -> Option<CilTypeRc> {
        self.attribute_type.as_ref().and_then(CilTypeRef::upgrade)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        metadata::customattributes::{has_attribute, OBSOLETE_ATTRIBUTE},
        test::create_type,
    };

    #[test]
    fn test_attribute_from_type() {
        let ty = create_type("System", "ObsoleteAttribute");
        let attribute = CustomAttribute::new(Token::new(0x0C00_0001), &ty);
        assert_eq!(attribute.type_fullname, OBSOLETE_ATTRIBUTE);
        assert!(attribute.attribute_type().is_some());

        drop(ty);
        assert!(attribute.attribute_type().is_none());
        assert_eq!(attribute.type_fullname, OBSOLETE_ATTRIBUTE);
    }

    #[test]
    fn test_has_attribute_is_exact() {
        let list: CustomAttributeList = Arc::new(boxcar::Vec::new());
        assert!(!has_attribute(&list, OBSOLETE_ATTRIBUTE));

        list.push(Arc::new(CustomAttribute::named(
            Token::new(0x0C00_0001),
            "App.MyObsoleteAttribute",
        )));
        assert!(!has_attribute(&list, OBSOLETE_ATTRIBUTE));

        list.push(Arc::new(CustomAttribute::named(
            Token::new(0x0C00_0002),
            OBSOLETE_ATTRIBUTE,
        )));
        assert!(has_attribute(&list, OBSOLETE_ATTRIBUTE));
    }
}
