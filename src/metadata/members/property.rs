use std::sync::{Arc, OnceLock};

use crate::metadata::{customattributes::CustomAttributeList, members::MethodRef, token::Token};

/// A reference-counted pointer to a `Property`
pub type PropertyRc = Arc<Property>;
/// A vector that holds the properties a type owns
pub type PropertyList = Arc<boxcar::Vec<PropertyRc>>;

/// A property of a type, with its accessor methods linked through `MethodSemantics`
pub struct Property {
    /// Token
    pub token: Token,
    /// The name of this property
    pub name: String,
    /// The `Method` that retrieves this property
    pub fn_getter: OnceLock<MethodRef>,
    /// The `Method` that sets this property
    pub fn_setter: OnceLock<MethodRef>,
    /// Custom attributes attached to this property
    pub custom_attributes: CustomAttributeList,
}

impl Property {
    /// Create a property without accessors
    pub fn new(token: Token, name: &str) -> Self {
        Property {
            token,
            name: name.to_string(),
            fn_getter: OnceLock::new(),
            fn_setter: OnceLock::new(),
            custom_attributes: Arc::new(boxcar::Vec::new()),
        }
    }
}

impl std::fmt::Debug for Property {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Property")
            .field("token", &self.token)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
