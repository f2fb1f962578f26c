use std::sync::{Arc, OnceLock};

use crate::metadata::{
    constant::ConstantValue, customattributes::CustomAttributeList, token::Token,
};

/// A reference-counted pointer to a `Param`
pub type ParamRc = Arc<Param>;
/// A vector that holds the `Param` rows of a method
pub type ParamList = Arc<boxcar::Vec<ParamRc>>;

/// The `Param` table defines parameters for methods in the `MethodDef` table
pub struct Param {
    /// Token
    pub token: Token,
    /// The sequence number (0 for return value)
    pub sequence: u32,
    /// The parameter name
    pub name: Option<String>,
    /// The default value of this parameter from the `Constant` table
    pub default: OnceLock<ConstantValue>,
    /// Custom attributes applied to this parameter
    pub custom_attributes: CustomAttributeList,
}

impl Param {
    /// Create a parameter row without default value or attributes
    pub fn new(token: Token, sequence: u32, name: Option<&str>) -> Self {
        Param {
            token,
            sequence,
            name: name.map(ToString::to_string),
            default: OnceLock::new(),
            custom_attributes: Arc::new(boxcar::Vec::new()),
        }
    }
}

impl std::fmt::Debug for Param {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Param")
            .field("token", &self.token)
            .field("sequence", &self.sequence)
            .field("name", &self.name)
            .field("default", &self.default)
            .finish_non_exhaustive()
    }
}
