//! .NET type system view used by the renderer.
//!
//! This module provides the slice of the .NET type system the display helpers need:
//! a combined type entity ([`CilType`]) for `TypeDef` and `TypeRef` rows, weak links
//! between types ([`CilTypeRef`]), a concurrent [`TypeRegistry`] and the
//! [`MetadataResolver`] capability through which references, base types and members
//! are resolved.
//!
//! The graph is built by whoever loaded the metadata. Types own their members, members
//! and derived types only point back weakly, so a graph with cycles (a method returning
//! its own declaring type, a property whose getter lives on the same type) is released
//! as soon as the owning registry is dropped.
//!
//! # Examples
//!
//! ```rust
//! use std::sync::Arc;
//! use dotscope_display::metadata::{
//!     token::Token,
//!     typesystem::{CilFlavor, CilType, TypeRegistry},
//! };
//!
//! let registry = TypeRegistry::new();
//! let object = Arc::new(CilType::new(
//!     Token::new(0x0200_0001),
//!     CilFlavor::Class,
//!     "System",
//!     "Object",
//!     None,
//! ));
//! registry.insert(&object);
//!
//! assert_eq!(object.fullname(), "System.Object");
//! assert!(registry.get_by_fullname("System.Object").is_some());
//! ```

mod base;
mod registry;
mod resolver;

use std::sync::{Arc, OnceLock};

pub use base::{CilFlavor, CilTypeRef};
pub use registry::TypeRegistry;
pub use resolver::{GraphResolver, MetadataResolver};

use crate::metadata::{
    customattributes::CustomAttributeList,
    members::{EventList, FieldList, MethodList, PropertyList},
    token::Token,
};

/// Reference to a `CilType`
pub type CilTypeRc = Arc<CilType>;

/// Names of the assemblies that may define the core library
const CORLIB_NAMES: &[&str] = &[
    "mscorlib",
    "System.Runtime",
    "netstandard",
    "System.Private.CoreLib",
];

/// Represents a 'Type', close to `TypeDef` and `TypeRef` but as a combined item. The `Token`
/// tells which of the two it is; a `TypeRef` may carry a link to the definition it resolved to.
pub struct CilType {
    /// Token
    pub token: Token,
    /// The `TypeFlavor`
    pub flavor: CilFlavor,
    /// `TypeNamespace` (can be empty, e.g. for artificial `<module>` (globals) or nested types)
    pub namespace: String,
    /// `TypeName`, including the generic arity suffix (e.g. ``List`1``)
    pub name: String,
    /// Name of the assembly this type is defined in, `None` for the module being rendered
    pub assembly: Option<String>,
    /// This types base aka 'extends'
    base: OnceLock<CilTypeRef>,
    /// The definition a `TypeRef` resolved to
    definition: OnceLock<CilTypeRef>,
    /// All fields this type has
    pub fields: FieldList,
    /// All methods this type has
    pub methods: MethodList,
    /// All properties this type has
    pub properties: PropertyList,
    /// All events this type has
    pub events: EventList,
    /// All custom attributes this type has
    pub custom_attributes: CustomAttributeList,
}

impl CilType {
    /// Create a new instance of a `CilType` without members
    pub fn new(
        token: Token,
        flavor: CilFlavor,
        namespace: &str,
        name: &str,
        assembly: Option<&str>,
    ) -> Self {
        CilType {
            token,
            flavor,
            namespace: namespace.to_string(),
            name: name.to_string(),
            assembly: assembly.map(ToString::to_string),
            base: OnceLock::new(),
            definition: OnceLock::new(),
            fields: Arc::new(boxcar::Vec::new()),
            methods: Arc::new(boxcar::Vec::new()),
            properties: Arc::new(boxcar::Vec::new()),
            events: Arc::new(boxcar::Vec::new()),
            custom_attributes: Arc::new(boxcar::Vec::new()),
        }
    }

    /// Record the base type. Returns false if a base type was already set.
    pub fn set_base(&self, base: &CilTypeRc) -> bool {
        self.base.set(CilTypeRef::new(base)).is_ok()
    }

    /// Access the base type of this type, if it exists and is still alive
    pub fn base(&self) -> Option<CilTypeRc> {
        self.base.get().and_then(CilTypeRef::upgrade)
    }

    /// Link a `TypeRef` to the `TypeDef` it resolves to. Returns false if already linked.
    pub fn set_definition(&self, definition: &CilTypeRc) -> bool {
        self.definition.set(CilTypeRef::new(definition)).is_ok()
    }

    /// The recorded definition of a `TypeRef`, if one was linked and is still alive
    pub fn definition(&self) -> Option<CilTypeRc> {
        self.definition.get().and_then(CilTypeRef::upgrade)
    }

    /// True if this entity is a `TypeDef` row
    #[must_use]
    pub fn is_definition(&self) -> bool {
        self.token.is_type_def()
    }

    /// True if the type is defined in one of the core library assemblies
    #[must_use]
    pub fn is_corlib(&self) -> bool {
        self.assembly
            .as_deref()
            .is_some_and(|name| CORLIB_NAMES.contains(&name))
    }

    /// Returns the full name (Namespace.Name) of the entity
    #[must_use]
    pub fn fullname(&self) -> String {
        if self.namespace.is_empty() {
            self.name.clone()
        } else {
            format!("{0}.{1}", self.namespace, self.name)
        }
    }

    /// Cheap check of the full name without allocating
    #[must_use]
    pub fn is_named(&self, namespace: &str, name: &str) -> bool {
        self.namespace == namespace && self.name == name
    }
}

impl std::fmt::Debug for CilType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CilType")
            .field("token", &self.token)
            .field("flavor", &self.flavor)
            .field("fullname", &self.fullname())
            .finish_non_exhaustive()
    }
}
