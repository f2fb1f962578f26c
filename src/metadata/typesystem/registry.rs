//! Central type registry for rendering sessions.
//!
//! [`TypeRegistry`] owns the types of a loaded metadata graph and indexes them by token
//! and by full name. It doubles as a [`MetadataResolver`]: a `TypeRef` without a recorded
//! definition link is bound by full name to a registered `TypeDef`.
//!
//! # Thread Safety
//!
//! - Lock-free primary storage (`SkipMap`)
//! - Concurrent secondary index (`DashMap`)
//! - No blocking operations during lookup, any number of render threads may share it

use crossbeam_skiplist::SkipMap;
use dashmap::DashMap;

use crate::metadata::{
    token::Token,
    typesystem::{CilTypeRc, MetadataResolver},
};

/// Token- and name-indexed storage for all types of a metadata graph
#[derive(Default)]
pub struct TypeRegistry {
    /// Primary type storage indexed by metadata tokens
    types: SkipMap<Token, CilTypeRc>,
    /// Secondary index: types indexed by full name (namespace.name)
    types_by_fullname: DashMap<String, Vec<Token>>,
}

impl TypeRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a type. A type that is already registered under the same token is replaced.
    pub fn insert(&self, new_type: &CilTypeRc) {
        let token = new_type.token;
        {
            let mut tokens = self.types_by_fullname.entry(new_type.fullname()).or_default();
            if !tokens.contains(&token) {
                tokens.push(token);
            }
        }
        self.types.insert(token, new_type.clone());
    }

    /// Look up a type by its token
    pub fn get(&self, token: &Token) -> Option<CilTypeRc> {
        self.types.get(token).map(|entry| entry.value().clone())
    }

    /// Look up a type by full name. Definitions are preferred over references.
    pub fn get_by_fullname(&self, fullname: &str) -> Option<CilTypeRc> {
        let tokens = self.types_by_fullname.get(fullname)?;
        let candidates: Vec<CilTypeRc> = tokens.iter().filter_map(|t| self.get(t)).collect();

        candidates
            .iter()
            .find(|ty| ty.is_definition())
            .or_else(|| candidates.first())
            .cloned()
    }

    /// Number of registered types
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// True if no type is registered
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl MetadataResolver for TypeRegistry {
    fn resolve_type(&self, ty: &CilTypeRc) -> Option<CilTypeRc> {
        if ty.is_definition() {
            return Some(ty.clone());
        }
        if let Some(definition) = ty.definition() {
            return Some(definition);
        }

        let resolved = self
            .get_by_fullname(&ty.fullname())
            .filter(|candidate| candidate.is_definition());
        if resolved.is_none() {
            log::trace!("unable to resolve type reference {}", ty.fullname());
        }
        resolved
    }
}
