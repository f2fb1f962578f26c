//! Resolution capability used by the classification helpers.
//!
//! Loading assemblies and binding references across them is not the renderer's job.
//! Whatever loaded the metadata exposes that work through [`MetadataResolver`]; every
//! method answers with `Option` and an unresolvable reference simply yields `None`.
//!
//! The provided bodies follow the links that are already recorded in the graph
//! (`TypeRef` to definition, `MemberRef` to target, `extends` to base type), so a
//! loader that binds everything eagerly can use [`GraphResolver`] as-is.

use crate::metadata::{
    members::{FieldReference, FieldRc, MethodRc, MethodReference},
    signatures::TypeSignature,
    typesystem::{CilType, CilTypeRc},
};

/// Resolves references in a loaded metadata graph to their definitions
pub trait MetadataResolver {
    /// Resolve a type entity to its `TypeDef`. Definitions resolve to themselves.
    fn resolve_type(&self, ty: &CilTypeRc) -> Option<CilTypeRc> {
        if ty.is_definition() {
            Some(ty.clone())
        } else {
            ty.definition()
        }
    }

    /// Resolve the base type of `ty` to its definition
    fn base_type(&self, ty: &CilType) -> Option<CilTypeRc> {
        ty.base().and_then(|base| self.resolve_type(&base))
    }

    /// Resolve a method reference to its `MethodDef`
    fn resolve_method(&self, method: &MethodReference) -> Option<MethodRc> {
        method.definition()
    }

    /// Resolve a field reference to its `Field` row
    fn resolve_field(&self, field: &FieldReference) -> Option<FieldRc> {
        field.definition()
    }

    /// Resolve the type named by a signature. Generic instantiations resolve to their
    /// generic type definition, element types without a type row resolve to `None`.
    fn resolve_signature(&self, signature: &TypeSignature) -> Option<CilTypeRc> {
        match signature {
            TypeSignature::ValueType(ty) | TypeSignature::Class(ty) => {
                ty.upgrade().and_then(|ty| self.resolve_type(&ty))
            }
            TypeSignature::GenericInst(inst) => self.resolve_signature(&inst.base),
            _ => None,
        }
    }
}

/// Follows the links recorded in the metadata graph and nothing else
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphResolver;

impl MetadataResolver for GraphResolver {}
