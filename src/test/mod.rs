//! Shared fixtures for unit tests: small metadata graphs built in memory.

use std::sync::{
    atomic::{AtomicU32, Ordering},
    Arc,
};

use crate::metadata::{
    customattributes::{CustomAttribute, CustomAttributeList},
    members::{Event, EventRc, Method, MethodRc, Param, ParamRc, Property, PropertyRc},
    signatures::{SignatureGenericInst, SignatureMethod, TypeSignature},
    token::{Token, TABLE},
    typesystem::{CilFlavor, CilType, CilTypeRc, CilTypeRef},
};

static NEXT_ROW: AtomicU32 = AtomicU32::new(1);

fn next_token(table: u8) -> Token {
    Token::from_parts(table, NEXT_ROW.fetch_add(1, Ordering::Relaxed))
}

// Helper function to create a TypeDef
pub fn create_type(namespace: &str, name: &str) -> CilTypeRc {
    create_type_with_flavor(namespace, name, CilFlavor::Class)
}

// Helper function to create a TypeDef with a specific flavor
pub fn create_type_with_flavor(namespace: &str, name: &str, flavor: CilFlavor) -> CilTypeRc {
    Arc::new(CilType::new(
        next_token(TABLE::TYPE_DEF),
        flavor,
        namespace,
        name,
        None,
    ))
}

// Helper function to create a TypeRef into `assembly`
pub fn create_type_ref(namespace: &str, name: &str, assembly: Option<&str>) -> CilTypeRc {
    Arc::new(CilType::new(
        next_token(TABLE::TYPE_REF),
        CilFlavor::Class,
        namespace,
        name,
        assembly,
    ))
}

// Helper function to create a Method without declaring type
pub fn create_method(name: &str, signature: SignatureMethod) -> MethodRc {
    Arc::new(Method::new(next_token(TABLE::METHOD_DEF), name, signature))
}

// Helper function to create a Param
pub fn create_param(sequence: u32, name: &str) -> ParamRc {
    Arc::new(Param::new(next_token(TABLE::PARAM), sequence, Some(name)))
}

/// Create a method and attach it to `ty`
pub fn add_method(ty: &CilTypeRc, name: &str, signature: SignatureMethod) -> MethodRc {
    let method = create_method(name, signature);
    method.set_declaring_type(ty);
    ty.methods.push(method.clone());
    method
}

/// Create a property without accessors and attach it to `ty`
pub fn add_property(ty: &CilTypeRc, name: &str) -> PropertyRc {
    let property = Arc::new(Property::new(next_token(TABLE::PROPERTY), name));
    ty.properties.push(property.clone());
    property
}

/// Create an event without accessors and attach it to `ty`
pub fn add_event(ty: &CilTypeRc, name: &str) -> EventRc {
    let event = Arc::new(Event::new(next_token(TABLE::EVENT), name));
    ty.events.push(event.clone());
    event
}

/// Attach an attribute known only by name
pub fn add_attribute(attributes: &CustomAttributeList, fullname: &str) {
    attributes.push(Arc::new(CustomAttribute::named(
        next_token(TABLE::CUSTOM_ATTRIBUTE),
        fullname,
    )));
}

/// The ``System.ValueTuple`1`` to ``System.ValueTuple`8`` value types.
///
/// Signatures only hold weak links, so instantiations stop being tuples once this is
/// dropped.
pub struct TupleTypes {
    types: Vec<CilTypeRc>,
}

impl TupleTypes {
    pub fn new() -> Self {
        let types = (1..=8)
            .map(|rank| {
                Arc::new(CilType::new(
                    next_token(TABLE::TYPE_REF),
                    CilFlavor::ValueType,
                    "System",
                    &format!("ValueTuple`{rank}"),
                    Some("System.Runtime"),
                ))
            })
            .collect();
        TupleTypes { types }
    }

    pub fn get(&self, rank: usize) -> &CilTypeRc {
        &self.types[rank - 1]
    }

    pub fn instantiate(&self, rank: usize, args: Vec<TypeSignature>) -> SignatureGenericInst {
        SignatureGenericInst::new(
            TypeSignature::ValueType(CilTypeRef::new(self.get(rank))),
            args,
        )
    }
}
