//! Classification of members for badges, tooltips and fallbacks in the renderer.
//!
//! [`MemberClassifier`] bundles the checks that need the [`MetadataResolver`] capability
//! (deprecation, extension methods, awaitable return types, default parameters,
//! overloads). The checks that only look at data already at hand are free functions.

use std::borrow::Cow;

use bitflags::bitflags;

use crate::{
    formatting::{MAX_RECURSION, UNKNOWN_VARIABLE_NAME},
    metadata::{
        customattributes::{
            has_attribute, CustomAttribute, CustomAttributeList, CUSTOM_CONSTANT_ATTRIBUTE,
            DECIMAL_CONSTANT_ATTRIBUTE, EXTENSION_ATTRIBUTE, OBSOLETE_ATTRIBUTE,
        },
        members::{
            Event, EventRc, FieldReference, MethodRc, MethodReference, Param, Property,
            PropertyRc, SourceVariable, VariableKind,
        },
        signatures::TypeSignature,
        typesystem::{CilType, CilTypeRc, MetadataResolver},
    },
};

/// Return types rendered with an "awaitable" badge. Non-generic `ValueTask` is not part
/// of the list.
const AWAITABLE_TYPES: &[&str] = &[
    "System.Threading.Tasks.Task",
    "System.Threading.Tasks.Task`1",
    "System.Threading.Tasks.ValueTask`1",
];

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    /// Badges shown next to a member
    pub struct MemberSpecialFlags: u32 {
        /// Method is an extension method
        const EXTENSION = 0x0001;
        /// Method returns, or the type is, a task-like awaitable
        const AWAITABLE = 0x0002;
    }
}

/// Flat accessor classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccessorKind {
    /// Not an accessor
    #[default]
    None,
    /// Property getter
    Getter,
    /// Property setter
    Setter,
    /// Event `add` method
    Adder,
    /// Event `remove` method
    Remover,
}

/// Which accessor slot of a property a method occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyAccessor {
    /// `get_` method
    Getter,
    /// `set_` method
    Setter,
}

/// Which accessor slot of an event a method occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventAccessor {
    /// `add_` method
    Adder,
    /// `remove_` method
    Remover,
}

/// The property or event a method is an accessor of
#[derive(Debug, Clone, Default)]
pub enum Accessor {
    /// The method is an accessor of this property
    Property(PropertyRc, PropertyAccessor),
    /// The method is an accessor of this event
    Event(EventRc, EventAccessor),
    /// The method is not an accessor
    #[default]
    None,
}

impl Accessor {
    /// The flat kind of this accessor
    #[must_use]
    pub fn kind(&self) -> AccessorKind {
        match self {
            Accessor::Property(_, PropertyAccessor::Getter) => AccessorKind::Getter,
            Accessor::Property(_, PropertyAccessor::Setter) => AccessorKind::Setter,
            Accessor::Event(_, EventAccessor::Adder) => AccessorKind::Adder,
            Accessor::Event(_, EventAccessor::Remover) => AccessorKind::Remover,
            Accessor::None => AccessorKind::None,
        }
    }

    /// True if the method is not an accessor
    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Accessor::None)
    }
}

/// Find the property or event `method` is an accessor of.
///
/// Properties of the declaring type are scanned before its events, the first match wins.
/// Matching is by identity through the `MethodSemantics` links, not by name.
#[must_use]
pub fn accessor_of(method: &MethodRc) -> Accessor {
    let Some(declaring_type) = method.declaring_type() else {
        return Accessor::None;
    };

    for (_, property) in declaring_type.properties.iter() {
        if property.fn_getter.get().is_some_and(|m| m.is(method)) {
            return Accessor::Property(property.clone(), PropertyAccessor::Getter);
        }
        if property.fn_setter.get().is_some_and(|m| m.is(method)) {
            return Accessor::Property(property.clone(), PropertyAccessor::Setter);
        }
    }

    for (_, event) in declaring_type.events.iter() {
        if event.fn_on_add.get().is_some_and(|m| m.is(method)) {
            return Accessor::Event(event.clone(), EventAccessor::Adder);
        }
        if event.fn_on_remove.get().is_some_and(|m| m.is(method)) {
            return Accessor::Event(event.clone(), EventAccessor::Remover);
        }
    }

    Accessor::None
}

/// The property name encoded in an accessor's method name (`get_Foo` gives `Foo`).
///
/// A naming heuristic for display fallbacks; [`accessor_of`] is the structural check.
#[must_use]
pub fn property_accessor_name(method: &MethodReference) -> Option<&str> {
    let name = method.name();
    name.strip_prefix("get_")
        .or_else(|| name.strip_prefix("set_"))
}

/// True if `fullname` is one of the awaitable task types
#[must_use]
pub fn is_awaitable_type_name(fullname: &str) -> bool {
    AWAITABLE_TYPES.contains(&fullname)
}

/// The name to display for a decompiler variable.
///
/// A non-blank name is used as-is. Unnamed IL locals become `V_<slot>`, unnamed arguments
/// `A_<slot>`. A variable with neither a name nor a slot is a decompiler defect: it
/// trips a debug assertion and renders as `???` in release builds.
#[must_use]
pub fn variable_display_name(variable: &SourceVariable) -> Cow<'_, str> {
    if let Some(name) = variable.name.as_deref() {
        if !name.trim().is_empty() {
            return Cow::Borrowed(name);
        }
    }

    let Some(slot) = variable.slot else {
        debug_assert!(false, "Decompiler generated variable without a name");
        return Cow::Borrowed(UNKNOWN_VARIABLE_NAME);
    };

    match variable.kind {
        VariableKind::Local => Cow::Owned(format!("V_{slot}")),
        VariableKind::Argument => Cow::Owned(format!("A_{slot}")),
    }
}

/// Something that carries custom attributes once resolved to its definition
pub trait AttributeTarget {
    /// The custom attributes of the definition, `None` if it cannot be resolved
    fn resolved_attributes<R: MetadataResolver + ?Sized>(
        &self,
        resolver: &R,
    ) -> Option<CustomAttributeList>;
}

impl AttributeTarget for MethodReference {
    fn resolved_attributes<R: MetadataResolver + ?Sized>(
        &self,
        resolver: &R,
    ) -> Option<CustomAttributeList> {
        resolver
            .resolve_method(self)
            .map(|method| method.custom_attributes.clone())
    }
}

impl AttributeTarget for FieldReference {
    fn resolved_attributes<R: MetadataResolver + ?Sized>(
        &self,
        resolver: &R,
    ) -> Option<CustomAttributeList> {
        resolver
            .resolve_field(self)
            .map(|field| field.custom_attributes.clone())
    }
}

impl AttributeTarget for Property {
    fn resolved_attributes<R: MetadataResolver + ?Sized>(
        &self,
        _resolver: &R,
    ) -> Option<CustomAttributeList> {
        Some(self.custom_attributes.clone())
    }
}

impl AttributeTarget for Event {
    fn resolved_attributes<R: MetadataResolver + ?Sized>(
        &self,
        _resolver: &R,
    ) -> Option<CustomAttributeList> {
        Some(self.custom_attributes.clone())
    }
}

impl AttributeTarget for CilTypeRc {
    fn resolved_attributes<R: MetadataResolver + ?Sized>(
        &self,
        resolver: &R,
    ) -> Option<CustomAttributeList> {
        resolver
            .resolve_type(self)
            .map(|ty| ty.custom_attributes.clone())
    }
}

/// Classification checks that need to resolve references.
///
/// All checks degrade to `false` (or empty flags) when a reference cannot be resolved.
///
/// # Examples
///
/// ```rust
/// use dotscope_display::formatting::MemberClassifier;
/// use dotscope_display::metadata::{signatures::TypeSignature, typesystem::GraphResolver};
///
/// let classifier = MemberClassifier::new(&GraphResolver);
/// assert!(!classifier.is_awaitable(&TypeSignature::Void));
/// ```
#[derive(Debug)]
pub struct MemberClassifier<'r, R: MetadataResolver + ?Sized> {
    pub(crate) resolver: &'r R,
}

impl<R: MetadataResolver + ?Sized> Clone for MemberClassifier<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: MetadataResolver + ?Sized> Copy for MemberClassifier<'_, R> {}

impl<'r, R: MetadataResolver + ?Sized> MemberClassifier<'r, R> {
    /// Create a classifier resolving through `resolver`
    pub fn new(resolver: &'r R) -> Self {
        MemberClassifier { resolver }
    }

    /// The resolver used by this classifier
    pub fn resolver(&self) -> &'r R {
        self.resolver
    }

    /// True if the member's own attributes include exactly `System.ObsoleteAttribute`.
    ///
    /// Subclasses of `ObsoleteAttribute` are not recognised. Methods, fields and types are
    /// resolved to their definitions first; an unresolvable member is not deprecated.
    pub fn is_deprecated<T: AttributeTarget + ?Sized>(&self, member: &T) -> bool {
        member
            .resolved_attributes(self.resolver)
            .is_some_and(|attributes| has_attribute(&attributes, OBSOLETE_ATTRIBUTE))
    }

    /// True if the resolved method definition carries `ExtensionAttribute`
    pub fn is_extension_method(&self, method: &MethodReference) -> bool {
        self.resolver
            .resolve_method(method)
            .is_some_and(|method| has_attribute(&method.custom_attributes, EXTENSION_ATTRIBUTE))
    }

    /// True if `return_type` resolves to `Task`, ``Task`1`` or ``ValueTask`1``
    pub fn is_awaitable(&self, return_type: &TypeSignature) -> bool {
        match self.resolver.resolve_signature(return_type) {
            Some(ty) => is_awaitable_type_name(&ty.fullname()),
            None => false,
        }
    }

    /// Badges of a method: extension method, awaitable return type
    pub fn method_flags(&self, method: &MethodReference) -> MemberSpecialFlags {
        let mut flags = MemberSpecialFlags::empty();

        if self.is_extension_method(method) {
            flags |= MemberSpecialFlags::EXTENSION;
        }
        if method
            .signature()
            .is_some_and(|signature| self.is_awaitable(&signature.return_type.base))
        {
            flags |= MemberSpecialFlags::AWAITABLE;
        }

        flags
    }

    /// Badges of a type: the type itself is awaitable. Only the name is checked.
    pub fn type_flags(&self, ty: &CilType) -> MemberSpecialFlags {
        if is_awaitable_type_name(&ty.fullname()) {
            MemberSpecialFlags::AWAITABLE
        } else {
            MemberSpecialFlags::empty()
        }
    }

    /// True if the parameter has a default value: a literal constant, or an attribute
    /// deriving from `CustomConstantAttribute` or `DecimalConstantAttribute`.
    pub fn is_default_parameter(&self, param: &Param) -> bool {
        if param.default.get().is_some() {
            return true;
        }

        param
            .custom_attributes
            .iter()
            .any(|(_, attribute)| self.is_constant_attribute(attribute))
    }

    /// True if `ty` derives directly from the core library's `System.MulticastDelegate`
    pub fn is_delegate(&self, ty: &CilType) -> bool {
        ty.base()
            .is_some_and(|base| base.is_named("System", "MulticastDelegate") && base.is_corlib())
    }

    fn is_constant_attribute(&self, attribute: &CustomAttribute) -> bool {
        if is_constant_attribute_name(&attribute.type_fullname) {
            return true;
        }

        let mut current = attribute.attribute_type();
        for _ in 0..MAX_RECURSION {
            let Some(ty) = current else {
                return false;
            };
            if is_constant_attribute_name(&ty.fullname()) {
                return true;
            }
            current = self
                .resolver
                .resolve_type(&ty)
                .and_then(|definition| definition.base());
        }

        log::warn!(
            "attribute hierarchy of {} exceeds {MAX_RECURSION} levels",
            attribute.type_fullname
        );
        false
    }
}

fn is_constant_attribute_name(fullname: &str) -> bool {
    fullname == CUSTOM_CONSTANT_ATTRIBUTE || fullname == DECIMAL_CONSTANT_ATTRIBUTE
}
