//! Recognition of `System.ValueTuple` and `System.Nullable` instantiations.
//!
//! C# renders ``ValueTuple`2<int, string>`` as `(int, string)`. Tuples with more than
//! seven elements are encoded by nesting: an ``ValueTuple`8`` keeps seven elements and
//! stores the remaining ones as another tuple in its eighth slot (`TRest`).
//! `(a, b, c, d, e, f, g, h, i)` therefore arrives as
//! ``ValueTuple`8<a, b, c, d, e, f, g, ValueTuple`2<h, i>>`` and has a rank of 9.

use crate::{
    metadata::signatures::{SignatureGenericInst, TypeSignature},
    Error, Result,
};

/// Upper bound on `TRest` nesting levels walked before giving up
pub const MAX_TUPLE_NESTING: usize = 1000;

/// Arity of the `ValueTuple` that carries a `TRest` slot
const TUPLE_REST_ARITY: usize = 8;

/// The arity `N` of a single ``System.ValueTuple`N`` instantiation, ignoring nesting.
///
/// Succeeds only for a value type named ``System.ValueTuple`1`` to ``System.ValueTuple`8``
/// that is instantiated with exactly `N` arguments.
#[must_use]
pub fn value_tuple_simple_rank(inst: &SignatureGenericInst) -> Option<usize> {
    let TypeSignature::ValueType(generic_type) = inst.base.as_ref() else {
        return None;
    };
    let generic_type = generic_type.upgrade()?;
    if generic_type.namespace != "System" {
        return None;
    }

    let rank = match generic_type.name.strip_prefix("ValueTuple`")? {
        "1" => 1,
        "2" => 2,
        "3" => 3,
        "4" => 4,
        "5" => 5,
        "6" => 6,
        "7" => 7,
        "8" => 8,
        _ => return None,
    };

    if inst.args.len() != rank {
        return None;
    }
    Some(rank)
}

/// Total element count of a possibly nested `System.ValueTuple` instantiation.
///
/// # Errors
///
/// [`Error::NotATuple`] if any level is not a well-formed tuple or a `TRest` slot does not
/// hold a generic instantiation, [`Error::RecursionLimit`] if more than
/// [`MAX_TUPLE_NESTING`] levels are nested.
pub fn tuple_rank_checked(inst: &SignatureGenericInst) -> Result<usize> {
    let mut rank = 0;
    let mut current = inst;

    for _ in 0..MAX_TUPLE_NESTING {
        let simple_rank = value_tuple_simple_rank(current).ok_or(Error::NotATuple)?;
        if simple_rank < TUPLE_REST_ARITY {
            return Ok(rank + simple_rank);
        }

        rank += simple_rank - 1;
        current = current.args[simple_rank - 1]
            .as_generic_inst()
            .ok_or(Error::NotATuple)?;
    }

    Err(Error::RecursionLimit(MAX_TUPLE_NESTING))
}

/// Total element count of a possibly nested `System.ValueTuple` instantiation, or `None`
/// if the instantiation is not a tuple.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use dotscope_display::{
///     formatting::value_tuple_rank,
///     metadata::{
///         signatures::{SignatureGenericInst, TypeSignature},
///         token::Token,
///         typesystem::{CilFlavor, CilType, CilTypeRef},
///     },
/// };
///
/// let tuple2 = Arc::new(CilType::new(
///     Token::new(0x0100_0001),
///     CilFlavor::ValueType,
///     "System",
///     "ValueTuple`2",
///     Some("System.Runtime"),
/// ));
/// let inst = SignatureGenericInst::new(
///     TypeSignature::ValueType(CilTypeRef::new(&tuple2)),
///     vec![TypeSignature::I4, TypeSignature::String],
/// );
/// assert_eq!(value_tuple_rank(&inst), Some(2));
/// ```
#[must_use]
pub fn value_tuple_rank(inst: &SignatureGenericInst) -> Option<usize> {
    match tuple_rank_checked(inst) {
        Ok(rank) => Some(rank),
        Err(Error::RecursionLimit(limit)) => {
            log::warn!("ValueTuple nesting exceeds {limit} levels, not treating it as a tuple");
            None
        }
        Err(_) => None,
    }
}

/// True if `inst` is a well-formed, possibly nested `System.ValueTuple`
#[must_use]
pub fn is_system_value_tuple(inst: &SignatureGenericInst) -> bool {
    value_tuple_rank(inst).is_some()
}

/// True if `inst` instantiates exactly ``System.Nullable`1`` with a single type argument
#[must_use]
pub fn is_system_nullable(inst: &SignatureGenericInst) -> bool {
    if inst.args.len() != 1 {
        return false;
    }
    let TypeSignature::ValueType(generic_type) = inst.base.as_ref() else {
        return false;
    };
    generic_type
        .upgrade()
        .is_some_and(|ty| ty.is_named("System", "Nullable`1"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        metadata::typesystem::{CilFlavor, CilTypeRc, CilTypeRef},
        test::{create_type_with_flavor, TupleTypes},
    };

    fn ints(count: usize) -> Vec<TypeSignature> {
        vec![TypeSignature::I4; count]
    }

    #[test]
    fn test_simple_rank() {
        let tuples = TupleTypes::new();
        for rank in 1..=8 {
            let inst = tuples.instantiate(rank, ints(rank));
            assert_eq!(value_tuple_simple_rank(&inst), Some(rank));
        }
    }

    #[test]
    fn test_simple_rank_requires_matching_argument_count() {
        let tuples = TupleTypes::new();
        let inst = tuples.instantiate(3, ints(2));
        assert_eq!(value_tuple_simple_rank(&inst), None);
        assert_eq!(value_tuple_rank(&inst), None);
    }

    #[test]
    fn test_simple_rank_requires_value_type_signature() {
        let tuples = TupleTypes::new();
        let as_class = SignatureGenericInst::new(
            TypeSignature::Class(CilTypeRef::new(tuples.get(2))),
            ints(2),
        );
        assert_eq!(value_tuple_simple_rank(&as_class), None);
    }

    #[test]
    fn test_simple_rank_rejects_other_names() {
        let keep: Vec<CilTypeRc> = vec![
            create_type_with_flavor("App", "ValueTuple`2", CilFlavor::ValueType),
            create_type_with_flavor("System", "ValueTuple`9", CilFlavor::ValueType),
            create_type_with_flavor("System", "ValueTuple`02", CilFlavor::ValueType),
            create_type_with_flavor("System", "Tuple`2", CilFlavor::ValueType),
        ];
        for ty in &keep {
            let inst = SignatureGenericInst::new(
                TypeSignature::ValueType(CilTypeRef::new(ty)),
                ints(2),
            );
            assert_eq!(value_tuple_simple_rank(&inst), None, "{}", ty.fullname());
        }
    }

    #[test]
    fn test_rank_of_flat_tuple() {
        let tuples = TupleTypes::new();
        let inst = tuples.instantiate(2, vec![TypeSignature::I4, TypeSignature::String]);
        assert_eq!(value_tuple_rank(&inst), Some(2));
        assert!(is_system_value_tuple(&inst));
    }

    #[test]
    fn test_rank_of_nested_tuple() {
        let tuples = TupleTypes::new();
        let rest = tuples.instantiate(2, ints(2));
        let mut args = ints(7);
        args.push(TypeSignature::GenericInst(rest));
        let inst = tuples.instantiate(8, args);

        assert_eq!(value_tuple_rank(&inst), Some(9));
    }

    #[test]
    fn test_rank_of_doubly_nested_tuple() {
        let tuples = TupleTypes::new();
        let innermost = tuples.instantiate(3, ints(3));

        let mut middle_args = ints(7);
        middle_args.push(TypeSignature::GenericInst(innermost));
        let middle = tuples.instantiate(8, middle_args);

        let mut outer_args = ints(7);
        outer_args.push(TypeSignature::GenericInst(middle));
        let outer = tuples.instantiate(8, outer_args);

        assert_eq!(value_tuple_rank(&outer), Some(17));
    }

    #[test]
    fn test_rest_slot_must_be_instantiation() {
        let tuples = TupleTypes::new();
        let inst = tuples.instantiate(8, ints(8));
        assert_eq!(tuple_rank_checked(&inst), Err(Error::NotATuple));
        assert!(!is_system_value_tuple(&inst));
    }

    #[test]
    fn test_rest_slot_must_be_tuple() {
        let tuples = TupleTypes::new();
        let list =
            create_type_with_flavor("System.Collections.Generic", "List`1", CilFlavor::Class);
        let rest = SignatureGenericInst::new(
            TypeSignature::Class(CilTypeRef::new(&list)),
            ints(1),
        );
        let mut args = ints(7);
        args.push(TypeSignature::GenericInst(rest));
        let inst = tuples.instantiate(8, args);

        assert_eq!(tuple_rank_checked(&inst), Err(Error::NotATuple));
    }

    #[test]
    fn test_non_tuple_instantiation() {
        let list =
            create_type_with_flavor("System.Collections.Generic", "List`1", CilFlavor::Class);
        let inst = SignatureGenericInst::new(
            TypeSignature::Class(CilTypeRef::new(&list)),
            ints(1),
        );
        assert_eq!(value_tuple_rank(&inst), None);
    }

    #[test]
    fn test_dropped_generic_type_is_not_a_tuple() {
        let inst = {
            let tuples = TupleTypes::new();
            tuples.instantiate(2, ints(2))
        };
        assert_eq!(value_tuple_rank(&inst), None);
    }

    #[test]
    fn test_nesting_limit() {
        let tuples = TupleTypes::new();
        let mut inst = tuples.instantiate(1, ints(1));
        for _ in 0..MAX_TUPLE_NESTING {
            let mut args = ints(7);
            args.push(TypeSignature::GenericInst(inst));
            inst = tuples.instantiate(8, args);
        }

        assert_eq!(
            tuple_rank_checked(&inst),
            Err(Error::RecursionLimit(MAX_TUPLE_NESTING))
        );
        assert_eq!(value_tuple_rank(&inst), None);
    }

    #[test]
    fn test_nesting_just_below_limit() {
        let tuples = TupleTypes::new();
        let mut inst = tuples.instantiate(1, ints(1));
        for _ in 0..MAX_TUPLE_NESTING - 1 {
            let mut args = ints(7);
            args.push(TypeSignature::GenericInst(inst));
            inst = tuples.instantiate(8, args);
        }

        assert_eq!(value_tuple_rank(&inst), Some(7 * (MAX_TUPLE_NESTING - 1) + 1));
    }

    #[test]
    fn test_is_system_nullable() {
        let nullable = create_type_with_flavor("System", "Nullable`1", CilFlavor::ValueType);
        let inst = SignatureGenericInst::new(
            TypeSignature::ValueType(CilTypeRef::new(&nullable)),
            vec![TypeSignature::I4],
        );
        assert!(is_system_nullable(&inst));

        let lookalike = create_type_with_flavor("Custom", "Nullable`1", CilFlavor::ValueType);
        let other = SignatureGenericInst::new(
            TypeSignature::ValueType(CilTypeRef::new(&lookalike)),
            vec![TypeSignature::I4],
        );
        assert!(!is_system_nullable(&other));

        let tuples = TupleTypes::new();
        assert!(!is_system_nullable(&tuples.instantiate(1, ints(1))));
    }

    #[test]
    fn test_nullable_requires_one_argument() {
        let nullable = create_type_with_flavor("System", "Nullable`1", CilFlavor::ValueType);
        let base = || TypeSignature::ValueType(CilTypeRef::new(&nullable));

        assert!(!is_system_nullable(&SignatureGenericInst::new(base(), vec![])));
        assert!(!is_system_nullable(&SignatureGenericInst::new(base(), ints(2))));
        assert!(is_system_nullable(&SignatureGenericInst::new(base(), ints(1))));
    }
}
