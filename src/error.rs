use thiserror::Error;

/// The generic Error type for the internal, fallible building blocks of this library.
///
/// The rendering helpers exposed to callers are total: they degrade to `None`, `false` or
/// an unchanged string. The `_checked` variants underneath them report *why* a value could
/// not be produced through this enum, which is useful when diagnosing odd metadata.
///
/// # Examples
///
/// ```rust
/// use dotscope_display::{Error, formatting::tuple_rank_checked};
/// use dotscope_display::metadata::signatures::{SignatureGenericInst, TypeSignature};
///
/// let inst = SignatureGenericInst::new(TypeSignature::Object, vec![TypeSignature::I4]);
/// match tuple_rank_checked(&inst) {
///     Ok(rank) => println!("tuple of {rank}"),
///     Err(Error::NotATuple) => println!("not a tuple"),
///     Err(e) => println!("other: {e}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The generic instantiation is not a well-formed `System.ValueTuple` chain.
    ///
    /// Raised when the instantiated type is not `System.ValueTuple`N` with exactly `N`
    /// arguments, or when the rest slot of an 8-arity tuple does not hold another
    /// generic instantiation.
    #[error("Generic instantiation is not a System.ValueTuple")]
    NotATuple,

    /// Recursion limit reached.
    ///
    /// Tuple nesting, base type chains and attribute hierarchies are walked with an
    /// explicit bound. Reaching it means the metadata is cyclic or deliberately hostile.
    ///
    /// The associated value shows the limit that was reached.
    #[error("Reach the maximum recursion level allowed - {0}")]
    RecursionLimit(usize),

    /// A resource identifier that the localisation layer does not know about.
    #[error("Unknown resource identifier - {0}")]
    UnknownResource(String),
}
