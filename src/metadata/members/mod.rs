//! Member entities of a type: methods, fields, properties, events, parameters,
//! member references and decompiler variables.
//!
//! These are owned, resolved views similar to the rows of the respective metadata
//! tables. A [`CilType`](crate::metadata::typesystem::CilType) owns its members; members
//! point back to their declaring type and accessor methods through weak references.

mod event;
mod field;
mod memberref;
mod method;
mod param;
mod property;
mod variable;

pub use event::{Event, EventList, EventRc};
pub use field::{Field, FieldList, FieldRc, FieldReference};
pub use memberref::{MemberRef, MemberRefRc, MemberRefSignature, MemberRefTarget};
pub use method::{Method, MethodList, MethodRc, MethodRef, MethodReference};
pub use param::{Param, ParamList, ParamRc};
pub use property::{Property, PropertyList, PropertyRc};
pub use variable::{SourceVariable, VariableKind};
