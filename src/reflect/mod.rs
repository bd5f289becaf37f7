mod error;
mod expr;
mod extract;
mod kind;
mod native;
mod origin;
mod ty;
mod value;

/// Error and result aliases.
pub use error::{ReflectError, Result};
/// Type-expression parser for building handles from text.
pub use expr::{MAX_EXPR_DEPTH, TypeExpr};
/// Primitive extraction entry points and options.
pub use extract::{ExtractOptions, Native, extract_primitive, extract_primitive_with};
/// Kind tags and their dispatch families.
pub use kind::{Family, Kind};
/// Native-to-handle bridge.
pub use native::{Reflect, StaticType};
/// Indirection resolution entry points and results.
pub use origin::{OriginType, OriginValue, TypeSource, origin_type_and_kind, origin_value_and_kind};
/// Runtime type descriptor.
pub use ty::Type;
/// Reflective value handle and its parts.
pub use value::{Access, Complex, Value};
