use thiserror::Error;

use crate::reflect::Kind;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, ReflectError>;

/// Errors produced while building type descriptors and value handles.
#[derive(Debug, Error)]
pub enum ReflectError {
	/// Constructor was given a type of the wrong kind.
	#[error("kind mismatch: expected {expected}, got {got}")]
	KindMismatch {
		/// Expected kind family or kind label.
		expected: &'static str,
		/// Kind of the supplied type.
		got: Kind,
	},
	/// Integer does not fit the width of the target kind.
	#[error("value {value} out of range for {kind}")]
	OutOfRange {
		/// Target kind.
		kind: Kind,
		/// Rendered source value.
		value: String,
	},
	/// Pointer target handle was invalid.
	#[error("cannot take pointer to invalid value")]
	InvalidPointee,
	/// Kind cannot be used to build a bare or named type.
	#[error("kind {kind} cannot be used without an element type")]
	KindNeedsElem {
		/// Offending kind.
		kind: Kind,
	},
	/// Kind name was not recognized.
	#[error("unknown kind: {name}")]
	UnknownKind {
		/// User-provided kind name.
		name: String,
	},
	/// Type expression syntax is invalid.
	#[error("invalid type expression: {expr}")]
	InvalidTypeExpr {
		/// Original expression text.
		expr: String,
	},
	/// Literal could not be parsed for the requested kind.
	#[error("invalid {kind} literal: {literal:?}")]
	InvalidLiteral {
		/// Target kind.
		kind: Kind,
		/// Original literal text.
		literal: String,
	},
}
