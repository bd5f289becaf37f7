use std::fmt;
use std::sync::Arc;

use crate::reflect::{Complex, Family, Value};

/// Native value produced by primitive extraction.
#[derive(Debug, Clone, PartialEq)]
pub enum Native {
	/// Generic conversion result: the exported handle itself, type intact.
	Any(Value),
	/// Boolean.
	Bool(bool),
	/// Any signed integer width.
	I64(i64),
	/// Any unsigned integer width, including `uintptr`.
	U64(u64),
	/// Any float width.
	F64(f64),
	/// Any complex width.
	Complex(Complex),
	/// String.
	String(Arc<str>),
}

/// Limits for primitive extraction.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
	/// Maximum number of pointer/interface unwraps before giving up.
	pub max_depth: u32,
}

impl Default for ExtractOptions {
	fn default() -> Self {
		Self { max_depth: 32 }
	}
}

impl ExtractOptions {
	/// Preset that only looks through a single pointer or interface.
	pub fn shallow() -> Self {
		Self { max_depth: 1 }
	}
}

/// Convert a handle to a native value with default limits.
///
/// Returns `None` only for kinds without a decode path on a handle that
/// does not permit generic conversion, or when the unwrap depth limit is hit.
pub fn extract_primitive(value: &Value) -> Option<Native> {
	extract_primitive_with(value, &ExtractOptions::default())
}

/// Convert a handle to a native value.
///
/// Exported handles convert to [`Native::Any`] whatever their kind. Sealed
/// handles are decoded per kind, looking through pointers and interfaces.
pub fn extract_primitive_with(value: &Value, opt: &ExtractOptions) -> Option<Native> {
	extract_impl(value, opt, 0)
}

fn extract_impl(value: &Value, opt: &ExtractOptions, depth: u32) -> Option<Native> {
	if let Some(any) = value.interface() {
		return Some(Native::Any(any));
	}

	tracing::trace!(kind = %value.kind(), depth, "generic conversion unavailable, decoding by kind");

	match value.kind().family() {
		Family::Bool => value.as_bool().map(Native::Bool),
		Family::Int => value.as_int().map(Native::I64),
		Family::Uint => value.as_uint().map(Native::U64),
		Family::Float => value.as_float().map(Native::F64),
		Family::Complex => value.as_complex().map(Native::Complex),
		Family::String => value.as_str().map(|text| Native::String(Arc::from(text))),
		Family::Ptr | Family::Interface => {
			if depth >= opt.max_depth {
				tracing::debug!(max_depth = opt.max_depth, kind = %value.kind(), "unwrap depth exceeded");
				return None;
			}
			extract_impl(&value.elem(), opt, depth + 1)
		}
		Family::Invalid | Family::Other => None,
	}
}

impl fmt::Display for Native {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Native::Any(value) => write!(f, "{value}"),
			Native::Bool(v) => write!(f, "{v}"),
			Native::I64(v) => write!(f, "{v}"),
			Native::U64(v) => write!(f, "{v}"),
			Native::F64(v) => write!(f, "{v}"),
			Native::Complex(v) => write!(f, "{v}"),
			Native::String(v) => f.write_str(v),
		}
	}
}
