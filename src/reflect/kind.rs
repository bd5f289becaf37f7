use std::fmt;
use std::str::FromStr;

use crate::reflect::{ReflectError, Result};

/// Runtime shape tag of a value or type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Kind {
	/// Absent value; the kind of the invalid handle.
	#[default]
	Invalid,
	/// Boolean.
	Bool,
	/// Pointer-sized signed integer.
	Int,
	/// 8-bit signed integer.
	Int8,
	/// 16-bit signed integer.
	Int16,
	/// 32-bit signed integer.
	Int32,
	/// 64-bit signed integer.
	Int64,
	/// Pointer-sized unsigned integer.
	Uint,
	/// 8-bit unsigned integer.
	Uint8,
	/// 16-bit unsigned integer.
	Uint16,
	/// 32-bit unsigned integer.
	Uint32,
	/// 64-bit unsigned integer.
	Uint64,
	/// Unsigned integer wide enough to hold an address.
	Uintptr,
	/// 32-bit float.
	Float32,
	/// 64-bit float.
	Float64,
	/// Complex number with 32-bit parts.
	Complex64,
	/// Complex number with 64-bit parts.
	Complex128,
	/// Fixed-length array.
	Array,
	/// Channel.
	Chan,
	/// Callable.
	Func,
	/// Abstraction holding another concrete value.
	Interface,
	/// Key/value map.
	Map,
	/// Pointer to another value.
	Ptr,
	/// Growable sequence.
	Slice,
	/// UTF-8 string.
	String,
	/// Struct.
	Struct,
	/// Untyped address.
	UnsafePointer,
}

/// Coarse grouping of kinds used for extraction dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
	/// Absent value.
	Invalid,
	/// Boolean.
	Bool,
	/// Signed integer of any width.
	Int,
	/// Unsigned integer of any width, including `uintptr`.
	Uint,
	/// Floating point of any width.
	Float,
	/// Complex number of any width.
	Complex,
	/// String.
	String,
	/// Pointer.
	Ptr,
	/// Interface.
	Interface,
	/// Aggregate, container, callable, channel, or unsafe kinds.
	Other,
}

impl Kind {
	/// Every kind in declaration order.
	pub const ALL: [Kind; 27] = [
		Kind::Invalid,
		Kind::Bool,
		Kind::Int,
		Kind::Int8,
		Kind::Int16,
		Kind::Int32,
		Kind::Int64,
		Kind::Uint,
		Kind::Uint8,
		Kind::Uint16,
		Kind::Uint32,
		Kind::Uint64,
		Kind::Uintptr,
		Kind::Float32,
		Kind::Float64,
		Kind::Complex64,
		Kind::Complex128,
		Kind::Array,
		Kind::Chan,
		Kind::Func,
		Kind::Interface,
		Kind::Map,
		Kind::Ptr,
		Kind::Slice,
		Kind::String,
		Kind::Struct,
		Kind::UnsafePointer,
	];

	/// Return the canonical lowercase name.
	pub fn name(self) -> &'static str {
		match self {
			Kind::Invalid => "invalid",
			Kind::Bool => "bool",
			Kind::Int => "int",
			Kind::Int8 => "int8",
			Kind::Int16 => "int16",
			Kind::Int32 => "int32",
			Kind::Int64 => "int64",
			Kind::Uint => "uint",
			Kind::Uint8 => "uint8",
			Kind::Uint16 => "uint16",
			Kind::Uint32 => "uint32",
			Kind::Uint64 => "uint64",
			Kind::Uintptr => "uintptr",
			Kind::Float32 => "float32",
			Kind::Float64 => "float64",
			Kind::Complex64 => "complex64",
			Kind::Complex128 => "complex128",
			Kind::Array => "array",
			Kind::Chan => "chan",
			Kind::Func => "func",
			Kind::Interface => "interface",
			Kind::Map => "map",
			Kind::Ptr => "ptr",
			Kind::Slice => "slice",
			Kind::String => "string",
			Kind::Struct => "struct",
			Kind::UnsafePointer => "unsafe.Pointer",
		}
	}

	/// Return the dispatch family of this kind.
	pub fn family(self) -> Family {
		match self {
			Kind::Invalid => Family::Invalid,
			Kind::Bool => Family::Bool,
			Kind::Int | Kind::Int8 | Kind::Int16 | Kind::Int32 | Kind::Int64 => Family::Int,
			Kind::Uint | Kind::Uint8 | Kind::Uint16 | Kind::Uint32 | Kind::Uint64 | Kind::Uintptr => Family::Uint,
			Kind::Float32 | Kind::Float64 => Family::Float,
			Kind::Complex64 | Kind::Complex128 => Family::Complex,
			Kind::String => Family::String,
			Kind::Ptr => Family::Ptr,
			Kind::Interface => Family::Interface,
			Kind::Array | Kind::Chan | Kind::Func | Kind::Map | Kind::Slice | Kind::Struct | Kind::UnsafePointer => Family::Other,
		}
	}

	/// Return whether values of this kind carry a directly decodable scalar.
	pub fn is_scalar(self) -> bool {
		matches!(
			self.family(),
			Family::Bool | Family::Int | Family::Uint | Family::Float | Family::Complex | Family::String
		)
	}

	/// Return whether types of this kind are described by an element type.
	pub fn has_elem(self) -> bool {
		matches!(self, Kind::Ptr | Kind::Slice | Kind::Array | Kind::Chan)
	}

	/// Bit width of integer kinds.
	pub(crate) fn int_bits(self) -> Option<u32> {
		match self {
			Kind::Int8 | Kind::Uint8 => Some(8),
			Kind::Int16 | Kind::Uint16 => Some(16),
			Kind::Int32 | Kind::Uint32 => Some(32),
			Kind::Int64 | Kind::Uint64 => Some(64),
			Kind::Int | Kind::Uint | Kind::Uintptr => Some(usize::BITS),
			_ => None,
		}
	}
}

impl Family {
	/// Return the family label used in rendered output.
	pub fn name(self) -> &'static str {
		match self {
			Family::Invalid => "invalid",
			Family::Bool => "bool",
			Family::Int => "int",
			Family::Uint => "uint",
			Family::Float => "float",
			Family::Complex => "complex",
			Family::String => "string",
			Family::Ptr => "ptr",
			Family::Interface => "interface",
			Family::Other => "other",
		}
	}
}

impl fmt::Display for Kind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl fmt::Display for Family {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for Kind {
	type Err = ReflectError;

	fn from_str(input: &str) -> Result<Self> {
		Kind::ALL
			.into_iter()
			.find(|kind| kind.name() == input)
			.ok_or_else(|| ReflectError::UnknownKind { name: input.to_owned() })
	}
}
