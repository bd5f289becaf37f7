use std::fmt;
use std::sync::Arc;

use crate::reflect::{Kind, ReflectError, Result};

/// Shared, immutable runtime type descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Type(Arc<TypeInner>);

#[derive(Debug, PartialEq, Eq, Hash)]
struct TypeInner {
	kind: Kind,
	name: Option<Box<str>>,
	elem: Option<Type>,
	len: Option<usize>,
}

impl Type {
	/// Build the unnamed type of a scalar kind or `unsafe.Pointer`.
	pub fn basic(kind: Kind) -> Result<Self> {
		if !kind.is_scalar() && kind != Kind::UnsafePointer {
			return Err(ReflectError::KindMismatch {
				expected: "scalar or unsafe.Pointer",
				got: kind,
			});
		}
		Ok(Self::primitive(kind))
	}

	/// Build a named type of any kind that does not need an element type.
	pub fn named(name: &str, kind: Kind) -> Result<Self> {
		if kind == Kind::Invalid || kind.has_elem() {
			return Err(ReflectError::KindNeedsElem { kind });
		}
		Ok(Self::new(kind, Some(name.into()), None, None))
	}

	/// Empty interface type.
	pub fn any() -> Self {
		Self::new(Kind::Interface, None, None, None)
	}

	/// Pointer to `elem`.
	pub fn ptr_to(elem: &Type) -> Self {
		Self::new(Kind::Ptr, None, Some(elem.clone()), None)
	}

	/// Slice of `elem`.
	pub fn slice_of(elem: &Type) -> Self {
		Self::new(Kind::Slice, None, Some(elem.clone()), None)
	}

	/// Fixed-length array of `len` elements of `elem`.
	pub fn array_of(elem: &Type, len: usize) -> Self {
		Self::new(Kind::Array, None, Some(elem.clone()), Some(len))
	}

	/// Channel carrying `elem`.
	pub fn chan_of(elem: &Type) -> Self {
		Self::new(Kind::Chan, None, Some(elem.clone()), None)
	}

	/// Aggregate type without element information; the caller guarantees `kind` needs no element.
	pub(crate) fn composite(kind: Kind, name: Option<&str>) -> Self {
		Self::new(kind, name.map(Box::from), None, None)
	}

	pub(crate) fn primitive(kind: Kind) -> Self {
		Self::new(kind, None, None, None)
	}

	fn new(kind: Kind, name: Option<Box<str>>, elem: Option<Type>, len: Option<usize>) -> Self {
		Self(Arc::new(TypeInner { kind, name, elem, len }))
	}

	/// Shape tag of this type.
	pub fn kind(&self) -> Kind {
		self.0.kind
	}

	/// Declared name, if the type is named.
	pub fn name(&self) -> Option<&str> {
		self.0.name.as_deref()
	}

	/// Element type of pointer, slice, array, and chan types.
	pub fn elem(&self) -> Option<&Type> {
		self.0.elem.as_ref()
	}

	/// Length of array types.
	pub fn array_len(&self) -> Option<usize> {
		self.0.len
	}
}

impl Drop for TypeInner {
	fn drop(&mut self) {
		let mut next = self.elem.take();
		while let Some(Type(elem)) = next {
			next = match Arc::try_unwrap(elem) {
				Ok(mut inner) => inner.elem.take(),
				Err(_) => None,
			};
		}
	}
}

impl fmt::Display for Type {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if let Some(name) = self.name() {
			return f.write_str(name);
		}

		match (self.kind(), self.elem()) {
			(Kind::Ptr, Some(elem)) => write!(f, "*{elem}"),
			(Kind::Slice, Some(elem)) => write!(f, "[]{elem}"),
			(Kind::Array, Some(elem)) => write!(f, "[{}]{elem}", self.array_len().unwrap_or(0)),
			(Kind::Chan, Some(elem)) => write!(f, "chan {elem}"),
			(Kind::Interface, _) => f.write_str("interface {}"),
			(Kind::Struct, _) => f.write_str("struct {}"),
			(Kind::Func, _) => f.write_str("func()"),
			(kind, _) => f.write_str(kind.name()),
		}
	}
}

#[cfg(test)]
mod tests;
