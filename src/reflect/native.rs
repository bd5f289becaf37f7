use std::sync::Arc;

use crate::reflect::value::Data;
use crate::reflect::{Complex, Kind, Type, Value};

/// Wrap a native value into a reflective handle.
pub trait Reflect {
	/// Build the handle describing `self`.
	fn reflect(&self) -> Value;
}

/// Native types with a statically known type descriptor.
pub trait StaticType {
	/// Descriptor shared by every value of this type.
	fn static_type() -> Type;
}

macro_rules! reflect_scalar {
	($($native:ty => $kind:ident, $data:ident($wide:ty);)*) => {
		$(
			impl StaticType for $native {
				fn static_type() -> Type {
					Type::primitive(Kind::$kind)
				}
			}

			impl Reflect for $native {
				fn reflect(&self) -> Value {
					Value::from_parts(Self::static_type(), Data::$data(<$wide>::from(*self)))
				}
			}
		)*
	};
}

reflect_scalar! {
	bool => Bool, Bool(bool);
	i8 => Int8, Int(i64);
	i16 => Int16, Int(i64);
	i32 => Int32, Int(i64);
	i64 => Int64, Int(i64);
	u8 => Uint8, Uint(u64);
	u16 => Uint16, Uint(u64);
	u32 => Uint32, Uint(u64);
	u64 => Uint64, Uint(u64);
	f32 => Float32, Float(f64);
	f64 => Float64, Float(f64);
}

impl StaticType for isize {
	fn static_type() -> Type {
		Type::primitive(Kind::Int)
	}
}

impl Reflect for isize {
	fn reflect(&self) -> Value {
		Value::from_parts(Self::static_type(), Data::Int(*self as i64))
	}
}

impl StaticType for usize {
	fn static_type() -> Type {
		Type::primitive(Kind::Uint)
	}
}

impl Reflect for usize {
	fn reflect(&self) -> Value {
		Value::from_parts(Self::static_type(), Data::Uint(*self as u64))
	}
}

// char is a rune: a 32-bit signed code point.
impl StaticType for char {
	fn static_type() -> Type {
		Type::primitive(Kind::Int32)
	}
}

impl Reflect for char {
	fn reflect(&self) -> Value {
		Value::from_parts(Self::static_type(), Data::Int(i64::from(u32::from(*self))))
	}
}

impl StaticType for Complex {
	fn static_type() -> Type {
		Type::primitive(Kind::Complex128)
	}
}

impl Reflect for Complex {
	fn reflect(&self) -> Value {
		Value::from_parts(Self::static_type(), Data::Complex(*self))
	}
}

impl StaticType for String {
	fn static_type() -> Type {
		Type::primitive(Kind::String)
	}
}

impl Reflect for String {
	fn reflect(&self) -> Value {
		self.as_str().reflect()
	}
}

impl Reflect for str {
	fn reflect(&self) -> Value {
		Value::from_parts(String::static_type(), Data::String(Arc::from(self)))
	}
}

impl<T: StaticType + ?Sized> StaticType for Box<T> {
	fn static_type() -> Type {
		Type::ptr_to(&T::static_type())
	}
}

/// A box is one level of pointer indirection; a box around the invalid handle is invalid.
impl<T: Reflect + ?Sized> Reflect for Box<T> {
	fn reflect(&self) -> Value {
		Value::ptr_to(T::reflect(self)).unwrap_or_default()
	}
}

impl<T: StaticType> StaticType for Option<Box<T>> {
	fn static_type() -> Type {
		Type::ptr_to(&T::static_type())
	}
}

impl<T: Reflect + StaticType> Reflect for Option<Box<T>> {
	fn reflect(&self) -> Value {
		match self {
			Some(inner) => inner.reflect(),
			None => Value::nil_ptr(&T::static_type()),
		}
	}
}

impl Reflect for Value {
	fn reflect(&self) -> Value {
		self.clone()
	}
}
