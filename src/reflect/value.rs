use std::fmt;
use std::sync::Arc;

use crate::reflect::{Family, Kind, ReflectError, Result, Type};

/// Whether a handle permits generic conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Access {
	/// Freely readable; generic conversion is allowed.
	#[default]
	Exported,
	/// Reached through a restricted path; only per-kind decoding is allowed.
	Sealed,
}

/// Complex number normalized to 64-bit parts.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Complex {
	/// Real part.
	pub re: f64,
	/// Imaginary part.
	pub im: f64,
}

impl Complex {
	/// Build a complex number from its parts.
	pub fn new(re: f64, im: f64) -> Self {
		Self { re, im }
	}
}

/// Immutable reflective handle around one runtime value.
///
/// The default handle is the invalid one: no type, no data, kind
/// [`Kind::Invalid`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Value {
	ty: Option<Type>,
	data: Data,
	access: Access,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub(crate) enum Data {
	#[default]
	None,
	Bool(bool),
	Int(i64),
	Uint(u64),
	Float(f64),
	Complex(Complex),
	String(Arc<str>),
	/// Pointer target or interface contents; `None` is nil.
	Indirect(Option<Arc<Value>>),
	/// Aggregate whose contents are never decoded.
	Opaque,
}

impl Value {
	/// The invalid handle.
	pub fn invalid() -> Self {
		Self::default()
	}

	/// Boolean handle of type `ty`.
	pub fn bool(ty: &Type, value: bool) -> Result<Self> {
		expect_family(ty, Family::Bool, "bool")?;
		Ok(Self::from_parts(ty.clone(), Data::Bool(value)))
	}

	/// Signed integer handle of type `ty`; `value` must fit the kind's width.
	pub fn int(ty: &Type, value: i64) -> Result<Self> {
		expect_family(ty, Family::Int, "signed integer")?;
		let bits = ty.kind().int_bits().unwrap_or(64);
		if bits < 64 {
			let max = (1_i64 << (bits - 1)) - 1;
			let min = -max - 1;
			if value < min || value > max {
				return Err(ReflectError::OutOfRange {
					kind: ty.kind(),
					value: value.to_string(),
				});
			}
		}
		Ok(Self::from_parts(ty.clone(), Data::Int(value)))
	}

	/// Unsigned integer handle of type `ty`; `value` must fit the kind's width.
	pub fn uint(ty: &Type, value: u64) -> Result<Self> {
		expect_family(ty, Family::Uint, "unsigned integer")?;
		let bits = ty.kind().int_bits().unwrap_or(64);
		if bits < 64 && value > (1_u64 << bits) - 1 {
			return Err(ReflectError::OutOfRange {
				kind: ty.kind(),
				value: value.to_string(),
			});
		}
		Ok(Self::from_parts(ty.clone(), Data::Uint(value)))
	}

	/// Float handle of type `ty`.
	///
	/// `float32` values are rounded to single precision; finite values beyond
	/// the `f32` range are rejected instead of saturating to infinity.
	pub fn float(ty: &Type, value: f64) -> Result<Self> {
		expect_family(ty, Family::Float, "float")?;
		let value = if ty.kind() == Kind::Float32 { narrow_f32(ty.kind(), value)? } else { value };
		Ok(Self::from_parts(ty.clone(), Data::Float(value)))
	}

	/// Complex handle of type `ty`. `complex64` parts are rounded to single precision and range checked like `float32`.
	pub fn complex(ty: &Type, value: Complex) -> Result<Self> {
		expect_family(ty, Family::Complex, "complex")?;
		let value = if ty.kind() == Kind::Complex64 {
			Complex::new(narrow_f32(ty.kind(), value.re)?, narrow_f32(ty.kind(), value.im)?)
		} else {
			value
		};
		Ok(Self::from_parts(ty.clone(), Data::Complex(value)))
	}

	/// String handle of type `ty`.
	pub fn string(ty: &Type, value: impl Into<Arc<str>>) -> Result<Self> {
		expect_family(ty, Family::String, "string")?;
		Ok(Self::from_parts(ty.clone(), Data::String(value.into())))
	}

	/// Pointer handle to `target`.
	pub fn ptr_to(target: Value) -> Result<Self> {
		let Some(elem) = target.ty.as_ref() else {
			return Err(ReflectError::InvalidPointee);
		};
		Ok(Self::from_parts(Type::ptr_to(elem), Data::Indirect(Some(Arc::new(target)))))
	}

	/// Nil pointer to `elem`.
	pub fn nil_ptr(elem: &Type) -> Self {
		Self::from_parts(Type::ptr_to(elem), Data::Indirect(None))
	}

	/// Interface handle of type `iface` holding `held`; `None` or an invalid handle is the nil interface.
	pub fn interface_of(iface: &Type, held: Option<Value>) -> Result<Self> {
		if iface.kind() != Kind::Interface {
			return Err(ReflectError::KindMismatch {
				expected: "interface",
				got: iface.kind(),
			});
		}
		let held = held.filter(Value::is_valid).map(Arc::new);
		Ok(Self::from_parts(iface.clone(), Data::Indirect(held)))
	}

	/// Aggregate, container, callable, channel, or unsafe handle whose contents stay opaque.
	pub fn opaque(ty: &Type) -> Result<Self> {
		expect_family(ty, Family::Other, "aggregate")?;
		Ok(Self::from_parts(ty.clone(), Data::Opaque))
	}

	pub(crate) fn from_parts(ty: Type, data: Data) -> Self {
		Self {
			ty: Some(ty),
			data,
			access: Access::Exported,
		}
	}

	/// Mark this handle as reached through a restricted path.
	pub fn sealed(self) -> Self {
		self.with_access(Access::Sealed)
	}

	/// Replace the access flag.
	pub fn with_access(mut self, access: Access) -> Self {
		self.access = access;
		self
	}

	/// Shape tag; [`Kind::Invalid`] for the invalid handle.
	pub fn kind(&self) -> Kind {
		self.ty.as_ref().map_or(Kind::Invalid, Type::kind)
	}

	/// Runtime type, absent for the invalid handle.
	pub fn ty(&self) -> Option<&Type> {
		self.ty.as_ref()
	}

	/// Access flag.
	pub fn access(&self) -> Access {
		self.access
	}

	/// Return whether this handle wraps a value at all.
	pub fn is_valid(&self) -> bool {
		self.ty.is_some()
	}

	/// Return whether this is a nil pointer or nil interface.
	pub fn is_nil(&self) -> bool {
		matches!(self.data, Data::Indirect(None))
	}

	/// Return whether generic conversion is permitted.
	pub fn can_interface(&self) -> bool {
		self.is_valid() && self.access == Access::Exported
	}

	/// Generic conversion: the handle itself when it is valid and exported.
	pub fn interface(&self) -> Option<Value> {
		self.can_interface().then(|| self.clone())
	}

	/// Dereference a pointer or unwrap an interface by one level.
	///
	/// Nil pointers, nil interfaces, and every other kind yield the invalid
	/// handle. A sealed handle yields a sealed element.
	pub fn elem(&self) -> Value {
		let Data::Indirect(Some(target)) = &self.data else {
			return Value::invalid();
		};
		let out = Value::clone(target);
		match self.access {
			Access::Sealed => out.sealed(),
			Access::Exported => out,
		}
	}

	/// Decoded boolean.
	pub fn as_bool(&self) -> Option<bool> {
		match self.data {
			Data::Bool(value) => Some(value),
			_ => None,
		}
	}

	/// Decoded signed integer, widened to 64 bits.
	pub fn as_int(&self) -> Option<i64> {
		match self.data {
			Data::Int(value) => Some(value),
			_ => None,
		}
	}

	/// Decoded unsigned integer, widened to 64 bits.
	pub fn as_uint(&self) -> Option<u64> {
		match self.data {
			Data::Uint(value) => Some(value),
			_ => None,
		}
	}

	/// Decoded float, widened to 64 bits.
	pub fn as_float(&self) -> Option<f64> {
		match self.data {
			Data::Float(value) => Some(value),
			_ => None,
		}
	}

	/// Decoded complex number.
	pub fn as_complex(&self) -> Option<Complex> {
		match self.data {
			Data::Complex(value) => Some(value),
			_ => None,
		}
	}

	/// Decoded string.
	pub fn as_str(&self) -> Option<&str> {
		match &self.data {
			Data::String(value) => Some(value.as_ref()),
			_ => None,
		}
	}
}

fn narrow_f32(kind: Kind, value: f64) -> Result<f64> {
	if value.is_finite() && value.abs() > f64::from(f32::MAX) {
		return Err(ReflectError::OutOfRange {
			kind,
			value: format!("{value:e}"),
		});
	}
	Ok(f64::from(value as f32))
}

fn expect_family(ty: &Type, family: Family, expected: &'static str) -> Result<()> {
	if ty.kind().family() == family {
		Ok(())
	} else {
		Err(ReflectError::KindMismatch { expected, got: ty.kind() })
	}
}

// Unlinks pointer chains one level at a time so dropping a deep chain
// does not recurse once per level.
impl Drop for Value {
	fn drop(&mut self) {
		let mut next = take_indirect(&mut self.data);
		while let Some(target) = next {
			next = match Arc::try_unwrap(target) {
				Ok(mut inner) => take_indirect(&mut inner.data),
				Err(_) => None,
			};
		}
	}
}

fn take_indirect(data: &mut Data) -> Option<Arc<Value>> {
	match data {
		Data::Indirect(slot) => slot.take(),
		_ => None,
	}
}

impl fmt::Display for Complex {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.im.is_sign_negative() {
			write!(f, "({}{}i)", self.re, self.im)
		} else {
			write!(f, "({}+{}i)", self.re, self.im)
		}
	}
}

impl fmt::Display for Value {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match &self.data {
			Data::None => f.write_str("<invalid>"),
			Data::Bool(v) => write!(f, "{v}"),
			Data::Int(v) => write!(f, "{v}"),
			Data::Uint(v) => write!(f, "{v}"),
			Data::Float(v) => write!(f, "{v}"),
			Data::Complex(v) => write!(f, "{v}"),
			Data::String(v) => f.write_str(v),
			Data::Indirect(None) => f.write_str("<nil>"),
			Data::Indirect(Some(target)) if self.kind() == Kind::Ptr => write!(f, "&{target}"),
			Data::Indirect(Some(target)) => write!(f, "{target}"),
			Data::Opaque => match &self.ty {
				Some(ty) => write!(f, "<{ty}>"),
				None => f.write_str("<opaque>"),
			},
		}
	}
}
