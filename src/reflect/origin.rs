use crate::reflect::{Kind, Reflect, Type, Value};

/// Input and origin handles of a value-form resolution.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OriginValue {
	/// Handle as supplied (or as wrapped from a native value).
	pub input_value: Value,
	/// Kind of the input handle.
	pub input_kind: Kind,
	/// First non-pointer handle reached by dereferencing.
	pub origin_value: Value,
	/// Kind of the origin handle; never [`Kind::Ptr`].
	pub origin_kind: Kind,
}

/// Input and origin types of a type-form resolution.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OriginType {
	/// Type as supplied or derived; `None` for nil input.
	pub input_type: Option<Type>,
	/// Kind of the input type.
	pub input_kind: Kind,
	/// First non-pointer type reached by stripping pointer layers.
	pub origin_type: Option<Type>,
	/// Kind of the origin type; never [`Kind::Ptr`].
	pub origin_kind: Kind,
}

/// Anything a type can be derived from.
#[derive(Clone, Copy)]
pub enum TypeSource<'a> {
	/// Absent input.
	Nil,
	/// Type descriptor used as-is.
	Type(&'a Type),
	/// Handle whose runtime type is used.
	Value(&'a Value),
	/// Native value whose runtime type is used.
	Native(&'a dyn Reflect),
}

impl<'a> TypeSource<'a> {
	/// Source deriving its type from a native value.
	pub fn native(value: &'a dyn Reflect) -> Self {
		Self::Native(value)
	}

	fn resolve(self) -> Option<Type> {
		match self {
			TypeSource::Nil => None,
			TypeSource::Type(ty) => Some(ty.clone()),
			TypeSource::Value(value) => value.ty().cloned(),
			TypeSource::Native(value) => value.reflect().ty().cloned(),
		}
	}
}

impl<'a> From<&'a Type> for TypeSource<'a> {
	fn from(ty: &'a Type) -> Self {
		Self::Type(ty)
	}
}

impl<'a> From<&'a Value> for TypeSource<'a> {
	fn from(value: &'a Value) -> Self {
		Self::Value(value)
	}
}

impl<'a> From<Option<&'a Type>> for TypeSource<'a> {
	fn from(ty: Option<&'a Type>) -> Self {
		ty.map_or(Self::Nil, Self::Type)
	}
}

/// Resolve pointer indirection on a value down to its origin handle.
///
/// Natives are wrapped first; handles are taken as they are. Nil pointers
/// dereference to the invalid handle.
pub fn origin_value_and_kind<T: Reflect + ?Sized>(value: &T) -> OriginValue {
	let input_value = value.reflect();
	let input_kind = input_value.kind();

	let mut origin_value = input_value.clone();
	let mut origin_kind = input_kind;
	while origin_kind == Kind::Ptr {
		origin_value = origin_value.elem();
		origin_kind = origin_value.kind();
	}

	OriginValue {
		input_value,
		input_kind,
		origin_value,
		origin_kind,
	}
}

/// Resolve pointer indirection on a type down to its origin type.
///
/// Nil input, and an invalid handle which has no type, yield the all-empty result.
pub fn origin_type_and_kind<'a>(source: impl Into<TypeSource<'a>>) -> OriginType {
	let Some(input_type) = source.into().resolve() else {
		return OriginType::default();
	};
	let input_kind = input_type.kind();

	let mut origin_type = input_type.clone();
	while origin_type.kind() == Kind::Ptr {
		let Some(elem) = origin_type.elem() else {
			break;
		};
		origin_type = elem.clone();
	}

	OriginType {
		input_type: Some(input_type),
		input_kind,
		origin_kind: origin_type.kind(),
		origin_type: Some(origin_type),
	}
}

#[cfg(test)]
mod tests;
