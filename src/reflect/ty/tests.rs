use crate::reflect::{Kind, ReflectError, Type};

#[test]
fn basic_rejects_composite_kinds() {
	assert!(Type::basic(Kind::Int16).is_ok());
	assert!(Type::basic(Kind::UnsafePointer).is_ok());

	let err = Type::basic(Kind::Struct).expect_err("struct is not basic");
	assert!(matches!(err, ReflectError::KindMismatch { got: Kind::Struct, .. }));
}

#[test]
fn named_rejects_element_kinds() {
	let err = Type::named("IntPtr", Kind::Ptr).expect_err("pointer needs elem");
	assert!(matches!(err, ReflectError::KindNeedsElem { kind: Kind::Ptr }));
	assert!(Type::named("Nothing", Kind::Invalid).is_err());

	let point = Type::named("Point", Kind::Struct).expect("named struct builds");
	assert_eq!(point.kind(), Kind::Struct);
	assert_eq!(point.name(), Some("Point"));
	assert_eq!(point.to_string(), "Point");
}

#[test]
fn renders_nested_descriptors() {
	let int = Type::basic(Kind::Int).expect("int type");
	let byte = Type::basic(Kind::Uint8).expect("uint8 type");

	assert_eq!(Type::ptr_to(&Type::ptr_to(&int)).to_string(), "**int");
	assert_eq!(Type::slice_of(&byte).to_string(), "[]uint8");
	assert_eq!(Type::array_of(&byte, 4).to_string(), "[4]uint8");
	assert_eq!(Type::chan_of(&int).to_string(), "chan int");
	assert_eq!(Type::ptr_to(&Type::any()).to_string(), "*interface {}");
}

#[test]
fn equality_is_structural() {
	let a = Type::ptr_to(&Type::basic(Kind::String).expect("string type"));
	let b = Type::ptr_to(&Type::basic(Kind::String).expect("string type"));
	assert_eq!(a, b);
	assert_ne!(a, Type::ptr_to(&Type::basic(Kind::Bool).expect("bool type")));
	assert_eq!(a.elem().map(Type::kind), Some(Kind::String));
}

#[test]
fn deep_descriptor_chains_drop_without_recursing() {
	let base = Type::basic(Kind::Int).expect("int type");
	let mut ty = base.clone();
	for _ in 0..200_000 {
		ty = Type::ptr_to(&Type::slice_of(&ty));
	}
	assert_eq!(ty.kind(), Kind::Ptr);
	drop(ty);
	assert_eq!(base.to_string(), "int");
}
