use crate::reflect::{Kind, OriginType, Reflect, StaticType, Type, TypeSource, Value, origin_type_and_kind, origin_value_and_kind};

fn wrap(base: Value, depth: usize) -> Value {
	(0..depth).fold(base, |acc, _| Value::ptr_to(acc).expect("ptr builds"))
}

#[test]
fn strips_any_number_of_pointer_layers() {
	let bases = [
		true.reflect(),
		(-4_i32).reflect(),
		9_u64.reflect(),
		2.5_f64.reflect(),
		"text".reflect(),
		Value::opaque(&Type::named("Point", Kind::Struct).expect("struct type")).expect("opaque builds"),
		Value::interface_of(&Type::any(), Some(1_i8.reflect())).expect("interface builds"),
	];

	for base in bases {
		for depth in 0..6 {
			let out = origin_value_and_kind(&wrap(base.clone(), depth));
			assert_eq!(out.origin_kind, base.kind(), "depth {depth}");
			assert_eq!(out.origin_value, base, "depth {depth}");
			if depth > 0 {
				assert_eq!(out.input_kind, Kind::Ptr);
			}
		}
	}
}

#[test]
fn non_pointer_input_is_its_own_origin() {
	let value = 42_u16.reflect();
	let out = origin_value_and_kind(&value);
	assert_eq!(out.input_value, out.origin_value);
	assert_eq!(out.input_kind, Kind::Uint16);
	assert_eq!(out.origin_kind, Kind::Uint16);
}

#[test]
fn interface_is_not_unwrapped() {
	let iface = Value::interface_of(&Type::any(), Some(1_i64.reflect())).expect("interface builds");
	let out = origin_value_and_kind(&Value::ptr_to(iface.clone()).expect("ptr builds"));
	assert_eq!(out.origin_kind, Kind::Interface);
	assert_eq!(out.origin_value, iface);
}

#[test]
fn invalid_input_stays_invalid() {
	let out = origin_value_and_kind(&Value::invalid());
	assert_eq!(out.input_kind, Kind::Invalid);
	assert_eq!(out.origin_kind, Kind::Invalid);
	assert!(!out.origin_value.is_valid());
}

#[test]
fn nil_pointer_resolves_to_invalid_origin() {
	let none: Option<Box<Box<f32>>> = None;
	let out = origin_value_and_kind(&none);
	assert_eq!(out.input_kind, Kind::Ptr);
	assert_eq!(out.origin_kind, Kind::Invalid);
}

#[test]
fn natives_are_wrapped_before_resolution() {
	let out = origin_value_and_kind(&Box::new(Box::new(7_i64)));
	assert_eq!(out.input_kind, Kind::Ptr);
	assert_eq!(out.origin_kind, Kind::Int64);
	assert_eq!(out.origin_value.as_int(), Some(7));
}

#[test]
fn sealed_input_resolves_to_sealed_origin() {
	let value = Value::ptr_to(3_u8.reflect()).expect("ptr builds").sealed();
	let out = origin_value_and_kind(&value);
	assert_eq!(out.origin_kind, Kind::Uint8);
	assert!(!out.origin_value.can_interface());
}

#[test]
fn nil_type_source_is_all_empty() {
	assert_eq!(origin_type_and_kind(TypeSource::Nil), OriginType::default());
	assert_eq!(origin_type_and_kind(None::<&Type>), OriginType::default());
	assert_eq!(origin_type_and_kind(&Value::invalid()), OriginType::default());

	let out = origin_type_and_kind(TypeSource::Nil);
	assert!(out.input_type.is_none());
	assert!(out.origin_type.is_none());
	assert_eq!(out.input_kind, Kind::Invalid);
	assert_eq!(out.origin_kind, Kind::Invalid);
}

#[test]
fn strips_pointer_types() {
	let string = String::static_type();
	let ty = Type::ptr_to(&Type::ptr_to(&Type::ptr_to(&string)));
	let out = origin_type_and_kind(&ty);
	assert_eq!(out.input_type.as_ref(), Some(&ty));
	assert_eq!(out.input_kind, Kind::Ptr);
	assert_eq!(out.origin_type.as_ref(), Some(&string));
	assert_eq!(out.origin_kind, Kind::String);
}

#[test]
fn type_form_keeps_non_pointer_composites() {
	let slice = Type::slice_of(&Type::ptr_to(&u8::static_type()));
	let out = origin_type_and_kind(&slice);
	assert_eq!(out.origin_kind, Kind::Slice);
	assert_eq!(out.origin_type, Some(slice));
}

#[test]
fn type_is_derived_from_handles_and_natives() {
	let none: Option<Box<i32>> = None;
	let out = origin_type_and_kind(&none.reflect());
	assert_eq!(out.input_kind, Kind::Ptr);
	assert_eq!(out.origin_kind, Kind::Int32);

	let boxed = Box::new(Box::new('x'));
	let out = origin_type_and_kind(TypeSource::native(&boxed));
	assert_eq!(out.input_type.map(|ty| ty.to_string()).as_deref(), Some("**int32"));
	assert_eq!(out.origin_kind, Kind::Int32);
}
