use reflectkit::reflect::{Native, Type, Value};

/// Pretty-print a serializable payload to stdout.
pub(crate) fn emit_json<T: serde::Serialize>(payload: &T) {
	match serde_json::to_string_pretty(payload) {
		Ok(text) => println!("{text}"),
		Err(err) => eprintln!("error: json encode failed: {err}"),
	}
}

/// Render an optional type, using `-` for absent.
pub(crate) fn type_label(ty: Option<&Type>) -> String {
	ty.map_or_else(|| "-".to_owned(), ToString::to_string)
}

/// Render a handle, using `-` for the invalid handle.
pub(crate) fn value_label(value: &Value) -> String {
	if value.is_valid() { value.to_string() } else { "-".to_owned() }
}

/// Short variant label for extracted natives.
pub(crate) fn native_variant(native: &Native) -> &'static str {
	match native {
		Native::Any(_) => "any",
		Native::Bool(_) => "bool",
		Native::I64(_) => "i64",
		Native::U64(_) => "u64",
		Native::F64(_) => "f64",
		Native::Complex(_) => "complex",
		Native::String(_) => "string",
	}
}

/// JSON form of an extracted native.
pub(crate) fn native_to_json(native: &Native) -> serde_json::Value {
	match native {
		Native::Any(value) => serde_json::json!(value.to_string()),
		Native::Bool(v) => serde_json::json!(v),
		Native::I64(v) => serde_json::json!(v),
		Native::U64(v) => serde_json::json!(v),
		Native::F64(v) => serde_json::json!(v),
		Native::Complex(v) => serde_json::json!([v.re, v.im]),
		Native::String(v) => serde_json::json!(v.as_ref()),
	}
}
