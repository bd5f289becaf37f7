use reflectkit::reflect::{OriginType, OriginValue, Result, TypeExpr, origin_type_and_kind, origin_value_and_kind};

use crate::cmd::util::{emit_json, type_label, value_label};

#[derive(clap::Args)]
pub struct Args {
	/// Type expression, e.g. `**int` or `*any(string)`.
	pub expr: String,
	/// Literal to instantiate for value-form resolution.
	#[arg(long, allow_hyphen_values = true)]
	pub value: Option<String>,
	#[arg(long)]
	pub json: bool,
}

/// Resolve indirection on a type expression and, with `--value`, on a built handle.
pub fn run(args: Args) -> Result<()> {
	let Args { expr, value, json } = args;

	let parsed = TypeExpr::parse(&expr)?;
	let ty = parsed.to_type();
	let type_out = origin_type_and_kind(&ty);
	let value_out = match value.as_deref() {
		Some(literal) => Some(origin_value_and_kind(&parsed.instantiate(literal)?)),
		None => None,
	};

	if json {
		print_json(&parsed, &type_out, value_out.as_ref());
		return Ok(());
	}

	println!("expr: {parsed}");
	println!("input_type: {}", type_label(type_out.input_type.as_ref()));
	println!("input_kind: {}", type_out.input_kind);
	println!("origin_type: {}", type_label(type_out.origin_type.as_ref()));
	println!("origin_kind: {}", type_out.origin_kind);
	if let Some(out) = value_out {
		println!("input_value: {}", value_label(&out.input_value));
		println!("input_value_kind: {}", out.input_kind);
		println!("origin_value: {}", value_label(&out.origin_value));
		println!("origin_value_kind: {}", out.origin_kind);
	}

	Ok(())
}

fn print_json(expr: &TypeExpr, type_out: &OriginType, value_out: Option<&OriginValue>) {
	let payload = OriginJson {
		expr: expr.to_string(),
		ty: OriginTypeJson {
			input_type: type_out.input_type.as_ref().map(ToString::to_string),
			input_kind: type_out.input_kind.name(),
			origin_type: type_out.origin_type.as_ref().map(ToString::to_string),
			origin_kind: type_out.origin_kind.name(),
		},
		value: value_out.map(|out| OriginValueJson {
			input: value_label(&out.input_value),
			input_kind: out.input_kind.name(),
			origin: value_label(&out.origin_value),
			origin_kind: out.origin_kind.name(),
		}),
	};

	emit_json(&payload);
}

#[derive(serde::Serialize)]
struct OriginJson {
	expr: String,
	#[serde(rename = "type")]
	ty: OriginTypeJson,
	#[serde(skip_serializing_if = "Option::is_none")]
	value: Option<OriginValueJson>,
}

#[derive(serde::Serialize)]
struct OriginTypeJson {
	input_type: Option<String>,
	input_kind: &'static str,
	origin_type: Option<String>,
	origin_kind: &'static str,
}

#[derive(serde::Serialize)]
struct OriginValueJson {
	input: String,
	input_kind: &'static str,
	origin: String,
	origin_kind: &'static str,
}
