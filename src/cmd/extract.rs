use reflectkit::reflect::{ExtractOptions, Native, Result, TypeExpr, extract_primitive_with};

use crate::cmd::util::{emit_json, native_to_json, native_variant};

#[derive(clap::Args)]
pub struct Args {
	/// Type expression, e.g. `**int` or `any(float32)`.
	pub expr: String,
	/// Literal for the innermost scalar, or `nil`.
	#[arg(allow_hyphen_values = true)]
	pub literal: String,
	/// Build the handle as reached through a restricted path.
	#[arg(long)]
	pub sealed: bool,
	#[arg(long = "max-depth")]
	pub max_depth: Option<u32>,
	#[arg(long)]
	pub json: bool,
}

/// Extract a native value from a handle built from `expr` and `literal`.
pub fn run(args: Args) -> Result<()> {
	let Args {
		expr,
		literal,
		sealed,
		max_depth,
		json,
	} = args;

	let parsed = TypeExpr::parse(&expr)?;
	let mut value = parsed.instantiate(&literal)?;
	if sealed {
		value = value.sealed();
	}

	let mut options = ExtractOptions::default();
	if let Some(max_depth) = max_depth {
		options.max_depth = max_depth;
	}

	let native = extract_primitive_with(&value, &options);
	tracing::debug!(expr = %parsed, sealed, ok = native.is_some(), "extracted");

	if json {
		print_json(&parsed, &literal, sealed, native.as_ref());
		return Ok(());
	}

	println!("expr: {parsed}");
	println!("handle: {value}");
	println!("access: {}", if sealed { "sealed" } else { "exported" });
	match native {
		Some(native) => {
			println!("ok: true");
			println!("variant: {}", native_variant(&native));
			println!("native: {native}");
		}
		None => println!("ok: false"),
	}

	Ok(())
}

fn print_json(expr: &TypeExpr, literal: &str, sealed: bool, native: Option<&Native>) {
	let payload = ExtractJson {
		expr: expr.to_string(),
		literal: literal.to_owned(),
		sealed,
		ok: native.is_some(),
		variant: native.map(native_variant),
		native: native.map(native_to_json),
	};

	emit_json(&payload);
}

#[derive(serde::Serialize)]
struct ExtractJson {
	expr: String,
	literal: String,
	sealed: bool,
	ok: bool,
	variant: Option<&'static str>,
	native: Option<serde_json::Value>,
}
