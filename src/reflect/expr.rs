use std::fmt;

use crate::reflect::{Complex, Family, Kind, ReflectError, Result, Type, Value};

/// Parsed type expression such as `**int`, `[]uint8`, or `any(string)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr {
	/// Scalar kind or `unsafe.Pointer`.
	Basic(Kind),
	/// `*T`.
	Ptr(Box<TypeExpr>),
	/// `[]T`.
	Slice(Box<TypeExpr>),
	/// `[N]T`.
	Array(usize, Box<TypeExpr>),
	/// `chan T`.
	Chan(Box<TypeExpr>),
	/// `any` or `any(T)`: an empty interface, optionally holding a `T`.
	Any(Option<Box<TypeExpr>>),
	/// `struct` or `struct Name`.
	Struct(Option<Box<str>>),
	/// `map`.
	Map,
	/// `func`.
	Func,
}

/// Deepest nesting of `*`, `[]`, `[N]`, `chan`, and `any(...)` accepted by [`TypeExpr::parse`].
pub const MAX_EXPR_DEPTH: usize = 256;

impl TypeExpr {
	/// Parse expression text.
	///
	/// Expressions nested deeper than [`MAX_EXPR_DEPTH`] are rejected.
	pub fn parse(input: &str) -> Result<Self> {
		parse_expr(input.trim(), 0).ok_or_else(|| ReflectError::InvalidTypeExpr { expr: input.to_owned() })
	}

	/// Type descriptor of handles built from this expression.
	pub fn to_type(&self) -> Type {
		match self {
			TypeExpr::Basic(kind) => Type::primitive(*kind),
			TypeExpr::Ptr(elem) => Type::ptr_to(&elem.to_type()),
			TypeExpr::Slice(elem) => Type::slice_of(&elem.to_type()),
			TypeExpr::Array(len, elem) => Type::array_of(&elem.to_type(), *len),
			TypeExpr::Chan(elem) => Type::chan_of(&elem.to_type()),
			TypeExpr::Any(_) => Type::any(),
			TypeExpr::Struct(name) => Type::composite(Kind::Struct, name.as_deref()),
			TypeExpr::Map => Type::composite(Kind::Map, None),
			TypeExpr::Func => Type::composite(Kind::Func, None),
		}
	}

	/// Build a handle from a literal.
	///
	/// `nil` makes the outermost pointer or interface nil. Scalars parse the
	/// literal per kind. Aggregates ignore it and produce an opaque handle.
	pub fn instantiate(&self, literal: &str) -> Result<Value> {
		let literal = literal.trim();
		match self {
			TypeExpr::Basic(kind) => parse_scalar(*kind, literal),
			TypeExpr::Ptr(elem) if literal == "nil" => Ok(Value::nil_ptr(&elem.to_type())),
			TypeExpr::Ptr(elem) => Value::ptr_to(elem.instantiate(literal)?),
			TypeExpr::Any(Some(held)) if literal != "nil" => Value::interface_of(&Type::any(), Some(held.instantiate(literal)?)),
			TypeExpr::Any(_) => Value::interface_of(&Type::any(), None),
			_ => Value::opaque(&self.to_type()),
		}
	}
}

fn parse_expr(src: &str, depth: usize) -> Option<TypeExpr> {
	if depth > MAX_EXPR_DEPTH {
		return None;
	}
	let depth = depth + 1;
	if let Some(rest) = src.strip_prefix('*') {
		return Some(TypeExpr::Ptr(Box::new(parse_expr(rest, depth)?)));
	}
	if let Some(rest) = src.strip_prefix("[]") {
		return Some(TypeExpr::Slice(Box::new(parse_expr(rest, depth)?)));
	}
	if let Some(rest) = src.strip_prefix('[') {
		let (len, rest) = rest.split_once(']')?;
		let len = len.parse::<usize>().ok()?;
		return Some(TypeExpr::Array(len, Box::new(parse_expr(rest, depth)?)));
	}
	if let Some(rest) = src.strip_prefix("chan ") {
		return Some(TypeExpr::Chan(Box::new(parse_expr(rest.trim_start(), depth)?)));
	}
	if let Some(rest) = src.strip_prefix("any") {
		if rest.is_empty() {
			return Some(TypeExpr::Any(None));
		}
		let inner = rest.strip_prefix('(')?.strip_suffix(')')?;
		return Some(TypeExpr::Any(Some(Box::new(parse_expr(inner.trim(), depth)?))));
	}
	if let Some(rest) = src.strip_prefix("struct") {
		if rest.is_empty() {
			return Some(TypeExpr::Struct(None));
		}
		let name = rest.strip_prefix(' ')?.trim();
		return is_ident(name).then(|| TypeExpr::Struct(Some(name.into())));
	}

	match src {
		"map" => Some(TypeExpr::Map),
		"func" => Some(TypeExpr::Func),
		_ => {
			let kind = src.parse::<Kind>().ok()?;
			(kind.is_scalar() || kind == Kind::UnsafePointer).then_some(TypeExpr::Basic(kind))
		}
	}
}

fn is_ident(name: &str) -> bool {
	let mut chars = name.chars();
	chars.next().is_some_and(|first| first.is_ascii_alphabetic() || first == '_') && chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
}

fn parse_scalar(kind: Kind, literal: &str) -> Result<Value> {
	let ty = Type::primitive(kind);
	let bad = || ReflectError::InvalidLiteral {
		kind,
		literal: literal.to_owned(),
	};

	match kind.family() {
		Family::Bool => Value::bool(&ty, literal.parse().map_err(|_| bad())?),
		Family::Int => Value::int(&ty, parse_signed(literal).ok_or_else(bad)?),
		Family::Uint => Value::uint(&ty, parse_unsigned(literal).ok_or_else(bad)?),
		Family::Float => Value::float(&ty, literal.parse().map_err(|_| bad())?),
		Family::Complex => Value::complex(&ty, parse_complex(literal).ok_or_else(bad)?),
		Family::String => Value::string(&ty, literal),
		_ => Value::opaque(&ty),
	}
}

/// Decimal or `0x`-prefixed hex.
fn parse_unsigned(literal: &str) -> Option<u64> {
	match literal.strip_prefix("0x").or_else(|| literal.strip_prefix("0X")) {
		Some(hex) => u64::from_str_radix(hex, 16).ok(),
		None => literal.parse().ok(),
	}
}

fn parse_signed(literal: &str) -> Option<i64> {
	match literal.strip_prefix("0x").or_else(|| literal.strip_prefix("0X")) {
		Some(hex) => i64::from_str_radix(hex, 16).ok(),
		None => literal.parse().ok(),
	}
}

/// `re`, `imi`, `re+imi`, or `re-imi`, optionally in parentheses.
fn parse_complex(literal: &str) -> Option<Complex> {
	let body = literal.strip_prefix('(').and_then(|inner| inner.strip_suffix(')')).unwrap_or(literal);
	let Some(body) = body.strip_suffix('i') else {
		return Some(Complex::new(body.parse().ok()?, 0.0));
	};

	let bytes = body.as_bytes();
	let split = (1..bytes.len())
		.rev()
		.find(|&idx| matches!(bytes[idx], b'+' | b'-') && !matches!(bytes[idx - 1], b'e' | b'E'));

	match split {
		Some(idx) => Some(Complex::new(body[..idx].parse().ok()?, body[idx..].parse().ok()?)),
		None => Some(Complex::new(0.0, body.parse().ok()?)),
	}
}

impl fmt::Display for TypeExpr {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			TypeExpr::Basic(kind) => f.write_str(kind.name()),
			TypeExpr::Ptr(elem) => write!(f, "*{elem}"),
			TypeExpr::Slice(elem) => write!(f, "[]{elem}"),
			TypeExpr::Array(len, elem) => write!(f, "[{len}]{elem}"),
			TypeExpr::Chan(elem) => write!(f, "chan {elem}"),
			TypeExpr::Any(None) => f.write_str("any"),
			TypeExpr::Any(Some(held)) => write!(f, "any({held})"),
			TypeExpr::Struct(None) => f.write_str("struct"),
			TypeExpr::Struct(Some(name)) => write!(f, "struct {name}"),
			TypeExpr::Map => f.write_str("map"),
			TypeExpr::Func => f.write_str("func"),
		}
	}
}
