#![allow(missing_docs)]

use std::process::{Command, Output};

fn run_reflectkit(args: &[&str]) -> Output {
	Command::new(env!("CARGO_BIN_EXE_reflectkit"))
		.args(args)
		.output()
		.expect("reflectkit command executes")
}

fn run_reflectkit_json(args: &[&str]) -> serde_json::Value {
	let output = run_reflectkit(args);
	assert!(
		output.status.success(),
		"reflectkit command failed with status={}: {}",
		output.status,
		String::from_utf8_lossy(&output.stderr)
	);
	serde_json::from_slice(&output.stdout).expect("stdout should be valid json")
}

#[test]
fn origin_json_reports_type_and_value_resolution() {
	let json = run_reflectkit_json(&["origin", "**int", "--value", "7", "--json"]);

	assert_eq!(json["expr"], "**int");
	assert_eq!(json["type"]["input_type"], "**int");
	assert_eq!(json["type"]["input_kind"], "ptr");
	assert_eq!(json["type"]["origin_type"], "int");
	assert_eq!(json["type"]["origin_kind"], "int");
	assert_eq!(json["value"]["input"], "&&7");
	assert_eq!(json["value"]["origin"], "7");
	assert_eq!(json["value"]["origin_kind"], "int");
}

#[test]
fn origin_json_without_value_omits_value_section() {
	let json = run_reflectkit_json(&["origin", "[]string", "--json"]);
	assert_eq!(json["type"]["origin_kind"], "slice");
	assert!(json.get("value").is_none());
}

#[test]
fn origin_of_nil_pointer_is_invalid() {
	let json = run_reflectkit_json(&["origin", "*bool", "--value", "nil", "--json"]);
	assert_eq!(json["value"]["input"], "<nil>");
	assert_eq!(json["value"]["origin"], "-");
	assert_eq!(json["value"]["origin_kind"], "invalid");
}

#[test]
fn extract_json_sealed_chain_decodes_by_kind() {
	let json = run_reflectkit_json(&["extract", "**int", "7", "--sealed", "--json"]);
	assert_eq!(json["ok"], true);
	assert_eq!(json["variant"], "i64");
	assert_eq!(json["native"], 7);
}

#[test]
fn extract_json_exported_handle_converts_generically() {
	let json = run_reflectkit_json(&["extract", "*uint8", "5", "--json"]);
	assert_eq!(json["ok"], true);
	assert_eq!(json["variant"], "any");
	assert_eq!(json["native"], "&5");
}

#[test]
fn extract_json_negative_literal_and_depth_limit() {
	let json = run_reflectkit_json(&["extract", "int64", "-12", "--sealed", "--json"]);
	assert_eq!(json["native"], -12);

	let json = run_reflectkit_json(&["extract", "***int", "1", "--sealed", "--max-depth", "2", "--json"]);
	assert_eq!(json["ok"], false);
	assert!(json["native"].is_null());
}

#[test]
fn extract_json_sealed_struct_fails() {
	let json = run_reflectkit_json(&["extract", "struct Point", "_", "--sealed", "--json"]);
	assert_eq!(json["ok"], false);
}

#[test]
fn kinds_json_lists_every_kind() {
	let json = run_reflectkit_json(&["kinds", "--json"]);
	let rows = json.as_array().expect("kinds array");
	assert_eq!(rows.len(), 27);
	assert!(rows.iter().any(|row| row["kind"] == "uintptr" && row["family"] == "uint"));
	assert!(rows.iter().any(|row| row["kind"] == "ptr" && row["scalar"] == false));
}

#[test]
fn invalid_expression_exits_with_error() {
	let output = run_reflectkit(&["origin", "pointer"]);
	assert!(!output.status.success());
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains("invalid type expression: pointer"), "{stderr}");
}

#[test]
fn out_of_range_literal_exits_with_error() {
	let output = run_reflectkit(&["extract", "uint8", "256"]);
	assert!(!output.status.success());
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains("out of range for uint8"), "{stderr}");
}

#[test]
fn over_deep_expression_exits_with_error() {
	let expr = format!("{}int", "*".repeat(100_000));
	let output = run_reflectkit(&["origin", &expr, "--value", "1"]);
	assert_eq!(output.status.code(), Some(1));
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.starts_with("error: invalid type expression"), "{stderr}");
}

#[test]
fn out_of_range_float32_literal_exits_with_error() {
	let output = run_reflectkit(&["extract", "float32", "1e40"]);
	assert_eq!(output.status.code(), Some(1));
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains("value 1e40 out of range for float32"), "{stderr}");
}

#[test]
fn text_output_lists_origin_fields() {
	let output = run_reflectkit(&["origin", "*any(string)", "--value", "hi"]);
	assert!(output.status.success());
	let stdout = String::from_utf8_lossy(&output.stdout);
	assert!(stdout.contains("origin_kind: interface"), "{stdout}");
	assert!(stdout.contains("origin_value: hi"), "{stdout}");
}
