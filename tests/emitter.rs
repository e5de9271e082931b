//! Emission: field order, defaults, sentinels, and fatal missing fields

use modelgen::{emit_typescript, ConvertError, ModelRecord, Value};

/// A record with every required field set and everything else absent.
fn base_record(id: &str) -> ModelRecord {
    ModelRecord {
        id: Some(id.to_string()),
        name: Some(id.to_string()),
        architecture: Some("Transformer".to_string()),
        reasoning: Some(true),
        visual: Some(false),
        open_source: Some("Yes".to_string()),
        ..ModelRecord::default()
    }
}

#[test]
fn empty_record_list_emits_an_empty_array() {
    let out = emit_typescript(&[]).expect("empty input must emit");
    assert_eq!(out, "export const MODELS: ModelData[] = [\n];");
}

#[test]
fn field_order_is_fixed_regardless_of_presence() {
    let out = emit_typescript(&[base_record("Foo-X")]).unwrap();
    let order = [
        "id:",
        "name:",
        "architecture:",
        "params:",
        "active_params:",
        "context_window:",
        "reasoning:",
        "visual:",
        "open_source:",
        "speed:",
        "memory:",
        "kv_cache_per_100k_tokens:",
        "benchmarks:",
    ];
    let mut last = 0;
    for field in order {
        let pos = out[last..]
            .find(field)
            .unwrap_or_else(|| panic!("field '{}' missing or out of order", field));
        last += pos;
    }
}

#[test]
fn absent_scalars_use_the_null_sentinel() {
    let out = emit_typescript(&[base_record("Foo-X")]).unwrap();
    assert!(out.contains("params: null,"));
    assert!(out.contains("active_params: null,"));
    assert!(out.contains("context_window: null,"));
    assert!(out.contains("speed: null,"));
}

#[test]
fn kv_cache_defaults_to_zero() {
    let out = emit_typescript(&[base_record("Foo-X")]).unwrap();
    assert!(out.contains("kv_cache_per_100k_tokens: 0,"));
}

#[test]
fn memory_always_carries_q16_and_omits_absent_quantizations() {
    let mut record = base_record("Foo-X");
    record.memory.q4 = Value::Int(35);
    let out = emit_typescript(&[record]).unwrap();
    assert!(out.contains("memory: { q16: 0, q4: 35 },"));
    assert!(!out.contains("q8:"));
    assert!(!out.contains("sfp8:"));
    assert!(!out.contains("mxfp4:"));
}

#[test]
fn benchmarks_with_nothing_present_emit_an_empty_object() {
    let out = emit_typescript(&[base_record("Foo-X")]).unwrap();
    assert!(out.contains("benchmarks: {},"));
}

#[test]
fn benchmarks_keep_their_fixed_order() {
    let mut record = base_record("Foo-X");
    record.benchmarks.ifbench = Value::Int(48);
    record.benchmarks.aa_lcr = Value::Float(52.6);
    let out = emit_typescript(&[record]).unwrap();
    assert!(out.contains("benchmarks: { aa_lcr: 52.6, ifbench: 48 },"));
}

#[test]
fn booleans_render_lower_case() {
    let out = emit_typescript(&[base_record("Foo-X")]).unwrap();
    assert!(out.contains("reasoning: true,"));
    assert!(out.contains("visual: false,"));
}

#[test]
fn strings_are_quoted_verbatim() {
    let mut record = base_record("Foo-X");
    record.architecture = Some("MoE (8x7)".to_string());
    let out = emit_typescript(&[record]).unwrap();
    assert!(out.contains("architecture: \"MoE (8x7)\","));
}

#[test]
fn raw_text_in_a_numeric_slot_is_quoted() {
    let mut record = base_record("Foo-X");
    record.params = Value::Str("dense".to_string());
    let out = emit_typescript(&[record]).unwrap();
    assert!(out.contains("params: \"dense\","));
}

#[test]
fn only_the_last_record_drops_the_trailing_comma() {
    let out = emit_typescript(&[base_record("Foo-X"), base_record("Bar-Y")]).unwrap();
    assert_eq!(out.matches("    },").count(), 1);
    assert!(out.ends_with("    }\n];"));
}

#[test]
fn missing_required_field_aborts_the_run() {
    let mut record = base_record("Foo-X");
    record.open_source = None;
    match emit_typescript(&[base_record("Other"), record]) {
        Err(ConvertError::MissingField { index, field }) => {
            assert_eq!(index, 1);
            assert_eq!(field, "open_source");
        }
        other => panic!("expected MissingField, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn missing_id_is_fatal_even_with_other_fields_set() {
    let mut record = base_record("Foo-X");
    record.id = None;
    record.params = Value::Int(70);
    assert!(matches!(
        emit_typescript(&[record]),
        Err(ConvertError::MissingField { index: 0, field: "id" })
    ));
}

#[test]
fn output_is_deterministic_for_the_same_records() {
    let records = vec![base_record("Foo-X"), base_record("Bar-Y")];
    assert_eq!(
        emit_typescript(&records).unwrap(),
        emit_typescript(&records).unwrap()
    );
}
