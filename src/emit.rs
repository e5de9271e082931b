//! TypeScript module emission (model records → array literal)
//!
//! Serializes the ordered record list into one
//! `export const MODELS: ModelData[]` assignment. The field order is fixed
//! and identical for every record regardless of which fields its source
//! block carried, so the output is byte-deterministic for a given input
//! sequence.
//!
//! Six fields have no emission-time default: id, name, architecture,
//! open_source, reasoning, visual. A record missing any of them aborts the
//! whole run; there is no partial-success mode.

use crate::error::ConvertError;
use crate::record::{Benchmarks, Memory, ModelRecord};

/// Serialize records into the generated TypeScript module text.
pub fn emit_typescript(records: &[ModelRecord]) -> Result<String, ConvertError> {
    let mut lines = vec!["export const MODELS: ModelData[] = [".to_string()];

    for (index, record) in records.iter().enumerate() {
        lines.push("    {".to_string());
        lines.push(field_str("id", record.id.as_deref(), index)?);
        lines.push(field_str("name", record.name.as_deref(), index)?);
        lines.push(field_str("architecture", record.architecture.as_deref(), index)?);
        lines.push(format!("        params: {},", record.params.render_or("null")));
        lines.push(format!(
            "        active_params: {},",
            record.active_params.render_or("null")
        ));
        lines.push(format!(
            "        context_window: {},",
            record.context_window.render_or("null")
        ));
        lines.push(field_bool("reasoning", record.reasoning, index)?);
        lines.push(field_bool("visual", record.visual, index)?);
        lines.push(field_str("open_source", record.open_source.as_deref(), index)?);
        lines.push(format!("        speed: {},", record.speed.render_or("null")));
        lines.push(format!("        memory: {},", render_memory(&record.memory)));
        lines.push(format!(
            "        kv_cache_per_100k_tokens: {},",
            record.kv_cache_per_100k_tokens.render_or("0")
        ));
        lines.push(format!(
            "        benchmarks: {},",
            render_benchmarks(&record.benchmarks)
        ));

        // No trailing comma after the last record.
        if index + 1 < records.len() {
            lines.push("    },".to_string());
        } else {
            lines.push("    }".to_string());
        }
    }

    lines.push("];".to_string());
    Ok(lines.join("\n"))
}

/// Required string field: quoted verbatim, fatal when never set.
fn field_str(
    field: &'static str,
    value: Option<&str>,
    index: usize,
) -> Result<String, ConvertError> {
    let value = value.ok_or(ConvertError::MissingField { index, field })?;
    Ok(format!("        {}: \"{}\",", field, value))
}

/// Required boolean field: lower-case true/false, fatal when never set.
fn field_bool(
    field: &'static str,
    value: Option<bool>,
    index: usize,
) -> Result<String, ConvertError> {
    let value = value.ok_or(ConvertError::MissingField { index, field })?;
    Ok(format!("        {}: {},", field, value))
}

/// `q16` is always present (0 when absent); the other quantizations are
/// included only when set, in fixed order.
fn render_memory(memory: &Memory) -> String {
    let mut parts = vec![format!("q16: {}", memory.q16.render_or("0"))];
    let optional = [
        ("q8", &memory.q8),
        ("q4", &memory.q4),
        ("sfp8", &memory.sfp8),
        ("mxfp4", &memory.mxfp4),
    ];
    for (key, value) in optional {
        if !value.is_absent() {
            parts.push(format!("{}: {}", key, value.render_or("0")));
        }
    }
    format!("{{ {} }}", parts.join(", "))
}

/// Only the present benchmark keys are included, in fixed order; a record
/// with none emits an empty object.
fn render_benchmarks(benchmarks: &Benchmarks) -> String {
    let entries = [
        ("aa_lcr", &benchmarks.aa_lcr),
        ("aa_omniscience_accuracy", &benchmarks.aa_omniscience_accuracy),
        (
            "aa_omniscience_non_hallucination",
            &benchmarks.aa_omniscience_non_hallucination,
        ),
        ("ifbench", &benchmarks.ifbench),
        ("mmmu_pro", &benchmarks.mmmu_pro),
    ];
    let parts: Vec<String> = entries
        .iter()
        .filter(|(_, value)| !value.is_absent())
        .map(|(key, value)| format!("{}: {}", key, value.render_or("null")))
        .collect();
    if parts.is_empty() {
        "{}".to_string()
    } else {
        format!("{{ {} }}", parts.join(", "))
    }
}
