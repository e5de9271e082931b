//! Normalized model records
//!
//! One [`ModelRecord`] per heading-delimited block, created empty,
//! populated field-by-field while the block's lines are scanned, and
//! immutable once finalized. Records have no identity beyond their position
//! in the output sequence.

use crate::value::Value;
use serde::Serialize;

/// Memory footprint per quantization, in GB.
///
/// `q16` always appears in the emitted literal (defaulting to 0); the other
/// quantizations are omitted entirely when absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Memory {
    pub q16: Value,
    pub q8: Value,
    pub q4: Value,
    pub sfp8: Value,
    pub mxfp4: Value,
}

/// Benchmark scores. Absent entries are omitted from the emitted literal,
/// never defaulted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Benchmarks {
    pub aa_lcr: Value,
    pub aa_omniscience_accuracy: Value,
    pub aa_omniscience_non_hallucination: Value,
    pub ifbench: Value,
    pub mmmu_pro: Value,
}

/// One model entry, as parsed from its catalog block.
///
/// `Option` fields are required at emission time and have no default there;
/// `Value` fields carry their own absent state and are defaulted or
/// rendered as `null` by the emitter per field.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ModelRecord {
    /// Set from the `LLM` key, always equal to `name`.
    pub id: Option<String>,
    pub name: Option<String>,
    pub architecture: Option<String>,
    pub params: Value,
    pub active_params: Value,
    pub context_window: Value,
    pub reasoning: Option<bool>,
    pub visual: Option<bool>,
    pub open_source: Option<String>,
    pub speed: Value,
    pub memory: Memory,
    pub kv_cache_per_100k_tokens: Value,
    pub benchmarks: Benchmarks,
}
