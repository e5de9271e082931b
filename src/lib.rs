//! # modelgen
//!
//! Converts a markdown model catalog into a TypeScript data module.
//!
//! The catalog lists language models as heading-delimited blocks of
//! `- Key: Value` bullets:
//!
//!     ## Модель 1
//!     - LLM: Foo-X
//!     - Parameters: 70
//!     - Context Window: 128 000
//!     - Reasoning: Yes
//!
//! The output is a single `export const MODELS: ModelData[] = [...]`
//! array literal with a fixed field order, ready for inclusion in the
//! consumer's source tree.
//!
//! Two stages, applied in sequence with no shared state:
//!
//! - [`extract`]: document text → ordered [`ModelRecord`] list
//! - [`emit`]: record list → TypeScript array literal, byte-deterministic
//!
//! Parse-level anomalies (unknown keys, missing colons, non-numeric text in
//! numeric fields) degrade to absent fields or retained raw text. The only
//! fatal conditions are an unreadable input file, a failed output write, and
//! a record reaching the emitter without one of its required fields — in
//! which case no output file is written.

pub mod emit;
pub mod error;
pub mod extract;
pub mod record;
pub mod value;

pub use emit::emit_typescript;
pub use error::ConvertError;
pub use extract::extract_records;
pub use record::{Benchmarks, Memory, ModelRecord};
pub use value::Value;

use std::fs;
use std::path::Path;

/// Run the whole pipeline on raw document text.
pub fn convert(content: &str) -> Result<String, ConvertError> {
    emit_typescript(&extract_records(content))
}

/// Read the catalog at `input`, convert it, and write the generated module
/// to `output`.
///
/// Emission runs before the write, so a record missing a required field
/// aborts the run with the output file untouched. Returns the parsed
/// records so callers can report progress.
pub fn convert_file(input: &Path, output: &Path) -> Result<Vec<ModelRecord>, ConvertError> {
    let content = fs::read_to_string(input).map_err(|source| ConvertError::Read {
        path: input.display().to_string(),
        source,
    })?;
    let records = extract_records(&content);
    let module = emit_typescript(&records)?;
    fs::write(output, module).map_err(|source| ConvertError::Write {
        path: output.display().to_string(),
        source,
    })?;
    Ok(records)
}
