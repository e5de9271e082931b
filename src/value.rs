//! Loosely-typed field values
//!
//! Catalog values are heterogeneous: numbers with comma decimal separators,
//! "n/a" markers, thousands-grouped integers, and free text all appear in
//! the same positions. [`Value`] keeps the result of normalization as an
//! explicit tagged variant rather than a stringly type, so the emitter can
//! distinguish "absent" from "text that resisted numeric parsing".

use serde::Serialize;

/// A normalized field value.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// No determinable value ("n/a" or empty in the source).
    #[default]
    Absent,
    Int(i64),
    Float(f64),
    Str(String),
}

impl Value {
    /// Normalize a raw value string.
    ///
    /// Trims whitespace; an empty result or a case-insensitive "n/a" is
    /// [`Value::Absent`]. Otherwise every comma becomes a period (decimal
    /// separator normalization) and numeric parsing is attempted: integer
    /// when no period is present, float otherwise. Text that fails numeric
    /// parsing is retained as-is after normalization.
    pub fn parse(raw: &str) -> Value {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("n/a") {
            return Value::Absent;
        }
        let normalized = trimmed.replace(',', ".");
        if normalized.contains('.') {
            match normalized.parse::<f64>() {
                Ok(n) => Value::Float(n),
                Err(_) => Value::Str(normalized),
            }
        } else {
            match normalized.parse::<i64>() {
                Ok(n) => Value::Int(n),
                Err(_) => Value::Str(normalized),
            }
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }

    /// Render as a TypeScript expression, substituting `sentinel` when
    /// absent. Numbers are bare numerals; text that resisted numeric
    /// parsing is quoted so the generated module still compiles.
    pub fn render_or(&self, sentinel: &str) -> String {
        match self {
            Value::Absent => sentinel.to_string(),
            Value::Int(n) => n.to_string(),
            Value::Float(n) => n.to_string(),
            Value::Str(s) => format!("\"{}\"", s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_serializes_as_null() {
        assert_eq!(serde_json::to_string(&Value::Absent).unwrap(), "null");
        assert_eq!(serde_json::to_string(&Value::Int(70)).unwrap(), "70");
        assert_eq!(serde_json::to_string(&Value::Float(6.87)).unwrap(), "6.87");
        assert_eq!(
            serde_json::to_string(&Value::Str("MoE".to_string())).unwrap(),
            "\"MoE\""
        );
    }
}
