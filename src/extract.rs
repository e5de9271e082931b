//! Record extraction (markdown catalog → model records)
//!
//! The document is split at `## Модель N` headings; text before the first
//! heading is discarded. Within a block only trimmed lines starting with a
//! bullet marker are considered; each is split on the first colon into key
//! and value.
//!
//! Key labels are dispatched through an ordered rule table with
//! first-match-wins semantics. Most labels match exactly; the KV-cache and
//! two benchmark labels match by substring to absorb upstream wording
//! drift. Unrecognized keys and lines without a colon are silently skipped.

use crate::record::ModelRecord;
use crate::value::Value;
use once_cell::sync::Lazy;
use regex::Regex;

static MODEL_HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"## Модель \d+").expect("heading pattern is valid"));

/// How a rule matches a key label.
enum Matcher {
    Exact(&'static str),
    Contains(&'static str),
    ContainsAny(&'static [&'static str]),
}

impl Matcher {
    fn matches(&self, key: &str) -> bool {
        match self {
            Matcher::Exact(label) => key == *label,
            Matcher::Contains(marker) => key.contains(marker),
            Matcher::ContainsAny(markers) => markers.iter().any(|m| key.contains(m)),
        }
    }
}

type Apply = fn(&mut ModelRecord, &str);

/// Ordered dispatch table: the first rule whose matcher accepts the key
/// label wins.
static RULES: &[(Matcher, Apply)] = &[
    (Matcher::Exact("LLM"), |record, value| {
        // Both fields carry the identical raw string, no normalization.
        record.id = Some(value.to_string());
        record.name = Some(value.to_string());
    }),
    (Matcher::Exact("Parameters"), |record, value| {
        record.params = Value::parse(value);
    }),
    (Matcher::Exact("Active Parameters"), |record, value| {
        record.active_params = Value::parse(value);
    }),
    (Matcher::Exact("Context Window"), |record, value| {
        // Merge thousands-grouping spaces ("128 000") before parsing.
        let merged: String = value.chars().filter(|c| !c.is_whitespace()).collect();
        record.context_window = Value::parse(&merged);
    }),
    (Matcher::Exact("Architecture"), |record, value| {
        record.architecture = Some(value.to_string());
    }),
    (Matcher::Exact("Reasoning"), |record, value| {
        record.reasoning = Some(value.to_lowercase() == "yes");
    }),
    (Matcher::Exact("Visual"), |record, value| {
        record.visual = Some(value.to_lowercase() == "yes");
    }),
    (Matcher::Exact("Open Source / Open Weights"), |record, value| {
        record.open_source = Some(value.to_string());
    }),
    (Matcher::Exact("Output Speed (t/s)"), |record, value| {
        record.speed = Value::parse(value);
    }),
    (Matcher::Exact("Q16"), |record, value| {
        record.memory.q16 = Value::parse(value);
    }),
    (Matcher::Exact("Q8"), |record, value| {
        record.memory.q8 = Value::parse(value);
    }),
    (Matcher::Exact("Q4"), |record, value| {
        record.memory.q4 = Value::parse(value);
    }),
    (Matcher::Exact("SFP8"), |record, value| {
        record.memory.sfp8 = Value::parse(value);
    }),
    (Matcher::Exact("MXFP4"), |record, value| {
        record.memory.mxfp4 = Value::parse(value);
    }),
    (
        Matcher::ContainsAny(&["KV-кэш", r"GB \ 100k token \ FP16"]),
        |record, value| {
            record.kv_cache_per_100k_tokens = Value::parse(value);
        },
    ),
    (
        Matcher::Exact("AA-LCR (Long Context Reasoning)"),
        |record, value| {
            record.benchmarks.aa_lcr = Value::parse(value);
        },
    ),
    (Matcher::Exact("AA-Omniscience Accuracy"), |record, value| {
        record.benchmarks.aa_omniscience_accuracy = Value::parse(value);
    }),
    (
        Matcher::ContainsAny(&[
            "AA-Omniscience non-halucination",
            "AA-Omniscience Non-Hallucination",
        ]),
        |record, value| {
            record.benchmarks.aa_omniscience_non_hallucination = Value::parse(value);
        },
    ),
    (Matcher::Exact("IFBench"), |record, value| {
        record.benchmarks.ifbench = Value::parse(value);
    }),
    (Matcher::Contains("MMMU Pro"), |record, value| {
        // "no" means the benchmark was not run, not a score of "no".
        record.benchmarks.mmmu_pro = match Value::parse(value) {
            Value::Str(s) if s.eq_ignore_ascii_case("no") => Value::Absent,
            parsed => parsed,
        };
    }),
];

/// Split the document into model blocks and parse each into a record,
/// preserving document order.
///
/// Blocks where no rule matched any line are dropped. This function has no
/// failure path: malformed lines degrade to absent fields.
pub fn extract_records(content: &str) -> Vec<ModelRecord> {
    let mut records = Vec::new();

    for block in MODEL_HEADING.split(content).skip(1) {
        let mut record = ModelRecord::default();
        let mut recognized = 0usize;

        for line in block.lines() {
            let rest = match line.trim().strip_prefix('-') {
                Some(rest) => rest.trim(),
                None => continue,
            };
            let (key, value) = match rest.split_once(':') {
                Some((key, value)) => (key.trim(), value.trim()),
                None => continue,
            };
            if let Some((_, apply)) = RULES.iter().find(|(matcher, _)| matcher.matches(key)) {
                apply(&mut record, value);
                recognized += 1;
            }
        }

        if recognized > 0 {
            records.push(record);
        }
    }

    records
}
