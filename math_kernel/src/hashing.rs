/// Math Kernel v1: Canonical Hashing
///
/// Deterministic canonical serialization + SHA-256 hashing of a
/// conformance report. Produces byte-identical output across platforms
/// so parity with the reference implementation is one comparable value.
///
/// Rules:
///   - Outcomes sorted by (op, input): op in UTF-8 byte order, input numeric
///   - kernel_version is the first field (identity binding)
///   - Per-outcome field order: op, input, output
///   - UTF-8 JSON, no whitespace, no float, no platform newline

use serde_json::{Map, Value};
use sha2::{Digest, Sha256};

use crate::conformance::CaseOutcome;
use crate::KERNEL_VERSION;

/// Canonical serialization of a conformance report to UTF-8 JSON bytes.
/// No whitespace. Deterministic field and record order.
pub fn canonical_serialize(outcomes: &[CaseOutcome]) -> Vec<u8> {
    let obj = build_canonical_value(outcomes);
    serde_json::to_string(&obj)
        .expect("canonical_serialize: JSON serialization failed")
        .into_bytes()
}

/// SHA-256 of canonical serialization. Lowercase hex string.
pub fn canonical_hash(outcomes: &[CaseOutcome]) -> String {
    let bytes = canonical_serialize(outcomes);
    let digest = Sha256::digest(&bytes);
    digest
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect::<String>()
}

/// Build the canonical serde_json::Value in strict field order.
///
/// Uses serde_json::Map which preserves insertion order.
/// The reference harness builds the identical structure, so both sides
/// hash the same bytes.
fn build_canonical_value(outcomes: &[CaseOutcome]) -> Value {
    let mut sorted = outcomes.to_vec();
    sorted.sort_by(|a, b| a.op.cmp(&b.op).then_with(|| a.input.cmp(&b.input)));

    let mut results: Vec<Value> = Vec::new();
    for o in &sorted {
        let mut m = Map::new();
        m.insert("op".to_string(), Value::String(o.op.clone()));
        m.insert("input".to_string(), Value::Number(o.input.into()));
        m.insert("output".to_string(), Value::Number(o.output.into()));
        results.push(Value::Object(m));
    }

    // kernel_version MUST be first: it is part of the report identity.
    let mut root = Map::new();
    root.insert(
        "kernel_version".to_string(),
        Value::Number((KERNEL_VERSION as i64).into()),
    );
    root.insert("results".to_string(), Value::Array(results));

    Value::Object(root)
}
