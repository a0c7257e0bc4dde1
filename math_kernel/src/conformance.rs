/// Math Kernel v1: Conformance Cases
///
/// Cross-language parity checking. A case pins one (op, input, expected)
/// triple dumped from the reference implementation; running a case
/// evaluates the same op through this kernel so the two can be compared
/// value-by-value and hash-by-hash.

use serde::{Deserialize, Serialize};

use crate::arithmetic::{cube, factorial, square};

/// One pinned input/output pair from the reference implementation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConformanceCase {
    pub op: String,
    pub input: i64,
    pub expected: i64,
}

/// Result of evaluating one case through this kernel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CaseOutcome {
    pub op: String,
    pub input: i64,
    pub output: i64,
}

/// Evaluate one operation by name.
///
/// Panics on an unknown name: a fixture naming an op the kernel does not
/// have is corrupt input, not a recoverable condition.
pub fn evaluate(op: &str, input: i64) -> i64 {
    match op {
        "square" => square(input),
        "cube" => cube(input),
        "factorial" => factorial(input),
        other => panic!("Unknown operation in conformance case: {:?}", other),
    }
}

/// Evaluate every case, preserving fixture order.
/// Canonical ordering is applied at serialization time, not here.
pub fn run_cases(cases: &[ConformanceCase]) -> Vec<CaseOutcome> {
    cases
        .iter()
        .map(|c| CaseOutcome {
            op: c.op.clone(),
            input: c.input,
            output: evaluate(&c.op, c.input),
        })
        .collect()
}
