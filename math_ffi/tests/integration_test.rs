//! Integration tests for math_ffi.
//!
//! The exports must be bit-identical to the kernel functions: the
//! boundary is pure delegation, verified here against the kernel's
//! golden case set.

use std::fs;
use std::path::PathBuf;

use math_kernel::arithmetic;
use math_kernel::conformance::ConformanceCase;

/// Load golden cases from the kernel's test fixtures.
fn load_golden_cases() -> Vec<ConformanceCase> {
    let golden_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("math_kernel")
        .join("tests")
        .join("golden")
        .join("cases.json");
    let json_str = fs::read_to_string(&golden_path)
        .expect("Failed to read golden cases.json");
    serde_json::from_str(&json_str).expect("Failed to parse golden cases.json")
}

fn call_export(op: &str, input: i64) -> i64 {
    match op {
        "square" => math_ffi::square(input),
        "cube" => math_ffi::cube(input),
        "factorial" => math_ffi::factorial(input),
        other => panic!("No export for operation: {:?}", other),
    }
}

// ─────────────────────────────────────────────────────────────
// Test 1: exports_match_golden_cases
// ─────────────────────────────────────────────────────────────

#[test]
fn exports_match_golden_cases() {
    for case in &load_golden_cases() {
        assert_eq!(
            call_export(&case.op, case.input),
            case.expected,
            "Export {}({}) does not match reference",
            case.op,
            case.input
        );
    }
}

// ─────────────────────────────────────────────────────────────
// Test 2: exports_delegate_to_kernel
// ─────────────────────────────────────────────────────────────

#[test]
fn exports_delegate_to_kernel() {
    for x in -50..=50i64 {
        assert_eq!(math_ffi::square(x), arithmetic::square(x));
        assert_eq!(math_ffi::cube(x), arithmetic::cube(x));
        assert_eq!(math_ffi::factorial(x), arithmetic::factorial(x));
    }
}

// ─────────────────────────────────────────────────────────────
// Test 3: sentinel_crosses_the_boundary
// ─────────────────────────────────────────────────────────────

#[test]
fn sentinel_crosses_the_boundary() {
    assert_eq!(math_ffi::factorial(-1), 0);
    assert_eq!(math_ffi::factorial(-100), 0);
    assert_eq!(math_ffi::factorial(0), 1);
    assert_eq!(math_ffi::factorial(1), 1);
}

// ─────────────────────────────────────────────────────────────
// Test 4: width_is_preserved_across_the_boundary
// ─────────────────────────────────────────────────────────────

#[test]
fn width_is_preserved_across_the_boundary() {
    // Results past i32 range must cross unchanged.
    assert_eq!(math_ffi::square(46341), 2147488281);
    assert_eq!(math_ffi::factorial(20), 2432902008176640000);
    // Wrapping happens at the i64 width, not any narrower one.
    assert_eq!(math_ffi::factorial(21), -4249290049419214848);
}

// ─────────────────────────────────────────────────────────────
// Test 5: kernel_version_export
// ─────────────────────────────────────────────────────────────

#[test]
fn kernel_version_export() {
    assert_eq!(math_ffi::kernel_version(), math_kernel::KERNEL_VERSION);
    assert_eq!(math_ffi::kernel_version(), 1);
}
