/// Math Kernel v1: Cross-Language Test Harness (Rust)
///
/// Loads conformance fixtures dumped from the C reference module,
/// replays every case through the Rust kernel, and compares per-case
/// outputs and canonical hashes.

use std::fs;
use std::path::Path;

use math_kernel::conformance::{run_cases, ConformanceCase};
use math_kernel::hashing::canonical_hash;

fn main() {
    // Try to find test_fixtures.json relative to the binary or in the crate root
    let fixture_paths = [
        "test_fixtures.json",
        "../test_fixtures.json",
        "math_kernel/test_fixtures.json",
    ];

    let mut fixture_data = None;
    for p in &fixture_paths {
        if Path::new(p).exists() {
            fixture_data = Some(fs::read_to_string(p).expect("Failed to read fixture file"));
            println!("Loaded fixtures from: {}", p);
            break;
        }
    }

    let data = fixture_data.expect(
        "Could not find test_fixtures.json. Dump it from the reference module first.",
    );

    let fixtures: Vec<serde_json::Value> =
        serde_json::from_str(&data).expect("Failed to parse fixtures JSON");

    let mut all_passed = true;
    let mut total = 0;
    let mut passed = 0;

    for fixture in &fixtures {
        let suite = fixture["suite"].as_str().unwrap();
        let expected_hash = fixture["expected_hash"].as_str().unwrap();

        let cases: Vec<ConformanceCase> =
            serde_json::from_value(fixture["cases"].clone())
                .expect("Failed to parse conformance cases");

        // Run 1
        let outcomes = run_cases(&cases);
        let h1 = canonical_hash(&outcomes);

        // Run 2 (determinism check)
        let outcomes2 = run_cases(&cases);
        let h2 = canonical_hash(&outcomes2);

        let mut value_mismatches = Vec::new();
        for (case, outcome) in cases.iter().zip(&outcomes) {
            if outcome.output != case.expected {
                value_mismatches.push(format!(
                    "{}({}): rust={} reference={}",
                    case.op, case.input, outcome.output, case.expected
                ));
            }
        }

        total += 1;
        let hash_match = h1 == expected_hash;
        let determ_match = h1 == h2;
        let ok = hash_match && determ_match && value_mismatches.is_empty();

        if ok {
            passed += 1;
            println!(
                "[PASS] suite={}, cases={}: hash={}",
                suite,
                cases.len(),
                h1
            );
        } else {
            all_passed = false;
            println!("[FAIL] suite={}, cases={}:", suite, cases.len());
            if !hash_match {
                println!("  Hash mismatch: rust={} reference={}", h1, expected_hash);
            }
            if !determ_match {
                println!("  Determinism fail: run1={} run2={}", h1, h2);
            }
            for m in &value_mismatches {
                println!("  Value mismatch: {}", m);
            }
        }
    }

    println!("\n===========================================");
    println!("Results: {}/{} passed", passed, total);
    if all_passed {
        println!("[OK] All cross-language conformance checks PASSED.");
    } else {
        println!("[FAIL] Some checks failed.");
        std::process::exit(1);
    }
}
