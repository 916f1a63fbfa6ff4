//! Test harness for running fixtures with stochastic whitespace variations

use std::collections::BTreeMap;

use crate::common::{Expected, Gen, TestCase};
use mjson_core::{Document, JsonObject, Parser, Value};

/// Result of running a test
#[derive(Debug)]
pub struct TestResult {
    pub passed: bool,
    pub input: String,
    pub expected: String,
    pub actual: String,
    pub seed: u64,
    pub errors: Vec<String>,
}

/// Convert a parsed document into the fixture representation
pub fn to_expected(doc: &Document) -> BTreeMap<String, Expected> {
    doc.entries()
        .map(|(key, value)| {
            let value = match value {
                Value::String(s) => Expected::String(s.to_string()),
                Value::Object(child) => Expected::Object(to_expected(child)),
            };
            (key.to_string(), value)
        })
        .collect()
}

/// Insert random whitespace at every token boundary outside string literals.
///
/// Whitespace is legal between any two tokens of the grammar, so this never
/// changes whether an input parses or which error it produces.
pub fn with_whitespace(input: &str, gen: &mut Gen) -> String {
    let mut out = gen.whitespace();
    let mut in_string = false;
    let mut escaped = false;

    for c in input.chars() {
        out.push(c);
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
                out.push_str(&gen.whitespace());
            }
        } else if c == '"' {
            in_string = true;
        } else if matches!(c, '{' | '}' | ':' | ',') {
            out.push_str(&gen.whitespace());
        }
    }
    out
}

fn check(input: &str, case: &TestCase, compare_offsets: bool) -> (String, String, Vec<String>) {
    let mut errors = Vec::new();
    let result = Parser::new().parse(input);

    let actual = match &result {
        Ok(doc) => format!("{:?}", to_expected(doc)),
        Err(err) => format!("Error {:?} at {}", err.code, err.offset),
    };
    let expected = match (&case.doc, &case.error) {
        (Some(doc), _) => format!("{:?}", doc),
        (None, Some(code)) => format!("Error {}", code),
        (None, None) => String::new(),
    };

    match (&result, &case.doc, &case.error) {
        (Ok(doc), Some(expected_doc), _) => {
            if &to_expected(doc) != expected_doc {
                errors.push("Document mismatch".to_string());
            }
            // Key listings must agree with lookups.
            for key in doc.string_keys() {
                if doc.get_string(key).is_none() || doc.get_object(key).is_some() {
                    errors.push(format!("String key {:?} not resolvable as string only", key));
                }
            }
            for key in doc.object_keys() {
                if doc.get_object(key).is_none() || doc.get_string(key).is_some() {
                    errors.push(format!("Object key {:?} not resolvable as object only", key));
                }
            }
        }
        (Ok(_), None, Some(code)) => {
            errors.push(format!("Expected error {}, parse succeeded", code));
        }
        (Err(err), _, Some(code)) => {
            if &format!("{:?}", err.code) != code {
                errors.push(format!("Expected error {}, got {:?}", code, err.code));
            }
            if compare_offsets && err.offset > input.len() {
                errors.push(format!("Error offset {} past end of input", err.offset));
            }
        }
        (Err(err), Some(_), None) => {
            errors.push(format!("Unexpected error: {}", err));
        }
        _ => errors.push("Fixture sets neither `doc` nor `error`".to_string()),
    }

    (expected, actual, errors)
}

/// Run a single test case (canonical, no variations)
pub fn run_test(case: &TestCase) -> TestResult {
    let (expected, actual, errors) = check(&case.input, case, true);

    TestResult {
        passed: errors.is_empty(),
        input: case.input.clone(),
        expected,
        actual,
        seed: 0,
        errors,
    }
}

/// Run test with stochastic variations
///
/// Re-runs the case with random tab/newline/space runs injected before the
/// first token and after every structural token. The outcome (document or
/// error code) must not change.
pub fn run_with_variations(case: &TestCase, gen: &mut Gen) -> TestResult {
    let input = with_whitespace(&case.input, gen);
    let (expected, actual, errors) = check(&input, case, false);

    TestResult {
        passed: errors.is_empty(),
        input,
        expected,
        actual,
        seed: gen.seed,
        errors,
    }
}

impl TestResult {
    /// Print detailed failure info
    pub fn print_failure(&self, case_id: &str) {
        eprintln!("\n=== FAILED: {} ===", case_id);
        eprintln!("Seed: {} (set MJSON_TEST_SEED={} to reproduce)", self.seed, self.seed);
        eprintln!("\nInput:");
        eprintln!("{:?}", self.input);
        eprintln!("\nExpected:");
        eprintln!("  {}", self.expected);
        eprintln!("\nActual:");
        eprintln!("  {}", self.actual);
        eprintln!("\nErrors:");
        for e in &self.errors {
            eprintln!("  - {}", e);
        }
    }
}
