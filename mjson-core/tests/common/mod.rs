//! Test infrastructure for the mjson parser
//!
//! Provides fixture loading, stochastic test generation, and assertion helpers.

#![allow(dead_code)]

mod harness;

pub use loader::{TestCase, Expected, load_fixtures_by_name};
pub use harness::{run_test, run_with_variations, to_expected, with_whitespace};
pub use generators::Gen;
