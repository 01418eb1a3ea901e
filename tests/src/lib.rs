//! Known-answer vectors and test harness for the gfecdh library
pub mod suites;

pub use suites::vectors::{load_suite, run_suite, SuiteReport};
