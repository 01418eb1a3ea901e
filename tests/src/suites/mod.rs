//! Test suites driven by vector files
pub mod vectors;
