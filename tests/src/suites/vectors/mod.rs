//! Key-agreement vector suites stored as TOML under `src/vectors`
//!
//! A suite is a list of groups, each a list of cases. A case names a secret
//! scalar and, depending on what it checks, the expected own public value,
//! a peer public value and the expected shared x-coordinate. Invalid cases
//! name a fragment of the error message the agreement must fail with.

pub mod error;
pub mod loader;
pub mod model;
pub mod runner;

pub use error::{EngineError, Result};
pub use loader::load_suite;
pub use model::{AgreementCase, CaseGroup, ExpectedResult, VectorSuite};
pub use runner::{run_suite, SuiteReport};
