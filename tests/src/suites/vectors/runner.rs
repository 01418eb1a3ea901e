//! Runs vector suites against the key-agreement implementations

use super::error::{EngineError, Result};
use super::model::{AgreementCase, ExpectedResult, VectorSuite};
use gfecdh_api::KeyAgreement;
use gfecdh_kem::{B163PublicKey, B163SecretKey, EcdhB163};

/// Outcome of a suite run
#[derive(Debug, Default)]
pub struct SuiteReport {
    pub passed: usize,
    pub failures: Vec<EngineError>,
}

impl SuiteReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Run every case of `suite`, collecting failures instead of stopping
pub fn run_suite(suite: &VectorSuite) -> Result<SuiteReport> {
    let ecdh = match suite.algorithm.as_str() {
        "ECDH-B163" => EcdhB163::new()?,
        other => return Err(EngineError::Unsupported(other.to_string())),
    };

    let mut report = SuiteReport::default();
    for group in &suite.groups {
        for case in &group.cases {
            match run_case(&ecdh, case) {
                Ok(()) => report.passed += 1,
                Err(e) => report.failures.push(e),
            }
        }
    }
    Ok(report)
}

fn run_case(ecdh: &EcdhB163, case: &AgreementCase) -> Result<()> {
    let outcome = agree(ecdh, case);
    match (case.result, outcome) {
        (ExpectedResult::Valid, outcome) => outcome,
        (ExpectedResult::Invalid, Ok(())) => Err(EngineError::UnexpectedOutcome {
            id: case.id,
            expected: case.error_contains.clone().unwrap_or_default(),
            actual: "success".into(),
        }),
        (ExpectedResult::Invalid, Err(e)) => {
            let expected = case.error_contains.as_deref().unwrap_or("");
            let actual = e.to_string();
            if actual.contains(expected) {
                Ok(())
            } else {
                Err(EngineError::UnexpectedOutcome {
                    id: case.id,
                    expected: expected.to_string(),
                    actual,
                })
            }
        }
    }
}

fn agree(ecdh: &EcdhB163, case: &AgreementCase) -> Result<()> {
    let secret = B163SecretKey::from_bytes(&hex::decode(&case.secret)?)?;

    if let Some(expected) = &case.public {
        let public = ecdh.public_key(&secret)?;
        check(case.id, "public value", expected, public.as_ref())?;
    }

    if let Some(peer) = &case.peer {
        let peer = B163PublicKey::from_bytes(&hex::decode(peer)?)?;
        let shared = ecdh.agree(&secret, &peer)?;
        match &case.shared {
            Some(expected) => check(case.id, "shared secret", expected, shared.as_ref())?,
            None if case.result == ExpectedResult::Valid => {
                return Err(EngineError::MissingField {
                    id: case.id,
                    field: "shared",
                })
            }
            None => {}
        }
    }
    Ok(())
}

fn check(id: u64, what: &'static str, expected: &str, actual: &[u8]) -> Result<()> {
    let actual = hex::encode(actual);
    if actual != expected.to_ascii_lowercase() {
        return Err(EngineError::Mismatch {
            id,
            what,
            expected: expected.to_string(),
            actual,
        });
    }
    Ok(())
}
