//! Pure data model for key-agreement vectors

use serde::Deserialize;

/// Whether a case must succeed or be rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpectedResult {
    #[default]
    Valid,
    Invalid,
}

/// One agreement or derivation check
#[derive(Debug, Clone, Deserialize)]
pub struct AgreementCase {
    pub id: u64,
    pub secret: String,
    #[serde(default)]
    pub public: Option<String>,
    #[serde(default)]
    pub peer: Option<String>,
    #[serde(default)]
    pub shared: Option<String>,
    #[serde(default)]
    pub result: ExpectedResult,
    #[serde(default)]
    pub error_contains: Option<String>,
}

/// Cases sharing a purpose
#[derive(Debug, Clone, Deserialize)]
pub struct CaseGroup {
    pub name: String,
    /// KAT / AFT / VAL
    pub test_type: String,
    #[serde(default)]
    pub cases: Vec<AgreementCase>,
}

/// A whole vector file
#[derive(Debug, Clone, Deserialize)]
pub struct VectorSuite {
    pub algorithm: String,
    pub curve: String,
    pub groups: Vec<CaseGroup>,
}

impl VectorSuite {
    /// Total number of cases across all groups
    pub fn case_count(&self) -> usize {
        self.groups.iter().map(|g| g.cases.len()).sum()
    }
}
