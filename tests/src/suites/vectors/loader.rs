//! Loads vector suites from TOML files

use super::error::{EngineError, Result};
use super::model::VectorSuite;
use std::fs;
use std::path::{Path, PathBuf};

fn vectors_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("src")
        .join("vectors")
}

/// Load `src/vectors/<name>.toml`
pub fn load_suite(name: &str) -> Result<VectorSuite> {
    let path = vectors_dir().join(format!("{}.toml", name));
    let text = fs::read_to_string(&path).map_err(|source| EngineError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_suite(&text)
}

/// Parse a suite from TOML text
pub fn parse_suite(text: &str) -> Result<VectorSuite> {
    Ok(toml::from_str(text)?)
}
