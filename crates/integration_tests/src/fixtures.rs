use crate::constants::{EXPECTED_DIR, RESPONSES_DIR};
use anyhow::{Context, Result};
use portfolio_ingest::ApiSource;
use serde_json::Value;
use std::path::{Path, PathBuf};

pub struct FixtureLoader {
    fixtures_dir: PathBuf,
}

impl FixtureLoader {
    /// Create a new fixture loader
    pub fn new(fixtures_dir: impl AsRef<Path>) -> Self {
        Self {
            fixtures_dir: fixtures_dir.as_ref().to_path_buf(),
        }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.fixtures_dir.join(path)
        }
    }

    /// Load a JSON fixture file
    pub fn load(&self, path: impl AsRef<Path>) -> Result<Value> {
        let full_path = self.resolve(path.as_ref());

        let content = std::fs::read_to_string(&full_path)
            .context(format!("Failed to read fixture file: {:?}", full_path))?;

        let json: Value = serde_json::from_str(&content)
            .context(format!("Failed to parse JSON fixture: {:?}", full_path))?;

        Ok(json)
    }

    /// Load a saved provider response by file stem
    pub fn response(&self, name: &str) -> Result<Value> {
        self.load(Path::new(RESPONSES_DIR).join(format!("{}.json", name)))
    }

    /// Load the serialized output expected for a response
    pub fn expected(&self, name: &str) -> Result<Value> {
        self.load(Path::new(EXPECTED_DIR).join(format!("{}.json", name)))
    }

    /// Check if a fixture file exists
    pub fn exists(&self, path: impl AsRef<Path>) -> bool {
        self.resolve(path.as_ref()).exists()
    }

    /// Get the fixtures directory path
    pub fn fixtures_dir(&self) -> &Path {
        &self.fixtures_dir
    }
}

/// Responses that have a matching file under `expected/`, with their source.
pub const GOLDEN_RESPONSES: &[(&str, ApiSource)] = &[
    ("etherscan_txlist", ApiSource::Etherscan),
    ("etherscan_txlistinternal", ApiSource::EtherscanInternal),
    ("covalent_transactions", ApiSource::Covalent),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_golden_response_has_expected_output() {
        let loader = FixtureLoader::new(crate::fixtures_dir());
        for (name, _) in GOLDEN_RESPONSES {
            assert!(loader.exists(Path::new(RESPONSES_DIR).join(format!("{}.json", name))));
            assert!(loader.exists(Path::new(EXPECTED_DIR).join(format!("{}.json", name))));
        }
    }

    #[test]
    fn test_load_missing_fixture_fails() {
        let loader = FixtureLoader::new(crate::fixtures_dir());
        assert!(loader.response("does_not_exist").is_err());
    }
}
