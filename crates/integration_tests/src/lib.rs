pub mod fixtures;
pub mod utils;

pub use fixtures::FixtureLoader;
pub use utils::*;

/// Test configuration constants
pub mod constants {
    /// Saved provider responses, relative to the fixtures directory
    pub const RESPONSES_DIR: &str = "responses";

    /// Serialized output expected for each response, relative to the fixtures directory
    pub const EXPECTED_DIR: &str = "expected";
}

/// Fixture directory of this crate
pub fn fixtures_dir() -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

/// Initialize tracing for tests
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
