//! Script to regenerate the expected outputs from the saved responses
//! Run it after an intentional change to the serialized form, then review the diff

use anyhow::{Context, Result};
use integration_tests::constants::EXPECTED_DIR;
use integration_tests::fixtures::GOLDEN_RESPONSES;
use integration_tests::{FixtureLoader, fixtures_dir};
use portfolio_ingest::{ErrorPolicy, decode_response};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    // Optional fixture name filter, e.g. `update_fixtures covalent`
    let filter = std::env::args().nth(1);

    println!("{}", "=".repeat(60));
    println!("Fixture Updater");
    println!("{}", "=".repeat(60));

    let loader = FixtureLoader::new(fixtures_dir());
    let expected_dir = loader.fixtures_dir().join(EXPECTED_DIR);
    std::fs::create_dir_all(&expected_dir)?;

    let mut updated = 0;
    for (name, source) in GOLDEN_RESPONSES {
        if filter.as_deref().is_some_and(|f| !name.contains(f)) {
            continue;
        }

        let response = loader.response(name)?;
        let batch = decode_response(*source, &response, ErrorPolicy::Abort)
            .with_context(|| format!("Failed to decode fixture {}", name))?;

        let path = expected_dir.join(format!("{}.json", name));
        let mut rendered = serde_json::to_string_pretty(&batch.serialize())?;
        rendered.push('\n');
        std::fs::write(&path, rendered).with_context(|| format!("Failed to write {:?}", path))?;

        println!("  {} -> {} records", name, batch.len());
        updated += 1;
    }

    println!("Updated {} fixture(s)", updated);
    Ok(())
}
