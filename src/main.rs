mod data;
mod report;

use std::path::Path;

use anyhow::{Context, Result};

use data::{loader, summary};

fn main() -> Result<()> {
    env_logger::init();

    let mut dataset = loader::load(Path::new(loader::INPUT_FILE))
        .with_context(|| format!("loading {}", loader::INPUT_FILE))?;
    log::info!("loaded {} records from {}", dataset.len(), loader::INPUT_FILE);

    dataset.derive_power();

    let summary = summary::summarize(&dataset)
        .with_context(|| format!("summarizing {}", loader::INPUT_FILE))?;
    report::print(&summary).context("writing report")?;

    Ok(())
}
