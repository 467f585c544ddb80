//! `generate`: write the record file

use std::path::Path;

use anyhow::{Context, Result};
use log::info;
use ziplist_core::{ListingLayout, records, write_file};

use crate::cli::{LayoutArgs, SourceArgs};
use crate::commands::capture;

pub fn execute(source: &SourceArgs, layout: &LayoutArgs, output: &Path, quiet: bool) -> Result<()> {
    let captured = capture(source, quiet)?;
    let layout = ListingLayout::from(layout);

    let records = records(&captured, source.format.into(), &layout)
        .context("Failed to read captured listing")?;
    let written = write_file(output, records)
        .with_context(|| format!("Failed to write records to {}", output.display()))?;

    info!("Wrote {} records to {}", written, output.display());
    Ok(())
}
