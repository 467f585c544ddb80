//! Command implementations

pub mod generate;
pub mod show;

use anyhow::{Context, Result};
use ziplist_core::{CapturedOutput, CommandSource, FileSource, ListingSource};

use crate::cli::SourceArgs;
use crate::utils::create_spinner;

/// Pick the listing source described by the arguments
pub fn build_source(args: &SourceArgs) -> Box<dyn ListingSource> {
    if let Some(path) = &args.input {
        return Box::new(FileSource::new(path));
    }

    let source = CommandSource::from_argv(&args.command).unwrap_or_default();
    Box::new(source.strict(args.strict))
}

/// Run the listing source to completion behind a spinner
pub fn capture(args: &SourceArgs, quiet: bool) -> Result<CapturedOutput> {
    let source = build_source(args);
    let description = source.describe();

    let spinner = create_spinner(&format!("Listing {description}"), quiet);
    let output = source.capture();
    spinner.finish_and_clear();

    output.with_context(|| format!("Failed to capture listing from `{description}`"))
}
