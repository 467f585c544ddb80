//! `show`: print records instead of writing them

use anyhow::{Context, Result};
use ziplist_core::{ListingLayout, Record, records};

use crate::cli::{LayoutArgs, SourceArgs};
use crate::commands::capture;
use crate::utils::{format_summary, matches_pattern, records_table};

/// Output options for `show`
#[derive(Debug, Default)]
pub struct ShowOptions {
    /// Wildcard applied to record paths
    pub filter: Option<String>,
    /// Render a table
    pub long: bool,
    /// Render JSON
    pub json: bool,
    /// Hide the spinner
    pub quiet: bool,
}

pub fn execute(source: &SourceArgs, layout: &LayoutArgs, options: &ShowOptions) -> Result<()> {
    let captured = capture(source, options.quiet)?;
    let layout = ListingLayout::from(layout);

    let all: Vec<Record> = records(&captured, source.format.into(), &layout)
        .context("Failed to read captured listing")?
        .collect::<ziplist_core::Result<_>>()
        .context("Failed to parse listing")?;

    let pattern = options.filter.as_deref().unwrap_or("*");
    let selected = select(&all, pattern);

    if options.json {
        println!("{}", serde_json::to_string_pretty(&selected)?);
        return Ok(());
    }

    if selected.is_empty() {
        println!("No records found matching pattern: {}", pattern);
        return Ok(());
    }

    if options.long {
        records_table(&selected).printstd();
        let total: u64 = selected.iter().filter_map(|r| r.size()).sum();
        println!("{}", format_summary(selected.len(), total));
    } else {
        for record in selected {
            println!("{}", record);
        }
    }

    Ok(())
}

fn select<'a>(records: &'a [Record], pattern: &str) -> Vec<&'a Record> {
    records
        .iter()
        .filter(|record| matches_pattern(&record.path, pattern))
        .collect()
}
