//! Formatting utilities

use humansize::{DECIMAL, format_size};

/// Format file size in human-readable format
pub fn format_bytes(bytes: u64) -> String {
    format_size(bytes, DECIMAL)
}

/// Format a record's name column as a size when it holds one
pub fn format_record_size(size: Option<u64>) -> String {
    size.map_or_else(|| "-".to_string(), format_bytes)
}

/// Summary line for a set of records
pub fn format_summary(count: usize, total_bytes: u64) -> String {
    let noun = if count == 1 { "record" } else { "records" };
    format!("{count} {noun}, {}", format_bytes(total_bytes))
}
