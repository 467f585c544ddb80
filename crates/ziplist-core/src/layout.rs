//! Positional layout of a text archive listing
//!
//! Listing tools print a few header rows, one row per archive member and a
//! few summary rows. [`ListingLayout`] names those conventions instead of
//! hiding them in the parser. The defaults match `unzip -l`:
//!
//! ```text
//! Archive:  vox1_test_wav.zip
//!   Length      Date    Time    Name
//! ---------  ---------- -----   ----
//!     45422  05-29-2020 10:00   wav/id10270/5r0dWxy17C8/00001.wav
//! ---------                     -------
//!     45422                     1 file
//! ```

use log::trace;

use crate::error::{Error, Result};
use crate::record::Record;

/// Header rows dropped by default
pub const DEFAULT_SKIP_HEAD: usize = 3;

/// Footer rows dropped by default (the trailing newline counts as one)
pub const DEFAULT_SKIP_TAIL: usize = 3;

/// Marker ending the name field by default
pub const DEFAULT_NAME_DELIMITER: &str = "  05-29";

/// Marker preceding the path suffix by default
pub const DEFAULT_PATH_DELIMITER: &str = "   wav/";

/// Segment prepended to every path suffix by default
pub const DEFAULT_PATH_PREFIX: &str = "wav/";

/// Describes where data rows sit in a listing and how to split them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingLayout {
    /// Number of leading lines that are not data rows
    pub skip_head: usize,
    /// Number of trailing lines that are not data rows
    pub skip_tail: usize,
    /// The name field is everything before the first occurrence of this
    pub name_delimiter: String,
    /// The path suffix is everything after the first occurrence of this
    pub path_delimiter: String,
    /// Prepended to the path suffix in the produced record
    pub path_prefix: String,
}

impl Default for ListingLayout {
    fn default() -> Self {
        Self {
            skip_head: DEFAULT_SKIP_HEAD,
            skip_tail: DEFAULT_SKIP_TAIL,
            name_delimiter: DEFAULT_NAME_DELIMITER.to_string(),
            path_delimiter: DEFAULT_PATH_DELIMITER.to_string(),
            path_prefix: DEFAULT_PATH_PREFIX.to_string(),
        }
    }
}

impl ListingLayout {
    /// Set the number of header and footer rows
    pub fn with_skip(mut self, head: usize, tail: usize) -> Self {
        self.skip_head = head;
        self.skip_tail = tail;
        self
    }

    /// Set the name and path delimiters
    pub fn with_delimiters<N: Into<String>, P: Into<String>>(mut self, name: N, path: P) -> Self {
        self.name_delimiter = name.into();
        self.path_delimiter = path.into();
        self
    }

    /// Set the path prefix
    pub fn with_path_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.path_prefix = prefix.into();
        self
    }

    /// Reject layouts whose delimiters would match everywhere
    pub fn validate(&self) -> Result<()> {
        if self.name_delimiter.is_empty() {
            return Err(Error::invalid_layout("name delimiter is empty"));
        }
        if self.path_delimiter.is_empty() {
            return Err(Error::invalid_layout("path delimiter is empty"));
        }
        Ok(())
    }

    /// Split `text` on `'\n'` and return the data rows with their 1-based
    /// line numbers.
    ///
    /// When the text has no more lines than `skip_head + skip_tail`, there
    /// are no data rows.
    pub fn data_rows<'a>(&self, text: &'a str) -> Vec<(usize, &'a str)> {
        let lines: Vec<&str> = text.split('\n').collect();
        let end = lines.len().saturating_sub(self.skip_tail);
        if self.skip_head >= end {
            return Vec::new();
        }

        lines[self.skip_head..end]
            .iter()
            .enumerate()
            .map(|(i, line)| (self.skip_head + i + 1, *line))
            .collect()
    }

    /// Extract the record from one data row.
    ///
    /// Only a missing path delimiter is an error.
    pub fn parse_row(&self, line_no: usize, row: &str) -> Result<Record> {
        // Without the name marker the whole row becomes the name
        let name = row
            .split_once(self.name_delimiter.as_str())
            .map_or(row, |(name, _)| name);
        let (_, suffix) = row
            .split_once(self.path_delimiter.as_str())
            .ok_or_else(|| Error::missing_delimiter(line_no, &self.path_delimiter, row))?;

        let record = Record::new(name.trim(), format!("{}{}", self.path_prefix, suffix.trim()));
        trace!("line {line_no}: {record}");
        Ok(record)
    }
}
