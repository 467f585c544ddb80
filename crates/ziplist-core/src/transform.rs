//! From captured output to records

use std::fmt;
use std::io::Cursor;
use std::vec;

use log::debug;

use crate::error::Result;
use crate::layout::ListingLayout;
use crate::lister::CapturedOutput;
use crate::record::Record;
use crate::zip_stream::{ZipRecords, is_zip_stream};

/// How captured standard output should be interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFormat {
    /// Zip stream if it starts with a local header signature, text otherwise
    #[default]
    Auto,
    /// Text listing in the layout's positional format
    Listing,
    /// Raw zip archive bytes
    Zip,
}

impl InputFormat {
    /// Resolve `Auto` against the captured bytes
    pub fn resolve(self, bytes: &[u8]) -> Self {
        match self {
            Self::Auto if is_zip_stream(bytes) => Self::Zip,
            Self::Auto => Self::Listing,
            other => other,
        }
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Auto => "auto",
            Self::Listing => "listing",
            Self::Zip => "zip",
        })
    }
}

/// Lazily parsed data rows of a text listing
#[derive(Debug)]
pub struct ListingRecords<'a> {
    rows: vec::IntoIter<(usize, &'a str)>,
    layout: &'a ListingLayout,
}

impl<'a> ListingRecords<'a> {
    /// Parse the data rows of `text` according to `layout`
    pub fn new(text: &'a str, layout: &'a ListingLayout) -> Self {
        let rows = layout.data_rows(text);
        debug!("Listing has {} data rows", rows.len());
        Self {
            rows: rows.into_iter(),
            layout,
        }
    }
}

impl Iterator for ListingRecords<'_> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        let (line_no, row) = self.rows.next()?;
        let record = self.layout.parse_row(line_no, row);
        if record.is_err() {
            // One bad row aborts the whole listing
            self.rows = Vec::new().into_iter();
        }
        Some(record)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.rows.len()))
    }
}

/// Records produced from captured output, whichever format it was in
#[derive(Debug)]
pub enum Records<'a> {
    /// Rows of a text listing
    Listing(ListingRecords<'a>),
    /// Members of a zip stream
    Zip(ZipRecords<'a, Cursor<&'a [u8]>>),
}

impl Iterator for Records<'_> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Listing(records) => records.next(),
            Self::Zip(records) => records.next(),
        }
    }
}

/// Turn captured standard output into records.
///
/// Text listings must be valid UTF-8. Records are produced lazily; the first
/// malformed row yields an error and ends the iteration.
pub fn records<'a>(
    output: &'a CapturedOutput,
    format: InputFormat,
    layout: &'a ListingLayout,
) -> Result<Records<'a>> {
    layout.validate()?;

    let format = format.resolve(&output.stdout);
    debug!("Interpreting {} bytes as {format}", output.stdout.len());

    match format {
        InputFormat::Zip => Ok(Records::Zip(ZipRecords::new(
            Cursor::new(output.stdout.as_slice()),
            layout,
        ))),
        _ => {
            let text = std::str::from_utf8(&output.stdout)?;
            Ok(Records::Listing(ListingRecords::new(text, layout)))
        }
    }
}
