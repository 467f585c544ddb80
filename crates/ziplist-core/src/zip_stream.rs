//! Records straight from a raw zip stream
//!
//! When the listing command prints the archive itself (as `aws s3 cp <uri> -`
//! does), there is no text listing to parse. The local file headers are read
//! in order without seeking, the same way the archive would be streamed off
//! object storage, and each member becomes a record of its uncompressed size
//! and path.

use std::io::Read;

use log::trace;
use zip::read::read_zipfile_from_stream;

use crate::error::{Error, Result};
use crate::layout::ListingLayout;
use crate::record::Record;

/// Signature at the start of every zip local file header
pub const LOCAL_HEADER_SIGNATURE: [u8; 4] = *b"PK\x03\x04";

/// Whether `bytes` start like a zip stream
pub fn is_zip_stream(bytes: &[u8]) -> bool {
    bytes.starts_with(&LOCAL_HEADER_SIGNATURE)
}

/// Iterator over the members of a zip stream.
///
/// Stops after the first error.
#[derive(Debug)]
pub struct ZipRecords<'a, R> {
    reader: R,
    path_prefix: &'a str,
    entries: usize,
    done: bool,
}

impl<'a, R: Read> ZipRecords<'a, R> {
    /// Read members from `reader`, expecting every path under the layout's prefix
    pub fn new(reader: R, layout: &'a ListingLayout) -> Self {
        Self {
            reader,
            path_prefix: &layout.path_prefix,
            entries: 0,
            done: false,
        }
    }

    fn to_record(&self, name: &str, size: u64) -> Result<Record> {
        let suffix = name
            .strip_prefix(self.path_prefix)
            .ok_or_else(|| Error::missing_delimiter(self.entries, self.path_prefix, name))?;
        Ok(Record::new(
            size.to_string(),
            format!("{}{}", self.path_prefix, suffix.trim()),
        ))
    }
}

impl<R: Read> Iterator for ZipRecords<'_, R> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let (name, size) = match read_zipfile_from_stream(&mut self.reader) {
            // Dropping the entry drains its data so the next header lines up
            Ok(Some(file)) => (file.name().to_string(), file.size()),
            Ok(None) => {
                self.done = true;
                return None;
            }
            Err(e) => {
                self.done = true;
                return Some(Err(e.into()));
            }
        };

        self.entries += 1;
        trace!("zip entry {}: {name} ({size} bytes)", self.entries);

        let record = self.to_record(&name, size);
        if record.is_err() {
            self.done = true;
        }
        Some(record)
    }
}
