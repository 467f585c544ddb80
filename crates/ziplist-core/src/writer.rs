//! Writing records, one per line

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::debug;

use crate::error::Result;
use crate::record::Record;

/// Write every record as `<name> <path>\n`.
///
/// Stops at the first error; records before it have already been handed
/// to `writer`. Returns the number of records written.
pub fn write_records<W, I>(writer: &mut W, records: I) -> Result<usize>
where
    W: Write,
    I: IntoIterator<Item = Result<Record>>,
{
    let mut written = 0;
    for record in records {
        writeln!(writer, "{}", record?)?;
        written += 1;
    }
    Ok(written)
}

/// Create or truncate `path` and write every record into it.
///
/// The file is closed on every exit path. On error the records preceding the
/// failing one remain in the file.
pub fn write_file<P, I>(path: P, records: I) -> Result<usize>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = Result<Record>>,
{
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    let written = write_records(&mut writer, records)?;
    writer.flush()?;
    debug!("Wrote {written} records to {}", path.display());
    Ok(written)
}
