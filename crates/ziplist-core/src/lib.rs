//! Archive listing to `name path` records.
//!
//! A [`ListingSource`] captures the raw output of an external listing tool,
//! [`records`] turns it into [`Record`]s according to a [`ListingLayout`], and
//! [`write_file`] stores them one per line.

#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

pub mod error;
pub mod layout;
pub mod lister;
pub mod record;
pub mod transform;
pub mod writer;
pub mod zip_stream;

pub use error::{Error, Result};
pub use layout::ListingLayout;
pub use lister::{CapturedOutput, CommandSource, FileSource, ListingSource};
pub use record::Record;
pub use transform::{InputFormat, ListingRecords, Records, records};
pub use writer::{write_file, write_records};
pub use zip_stream::{ZipRecords, is_zip_stream};
