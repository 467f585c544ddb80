//! The derived `name path` record

use std::fmt;

/// One output line pairing a derived name with a path.
///
/// For `unzip -l` style listings the name is the uncompressed size column
/// and the path is the archive member path, e.g. `"1234 wav/id10270/00001.wav"`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Record {
    /// Text left of the name delimiter, trimmed
    pub name: String,
    /// Path prefix followed by the trimmed path suffix
    pub path: String,
}

impl Record {
    /// Create a record from its two fields
    pub fn new<N: Into<String>, P: Into<String>>(name: N, path: P) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    /// The name field parsed as a byte count, if it is one
    pub fn size(&self) -> Option<u64> {
        self.name.parse().ok()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.path)
    }
}
