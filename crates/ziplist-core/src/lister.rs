//! Capturing the raw output of a listing tool
//!
//! The listing itself is delegated to an external program (by default the
//! AWS CLI streaming the archive to stdout). [`CommandSource`] runs it to
//! completion and buffers everything it printed; [`FileSource`] replays
//! output captured earlier.

use std::borrow::Cow;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};

use log::{debug, warn};

use crate::error::{Error, Result};

/// Program run when no listing command is given
pub const DEFAULT_PROGRAM: &str = "aws";

/// Arguments passed to [`DEFAULT_PROGRAM`]
pub const DEFAULT_ARGS: &[&str] = &[
    "s3",
    "cp",
    "s3://sagemaker-studio-qt0kal0xm2/vox1_test_wav.zip",
    "-",
];

/// Everything a listing source produced
#[derive(Debug, Clone, Default)]
pub struct CapturedOutput {
    /// Exit status, `None` when the output did not come from a process
    pub status: Option<ExitStatus>,
    /// Captured standard output
    pub stdout: Vec<u8>,
    /// Captured standard error
    pub stderr: Vec<u8>,
}

impl CapturedOutput {
    /// Wrap bytes that did not come from a process
    pub fn from_stdout(stdout: Vec<u8>) -> Self {
        Self {
            status: None,
            stdout,
            stderr: Vec::new(),
        }
    }

    /// Whether the producing process exited successfully (always true for
    /// output that was not produced by a process)
    pub fn success(&self) -> bool {
        self.status.is_none_or(|status| status.success())
    }

    /// Standard error as text, replacing invalid UTF-8
    pub fn stderr_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.stderr)
    }
}

/// Something that can produce a raw archive listing
pub trait ListingSource {
    /// Human-readable description used in logs and progress messages
    fn describe(&self) -> String;

    /// Produce the raw output, blocking until it is complete
    fn capture(&self) -> Result<CapturedOutput>;
}

/// Runs an external program and buffers its output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSource {
    program: String,
    args: Vec<String>,
    strict: bool,
}

impl Default for CommandSource {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM, DEFAULT_ARGS.iter().copied())
    }
}

impl CommandSource {
    /// Create a source running `program` with `args`
    pub fn new<P, I, S>(program: P, args: I) -> Self
    where
        P: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            strict: false,
        }
    }

    /// Build a source from a full argument vector (program first).
    /// Returns `None` for an empty vector.
    pub fn from_argv(argv: &[String]) -> Option<Self> {
        let (program, args) = argv.split_first()?;
        Some(Self::new(program.as_str(), args.iter().map(String::as_str)))
    }

    /// Fail on a non-zero exit status instead of only logging it
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Program that will be run
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments passed to the program
    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl ListingSource for CommandSource {
    fn describe(&self) -> String {
        if self.args.is_empty() {
            self.program.clone()
        } else {
            format!("{} {}", self.program, self.args.join(" "))
        }
    }

    fn capture(&self) -> Result<CapturedOutput> {
        debug!("Running listing command: {}", self.describe());

        let output = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| Error::Spawn {
                program: self.program.clone(),
                source,
            })?;

        let captured = CapturedOutput {
            status: Some(output.status),
            stdout: output.stdout,
            stderr: output.stderr,
        };
        debug!(
            "`{}` finished with {}: {} bytes on stdout, {} bytes on stderr",
            self.program,
            output.status,
            captured.stdout.len(),
            captured.stderr.len()
        );

        if !captured.stderr.is_empty() {
            warn!("`{}` stderr: {}", self.program, captured.stderr_text().trim_end());
        }

        if !output.status.success() {
            if self.strict {
                return Err(Error::CommandFailed {
                    program: self.program.clone(),
                    status: output.status,
                    stderr: captured.stderr_text().trim_end().to_string(),
                });
            }
            warn!(
                "`{}` exited with {}, continuing with captured output",
                self.program, output.status
            );
        }

        Ok(captured)
    }
}

/// Replays previously captured output from a file, or stdin for `-`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Create a source reading `path`
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    fn is_stdin(&self) -> bool {
        self.path.as_os_str() == "-"
    }
}

impl ListingSource for FileSource {
    fn describe(&self) -> String {
        if self.is_stdin() {
            "<stdin>".to_string()
        } else {
            self.path.display().to_string()
        }
    }

    fn capture(&self) -> Result<CapturedOutput> {
        debug!("Reading captured listing from {}", self.describe());
        let stdout = if self.is_stdin() {
            let mut buf = Vec::new();
            io::stdin().lock().read_to_end(&mut buf)?;
            buf
        } else {
            fs::read(&self.path)?
        };
        Ok(CapturedOutput::from_stdout(stdout))
    }
}
