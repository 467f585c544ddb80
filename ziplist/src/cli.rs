//! Root CLI structure for ziplist

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use ziplist_core::layout::{
    DEFAULT_NAME_DELIMITER, DEFAULT_PATH_DELIMITER, DEFAULT_PATH_PREFIX, DEFAULT_SKIP_HEAD,
    DEFAULT_SKIP_TAIL,
};
use ziplist_core::{InputFormat, ListingLayout};

/// File written by `generate` when no output is given
pub const DEFAULT_OUTPUT: &str = "filelist-2.txt";

#[derive(Parser)]
#[command(name = "ziplist")]
#[command(about = "Turn a remote archive listing into a simple name/path file list", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (can be repeated for more detail)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Capture the listing and write one `<name> <path>` record per member
    Generate {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        layout: LayoutArgs,

        /// Output file (created or overwritten)
        #[arg(short, long, default_value = DEFAULT_OUTPUT)]
        output: PathBuf,
    },

    /// Print the records without writing a file
    Show {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        layout: LayoutArgs,

        /// Filter records by path (supports `*` and `?` wildcards)
        #[arg(short, long)]
        filter: Option<String>,

        /// Show a table with human-readable sizes
        #[arg(short, long)]
        long: bool,

        /// Print records as JSON
        #[arg(long, conflicts_with = "long")]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Where the raw listing comes from
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Read previously captured output instead of running a command (`-` for stdin)
    #[arg(short, long, value_name = "FILE", conflicts_with = "command")]
    pub input: Option<PathBuf>,

    /// How to interpret the captured output
    #[arg(long, value_enum, default_value_t = FormatArg::Auto)]
    pub format: FormatArg,

    /// Abort when the listing command exits with a non-zero status
    #[arg(long)]
    pub strict: bool,

    /// Listing command and its arguments, after `--`
    /// (default: aws s3 cp s3://sagemaker-studio-qt0kal0xm2/vox1_test_wav.zip -)
    #[arg(last = true, value_name = "COMMAND")]
    pub command: Vec<String>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum FormatArg {
    Auto,
    Listing,
    Zip,
}

impl From<FormatArg> for InputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Auto => Self::Auto,
            FormatArg::Listing => Self::Listing,
            FormatArg::Zip => Self::Zip,
        }
    }
}

/// Positional conventions of the text listing
#[derive(Args, Debug, Clone)]
pub struct LayoutArgs {
    /// Header lines to drop
    #[arg(long, env = "ZIPLIST_SKIP_HEAD", default_value_t = DEFAULT_SKIP_HEAD)]
    pub skip_head: usize,

    /// Footer lines to drop (a trailing newline counts as one)
    #[arg(long, env = "ZIPLIST_SKIP_TAIL", default_value_t = DEFAULT_SKIP_TAIL)]
    pub skip_tail: usize,

    /// The name is everything before this marker
    #[arg(long, env = "ZIPLIST_NAME_DELIMITER", default_value = DEFAULT_NAME_DELIMITER, allow_hyphen_values = true)]
    pub name_delimiter: String,

    /// The path is everything after this marker
    #[arg(long, env = "ZIPLIST_PATH_DELIMITER", default_value = DEFAULT_PATH_DELIMITER, allow_hyphen_values = true)]
    pub path_delimiter: String,

    /// Prepended to every path in the output
    #[arg(long, env = "ZIPLIST_PATH_PREFIX", default_value = DEFAULT_PATH_PREFIX)]
    pub path_prefix: String,
}

impl From<&LayoutArgs> for ListingLayout {
    fn from(args: &LayoutArgs) -> Self {
        Self::default()
            .with_skip(args.skip_head, args.skip_tail)
            .with_delimiters(args.name_delimiter.as_str(), args.path_delimiter.as_str())
            .with_path_prefix(args.path_prefix.as_str())
    }
}
