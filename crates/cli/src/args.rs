// crates/cli/src/args.rs
use clap::{ArgAction, Parser, Subcommand};

use crate::options::OutputFormat;

/// Largest range `list` prints unless `--max-len` says otherwise.
pub const DEFAULT_MAX_LIST_LEN: u64 = 10_000;

/// Top-level CLI arguments parsed via clap.
///
/// Ranges are written as `start..=end`, `start,end` or `[start, end]` and are
/// validated when the command runs.
#[derive(Parser, Debug)]
#[command(name = "closed-range", version = crate::VERSION, about = "Inspect closed integer ranges")]
pub struct Args {
    /// Output format
    #[arg(long, value_enum, default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Log more (-v info, -vv debug, -vvv trace); `RUST_LOG` overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Position of LEFT relative to RIGHT
    Relate {
        #[arg(allow_hyphen_values = true)]
        left: String,
        #[arg(allow_hyphen_values = true)]
        right: String,
    },
    /// Whether VALUE lies inside RANGE
    Contains {
        #[arg(allow_hyphen_values = true)]
        range: String,
        #[arg(allow_hyphen_values = true)]
        value: i64,
    },
    /// Every value of RANGE, ascending
    List {
        #[arg(allow_hyphen_values = true)]
        range: String,
        /// Refuse to list ranges holding more values than this
        #[arg(long, default_value_t = DEFAULT_MAX_LIST_LEN)]
        max_len: u64,
    },
    /// Bounds and cardinality of RANGE
    Info {
        #[arg(allow_hyphen_values = true)]
        range: String,
    },
}
