// crates/cli/src/options.rs
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One human-readable line per fact
    #[default]
    Text,
    /// Pretty-printed JSON object
    Json,
}
