// crates/cli/src/config.rs
use derive_builder::Builder;
use log::LevelFilter;

use crate::args::Args;
use crate::options::OutputFormat;

/// Runtime settings resolved from the command line.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(setter(into))]
pub struct Config {
    #[builder(default)]
    pub format: OutputFormat,
    #[builder(default)]
    pub verbosity: u8,
}

impl Default for Config {
    fn default() -> Self {
        ConfigBuilder::default()
            .build()
            .expect("Failed to build default config")
    }
}

impl Config {
    #[must_use]
    pub const fn log_level(&self) -> LevelFilter {
        match self.verbosity {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

impl From<&Args> for Config {
    fn from(args: &Args) -> Self {
        ConfigBuilder::default()
            .format(args.format)
            .verbosity(args.verbose)
            .build()
            .expect("Failed to build config")
    }
}
