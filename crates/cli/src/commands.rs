// crates/cli/src/commands.rs
use closed_range_shared_kernel::{ErrorContext, Range, Relation};
use serde::Serialize;

use crate::args::Command;
use crate::error::{AppError, Result};

/// Result of one subcommand, ready to be rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "command", rename_all = "lowercase")]
pub enum Outcome {
    Relate {
        left: Range,
        right: Range,
        relation: Relation,
        before: bool,
        after: bool,
        concurrent: bool,
    },
    Contains {
        range: Range,
        value: i64,
        contains: bool,
    },
    List {
        range: Range,
        values: Vec<i64>,
    },
    Info {
        range: Range,
        lower_bound: i64,
        upper_bound: i64,
        cardinality: u128,
    },
}

/// Parse the command's ranges and run it.
///
/// # Errors
///
/// Returns [`AppError::Range`] when a range argument is malformed or reversed,
/// and [`AppError::ListTooLong`] when `list` is asked for a range larger than
/// its `--max-len`.
pub fn execute(command: &Command) -> Result<Outcome> {
    log::info!("executing {command:?}");
    match command {
        Command::Relate { left, right } => Ok(relate(parse_range(left)?, parse_range(right)?)),
        Command::Contains { range, value } => {
            let range = parse_range(range)?;
            Ok(Outcome::Contains { range, value: *value, contains: range.contains(*value) })
        }
        Command::List { range, max_len } => list(parse_range(range)?, *max_len),
        Command::Info { range } => {
            let range = parse_range(range)?;
            Ok(Outcome::Info {
                range,
                lower_bound: range.lower_bound(),
                upper_bound: range.upper_bound(),
                cardinality: range.cardinality(),
            })
        }
    }
}

fn parse_range(arg: &str) -> Result<Range> {
    Ok(arg.parse::<Range>().with_context(|| format!("parsing '{arg}'"))?)
}

fn relate(left: Range, right: Range) -> Outcome {
    Outcome::Relate {
        left,
        right,
        relation: left.relation_to(&right),
        before: left.precedes(&right),
        after: left.follows(&right),
        concurrent: left.overlaps(&right),
    }
}

fn list(range: Range, max_len: u64) -> Result<Outcome> {
    let cardinality = range.cardinality();
    if cardinality > u128::from(max_len) {
        return Err(AppError::ListTooLong { range, cardinality, max_len });
    }
    log::debug!("listing {cardinality} values of {range}");
    Ok(Outcome::List { range, values: range.as_list() })
}
