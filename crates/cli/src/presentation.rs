// crates/cli/src/presentation.rs
use closed_range_shared_kernel::Relation;

use crate::commands::Outcome;
use crate::error::Result;
use crate::options::OutputFormat;

/// Render an outcome in the requested format. The result has no trailing newline.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render(outcome: &Outcome, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(outcome)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(outcome)?),
    }
}

fn render_text(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Relate { left, right, relation, before, after, concurrent } => {
            let verb = match relation {
                Relation::Concurrent => "is concurrent with",
                Relation::Before => "is before",
                Relation::After => "is after",
            };
            [
                format!("{left} {verb} {right}"),
                format!("before: {before}"),
                format!("after: {after}"),
                format!("concurrent: {concurrent}"),
            ]
            .join("\n")
        }
        Outcome::Contains { range, value, contains } => {
            let verb = if *contains { "contains" } else { "does not contain" };
            format!("{range} {verb} {value}")
        }
        Outcome::List { values, .. } => values
            .iter()
            .map(i64::to_string)
            .collect::<Vec<_>>()
            .join("\n"),
        Outcome::Info { range, lower_bound, upper_bound, cardinality } => [
            format!("range: {range}"),
            format!("lower bound: {lower_bound}"),
            format!("upper bound: {upper_bound}"),
            format!("cardinality: {cardinality}"),
        ]
        .join("\n"),
    }
}
