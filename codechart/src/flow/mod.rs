//! Flowchart construction.
//!
//! The dispatcher attempts a structural parse first and runs the
//! tree-walking builder on success; a parse error is not surfaced — the
//! line-based fallback builder takes over instead, optionally consulting an
//! external [`LineScorer`] for per-line scores. Both builders are created
//! fresh per invocation, so concurrent calls share no state.

mod fallback;
mod structured;

use ruff_python_parser::parse_module;
use tracing::debug;

use crate::graph::Flowchart;
use crate::scorer::{LineScorer, NullScorer};

use fallback::FallbackBuilder;
use structured::StructuredBuilder;

/// Builds a flowchart for `source` without any external scoring.
///
/// Deterministic: identical input yields an identical graph, node ids
/// included.
#[must_use]
pub fn build_flowchart(source: &str) -> Flowchart {
    build_flowchart_with(source, &NullScorer)
}

/// Builds a flowchart for `source`, consulting `scorer` for per-line scores
/// when the line-based fallback is used.
///
/// The structured builder never consults the scorer; its scores come from
/// the syntax tree itself.
#[must_use]
pub fn build_flowchart_with(source: &str, scorer: &dyn LineScorer) -> Flowchart {
    match parse_module(source) {
        Ok(parsed) => StructuredBuilder::new(source).build(&parsed.into_syntax()),
        Err(err) => {
            debug!(error = %err, "structural parse failed, using line-based builder");
            FallbackBuilder::new().build(source, scorer)
        }
    }
}
