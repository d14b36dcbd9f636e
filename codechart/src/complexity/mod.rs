//! Complexity scoring for syntactic units and raw text lines.
//!
//! Two forms share one contract: given a unit of code, return an integer
//! score of at least 1. The structural form walks a parsed syntax tree; the
//! heuristic form counts control-flow keywords in a single line and is the
//! silent fallback whenever no externally supplied score is available.
//! Severity classification lives on [`crate::graph::Bucket`].

mod heuristic;
mod structural;

pub use heuristic::heuristic_score;
pub use structural::statement_score;

pub(crate) use structural::elif_chain_score;
