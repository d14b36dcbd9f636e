//! `codechart` converts source code into a visual control-flow diagram
//! annotated with complexity ratings.
//!
//! The engine walks a parsed syntax tree and emits a directed graph of nodes
//! (statements, decisions, loops, merges) and labeled edges
//! (`Yes`/`No`/`Next`/`Done`). When the input cannot be parsed structurally,
//! a line-based fallback builder produces a linear chart from text patterns
//! instead — a parse failure is never an error. Each node carries an integer
//! complexity score and its low/medium/high severity bucket.
//!
//! ```
//! let chart = codechart::build_flowchart("def f(x):\n    if x:\n        return 1\n");
//! assert_eq!(chart.nodes[0].label, "Start");
//! ```

pub mod complexity;
pub mod config;
pub mod flow;
pub mod graph;
pub mod output;
pub mod scorer;

mod utils;

pub use flow::{build_flowchart, build_flowchart_with};
pub use graph::{Bucket, Edge, Flowchart, Node, NodeKind};
pub use scorer::{LineScorer, NullScorer, RemoteScorer};
