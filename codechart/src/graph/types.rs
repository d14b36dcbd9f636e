use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a flowchart node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// Entry point of the flowchart (exactly one per graph, in-degree 0).
    Start,
    /// Terminal node (a `return`, or the closing bookend).
    End,
    /// Plain sequential statement.
    Process,
    /// Branching or looping condition.
    Decision,
    /// Point where divergent branches reconverge.
    Merge,
}

/// Severity classification of a complexity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bucket {
    /// Score 1..=5.
    Low,
    /// Score 6..=10.
    Medium,
    /// Score 11 and above.
    High,
}

impl Bucket {
    /// Classifies a complexity score. Pure function, shared by all builders.
    #[must_use]
    pub fn from_score(score: usize) -> Self {
        if score <= 5 {
            Self::Low
        } else if score <= 10 {
            Self::Medium
        } else {
            Self::High
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Start => "start",
            Self::End => "end",
            Self::Process => "process",
            Self::Decision => "decision",
            Self::Merge => "merge",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        };
        f.write_str(name)
    }
}

/// A single flowchart node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Unique id, assigned in creation order (`node_1`, `node_2`, ...).
    pub id: String,
    /// Rendering of the underlying code fragment or condition.
    pub label: String,
    /// Node kind.
    #[serde(rename = "type")]
    pub kind: NodeKind,
    /// Severity bucket derived from `complexity_score`.
    pub complexity_bucket: Bucket,
    /// Integer complexity score, always >= 1.
    pub complexity_score: usize,
}

/// A directed edge between two nodes.
///
/// Labels mark conditional branches (`Yes`, `No`), loop continuation
/// (`Next`) and loop exit (`Done`); unlabeled edges are sequential flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// Id of the source node.
    pub from: String,
    /// Id of the target node.
    pub to: String,
    /// Optional branch label.
    pub label: Option<String>,
}

/// The finished graph, immutable once returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flowchart {
    /// Nodes in creation order.
    pub nodes: Vec<Node>,
    /// Edges in creation order.
    pub edges: Vec<Edge>,
}
