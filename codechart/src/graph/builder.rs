use super::types::{Bucket, Edge, Flowchart, Node, NodeKind};

/// Id of a node already added to a [`GraphBuilder`].
pub type NodeId = String;

/// Accumulator for nodes and edges during one conversion.
///
/// Ids are allocated from a per-instance counter, so a fresh builder must be
/// used for every flowchart. Nodes and edges are never removed or mutated
/// after creation; referential integrity is the caller's responsibility
/// (only ids returned by [`GraphBuilder::add_node`] may appear in edges).
#[derive(Debug, Default)]
pub struct GraphBuilder {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    counter: usize,
}

impl GraphBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a node and returns its id.
    ///
    /// The severity bucket is computed from `score` here so the two fields
    /// can never disagree.
    pub fn add_node(&mut self, label: impl Into<String>, kind: NodeKind, score: usize) -> NodeId {
        self.counter += 1;
        let id = format!("node_{}", self.counter);
        self.nodes.push(Node {
            id: id.clone(),
            label: label.into(),
            kind,
            complexity_bucket: Bucket::from_score(score),
            complexity_score: score,
        });
        id
    }

    /// Appends an edge between two existing nodes.
    pub fn add_edge(&mut self, from: &str, to: &str, label: Option<&str>) {
        self.edges.push(Edge {
            from: from.to_owned(),
            to: to.to_owned(),
            label: label.map(str::to_owned),
        });
    }

    /// Consumes the builder and returns the finished graph.
    #[must_use]
    pub fn finish(self) -> Flowchart {
        Flowchart {
            nodes: self.nodes,
            edges: self.edges,
        }
    }
}
