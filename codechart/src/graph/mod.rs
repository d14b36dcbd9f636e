//! Flowchart data model and the node/edge accumulator.
//!
//! A [`Flowchart`] is a directed graph of [`Node`]s and [`Edge`]s describing
//! the control flow of one source unit. The JSON shape of these types (field
//! names, enum spellings) is the compatibility contract with downstream
//! renderers and must not change.

mod builder;
mod types;

pub use builder::{GraphBuilder, NodeId};
pub use types::{Bucket, Edge, Flowchart, Node, NodeKind};
