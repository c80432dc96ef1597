//! Graph data model
//!
//! This module implements the typed graph the neighborhood view runs over:
//! - Nodes with an id, a category and a precomputed neighbor count
//! - Directed, typed, weighted edges (parallel edges and self-loops allowed)
//! - An immutable in-memory store with adjacency indices, validated at load time

pub mod edge;
pub mod node;
pub mod store;
pub mod types;

// Re-export main types
pub use edge::Edge;
pub use node::Node;
pub use store::{Graph, GraphBuilder, GraphError, GraphResult};
pub use types::{Category, EdgeType, NodeId};
