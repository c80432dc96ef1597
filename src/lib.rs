//! Neighborhood View
//!
//! Filtered one-hop neighborhood queries over a typed, weighted, directed
//! graph, and materialization of the result for display.
//!
//! # Model
//!
//! - Nodes carry a category and a precomputed neighbor count
//! - Edges are directed, typed and weighted; parallel edges and self-loops are allowed
//! - The graph is loaded once through a validating builder and never mutated
//! - Every query is an immutable [`Query`] value; every result a fresh [`View`]
//!
//! ## Example Usage
//!
//! ```rust
//! use neighborhood_view::{Edge, Graph, NeighborhoodView, Node, Query, ViewConfig};
//!
//! let graph = Graph::from_parts(
//!     vec![
//!         Node::new("A", "person").with_neighbor_count(4),
//!         Node::new("B", "vessel").with_neighbor_count(1),
//!         Node::new("C", "person").with_neighbor_count(0),
//!     ],
//!     vec![
//!         Edge::new("A", "B", "owns", 0.5),
//!         Edge::new("B", "C", "near", 0.9),
//!     ],
//! )
//! .unwrap();
//!
//! let view = NeighborhoodView::new(&graph, ViewConfig::default());
//! let query = Query::new(["A"])
//!     .with_link_types(["owns", "near"])
//!     .with_categories(["person", "vessel"])
//!     .with_min_weight(0.3);
//!
//! let result = view.query(&query);
//! assert_eq!(result.visible_nodes.len(), 2);
//! ```

#![warn(clippy::all)]

pub mod config;
pub mod graph;
pub mod view;

// Re-export main types for convenience
pub use config::{ConfigError, ConfigResult, ViewConfig};
pub use graph::{Category, Edge, EdgeType, Graph, GraphBuilder, GraphError, GraphResult, Node, NodeId};
pub use view::{
    compute_neighbors, compute_node_type_histogram, compute_visible_edges, node_display_size,
    summarize_edge_types_by_direction, Counts, DisplayNode, EdgeTypeSummary, NeighborhoodView,
    Query, View, ViewIssue,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
