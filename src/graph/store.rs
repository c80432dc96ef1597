//! In-memory graph storage
//!
//! The graph is loaded once and never mutated afterwards. `GraphBuilder`
//! validates rows on the way in and builds the adjacency indices.

use super::edge::Edge;
use super::node::Node;
use super::types::{Category, EdgeType, NodeId};
use indexmap::{IndexMap, IndexSet};
use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while loading a graph
#[derive(Error, Debug, PartialEq)]
pub enum GraphError {
    #[error("Node id must not be empty")]
    EmptyNodeId,

    #[error("Node {0} already exists")]
    NodeAlreadyExists(NodeId),

    #[error("NaN weight on edge {from} -> {to}")]
    NanWeight { from: NodeId, to: NodeId },
}

pub type GraphResult<T> = Result<T, GraphError>;

/// Immutable in-memory graph
///
/// - nodes: NodeId -> Node, in load order
/// - edges: edge table, in load order
/// - outgoing / incoming: NodeId -> edge positions (adjacency lists)
/// - link_types / categories: distinct values in first-seen order
#[derive(Debug, Default)]
pub struct Graph {
    nodes: IndexMap<NodeId, Node>,
    edges: Vec<Edge>,
    outgoing: FxHashMap<NodeId, Vec<usize>>,
    incoming: FxHashMap<NodeId, Vec<usize>>,
    link_types: IndexSet<EdgeType>,
    categories: IndexSet<Category>,
}

impl Graph {
    /// Create a new empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from node and edge rows
    pub fn from_parts(
        nodes: impl IntoIterator<Item = Node>,
        edges: impl IntoIterator<Item = Edge>,
    ) -> GraphResult<Self> {
        let mut builder = GraphBuilder::new();
        for node in nodes {
            builder.add_node(node)?;
        }
        for edge in edges {
            builder.add_edge(edge)?;
        }
        Ok(builder.build())
    }

    pub fn node(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn contains_node(&self, id: &NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Category of a node, or Uncategorized if the id is not in the node table
    pub fn category_of(&self, id: &NodeId) -> Category {
        self.nodes
            .get(id)
            .map(|n| n.category.clone())
            .unwrap_or_default()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Edges leaving a node
    pub fn outgoing(&self, id: &NodeId) -> impl Iterator<Item = &Edge> {
        self.adjacent(&self.outgoing, id)
    }

    /// Edges arriving at a node
    pub fn incoming(&self, id: &NodeId) -> impl Iterator<Item = &Edge> {
        self.adjacent(&self.incoming, id)
    }

    fn adjacent<'a>(
        &'a self,
        index: &'a FxHashMap<NodeId, Vec<usize>>,
        id: &NodeId,
    ) -> impl Iterator<Item = &'a Edge> {
        index
            .get(id)
            .into_iter()
            .flatten()
            .map(move |&pos| &self.edges[pos])
    }

    /// Distinct link types in first-seen order
    pub fn link_types(&self) -> impl Iterator<Item = &EdgeType> {
        self.link_types.iter()
    }

    /// Distinct node categories in first-seen order
    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    /// Every id that appears as an edge endpoint, whether or not it is in the node table
    pub fn referenced_node_ids(&self) -> IndexSet<NodeId> {
        let mut ids = IndexSet::new();
        for edge in &self.edges {
            ids.insert(edge.source.clone());
            ids.insert(edge.target.clone());
        }
        ids
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

/// Validating builder for [`Graph`]
#[derive(Debug, Default)]
pub struct GraphBuilder {
    graph: Graph,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node row. Ids must be non-empty and unique.
    pub fn add_node(&mut self, node: Node) -> GraphResult<&mut Self> {
        if node.id.is_empty() {
            return Err(GraphError::EmptyNodeId);
        }
        if self.graph.nodes.contains_key(&node.id) {
            return Err(GraphError::NodeAlreadyExists(node.id));
        }

        self.graph.categories.insert(node.category.clone());
        self.graph.nodes.insert(node.id.clone(), node);
        Ok(self)
    }

    /// Add an edge row. The weight must be ordered (not NaN); infinities are
    /// kept. Endpoints may be unknown.
    pub fn add_edge(&mut self, edge: Edge) -> GraphResult<&mut Self> {
        if edge.weight.is_nan() {
            return Err(GraphError::NanWeight {
                from: edge.source,
                to: edge.target,
            });
        }

        let pos = self.graph.edges.len();
        self.graph
            .outgoing
            .entry(edge.source.clone())
            .or_default()
            .push(pos);
        self.graph
            .incoming
            .entry(edge.target.clone())
            .or_default()
            .push(pos);
        self.graph.link_types.insert(edge.edge_type.clone());
        self.graph.edges.push(edge);
        Ok(self)
    }

    pub fn build(self) -> Graph {
        let graph = self.graph;

        let dangling = graph
            .edges
            .iter()
            .filter(|e| !graph.contains_node(&e.source) || !graph.contains_node(&e.target))
            .count();
        if dangling > 0 {
            warn!("{} edges reference ids missing from the node table", dangling);
        }

        info!(
            "Loaded graph: {} nodes, {} edges, {} link types, {} categories",
            graph.node_count(),
            graph.edge_count(),
            graph.link_types.len(),
            graph.categories.len()
        );
        debug!("Link types: {:?}", graph.link_types);

        graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::compute_neighbors;
    use std::collections::BTreeSet;

    fn sample() -> Graph {
        Graph::from_parts(
            vec![
                Node::new("A", "person").with_neighbor_count(4),
                Node::new("B", "vessel").with_neighbor_count(1),
                Node::new("C", "person").with_neighbor_count(0),
            ],
            vec![
                Edge::new("A", "B", "owns", 0.5),
                Edge::new("B", "C", "near", 0.9),
                Edge::new("A", "B", "owns", 0.7),
                Edge::new("C", "ghost", "near", 0.2),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_counts() {
        let graph = sample();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 4);
    }

    #[test]
    fn test_adjacency() {
        let graph = sample();
        let a = NodeId::new("A");
        let b = NodeId::new("B");

        assert_eq!(graph.outgoing(&a).count(), 2); // parallel edges kept
        assert_eq!(graph.incoming(&a).count(), 0);
        assert_eq!(graph.incoming(&b).count(), 2);
        assert_eq!(graph.outgoing(&b).count(), 1);
        assert_eq!(graph.incoming(&NodeId::new("ghost")).count(), 1);
        assert_eq!(graph.outgoing(&NodeId::new("nobody")).count(), 0);
    }

    #[test]
    fn test_category_fallback() {
        let graph = sample();
        assert_eq!(graph.category_of(&NodeId::new("B")), Category::new("vessel"));
        assert!(graph.category_of(&NodeId::new("ghost")).is_uncategorized());
    }

    #[test]
    fn test_distinct_values_first_seen_order() {
        let graph = sample();
        let types: Vec<&str> = graph.link_types().map(|t| t.as_str()).collect();
        assert_eq!(types, vec!["owns", "near"]);
        let categories: Vec<&str> = graph.categories().map(|c| c.as_str()).collect();
        assert_eq!(categories, vec!["person", "vessel"]);
    }

    #[test]
    fn test_referenced_node_ids() {
        let graph = sample();
        let ids = graph.referenced_node_ids();
        assert_eq!(ids.len(), 4);
        assert!(ids.contains(&NodeId::new("ghost")));
    }

    #[test]
    fn test_duplicate_node_rejected() {
        let mut builder = GraphBuilder::new();
        builder.add_node(Node::new("A", "person")).unwrap();
        let err = builder.add_node(Node::new("A", "vessel")).unwrap_err();
        assert_eq!(err, GraphError::NodeAlreadyExists(NodeId::new("A")));
    }

    #[test]
    fn test_empty_node_id_rejected() {
        let mut builder = GraphBuilder::new();
        assert_eq!(
            builder.add_node(Node::new("", "person")).unwrap_err(),
            GraphError::EmptyNodeId
        );
    }

    #[test]
    fn test_whitespace_node_id_is_kept() {
        let graph = Graph::from_parts(vec![Node::new(" ", "person")], vec![]).unwrap();
        assert!(graph.contains_node(&NodeId::new(" ")));
    }

    #[test]
    fn test_nan_weight_rejected() {
        let mut builder = GraphBuilder::new();
        let err = builder
            .add_edge(Edge::new("A", "B", "owns", f64::NAN))
            .unwrap_err();
        assert_eq!(
            err,
            GraphError::NanWeight {
                from: NodeId::new("A"),
                to: NodeId::new("B"),
            }
        );
    }

    #[test]
    fn test_infinite_weights_load_and_compare() {
        let graph = Graph::from_parts(
            vec![
                Node::new("A", "person"),
                Node::new("B", "vessel"),
                Node::new("C", "vessel"),
            ],
            vec![
                Edge::new("A", "B", "owns", f64::INFINITY),
                Edge::new("A", "C", "owns", f64::NEG_INFINITY),
            ],
        )
        .unwrap();
        assert_eq!(graph.edge_count(), 2);

        let seeds: BTreeSet<NodeId> = [NodeId::new("A")].into_iter().collect();
        let types: BTreeSet<EdgeType> = [EdgeType::new("owns")].into_iter().collect();
        let categories: BTreeSet<Category> = [Category::new("person")].into_iter().collect();

        for min_weight in [f64::MIN, -1.0, 0.0, 1.0, f64::MAX] {
            let visible = compute_neighbors(&graph, &seeds, &types, &categories, min_weight);
            assert!(visible.contains("B"), "+inf edge cut at {}", min_weight);
            assert!(!visible.contains("C"), "-inf edge followed at {}", min_weight);
        }
    }

    #[test]
    fn test_self_loop_indexed_both_ways() {
        let graph = Graph::from_parts(
            vec![Node::new("A", "person")],
            vec![Edge::new("A", "A", "membership", 1.0)],
        )
        .unwrap();
        let a = NodeId::new("A");
        assert_eq!(graph.outgoing(&a).count(), 1);
        assert_eq!(graph.incoming(&a).count(), 1);
    }
}
