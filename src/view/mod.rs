//! Neighborhood view
//!
//! Given a graph and a [`Query`], materializes everything a presentation
//! layer needs to draw the filtered subgraph and its summaries:
//! - the visible node set (seeds plus their filtered one-hop neighbors)
//! - the edges among visible nodes
//! - per-link-type edge counts around the seeds (total, incoming, outgoing)
//! - a category histogram of the visible nodes
//! - per-node display records
//!
//! Views are recomputed from scratch on every query. Nothing is cached.

pub mod counts;
pub mod neighborhood;
pub mod query;
pub mod size;

pub use counts::Counts;
pub use neighborhood::{
    compute_neighbors, compute_node_type_histogram, compute_visible_edges,
    summarize_edge_types_by_direction, EdgeTypeSummary,
};
pub use query::Query;
pub use size::{node_display_size, SIZE_SCALE};

use crate::config::ViewConfig;
use crate::graph::{Category, Edge, EdgeType, Graph, NodeId};
use serde::Serialize;
use std::collections::BTreeSet;
use thiserror::Error;
use tracing::{debug, warn};

/// Non-fatal conditions found while building a view
///
/// These never abort a query; they are collected into [`View::issues`].
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "node")]
pub enum ViewIssue {
    #[error("Node {0} is not in the node table")]
    UnknownNode(NodeId),

    #[error("Query has no seeds, link types or categories")]
    EmptyQuery,

    #[error("Node {0} has no neighbor count, using base size")]
    MissingSizeInput(NodeId),

    #[error("Weight threshold is NaN, no edge can pass it")]
    NanThreshold,
}

/// A visible node, ready for display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayNode {
    pub id: NodeId,
    /// Uncategorized when the id is not in the node table
    pub category: Category,
    pub size: f64,
    /// Selected by the user
    pub seed: bool,
    /// Listed in [`ViewConfig::highlighted_nodes`]
    pub highlighted: bool,
}

/// Result of one query
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct View {
    pub visible_nodes: BTreeSet<NodeId>,
    pub visible_edges: Vec<Edge>,
    pub total_counts: Counts<EdgeType>,
    pub in_counts: Counts<EdgeType>,
    pub out_counts: Counts<EdgeType>,
    pub category_histogram: Counts<Category>,
    pub nodes: Vec<DisplayNode>,
    pub issues: Vec<ViewIssue>,
}

impl View {
    /// Nothing to show
    pub fn is_empty(&self) -> bool {
        self.visible_nodes.is_empty()
    }

    pub fn display_node(&self, id: &NodeId) -> Option<&DisplayNode> {
        self.nodes.iter().find(|n| n.id == *id)
    }
}

/// Runs queries against one loaded graph
pub struct NeighborhoodView<'g> {
    graph: &'g Graph,
    config: ViewConfig,
}

impl<'g> NeighborhoodView<'g> {
    pub fn new(graph: &'g Graph, config: ViewConfig) -> Self {
        Self { graph, config }
    }

    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    /// Every link type and category enabled, threshold from the config
    pub fn default_query<I, T>(&self, seeds: I) -> Query
    where
        I: IntoIterator<Item = T>,
        T: Into<NodeId>,
    {
        Query::select_all(self.graph, seeds).with_min_weight(self.config.default_min_weight)
    }

    /// Materialize the view for a query
    pub fn query(&self, query: &Query) -> View {
        if query.is_empty() {
            debug!("Empty query, nothing to show");
            return View {
                issues: vec![ViewIssue::EmptyQuery],
                ..Default::default()
            };
        }

        let mut issues = Vec::new();
        if query.min_weight().is_nan() {
            warn!("Query threshold is NaN, seeds will not expand");
            issues.push(ViewIssue::NanThreshold);
        }

        let graph = self.graph;
        let visible_nodes = compute_neighbors(
            graph,
            query.seeds(),
            query.allowed_link_types(),
            query.allowed_categories(),
            query.min_weight(),
        );
        let visible_edges = compute_visible_edges(graph, &visible_nodes, query.allowed_link_types());
        let summary =
            summarize_edge_types_by_direction(graph, query.seeds(), query.allowed_link_types());
        let category_histogram = compute_node_type_histogram(graph, &visible_nodes);

        let nodes = visible_nodes
            .iter()
            .map(|id| {
                let node = graph.node(id);
                match node {
                    None => issues.push(ViewIssue::UnknownNode(id.clone())),
                    Some(n) if n.neighbor_count.is_none() => {
                        issues.push(ViewIssue::MissingSizeInput(id.clone()))
                    }
                    Some(_) => {}
                }

                DisplayNode {
                    id: id.clone(),
                    category: graph.category_of(id),
                    size: node_display_size(
                        node.and_then(|n| n.neighbor_count),
                        self.config.base_node_size,
                    ),
                    seed: query.seeds().contains(id),
                    highlighted: self.config.is_highlighted(id),
                }
            })
            .collect();

        debug!(
            "View: {} nodes, {} edges, {} issues",
            visible_nodes.len(),
            visible_edges.len(),
            issues.len()
        );

        View {
            visible_nodes,
            visible_edges,
            total_counts: summary.total,
            in_counts: summary.incoming,
            out_counts: summary.outgoing,
            category_histogram,
            nodes,
            issues,
        }
    }
}
