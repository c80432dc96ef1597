//! Neighborhood operations
//!
//! Pure functions over an immutable [`Graph`]. Each one is independent of
//! the others; [`super::NeighborhoodView`] chains them into a full view.

use super::counts::Counts;
use crate::graph::{Category, Edge, EdgeType, Graph, NodeId};
use serde::Serialize;
use std::collections::BTreeSet;
use tracing::{debug, warn};

/// Edge counts per link type around a seed set
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EdgeTypeSummary {
    /// Edges touching a seed, restricted to the allowed link types
    pub total: Counts<EdgeType>,
    /// Edges ending at a seed, any link type
    pub incoming: Counts<EdgeType>,
    /// Edges starting at a seed, any link type
    pub outgoing: Counts<EdgeType>,
}

/// One-hop expansion of `seeds`.
///
/// A seed expands only if its category is allowed; an id missing from the
/// node table is treated as Uncategorized. Only edges of an allowed link
/// type with `weight > min_weight` are followed, in both directions. Every
/// seed is part of the result whether it expanded or not.
pub fn compute_neighbors(
    graph: &Graph,
    seeds: &BTreeSet<NodeId>,
    allowed_link_types: &BTreeSet<EdgeType>,
    allowed_categories: &BTreeSet<Category>,
    min_weight: f64,
) -> BTreeSet<NodeId> {
    let mut visible = seeds.clone();

    if seeds.is_empty() || allowed_link_types.is_empty() || allowed_categories.is_empty() {
        debug!("Empty query, returning {} seeds unchanged", seeds.len());
        return visible;
    }

    let passes =
        |edge: &Edge| allowed_link_types.contains(&edge.edge_type) && edge.exceeds(min_weight);

    for seed in seeds {
        if !graph.contains_node(seed) {
            warn!("Seed {} is not in the node table, treating as Uncategorized", seed);
        }
        if !allowed_categories.contains(&graph.category_of(seed)) {
            continue;
        }

        visible.extend(graph.outgoing(seed).filter(|&e| passes(e)).map(|e| e.target.clone()));
        visible.extend(graph.incoming(seed).filter(|&e| passes(e)).map(|e| e.source.clone()));
    }

    debug!(
        "Expanded {} seeds to {} visible nodes (min_weight {})",
        seeds.len(),
        visible.len(),
        min_weight
    );
    visible
}

/// Edges with both endpoints visible and an allowed link type.
///
/// The weight threshold is not applied here: an edge below it still shows
/// if both its endpoints were reached some other way.
pub fn compute_visible_edges(
    graph: &Graph,
    visible_nodes: &BTreeSet<NodeId>,
    allowed_link_types: &BTreeSet<EdgeType>,
) -> Vec<Edge> {
    graph
        .edges()
        .iter()
        .filter(|e| {
            allowed_link_types.contains(&e.edge_type)
                && visible_nodes.contains(&e.source)
                && visible_nodes.contains(&e.target)
        })
        .cloned()
        .collect()
}

/// Per-link-type edge counts around `seeds`.
///
/// Only `total` is restricted to `allowed_link_types`; the directional
/// counts cover every link type.
pub fn summarize_edge_types_by_direction(
    graph: &Graph,
    seeds: &BTreeSet<NodeId>,
    allowed_link_types: &BTreeSet<EdgeType>,
) -> EdgeTypeSummary {
    let mut summary = EdgeTypeSummary::default();

    for edge in graph.edges() {
        let from_seed = seeds.contains(&edge.source);
        let to_seed = seeds.contains(&edge.target);

        if (from_seed || to_seed) && allowed_link_types.contains(&edge.edge_type) {
            summary.total.increment(edge.edge_type.clone());
        }
        if to_seed {
            summary.incoming.increment(edge.edge_type.clone());
        }
        if from_seed {
            summary.outgoing.increment(edge.edge_type.clone());
        }
    }

    summary
}

/// Category counts over the visible nodes present in the node table
pub fn compute_node_type_histogram(
    graph: &Graph,
    visible_nodes: &BTreeSet<NodeId>,
) -> Counts<Category> {
    visible_nodes
        .iter()
        .filter_map(|id| graph.node(id))
        .map(|node| node.category.clone())
        .collect()
}
