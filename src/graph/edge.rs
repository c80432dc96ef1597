//! Edge record
//!
//! Edges are directed, typed and weighted. Multiple edges between the same
//! ordered pair and self-loops are allowed.

use super::types::{EdgeType, NodeId};
use serde::{Deserialize, Serialize};

/// A directed, weighted edge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Source node (edge goes FROM this node)
    pub source: NodeId,

    /// Target node (edge goes TO this node)
    pub target: NodeId,

    /// Link type, serialized as `type`
    #[serde(rename = "type")]
    pub edge_type: EdgeType,

    /// Edge weight (confidence of the link)
    pub weight: f64,
}

impl Edge {
    /// Create a new directed edge
    pub fn new(
        source: impl Into<NodeId>,
        target: impl Into<NodeId>,
        edge_type: impl Into<EdgeType>,
        weight: f64,
    ) -> Self {
        Edge {
            source: source.into(),
            target: target.into(),
            edge_type: edge_type.into(),
            weight,
        }
    }

    /// Check if this edge goes FROM a specific node
    pub fn starts_from(&self, node: &NodeId) -> bool {
        self.source == *node
    }

    /// Check if this edge goes TO a specific node
    pub fn ends_at(&self, node: &NodeId) -> bool {
        self.target == *node
    }

    /// Check if this edge touches a node at either end
    pub fn touches(&self, node: &NodeId) -> bool {
        self.starts_from(node) || self.ends_at(node)
    }

    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }

    /// Strictly above the threshold; an equal weight does not pass
    pub fn exceeds(&self, min_weight: f64) -> bool {
        self.weight > min_weight
    }
}
