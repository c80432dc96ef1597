//! Node record
//!
//! One row of the node table: an id, a category and the precomputed
//! neighbor count used for display sizing.

use super::types::{Category, NodeId};
use serde::{Deserialize, Serialize};

/// A node in the graph
///
/// Nodes have:
/// - A unique ID
/// - A category (serialized as `type`)
/// - An optional neighbor count, computed outside this crate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier for this node
    pub id: NodeId,

    /// Category of this node; missing values fall back to Uncategorized
    #[serde(rename = "type", default)]
    pub category: Category,

    /// Precomputed neighbor count; `None` when the table has no value
    #[serde(default)]
    pub neighbor_count: Option<u64>,
}

impl Node {
    /// Create a new node without a neighbor count
    pub fn new(id: impl Into<NodeId>, category: impl Into<Category>) -> Self {
        Node {
            id: id.into(),
            category: category.into(),
            neighbor_count: None,
        }
    }

    /// Set the neighbor count
    pub fn with_neighbor_count(mut self, neighbor_count: u64) -> Self {
        self.neighbor_count = Some(neighbor_count);
        self
    }

    /// Check if node belongs to a specific category
    pub fn has_category(&self, category: &Category) -> bool {
        self.category == *category
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Node {}

impl std::hash::Hash for Node {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_node() {
        let node = Node::new("A", "person").with_neighbor_count(4);
        assert_eq!(node.id, NodeId::new("A"));
        assert!(node.has_category(&Category::new("person")));
        assert_eq!(node.neighbor_count, Some(4));
    }

    #[test]
    fn test_node_without_neighbor_count() {
        let node = Node::new("B", "vessel");
        assert_eq!(node.neighbor_count, None);
    }

    #[test]
    fn test_deserialize_row() {
        let node: Node =
            serde_json::from_str(r#"{"id": "8327", "type": "vessel", "neighbor_count": 12}"#)
                .unwrap();
        assert_eq!(node.id.as_str(), "8327");
        assert_eq!(node.category.as_str(), "vessel");
        assert_eq!(node.neighbor_count, Some(12));
    }

    #[test]
    fn test_deserialize_row_with_missing_columns() {
        let node: Node = serde_json::from_str(r#"{"id": "x"}"#).unwrap();
        assert!(node.category.is_uncategorized());
        assert_eq!(node.neighbor_count, None);
    }

    #[test]
    fn test_node_equality() {
        let node1 = Node::new("A", "person");
        let node2 = Node::new("A", "vessel");
        let node3 = Node::new("B", "person");

        assert_eq!(node1, node2); // Same ID
        assert_ne!(node1, node3);
    }
}
