//! Core type definitions for the graph

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Unique identifier for a node, as it appears in the node table
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        NodeId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        NodeId(s)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        NodeId(s.to_string())
    }
}

impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for NodeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Link type (the relation an edge represents, e.g. "ownership", "partnership")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
pub struct EdgeType(String);

impl EdgeType {
    pub fn new(edge_type: impl Into<String>) -> Self {
        EdgeType(edge_type.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EdgeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for EdgeType {
    fn from(s: String) -> Self {
        EdgeType(s)
    }
}

impl From<&str> for EdgeType {
    fn from(s: &str) -> Self {
        EdgeType(s.to_string())
    }
}

impl AsRef<str> for EdgeType {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Node category (e.g. "person", "organization", "vessel")
///
/// The set is open-ended. Nodes without a category, and ids that are not
/// in the node table at all, fall back to [`Category::UNCATEGORIZED`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    /// Name of the fallback category
    pub const UNCATEGORIZED: &'static str = "Uncategorized";

    pub fn new(category: impl Into<String>) -> Self {
        Category(category.into())
    }

    pub fn uncategorized() -> Self {
        Category(Self::UNCATEGORIZED.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_uncategorized(&self) -> bool {
        self.0 == Self::UNCATEGORIZED
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::uncategorized()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Category {
    fn from(s: String) -> Self {
        Category(s)
    }
}

impl From<&str> for Category {
    fn from(s: &str) -> Self {
        Category(s.to_string())
    }
}

impl AsRef<str> for Category {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
