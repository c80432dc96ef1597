//! Query value object
//!
//! A query is built fresh for every request and never mutated once it is
//! handed to the view.

use crate::graph::{Category, EdgeType, Graph, NodeId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Seeds plus the filters applied while expanding them
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Query {
    seeds: BTreeSet<NodeId>,
    allowed_link_types: BTreeSet<EdgeType>,
    allowed_categories: BTreeSet<Category>,
    min_weight: f64,
}

impl Query {
    /// Query with the given seeds and no link types or categories enabled
    pub fn new<I, T>(seeds: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<NodeId>,
    {
        Query {
            seeds: seeds.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Query with every link type and every category of the graph enabled
    pub fn select_all<I, T>(graph: &Graph, seeds: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<NodeId>,
    {
        Query::new(seeds)
            .with_link_types(graph.link_types().cloned())
            .with_categories(graph.categories().cloned())
    }

    pub fn with_link_types<I, T>(mut self, link_types: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<EdgeType>,
    {
        self.allowed_link_types = link_types.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_categories<I, T>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Category>,
    {
        self.allowed_categories = categories.into_iter().map(Into::into).collect();
        self
    }

    /// A NaN threshold is kept as given; no edge passes it and the view
    /// reports it
    pub fn with_min_weight(mut self, min_weight: f64) -> Self {
        self.min_weight = min_weight;
        self
    }

    pub fn seeds(&self) -> &BTreeSet<NodeId> {
        &self.seeds
    }

    pub fn allowed_link_types(&self) -> &BTreeSet<EdgeType> {
        &self.allowed_link_types
    }

    pub fn allowed_categories(&self) -> &BTreeSet<Category> {
        &self.allowed_categories
    }

    pub fn min_weight(&self) -> f64 {
        self.min_weight
    }

    /// No seeds, no link types or no categories: nothing to show
    pub fn is_empty(&self) -> bool {
        self.seeds.is_empty()
            || self.allowed_link_types.is_empty()
            || self.allowed_categories.is_empty()
    }
}
