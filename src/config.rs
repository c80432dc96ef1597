//! View configuration
//!
//! Loaded from YAML. Every field has a default, so an empty document is a
//! valid configuration.

use crate::graph::NodeId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid base_node_size {0}: must be finite and non-negative")]
    InvalidBaseSize(f64),

    #[error("Invalid default_min_weight {0}: must be finite")]
    InvalidMinWeight(f64),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Settings shared by every view built from one graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Size of a node with no neighbors
    pub base_node_size: f64,
    /// Threshold used when a request does not set one
    pub default_min_weight: f64,
    /// Nodes flagged for special rendering (e.g. a watch list of suspects)
    pub highlighted_nodes: BTreeSet<NodeId>,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            base_node_size: 1.0,
            default_min_weight: 0.0,
            highlighted_nodes: BTreeSet::new(),
        }
    }
}

impl ViewConfig {
    pub fn from_yaml_str(yaml: &str) -> ConfigResult<Self> {
        let config: ViewConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&contents)?;
        info!("Loaded view config from {:?}", path);
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if !self.base_node_size.is_finite() || self.base_node_size < 0.0 {
            return Err(ConfigError::InvalidBaseSize(self.base_node_size));
        }
        if !self.default_min_weight.is_finite() {
            return Err(ConfigError::InvalidMinWeight(self.default_min_weight));
        }
        Ok(())
    }

    pub fn is_highlighted(&self, id: &NodeId) -> bool {
        self.highlighted_nodes.contains(id)
    }
}
