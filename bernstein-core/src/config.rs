// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! YAML configuration parser with strict schema validation.
//!
//! Validates control plane settings and seed nodes at boot-up time.
//! Any invalid field results in a HardValidationError that prevents startup.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::error::{BernsteinError, BernsteinResult, HardValidationError};
use crate::registry::NodeRegistry;
use crate::types::{NodeReport, Port};

const DEFAULT_LISTEN_PORT: u16 = 8080;

/// Raw seed node as parsed from YAML (before validation).
#[derive(Debug, Deserialize)]
struct RawNodeConfig {
    #[serde(default)]
    name: String,
    #[serde(default)]
    ip: String,
    #[serde(default = "default_status")]
    status: String,
    cpu: u32,
    ram: u64,
}

fn default_status() -> String {
    "ready".to_string()
}

/// Raw control plane configuration.
#[derive(Debug, Deserialize)]
struct RawControlPlaneConfig {
    #[serde(default = "default_listen_port")]
    listen_port: u16,
}

fn default_listen_port() -> u16 {
    DEFAULT_LISTEN_PORT
}

impl Default for RawControlPlaneConfig {
    fn default() -> Self {
        Self {
            listen_port: default_listen_port(),
        }
    }
}

/// Raw root configuration file.
#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(default)]
    control_plane: RawControlPlaneConfig,
    #[serde(default)]
    nodes: Vec<RawNodeConfig>,
}

/// Validated seed node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeConfig {
    pub name: String,
    pub report: NodeReport,
}

/// Validated control plane configuration.
#[derive(Debug, Clone)]
pub struct ControlPlaneConfig {
    pub listen_port: Port,
}

impl Default for ControlPlaneConfig {
    fn default() -> Self {
        Self {
            listen_port: Port(DEFAULT_LISTEN_PORT),
        }
    }
}

/// Complete validated configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub control_plane: ControlPlaneConfig,
    pub nodes: Vec<NodeConfig>,
}

impl Config {
    /// Replace the configured listen port (e.g. from `LISTEN_PORT`).
    pub fn with_listen_port(mut self, port: u16) -> BernsteinResult<Self> {
        self.control_plane.listen_port = Port::new(port)?;
        Ok(self)
    }

    /// Build a registry holding every seed node.
    /// Seed names are unique after validation, so this only fails on
    /// hand-built configs.
    pub fn seed_registry(&self) -> BernsteinResult<NodeRegistry> {
        let registry = NodeRegistry::new();
        for node in &self.nodes {
            registry.add_node(node.name.clone(), node.report.clone())?;
        }
        Ok(registry)
    }
}

/// Configuration loader with strict validation.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and validate configuration from a YAML file.
    /// Returns HardValidationError for any invalid fields.
    pub fn load_file(path: impl AsRef<Path>) -> BernsteinResult<Config> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(BernsteinError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| BernsteinError::Io {
            context: "reading config file",
            source: e,
        })?;

        Self::load_string(&content)
    }

    /// Load and validate configuration from a YAML string.
    pub fn load_string(content: &str) -> BernsteinResult<Config> {
        // An empty document means "all defaults"
        if content.trim().is_empty() {
            return Ok(Config::default());
        }

        let raw: RawConfig =
            serde_yaml::from_str(content).map_err(|e| BernsteinError::ConfigParse {
                message: format!("YAML parse error: {}", e),
            })?;

        Self::validate(raw)
    }

    /// Validate raw configuration and convert to validated types.
    fn validate(raw: RawConfig) -> BernsteinResult<Config> {
        let control_plane = ControlPlaneConfig {
            listen_port: Port::new(raw.control_plane.listen_port)?,
        };

        let mut nodes = Vec::with_capacity(raw.nodes.len());
        let mut seen_names = HashSet::new();

        for (index, raw_node) in raw.nodes.into_iter().enumerate() {
            let node = Self::validate_node(raw_node, index)?;

            if !seen_names.insert(node.name.clone()) {
                return Err(HardValidationError::DuplicateNodeName { name: node.name }.into());
            }

            nodes.push(node);
        }

        Ok(Config {
            control_plane,
            nodes,
        })
    }

    /// Validate a single seed node.
    fn validate_node(raw: RawNodeConfig, index: usize) -> BernsteinResult<NodeConfig> {
        let context = format!("node at index {}", index);

        if raw.name.trim().is_empty() {
            return Err(HardValidationError::MissingRequiredField {
                field: "name",
                context,
            }
            .into());
        }

        if raw.ip.trim().is_empty() {
            return Err(HardValidationError::MissingRequiredField {
                field: "ip",
                context: format!("{} ({})", context, raw.name),
            }
            .into());
        }

        if raw.status.is_empty() {
            return Err(HardValidationError::InvalidFieldValue {
                field: "status",
                value: String::new(),
                reason: format!("Status label cannot be empty in {}", context),
            }
            .into());
        }

        Ok(NodeConfig {
            report: NodeReport::new(raw.ip, raw.status, raw.cpu, raw.ram),
            name: raw.name,
        })
    }
}
