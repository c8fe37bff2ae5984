//! Thread-safe node registry behind a single reader/writer lock.
//!
//! Reads share the lock. Every mutation holds the write lock for its whole
//! check-then-update sequence, so two placements on the same node can never
//! both pass a capacity check against the same stale value.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::{RegistryError, RegistryResult};
use crate::node::Node;
use crate::types::{ContainerId, NodeReport, Resources};

/// Thread-safe registry of cluster nodes.
/// Sole owner of every `Node`; callers only receive snapshots.
#[derive(Debug)]
pub struct NodeRegistry {
    /// Map of node name to node record.
    nodes: RwLock<HashMap<String, Node>>,
}

impl NodeRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            nodes: RwLock::new(HashMap::new()),
        }
    }

    /// Create a registry wrapped in an Arc for sharing across threads.
    pub fn new_shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Get a snapshot of a node.
    pub fn get_node(&self, name: &str) -> RegistryResult<Node> {
        let nodes = self.nodes.read();

        match nodes.get(name) {
            Some(node) => {
                tracing::info!(
                    node = %name,
                    ip = %node.ip,
                    status = %node.status,
                    cpu = node.available.cpu,
                    ram = node.available.ram,
                    containers = node.containers.len(),
                    "get_node"
                );
                Ok(node.clone())
            }
            None => {
                tracing::info!(node = %name, "get_node: not found");
                Err(RegistryError::not_found(name))
            }
        }
    }

    /// Add a node with no containers.
    /// Returns NodeAlreadyExists if the name is taken; the existing node is untouched.
    pub fn add_node(&self, name: impl Into<String>, report: NodeReport) -> RegistryResult<()> {
        let name = name.into();
        let mut nodes = self.nodes.write();

        match nodes.entry(name) {
            Entry::Occupied(entry) => {
                tracing::warn!(node = %entry.key(), "add_node: already exists");
                Err(RegistryError::NodeAlreadyExists {
                    name: entry.key().clone(),
                })
            }
            Entry::Vacant(entry) => {
                let node = Node::new(entry.key().clone(), report);
                tracing::info!(
                    node = %node.name,
                    ip = %node.ip,
                    status = %node.status,
                    cpu = node.available.cpu,
                    ram = node.available.ram,
                    "add_node"
                );
                entry.insert(node);
                Ok(())
            }
        }
    }

    /// Overwrite a node's ip, status and available capacity.
    /// Containers already placed on the node are preserved.
    pub fn update_node_status(&self, name: &str, report: NodeReport) -> RegistryResult<()> {
        let mut nodes = self.nodes.write();

        let node = nodes
            .get_mut(name)
            .ok_or_else(|| RegistryError::not_found(name))?;
        node.apply_report(report);

        tracing::info!(
            node = %name,
            ip = %node.ip,
            status = %node.status,
            cpu = node.available.cpu,
            ram = node.available.ram,
            containers = node.containers.len(),
            "update_node_status"
        );
        Ok(())
    }

    /// Place a container on a node, reserving `request` from its capacity.
    ///
    /// Fails with NodeNotFound or InsufficientResources without changing
    /// anything. The capacity check and the decrement happen under one write
    /// lock acquisition.
    pub fn add_container_to_node(
        &self,
        name: &str,
        container: impl Into<ContainerId>,
        request: Resources,
    ) -> RegistryResult<()> {
        let container = container.into();
        let mut nodes = self.nodes.write();

        let node = nodes
            .get_mut(name)
            .ok_or_else(|| RegistryError::not_found(name))?;

        if let Err(e) = node.place(container.clone(), request) {
            tracing::warn!(
                node = %name,
                container = %container,
                requested_cpu = request.cpu,
                requested_ram = request.ram,
                cpu = node.available.cpu,
                ram = node.available.ram,
                "add_container_to_node: insufficient resources"
            );
            return Err(e);
        }

        tracing::info!(
            node = %name,
            container = %container,
            ip = %node.ip,
            status = %node.status,
            cpu = node.available.cpu,
            ram = node.available.ram,
            containers = node.containers.len(),
            "add_container_to_node"
        );
        Ok(())
    }

    /// Remove a node, returning its final state.
    pub fn delete_node(&self, name: &str) -> RegistryResult<Node> {
        let node = self
            .nodes
            .write()
            .remove(name)
            .ok_or_else(|| RegistryError::not_found(name))?;

        tracing::info!(
            node = %name,
            ip = %node.ip,
            status = %node.status,
            cpu = node.available.cpu,
            ram = node.available.ram,
            containers = node.containers.len(),
            "delete_node"
        );
        Ok(node)
    }

    /// Check if a node exists.
    pub fn contains(&self, name: &str) -> bool {
        self.nodes.read().contains_key(name)
    }

    /// Get the number of registered nodes.
    pub fn len(&self) -> usize {
        self.nodes.read().len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.read().is_empty()
    }

    /// Get all node names, sorted.
    pub fn node_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.nodes.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Snapshot of every node, sorted by name.
    pub fn nodes(&self) -> Vec<Node> {
        let mut nodes: Vec<Node> = self.nodes.read().values().cloned().collect();
        nodes.sort_by(|a, b| a.name.cmp(&b.name));
        nodes
    }

    /// Get names of nodes whose status label equals `status`, sorted.
    pub fn nodes_with_status(&self, status: &str) -> Vec<String> {
        let mut names: Vec<String> = self
            .nodes
            .read()
            .values()
            .filter(|node| node.status == status)
            .map(|node| node.name.clone())
            .collect();
        names.sort();
        names
    }
}

impl Default for NodeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
