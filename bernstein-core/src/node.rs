// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Node records held by the registry.
//!
//! A `Node` is only ever mutated through `&mut self`, which the registry hands
//! out while holding its write lock. Callers outside the registry see clones.

use serde::{Deserialize, Serialize};

use crate::error::{RegistryError, RegistryResult};
use crate::types::{ContainerId, NodeReport, Resources};

/// A cluster node and the containers placed on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Unique name, the registry key.
    pub name: String,
    /// Address string, not interpreted.
    pub ip: String,
    /// Caller-defined status label, not interpreted.
    pub status: String,
    /// Currently unallocated capacity.
    pub available: Resources,
    /// Containers in placement order.
    pub containers: Vec<ContainerId>,
}

impl Node {
    /// Create a node with no containers.
    pub fn new(name: impl Into<String>, report: NodeReport) -> Self {
        Self {
            name: name.into(),
            ip: report.ip,
            status: report.status,
            available: report.available,
            containers: Vec::new(),
        }
    }

    pub fn cpu_available(&self) -> u32 {
        self.available.cpu
    }

    pub fn ram_available(&self) -> u64 {
        self.available.ram
    }

    /// Overwrite address, status and capacity. Placed containers are kept.
    pub(crate) fn apply_report(&mut self, report: NodeReport) {
        self.ip = report.ip;
        self.status = report.status;
        self.available = report.available;
    }

    /// Reserve `request` for `container`.
    ///
    /// Either both capacities are decremented and the container is appended,
    /// or nothing changes and `InsufficientResources` is returned.
    pub(crate) fn place(&mut self, container: ContainerId, request: Resources) -> RegistryResult<()> {
        let remaining = self.available.checked_sub(request).ok_or_else(|| {
            RegistryError::InsufficientResources {
                name: self.name.clone(),
                requested: request,
                available: self.available,
            }
        })?;

        self.available = remaining;
        self.containers.push(container);
        Ok(())
    }
}
