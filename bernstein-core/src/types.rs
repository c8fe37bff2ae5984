// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Value types shared by the registry and configuration.
//!
//! Capacities are unsigned, so a node can never be represented with negative
//! CPU or RAM. Identifiers the registry does not interpret (container IDs, node
//! IPs and status labels) stay opaque strings.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::HardValidationError;

/// CPU and RAM units, used both for available capacity and for requests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Resources {
    pub cpu: u32,
    pub ram: u64,
}

impl Resources {
    /// No CPU, no RAM.
    pub const ZERO: Self = Self { cpu: 0, ram: 0 };

    pub const fn new(cpu: u32, ram: u64) -> Self {
        Self { cpu, ram }
    }

    /// Whether `request` fits in these resources on both dimensions.
    pub fn covers(&self, request: Resources) -> bool {
        request.cpu <= self.cpu && request.ram <= self.ram
    }

    /// Subtract `request`, or `None` if either dimension would underflow.
    pub fn checked_sub(self, request: Resources) -> Option<Resources> {
        Some(Self {
            cpu: self.cpu.checked_sub(request.cpu)?,
            ram: self.ram.checked_sub(request.ram)?,
        })
    }
}

impl fmt::Display for Resources {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cpu={}, ram={}", self.cpu, self.ram)
    }
}

/// Opaque container identifier.
/// Duplicates are allowed; the registry only records placement order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContainerId(String);

impl ContainerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ContainerId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ContainerId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<ContainerId> for String {
    fn from(id: ContainerId) -> Self {
        id.0
    }
}

impl PartialEq<&str> for ContainerId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// State reported by a node: its address, status label and free capacity.
///
/// Used both when a node is first added and on every later status update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeReport {
    pub ip: String,
    pub status: String,
    pub available: Resources,
}

impl NodeReport {
    pub fn new(ip: impl Into<String>, status: impl Into<String>, cpu: u32, ram: u64) -> Self {
        Self {
            ip: ip.into(),
            status: status.into(),
            available: Resources::new(cpu, ram),
        }
    }
}

/// Validated network port.
/// Must be in range 1-65535 (0 is reserved).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Port(pub(crate) u16);

impl Port {
    /// Create a new Port with validation.
    pub fn new(port: u16) -> Result<Self, HardValidationError> {
        if port == 0 {
            return Err(HardValidationError::InvalidPort {
                port,
                reason: "Port 0 is reserved and cannot be used".to_string(),
            });
        }
        Ok(Self(port))
    }

    /// Get the inner port value.
    pub fn value(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u16> for Port {
    type Error = HardValidationError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Port> for u16 {
    fn from(port: Port) -> Self {
        port.0
    }
}
