//! Bernstein Core Library
//!
//! Core library for the Bernstein control plane.
//! Provides the node registry, node records, resource accounting types,
//! and configuration parsing.

pub mod config;
pub mod error;
pub mod node;
pub mod registry;
pub mod types;

// Re-export commonly used types
pub use config::{Config, ConfigLoader, ControlPlaneConfig, NodeConfig};
pub use error::{
    BernsteinError, BernsteinResult, HardValidationError, RegistryError, RegistryResult,
};
pub use node::Node;
pub use registry::NodeRegistry;
pub use types::{ContainerId, NodeReport, Port, Resources};
