//! Custom error types for Bernstein.
//!
//! This module defines explicit enum error types as per coding guidelines.
//! No `Box<dyn Error>`, no `anyhow::Result` - all errors are strongly typed.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::Resources;

/// Top-level error type for the Bernstein control plane.
/// All errors are explicit variants - no catch-all or generic handling.
#[derive(Debug, Error)]
pub enum BernsteinError {
    // =========================================================================
    // Configuration Errors - Fail-Fast on Invalid Config
    // =========================================================================
    #[error("Hard validation error: {0}")]
    HardValidation(#[from] HardValidationError),

    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Configuration parse error: {message}")]
    ConfigParse { message: String },

    // =========================================================================
    // Registry Errors
    // =========================================================================
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    // =========================================================================
    // System Errors
    // =========================================================================
    #[error("IO error: {context} - {source}")]
    Io {
        context: &'static str,
        #[source]
        source: std::io::Error,
    },
}

/// Hard validation errors cause immediate process termination.
/// Used when configuration is invalid and the control plane cannot safely start.
#[derive(Debug, Error)]
pub enum HardValidationError {
    #[error("Missing required field: {field} in {context}")]
    MissingRequiredField {
        field: &'static str,
        context: String,
    },

    #[error("Invalid field value: {field} = {value} - {reason}")]
    InvalidFieldValue {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("Invalid port: {port} - {reason}")]
    InvalidPort { port: u16, reason: String },

    #[error("Duplicate node name: {name}")]
    DuplicateNodeName { name: String },
}

/// Errors returned by the node registry.
///
/// Every variant is returned before any mutation takes place, so a failed
/// call leaves the registry exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Node not found: {name}")]
    NodeNotFound { name: String },

    #[error("Node already exists: {name}")]
    NodeAlreadyExists { name: String },

    #[error(
        "Insufficient resources on node {name}: requested {requested}, available {available}"
    )]
    InsufficientResources {
        name: String,
        requested: Resources,
        available: Resources,
    },
}

impl RegistryError {
    pub(crate) fn not_found(name: &str) -> Self {
        Self::NodeNotFound {
            name: name.to_string(),
        }
    }
}

/// Result type alias using BernsteinError.
pub type BernsteinResult<T> = Result<T, BernsteinError>;

/// Result type alias for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;
