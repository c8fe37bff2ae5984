// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! `bernstein up` command - Start the control plane.
//!
//! Builds the node registry from configuration and keeps it alive until Ctrl-C.

use std::sync::Arc;

use bernstein_core::NodeRegistry;

pub async fn execute(
    config_path: Option<&str>,
    listen_port: Option<u16>,
) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!(config = ?config_path, "Starting control plane");

    // Load and validate configuration - fail fast on invalid config
    let mut config = super::load_config(config_path)?;
    if let Some(port) = listen_port {
        config = config.with_listen_port(port)?;
    }

    tracing::info!(
        nodes = config.nodes.len(),
        "Configuration validated successfully"
    );

    // One registry for the whole process, shared by handle
    let registry: Arc<NodeRegistry> = Arc::new(config.seed_registry()?);

    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║              BERNSTEIN CONTROL PLANE                         ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    tracing::info!(
        listen_port = config.control_plane.listen_port.value(),
        "Listening on port"
    );

    println!(
        "Status: {} node(s) registered, port {}",
        registry.len(),
        config.control_plane.listen_port
    );
    for node in registry.nodes() {
        println!(
            "  ● {:<20} {:<16} [{}] cpu={} ram={}",
            node.name, node.ip, node.status, node.available.cpu, node.available.ram
        );
    }
    println!();
    println!("Press Ctrl+C to stop");

    tokio::signal::ctrl_c().await?;

    println!();
    tracing::info!(nodes = registry.len(), "Shutting down control plane");
    println!("✓ Control plane stopped");

    Ok(())
}
