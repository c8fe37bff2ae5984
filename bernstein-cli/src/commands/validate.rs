// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! `bernstein validate` command - Validate configuration file.

use bernstein_core::ConfigLoader;

pub async fn execute(file: &str) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!(file = %file, "Validating configuration");

    match ConfigLoader::load_file(file) {
        Ok(config) => {
            println!("✓ Configuration is valid");
            println!();
            println!("Control Plane Settings:");
            println!("  Listen Port: {}", config.control_plane.listen_port);
            println!();
            println!("Nodes ({}):", config.nodes.len());
            for node in &config.nodes {
                println!(
                    "  - {} (ip: {}, status: {}, {})",
                    node.name, node.report.ip, node.report.status, node.report.available
                );
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("✗ Configuration validation failed:");
            eprintln!("  {}", e);
            std::process::exit(1);
        }
    }
}
