// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! `bernstein list` command - List seed nodes from configuration.
//!
//! Seeds a throwaway registry so the output matches what `up` would hold.

pub async fn execute(config_path: Option<&str>, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = super::load_config(config_path)?;
    let registry = config.seed_registry()?;
    let nodes = registry.nodes();

    if json {
        println!("{}", serde_json::to_string_pretty(&nodes)?);
        return Ok(());
    }

    if nodes.is_empty() {
        println!("No nodes defined in configuration.");
        return Ok(());
    }

    println!("╔═══════════════════╦═════════════════╦════════════╦══════════╦══════════════╗");
    println!("║ Name              ║ IP              ║ Status     ║ CPU      ║ RAM          ║");
    println!("╠═══════════════════╬═════════════════╬════════════╬══════════╬══════════════╣");

    for node in &nodes {
        println!(
            "║ {:<17} ║ {:<15} ║ {:<10} ║ {:<8} ║ {:<12} ║",
            node.name, node.ip, node.status, node.available.cpu, node.available.ram
        );
    }

    println!("╚═══════════════════╩═════════════════╩════════════╩══════════╩══════════════╝");
    println!();
    println!("Total: {} node(s)", nodes.len());

    Ok(())
}
