// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! End-to-end integration tests for Bernstein.
//!
//! These tests verify the flow from configuration to a seeded registry, and the
//! capacity accounting guarantees under sequential and concurrent placement.

use std::sync::{Arc, Barrier};
use std::thread;

use bernstein_core::{
    BernsteinError, ConfigLoader, NodeRegistry, NodeReport, RegistryError, Resources,
};
use proptest::prelude::*;
use tempfile::TempDir;

/// Test configuration loading and registry seeding
#[test]
fn test_config_loading_and_seeding() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("bernstein.yaml");

    std::fs::write(
        &config_path,
        r#"
control_plane:
  listen_port: 9999

nodes:
  - name: foo
    ip: 10.0.0.1
    status: ready
    cpu: 4
    ram: 512
"#,
    )
    .expect("Failed to write config");

    let config = ConfigLoader::load_file(&config_path).expect("Failed to load config");
    assert_eq!(config.control_plane.listen_port.value(), 9999);

    let registry = config.seed_registry().expect("Failed to seed registry");
    registry
        .add_container_to_node("foo", "c1", Resources::new(1, 128))
        .unwrap();

    let node = registry.get_node("foo").unwrap();
    assert_eq!(node.available, Resources::new(3, 384));
    assert_eq!(node.containers, vec!["c1"]);
}

/// Test missing configuration file is reported
#[test]
fn test_missing_config_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let result = ConfigLoader::load_file(temp_dir.path().join("absent.yaml"));
    assert!(matches!(result, Err(BernsteinError::ConfigNotFound { .. })));
}

/// Test the full node lifecycle through the public API
#[test]
fn test_node_lifecycle() {
    let registry = NodeRegistry::new();

    registry
        .add_node("foo", NodeReport::new("10.0.0.1", "ready", 4, 512))
        .unwrap();
    assert!(matches!(
        registry.add_node("foo", NodeReport::new("10.0.0.9", "ready", 1, 1)),
        Err(RegistryError::NodeAlreadyExists { .. })
    ));

    registry
        .add_container_to_node("foo", "c1", Resources::new(1, 128))
        .unwrap();
    assert!(matches!(
        registry.add_container_to_node("foo", "c2", Resources::new(4, 256)),
        Err(RegistryError::InsufficientResources { .. })
    ));

    registry
        .update_node_status("foo", NodeReport::new("10.0.0.2", "active", 8, 1024))
        .unwrap();
    let node = registry.get_node("foo").unwrap();
    assert_eq!(node.ip, "10.0.0.2");
    assert_eq!(node.status, "active");
    assert_eq!(node.available, Resources::new(8, 1024));
    assert_eq!(node.containers, vec!["c1"]);

    registry.delete_node("foo").unwrap();
    assert!(matches!(
        registry.get_node("foo"),
        Err(RegistryError::NodeNotFound { .. })
    ));
}

/// Test a node snapshot serializes with its placement history
#[test]
fn test_node_snapshot_serializes() {
    let registry = NodeRegistry::new();
    registry
        .add_node("foo", NodeReport::new("10.0.0.1", "ready", 4, 512))
        .unwrap();
    registry
        .add_container_to_node("foo", "c1", Resources::new(1, 128))
        .unwrap();

    let json = serde_json::to_value(registry.get_node("foo").unwrap()).unwrap();
    assert_eq!(json["available"]["cpu"], 3);
    assert_eq!(json["available"]["ram"], 384);
    assert_eq!(json["containers"][0], "c1");
}

/// Concurrent placements from many threads, released together
#[test]
fn test_concurrent_placement_across_nodes() {
    const THREADS: usize = 16;
    const PER_THREAD: usize = 50;

    let registry = NodeRegistry::new_shared();
    for name in ["a", "b"] {
        registry
            .add_node(name, NodeReport::new("10.0.0.1", "ready", 100, 1000))
            .unwrap();
    }

    let barrier = Arc::new(Barrier::new(THREADS));
    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let reg = Arc::clone(&registry);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                let mut deducted = [Resources::ZERO; 2];
                for i in 0..PER_THREAD {
                    let slot = (t + i) % 2;
                    let name = if slot == 0 { "a" } else { "b" };
                    let request = Resources::new(1 + (i % 3) as u32, 7);
                    if reg
                        .add_container_to_node(name, format!("t{}-{}", t, i), request)
                        .is_ok()
                    {
                        deducted[slot].cpu += request.cpu;
                        deducted[slot].ram += request.ram;
                    }
                    // Readers interleave with writers
                    let _ = reg.get_node(name);
                }
                deducted
            })
        })
        .collect();

    let mut totals = [Resources::ZERO; 2];
    for handle in handles {
        let deducted = handle.join().unwrap();
        for slot in 0..2 {
            totals[slot].cpu += deducted[slot].cpu;
            totals[slot].ram += deducted[slot].ram;
        }
    }

    for (slot, name) in ["a", "b"].into_iter().enumerate() {
        let node = registry.get_node(name).unwrap();
        assert!(totals[slot].cpu <= 100);
        assert!(totals[slot].ram <= 1000);
        assert_eq!(node.available.cpu, 100 - totals[slot].cpu);
        assert_eq!(node.available.ram, 1000 - totals[slot].ram);
    }
}

proptest! {
    /// Deductions never exceed the starting capacity, and every rejected
    /// request leaves the node unchanged.
    #[test]
    fn prop_placement_never_overdraws(
        cpu in 0u32..64,
        ram in 0u64..4096,
        requests in prop::collection::vec((0u32..16, 0u64..1024), 0..64),
    ) {
        let registry = NodeRegistry::new();
        registry.add_node("node", NodeReport::new("10.0.0.1", "ready", cpu, ram)).unwrap();

        let mut deducted = Resources::ZERO;
        let mut placed = Vec::new();

        for (i, (cpu_req, ram_req)) in requests.into_iter().enumerate() {
            let request = Resources::new(cpu_req, ram_req);
            let before = registry.get_node("node").unwrap();
            let id = format!("c{}", i);

            match registry.add_container_to_node("node", id.clone(), request) {
                Ok(()) => {
                    prop_assert!(before.available.covers(request));
                    deducted.cpu += cpu_req;
                    deducted.ram += ram_req;
                    placed.push(id);
                }
                Err(RegistryError::InsufficientResources { .. }) => {
                    prop_assert!(!before.available.covers(request));
                    prop_assert_eq!(registry.get_node("node").unwrap(), before);
                }
                Err(other) => prop_assert!(false, "unexpected error: {}", other),
            }
        }

        let node = registry.get_node("node").unwrap();
        prop_assert!(deducted.cpu <= cpu);
        prop_assert!(deducted.ram <= ram);
        prop_assert_eq!(node.available, Resources::new(cpu - deducted.cpu, ram - deducted.ram));
        let recorded: Vec<String> = node.containers.into_iter().map(String::from).collect();
        prop_assert_eq!(recorded, placed);
    }
}
