// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! CLI command modules.

pub mod list;
pub mod up;
pub mod validate;

use bernstein_core::{BernsteinResult, Config, ConfigLoader};

/// Load the configuration file if one was given, otherwise use defaults.
pub fn load_config(config_path: Option<&str>) -> BernsteinResult<Config> {
    match config_path {
        Some(path) => ConfigLoader::load_file(path),
        None => {
            tracing::info!("No configuration file given, using defaults");
            Ok(Config::default())
        }
    }
}
