// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Viewer configuration deserialization.
//!
//! This module handles reading viewer configuration files in YAML
//! and JSON formats.

use crate::config::ViewerConfig;
use anyhow::{bail, Context, Result};
use std::path::Path;

/// Import a configuration, picking the parser from the file extension.
pub fn import_config(path: &Path) -> Result<ViewerConfig> {
    let extension = path.extension().and_then(|s| s.to_str());
    match extension {
        Some("yaml") | Some("yml") => import_yaml(path),
        Some("json") => import_json(path),
        _ => bail!("Unsupported config extension: {:?}", extension),
    }
}

/// Import configuration from YAML format.
pub fn import_yaml(path: &Path) -> Result<ViewerConfig> {
    let yaml = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config = serde_yaml::from_str(&yaml)?;
    Ok(config)
}

/// Import configuration from JSON format.
pub fn import_json(path: &Path) -> Result<ViewerConfig> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config = serde_json::from_str(&json)?;
    Ok(config)
}
