// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Viewer configuration.
//!
//! Startup defaults for the frame layout, playback state and window
//! behaviour. Read once at launch and never written back.

use crate::io::serialization;
use crate::models::format::{ChromaFormat, ColorFormat, Resolution};
use crate::models::play_item::PlaybackState;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "YUVIST_CONFIG";

const CONFIG_FILE_NAMES: [&str; 3] = ["config.yaml", "config.yml", "config.json"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Chroma format assumed for newly opened sources
    pub format: ChromaFormat,
    pub color_format: ColorFormat,
    /// Frame size assumed for newly opened sources
    pub resolution: Resolution,
    pub frame_rate: f64,
    /// Playback state after the first source loads
    pub initial_state: PlaybackState,
    /// Window size used in fullscreen; the monitor size when unset
    pub desktop_size: Option<[u32; 2]>,
    /// Upper bound for the resize presets
    pub max_window_size: [u32; 2],
    pub allow_fullscreen: bool,
    /// Starting directory of the open dialog
    pub playpath: PathBuf,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            format: ChromaFormat::Yuv420,
            color_format: ColorFormat::Yuv,
            resolution: Resolution::default(),
            frame_rate: 30.0,
            initial_state: PlaybackState::Pause,
            desktop_size: None,
            max_window_size: [1920, 1080],
            allow_fullscreen: true,
            playpath: PathBuf::from("."),
        }
    }
}

impl ViewerConfig {
    /// Load the configuration named by `YUVIST_CONFIG`, else the first
    /// config file found in the platform config directory, else defaults.
    ///
    /// An explicitly named file that fails to load is an error; a
    /// discovered one is logged and skipped.
    pub fn load() -> Result<Self> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            let path = PathBuf::from(path);
            let config = serialization::import_config(&path)?;
            log::info!("Loaded config from {}", path.display());
            return Ok(config.validated());
        }

        Ok(Self::discover().unwrap_or_default())
    }

    fn discover() -> Option<Self> {
        let dirs = directories::ProjectDirs::from("", "", "yuvist")?;
        Self::load_first(dirs.config_dir())
    }

    /// Replace values playback cannot use with their defaults.
    fn validated(mut self) -> Self {
        if !(self.frame_rate.is_finite() && self.frame_rate > 0.0) {
            let fallback = Self::default().frame_rate;
            log::warn!(
                "Invalid frame_rate {}, using {}",
                self.frame_rate,
                fallback
            );
            self.frame_rate = fallback;
        }
        self
    }

    /// Load the first readable config file in `dir`.
    fn load_first(dir: &Path) -> Option<Self> {
        CONFIG_FILE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .filter(|path| path.is_file())
            .find_map(|path| match serialization::import_config(&path) {
                Ok(config) => {
                    log::info!("Loaded config from {}", path.display());
                    Some(config.validated())
                }
                Err(e) => {
                    log::warn!("Ignoring config {}: {:#}", path.display(), e);
                    None
                }
            })
    }
}
