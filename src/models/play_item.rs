// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Playable source descriptors.
//!
//! A `PlayItem` carries everything needed to interpret one raw file:
//! where it lives, how its frames are laid out, and how fast to play it.

use super::format::{ChromaFormat, ColorFormat, Resolution};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Transport state of the video surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackState {
    Play,
    #[default]
    Pause,
    Stop,
}

/// How the frames of a raw source are laid out and paced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameLayout {
    pub format: ChromaFormat,
    pub color_format: ColorFormat,
    pub resolution: Resolution,
    pub frame_rate: f64,
}

impl Default for FrameLayout {
    fn default() -> Self {
        Self {
            format: ChromaFormat::Yuv420,
            color_format: ColorFormat::Yuv,
            resolution: Resolution::default(),
            frame_rate: 30.0,
        }
    }
}

/// Decode parameters for one raw source file, keyed by `source`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayItem {
    pub source: PathBuf,
    pub format: ChromaFormat,
    pub color_format: ColorFormat,
    pub resolution: Resolution,
    pub frame_rate: f64,
}

impl PlayItem {
    /// Create a play item for the given source and frame layout.
    pub fn new(
        source: impl Into<PathBuf>,
        format: ChromaFormat,
        color_format: ColorFormat,
        resolution: Resolution,
        frame_rate: f64,
    ) -> Self {
        Self {
            source: source.into(),
            format,
            color_format,
            resolution,
            frame_rate,
        }
    }

    /// Attach a frame layout to a source path.
    pub fn with_layout(source: impl Into<PathBuf>, layout: FrameLayout) -> Self {
        Self::new(
            source,
            layout.format,
            layout.color_format,
            layout.resolution,
            layout.frame_rate,
        )
    }

    pub fn layout(&self) -> FrameLayout {
        FrameLayout {
            format: self.format,
            color_format: self.color_format,
            resolution: self.resolution,
            frame_rate: self.frame_rate,
        }
    }

    /// Whether this item describes the given source path.
    pub fn is_source(&self, source: &Path) -> bool {
        self.source == source
    }

    /// File name component of the source, for titles and list rows.
    pub fn file_name(&self) -> String {
        self.source
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.source.display().to_string())
    }

    /// Window title in the form `name WxH:FORMAT@fps`.
    pub fn window_title(&self) -> String {
        format!(
            "{} {}:{}@{:2.0}",
            self.file_name(),
            self.resolution,
            self.format.name().to_uppercase(),
            self.frame_rate
        )
    }
}
