// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Raw source probing.
//!
//! Raw YUV files carry no header, so the frame count is derived from the
//! file length and the configured frame layout.

use crate::models::play_item::PlayItem;
use anyhow::{Context, Result};
use std::path::Path;

/// File extensions offered by the open dialog.
pub const RAW_EXTENSIONS: [&str; 4] = ["yuv", "raw", "i420", "nv12"];

/// Size facts about a raw source under a given frame layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceInfo {
    pub file_len: u64,
    pub frame_bytes: u64,
    pub frame_count: u64,
}

impl SourceInfo {
    /// Derive frame facts from a file length. A trailing partial frame is
    /// not counted.
    pub fn from_len(file_len: u64, frame_bytes: u64) -> Self {
        let frame_count = if frame_bytes == 0 { 0 } else { file_len / frame_bytes };
        Self {
            file_len,
            frame_bytes,
            frame_count,
        }
    }
}

/// Read the file length of `item.source` and compute its frame count.
pub fn probe(item: &PlayItem) -> Result<SourceInfo> {
    let file_len = file_len(&item.source)?;
    let frame_bytes = item.format.frame_bytes(item.resolution);
    Ok(SourceInfo::from_len(file_len, frame_bytes))
}

fn file_len(path: &Path) -> Result<u64> {
    let metadata = std::fs::metadata(path)
        .with_context(|| format!("Failed to stat {}", path.display()))?;
    Ok(metadata.len())
}
