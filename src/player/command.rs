// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Typed player commands raised by panels, shortcuts and the surface.

use crate::models::play_item::PlayItem;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// The surface loaded a new source or new decode parameters
    LoadVideo(PlayItem),
    PrevVideo,
    NextVideo,
    OpenFile,
    /// Open the resolution and chroma format picker
    ConfigYuv,
    ConfigPlaylist,
    PrevFrame,
    NextFrame,
    PlayPause,
    Stop,
    /// Seek to a fraction of the source, 0.0 = first frame, 1.0 = last
    Seek(f64),
    SetVolume(f32),
    AdjustVolume(f32),
    ToggleFullscreen,
    /// Resize the window to the video's resolution times this factor
    Resize(f32),
    DropFile(PathBuf),
}
