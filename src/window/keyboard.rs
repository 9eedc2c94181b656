// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Keyboard shortcuts.
//!
//! `meta` below is the platform command key (Cmd on macOS, Ctrl elsewhere).

use crate::player::command::Command;
use egui::{Key, Modifiers};

/// Volume change per arrow key press.
pub const VOLUME_STEP: f32 = 0.1;

/// Map a key press to a player command. Unbound keys return `None` and are
/// left for egui's own handling.
///
/// | Keys                 | Command                  |
/// |----------------------|--------------------------|
/// | meta+0 / meta+3      | resize to 50%            |
/// | meta+1 / meta+2      | resize to 100% / 200%    |
/// | meta+F               | resize to 50%            |
/// | Enter                | toggle fullscreen        |
/// | meta+alt+Down        | mute                     |
/// | Up / Down            | volume +/- 0.1           |
/// | Home / End           | seek to start / end      |
/// | meta+alt+Left/Right  | previous / next video    |
/// | [ / ]                | previous / next frame    |
/// | Space                | play / pause             |
/// | meta+O               | open file                |
/// | meta+alt+C           | configure format         |
/// | meta+alt+L           | configure playlist       |
pub fn dispatch(key: Key, modifiers: Modifiers) -> Option<Command> {
    let meta = modifiers.command;
    let meta_alt = meta && modifiers.alt;

    let command = match key {
        Key::Num0 | Key::Num3 | Key::F if meta => Command::Resize(0.5),
        Key::Num1 if meta => Command::Resize(1.0),
        Key::Num2 if meta => Command::Resize(2.0),

        Key::Enter => Command::ToggleFullscreen,

        Key::ArrowDown if meta_alt => Command::SetVolume(0.0),
        Key::ArrowUp => Command::AdjustVolume(VOLUME_STEP),
        Key::ArrowDown => Command::AdjustVolume(-VOLUME_STEP),

        Key::Home => Command::Seek(0.0),
        Key::End => Command::Seek(1.0),

        Key::ArrowLeft if meta_alt => Command::PrevVideo,
        Key::ArrowRight if meta_alt => Command::NextVideo,
        Key::OpenBracket => Command::PrevFrame,
        Key::CloseBracket => Command::NextFrame,
        Key::Space => Command::PlayPause,

        Key::O if meta => Command::OpenFile,
        Key::C if meta_alt => Command::ConfigYuv,
        Key::L if meta_alt => Command::ConfigPlaylist,

        _ => return None,
    };
    Some(command)
}

/// Apply a volume change, clamped to [0, 1].
pub fn adjust_volume(volume: f32, delta: f32) -> f32 {
    (volume + delta).clamp(0.0, 1.0)
}
