// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Transport controls.
//!
//! This module provides the control bar for opening files, stepping
//! through the playlist and frames, seeking, and setting the volume.

use crate::models::play_item::PlaybackState;
use crate::player::command::Command;
use crate::player::surface::VideoSurface;

/// Fraction of the source the cursor is at, 0.0 for empty sources.
pub fn seek_fraction(frame: u64, frame_count: u64) -> f64 {
    if frame_count <= 1 {
        0.0
    } else {
        frame as f64 / (frame_count - 1) as f64
    }
}

/// Display the control bar and return the command the user issued.
pub fn show(ui: &mut egui::Ui, surface: &dyn VideoSurface) -> Option<Command> {
    let mut command = None;
    let has_source = surface.source().is_some();
    let (frame, frame_count) = surface.position();

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 6.0;

        if ui.button("📂").on_hover_text("Open file").clicked() {
            command = Some(Command::OpenFile);
        }

        ui.separator();

        ui.add_enabled_ui(has_source, |ui| {
            if ui.button("⏮").on_hover_text("Previous video").clicked() {
                command = Some(Command::PrevVideo);
            }
            if ui.button("⏪").on_hover_text("Previous frame").clicked() {
                command = Some(Command::PrevFrame);
            }

            let play_label = if surface.state() == PlaybackState::Play {
                "⏸"
            } else {
                "▶"
            };
            if ui.button(play_label).on_hover_text("Play / pause").clicked() {
                command = Some(Command::PlayPause);
            }
            if ui.button("⏹").on_hover_text("Stop").clicked() {
                command = Some(Command::Stop);
            }

            if ui.button("⏩").on_hover_text("Next frame").clicked() {
                command = Some(Command::NextFrame);
            }
            if ui.button("⏭").on_hover_text("Next video").clicked() {
                command = Some(Command::NextVideo);
            }
        });

        ui.separator();

        // Seek bar takes whatever is left after the volume slider
        let volume_width = 120.0;
        let seek_width = (ui.available_width() - volume_width - 80.0).max(60.0);
        let mut fraction = seek_fraction(frame, frame_count);
        ui.spacing_mut().slider_width = seek_width;
        let seek = ui.add_enabled(
            frame_count > 1,
            egui::Slider::new(&mut fraction, 0.0..=1.0).show_value(false),
        );
        if seek.changed() {
            command = Some(Command::Seek(fraction));
        }
        ui.label(format!("{}/{}", frame, frame_count));

        ui.separator();

        let mut volume = surface.volume();
        ui.spacing_mut().slider_width = volume_width;
        ui.label("🔊");
        if ui
            .add(egui::Slider::new(&mut volume, 0.0..=1.0).show_value(false))
            .changed()
        {
            command = Some(Command::SetVolume(volume));
        }
    });

    command
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seek_fraction() {
        assert_eq!(seek_fraction(0, 0), 0.0);
        assert_eq!(seek_fraction(0, 1), 0.0);
        assert_eq!(seek_fraction(5, 11), 0.5);
        assert_eq!(seek_fraction(10, 11), 1.0);
    }
}
