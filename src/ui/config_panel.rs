// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Launcher buttons for the configuration dialogs.

use crate::models::play_item::PlaybackState;
use crate::player::command::Command;

/// Display the config launchers with the mirrored playback state.
pub fn show(ui: &mut egui::Ui, state: PlaybackState) -> Option<Command> {
    let mut command = None;

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 4.0;

        if ui
            .small_button("⚙")
            .on_hover_text("Image size and chroma format")
            .clicked()
        {
            command = Some(Command::ConfigYuv);
        }
        if ui.small_button("☰").on_hover_text("Playlist").clicked() {
            command = Some(Command::ConfigPlaylist);
        }

        ui.separator();

        let state_text = match state {
            PlaybackState::Play => "Playing",
            PlaybackState::Pause => "Paused",
            PlaybackState::Stop => "Stopped",
        };
        ui.label(egui::RichText::new(state_text).italics().weak());
    });

    command
}
