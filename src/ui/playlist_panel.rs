// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Playlist picker.
//!
//! Lists the session's sources with their decode parameters. Selecting a
//! row and confirming (or double-clicking it) hands the item back for
//! playback.

use crate::models::play_item::PlayItem;
use crate::models::playlist::Playlist;
use std::path::Path;

#[derive(Debug, Clone, PartialEq)]
pub enum PlaylistAction {
    None,
    Cancel,
    Confirm(PlayItem),
}

#[derive(Debug, Clone)]
pub struct PlaylistPanel {
    items: Vec<PlayItem>,
    selected: Option<usize>,
}

impl PlaylistPanel {
    /// Snapshot `playlist`, preselecting the row for `current`.
    pub fn new(playlist: &Playlist, current: Option<&Path>) -> Self {
        Self {
            items: playlist.iter().cloned().collect(),
            selected: current.and_then(|source| playlist.position_of(source)),
        }
    }

    #[cfg(test)]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn select(&mut self, index: usize) {
        if index < self.items.len() {
            self.selected = Some(index);
        }
    }

    /// Confirm the selected row. Without a selection nothing happens.
    pub fn confirm(&self) -> PlaylistAction {
        self.selected
            .and_then(|index| self.items.get(index))
            .map_or(PlaylistAction::None, |item| PlaylistAction::Confirm(item.clone()))
    }

    pub fn show(&mut self, ui: &mut egui::Ui) -> PlaylistAction {
        let mut action = PlaylistAction::None;
        let mut clicked = None;

        if self.items.is_empty() {
            ui.vertical_centered(|ui| {
                ui.add_space(40.0);
                ui.label(egui::RichText::new("Playlist is empty").weak());
                ui.add_space(10.0);
                if ui.button("Close").clicked() {
                    action = PlaylistAction::Cancel;
                }
            });
            return action;
        }

        let list_height = (ui.available_height() - 48.0).max(80.0);
        egui::ScrollArea::vertical()
            .max_height(list_height)
            .auto_shrink([false, true])
            .show(ui, |ui| {
                egui::Grid::new("playlist_grid")
                    .num_columns(4)
                    .striped(true)
                    .spacing([16.0, 6.0])
                    .show(ui, |ui| {
                        ui.strong("File");
                        ui.strong("Size");
                        ui.strong("Format");
                        ui.strong("FPS");
                        ui.end_row();

                        for (index, item) in self.items.iter().enumerate() {
                            let selected = self.selected == Some(index);
                            let response = ui
                                .selectable_label(selected, item.file_name())
                                .on_hover_text(item.source.display().to_string());
                            if response.clicked() {
                                clicked = Some(index);
                            }
                            if response.double_clicked() {
                                action = PlaylistAction::Confirm(item.clone());
                            }
                            ui.label(item.resolution.to_string());
                            ui.label(item.format.label());
                            ui.label(format!("{:.2}", item.frame_rate));
                            ui.end_row();
                        }
                    });
            });

        if let Some(index) = clicked {
            self.select(index);
        }

        ui.separator();
        ui.horizontal(|ui| {
            if ui.button("Cancel").clicked() {
                action = PlaylistAction::Cancel;
            }
            let can_confirm = self.selected.is_some();
            if ui.add_enabled(can_confirm, egui::Button::new("Play")).clicked() {
                action = self.confirm();
            }
        });

        action
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::format::{ChromaFormat, ColorFormat, Resolution};

    fn playlist() -> Playlist {
        let mut playlist = Playlist::new();
        for source in ["a.yuv", "b.yuv", "c.yuv"] {
            playlist.upsert(PlayItem::new(
                source,
                ChromaFormat::Yuv420,
                ColorFormat::Yuv,
                Resolution::new(352, 288).unwrap(),
                25.0,
            ));
        }
        playlist
    }

    #[test]
    fn test_preselects_current_source() {
        let panel = PlaylistPanel::new(&playlist(), Some(Path::new("b.yuv")));
        assert_eq!(panel.selected(), Some(1));

        let panel = PlaylistPanel::new(&playlist(), None);
        assert_eq!(panel.selected(), None);
    }

    #[test]
    fn test_confirm_selected_item() {
        let mut panel = PlaylistPanel::new(&playlist(), None);
        assert_eq!(panel.confirm(), PlaylistAction::None);

        panel.select(2);
        match panel.confirm() {
            PlaylistAction::Confirm(item) => assert_eq!(item.source, Path::new("c.yuv")),
            other => panic!("unexpected action {:?}", other),
        }
    }

    #[test]
    fn test_select_out_of_range_ignored() {
        let mut panel = PlaylistPanel::new(&playlist(), Some(Path::new("a.yuv")));
        panel.select(7);
        assert_eq!(panel.selected(), Some(0));
    }
}
