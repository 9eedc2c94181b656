// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Dialog windows opened over the viewer.

use super::playlist_panel::{PlaylistAction, PlaylistPanel};
use super::resolution_panel::{PanelAction, ResolutionPanel};
use crate::models::format::{ChromaFormat, Resolution};
use crate::models::play_item::PlayItem;

/// Fixed size of the format picker.
pub const RESOLUTION_POPUP_SIZE: [f32; 2] = [400.0, 400.0];

/// Playlist size when the window size is unknown.
pub const FALLBACK_POPUP_SIZE: [f32; 2] = [700.0, 500.0];

/// How the user closed a dialog.
#[derive(Debug, Clone, PartialEq)]
pub enum DialogOutcome {
    ConfirmFormat(ChromaFormat, Resolution),
    ConfirmPlayItem(PlayItem),
    Cancel,
}

#[derive(Debug, Clone)]
pub enum PopupKind {
    Resolution(ResolutionPanel),
    Playlist(PlaylistPanel),
}

#[derive(Debug, Clone)]
pub struct Popup {
    pub kind: PopupKind,
    pub size: [f32; 2],
}

impl Popup {
    pub fn resolution(panel: ResolutionPanel) -> Self {
        Self {
            kind: PopupKind::Resolution(panel),
            size: RESOLUTION_POPUP_SIZE,
        }
    }

    /// Playlist dialog inset from the window, or a fixed size without one.
    pub fn playlist(panel: PlaylistPanel, window_size: Option<[f32; 2]>) -> Self {
        let size = window_size
            .map(|[w, h]| [(w - 160.0).max(320.0), (h - 100.0).max(240.0)])
            .unwrap_or(FALLBACK_POPUP_SIZE);
        Self {
            kind: PopupKind::Playlist(panel),
            size,
        }
    }

    pub fn title(&self) -> &'static str {
        match self.kind {
            PopupKind::Resolution(_) => "Configuration YUV image",
            PopupKind::Playlist(_) => "Playlist",
        }
    }

    /// Draw the dialog centered in the window. Returns an outcome once the
    /// user confirms, cancels or closes it.
    pub fn show(&mut self, ctx: &egui::Context) -> Option<DialogOutcome> {
        let mut open = true;
        let size = egui::vec2(self.size[0], self.size[1]);
        let title = self.title();

        let outcome = egui::Window::new(title)
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .fixed_size(size)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| match &mut self.kind {
                PopupKind::Resolution(panel) => match panel.show(ui) {
                    PanelAction::Confirm(format, resolution) => {
                        Some(DialogOutcome::ConfirmFormat(format, resolution))
                    }
                    PanelAction::Cancel => Some(DialogOutcome::Cancel),
                    PanelAction::None => None,
                },
                PopupKind::Playlist(panel) => match panel.show(ui) {
                    PlaylistAction::Confirm(item) => Some(DialogOutcome::ConfirmPlayItem(item)),
                    PlaylistAction::Cancel => Some(DialogOutcome::Cancel),
                    PlaylistAction::None => None,
                },
            })
            .and_then(|response| response.inner)
            .flatten();

        if !open {
            return Some(DialogOutcome::Cancel);
        }
        outcome
    }
}
