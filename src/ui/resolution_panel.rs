// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Resolution and chroma format picker.
//!
//! The panel edits a private copy of the format and resolution. Nothing
//! reaches the video surface until the user confirms.
//!
//! Each axis has a text field and a slider bound to the same value. Typing
//! only updates the value when the text parses to an in-range integer; a
//! slider move or preset pick rewrites the text to match.

use crate::models::format::{ChromaFormat, Resolution, MAX_HEIGHT, MAX_WIDTH, RESOLUTION_PRESETS};

/// Result of interacting with the picker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelAction {
    None,
    Cancel,
    Confirm(ChromaFormat, Resolution),
}

/// Parse `text` as a resolution component within `min..=max`.
pub fn check_resolution_range(text: &str, min: u32, max: u32) -> Option<u32> {
    text.trim()
        .parse::<u32>()
        .ok()
        .filter(|value| (min..=max).contains(value))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Width,
    Height,
}

impl Axis {
    fn max(self) -> u32 {
        match self {
            Axis::Width => MAX_WIDTH,
            Axis::Height => MAX_HEIGHT,
        }
    }

    fn text_id(self) -> egui::Id {
        match self {
            Axis::Width => egui::Id::new("resolution_width_text"),
            Axis::Height => egui::Id::new("resolution_height_text"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ResolutionPanel {
    format: ChromaFormat,
    resolution: Resolution,
    width_text: String,
    height_text: String,
}

impl ResolutionPanel {
    pub fn new(format: ChromaFormat, resolution: Resolution) -> Self {
        Self {
            format,
            resolution,
            width_text: resolution.width.to_string(),
            height_text: resolution.height.to_string(),
        }
    }

    #[cfg(test)]
    pub fn format(&self) -> ChromaFormat {
        self.format
    }

    #[cfg(test)]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    pub fn select_format(&mut self, format: ChromaFormat) {
        self.format = format.canonical();
    }

    pub fn select_preset(&mut self, resolution: Resolution) {
        self.resolution = resolution;
        self.sync_text();
    }

    /// Replace the width text; the width follows only if the text is valid.
    pub fn edit_width_text(&mut self, text: &str) {
        self.width_text = text.to_owned();
        self.apply_text(Axis::Width);
    }

    /// Replace the height text; the height follows only if the text is valid.
    pub fn edit_height_text(&mut self, text: &str) {
        self.height_text = text.to_owned();
        self.apply_text(Axis::Height);
    }

    pub fn slide_width(&mut self, width: u32) {
        self.set_axis(Axis::Width, width);
        self.width_text = self.resolution.width.to_string();
    }

    pub fn slide_height(&mut self, height: u32) {
        self.set_axis(Axis::Height, height);
        self.height_text = self.resolution.height.to_string();
    }

    /// The pair currently shown, as handed to the confirm handler.
    pub fn confirm(&self) -> PanelAction {
        PanelAction::Confirm(self.format, self.resolution)
    }

    fn apply_text(&mut self, axis: Axis) {
        let text = match axis {
            Axis::Width => &self.width_text,
            Axis::Height => &self.height_text,
        };
        if let Some(value) = check_resolution_range(text, 1, axis.max()) {
            self.set_axis(axis, value);
        }
    }

    fn set_axis(&mut self, axis: Axis, value: u32) {
        let (width, height) = match axis {
            Axis::Width => (value, self.resolution.height),
            Axis::Height => (self.resolution.width, value),
        };
        if let Some(resolution) = Resolution::new(width, height) {
            self.resolution = resolution;
        }
    }

    fn sync_text(&mut self) {
        self.sync_axis_text(Axis::Width);
        self.sync_axis_text(Axis::Height);
    }

    fn sync_axis_text(&mut self, axis: Axis) {
        match axis {
            Axis::Width => self.width_text = self.resolution.width.to_string(),
            Axis::Height => self.height_text = self.resolution.height.to_string(),
        }
    }

    /// Draw the picker and return what the user did this frame.
    pub fn show(&mut self, ui: &mut egui::Ui) -> PanelAction {
        let mut action = PanelAction::None;

        ui.columns(2, |columns| {
            self.show_resolution(&mut columns[0]);
            self.show_format(&mut columns[1]);
        });

        ui.add_space(28.0);
        ui.separator();

        ui.columns(2, |columns| {
            let width = columns[0].available_width();
            if columns[0]
                .add_sized([width, 32.0], egui::Button::new("Cancel"))
                .clicked()
            {
                action = PanelAction::Cancel;
            }
            if columns[1]
                .add_sized([width, 32.0], egui::Button::new("Confirm"))
                .clicked()
            {
                action = self.confirm();
            }
        });

        action
    }

    fn show_resolution(&mut self, ui: &mut egui::Ui) {
        section_header(ui, "Resolution");

        egui::ComboBox::from_id_source("resolution_presets")
            .selected_text(self.resolution.to_string())
            .width(ui.available_width() * 0.8)
            .height(200.0)
            .show_ui(ui, |ui| {
                for ((width, height), name) in RESOLUTION_PRESETS {
                    let Some(preset) = Resolution::new(width, height) else {
                        continue;
                    };
                    let selected = preset == self.resolution;
                    if ui
                        .selectable_label(selected, preset.to_string())
                        .on_hover_text(name)
                        .clicked()
                    {
                        self.select_preset(preset);
                    }
                }
            });

        ui.add_space(8.0);
        self.axis_row(ui, Axis::Width);
        self.axis_row(ui, Axis::Height);
    }

    fn axis_row(&mut self, ui: &mut egui::Ui, axis: Axis) {
        ui.horizontal(|ui| {
            let mut text = match axis {
                Axis::Width => self.width_text.clone(),
                Axis::Height => self.height_text.clone(),
            };
            let edit = egui::TextEdit::singleline(&mut text)
                .id(axis.text_id())
                .desired_width(48.0);
            let response = ui.add(edit);
            if response.changed() {
                match axis {
                    Axis::Width => self.edit_width_text(&text),
                    Axis::Height => self.edit_height_text(&text),
                }
            }
            let editing = response.has_focus();

            let mut value = match axis {
                Axis::Width => self.resolution.width,
                Axis::Height => self.resolution.height,
            };
            let slider = egui::Slider::new(&mut value, 1..=axis.max())
                .step_by(1.0)
                .show_value(false);
            if ui.add(slider).changed() {
                match axis {
                    Axis::Width => self.slide_width(value),
                    Axis::Height => self.slide_height(value),
                }
            } else if !editing {
                // Only this row's text; the other field may be mid-edit
                self.sync_axis_text(axis);
            }
        });
    }

    fn show_format(&mut self, ui: &mut egui::Ui) {
        section_header(ui, "Chroma Format");

        for button in ChromaFormat::SELECTABLE {
            let lit = self.format.lights(button);
            if ui
                .add_sized([ui.available_width() * 0.8, 28.0], egui::SelectableLabel::new(lit, button.label()))
                .clicked()
            {
                self.select_format(button);
            }
        }
    }
}

fn section_header(ui: &mut egui::Ui, text: &str) {
    egui::Frame::none()
        .fill(egui::Color32::from_rgba_unmultiplied(51, 51, 51, 204))
        .inner_margin(egui::Margin::symmetric(8.0, 12.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| ui.label(text));
        });
    ui.add_space(8.0);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cif_panel() -> ResolutionPanel {
        ResolutionPanel::new(ChromaFormat::Yuv420, Resolution::new(352, 288).unwrap())
    }

    fn run_frame(ctx: &egui::Context, panel: &mut ResolutionPanel, events: Vec<egui::Event>) {
        let input = egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(
                egui::Pos2::ZERO,
                egui::vec2(800.0, 600.0),
            )),
            events,
            ..Default::default()
        };
        let _ = ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                panel.show(ui);
            });
        });
    }

    fn backspace() -> egui::Event {
        egui::Event::Key {
            key: egui::Key::Backspace,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: egui::Modifiers::NONE,
        }
    }

    #[test]
    fn test_text_field_keeps_edit_across_frames() {
        let ctx = egui::Context::default();
        let mut panel = cif_panel();
        run_frame(&ctx, &mut panel, Vec::new());

        let height_id = Axis::Height.text_id();
        ctx.memory_mut(|m| m.request_focus(height_id));
        run_frame(&ctx, &mut panel, vec![backspace(), backspace(), backspace()]);
        assert_eq!(panel.height_text, "");
        assert_eq!(panel.width_text, "352");
        assert_eq!(panel.resolution(), Resolution::new(352, 288).unwrap());

        // Still focused: the cleared field must survive the next frame
        run_frame(&ctx, &mut panel, Vec::new());
        assert!(ctx.memory(|m| m.has_focus(height_id)));
        assert_eq!(panel.height_text, "");
        assert_eq!(panel.resolution().height, 288);

        // Leaving the field mirrors the stored value again
        ctx.memory_mut(|m| m.surrender_focus(height_id));
        run_frame(&ctx, &mut panel, Vec::new());
        assert_eq!(panel.height_text, "288");
    }

    #[test]
    fn test_unfocused_row_leaves_other_field_alone() {
        let ctx = egui::Context::default();
        let mut panel = cif_panel();
        run_frame(&ctx, &mut panel, Vec::new());

        let width_id = Axis::Width.text_id();
        ctx.memory_mut(|m| m.request_focus(width_id));
        panel.edit_width_text("12x");
        run_frame(&ctx, &mut panel, Vec::new());

        assert_eq!(panel.width_text, "12x");
        assert_eq!(panel.height_text, "288");
        assert_eq!(panel.resolution(), Resolution::new(352, 288).unwrap());
    }

    #[test]
    fn test_check_resolution_range() {
        assert_eq!(check_resolution_range("1920", 1, MAX_WIDTH), Some(1920));
        assert_eq!(check_resolution_range(" 64 ", 1, MAX_WIDTH), Some(64));
        assert_eq!(check_resolution_range("0", 1, MAX_WIDTH), None);
        assert_eq!(check_resolution_range("8193", 1, MAX_WIDTH), None);
        assert_eq!(check_resolution_range("4321", 1, MAX_HEIGHT), None);
        assert_eq!(check_resolution_range("-5", 1, MAX_WIDTH), None);
        assert_eq!(check_resolution_range("12px", 1, MAX_WIDTH), None);
        assert_eq!(check_resolution_range("", 1, MAX_WIDTH), None);
    }

    #[test]
    fn test_out_of_range_text_leaves_resolution() {
        let mut panel = cif_panel();
        let before = panel.resolution();

        for text in ["0", "8193", "99999", "abc", "", "-1"] {
            panel.edit_width_text(text);
            assert_eq!(panel.resolution(), before, "width text {:?}", text);
        }
        for text in ["0", "4321", "8192", "x"] {
            panel.edit_height_text(text);
            assert_eq!(panel.resolution(), before, "height text {:?}", text);
        }
    }

    #[test]
    fn test_valid_text_updates_resolution() {
        let mut panel = cif_panel();
        panel.edit_width_text("8192");
        panel.edit_height_text("4320");
        assert_eq!(panel.resolution(), Resolution::new(8192, 4320).unwrap());
    }

    #[test]
    fn test_slider_rewrites_text() {
        let mut panel = cif_panel();
        panel.edit_width_text("abc");
        panel.slide_width(704);
        assert_eq!(panel.resolution().width, 704);
        assert_eq!(panel.width_text, "704");

        panel.slide_height(576);
        assert_eq!(panel.height_text, "576");
    }

    #[test]
    fn test_preset_rewrites_text() {
        let mut panel = cif_panel();
        panel.select_preset(Resolution::new(1280, 720).unwrap());
        assert_eq!(panel.width_text, "1280");
        assert_eq!(panel.height_text, "720");
    }

    #[test]
    fn test_confirm_returns_visible_pair() {
        let mut panel = cif_panel();
        panel.select_format(ChromaFormat::Yuv422v);
        panel.edit_width_text("720");
        panel.edit_height_text("9999");

        assert_eq!(
            panel.confirm(),
            PanelAction::Confirm(ChromaFormat::Yuv422v, Resolution::new(720, 288).unwrap())
        );
    }

    #[test]
    fn test_exactly_one_format_lit() {
        let mut panel = ResolutionPanel::new(ChromaFormat::Yuv, Resolution::default());
        let lit = |panel: &ResolutionPanel| {
            ChromaFormat::SELECTABLE
                .iter()
                .filter(|button| panel.format().lights(**button))
                .count()
        };
        assert_eq!(lit(&panel), 1);

        for button in ChromaFormat::SELECTABLE {
            panel.select_format(button);
            assert_eq!(lit(&panel), 1);
            assert_eq!(panel.format(), button);
        }
    }
}
