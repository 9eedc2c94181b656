// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Video display area.
//!
//! This module draws the frame area for the active source, fitted to the
//! available space at the source's aspect ratio, with the frame position
//! and decode parameters overlaid.

use crate::models::format::Resolution;
use crate::player::surface::VideoSurface;
use crate::window::fullscreen::WidgetGeometry;

/// Largest rect with the given aspect ratio that fits in `available`,
/// centered in it.
pub fn fit_rect(available: egui::Rect, resolution: Resolution) -> egui::Rect {
    let aspect = resolution.aspect_ratio();
    let available_aspect = available.width() / available.height();

    let size = if aspect > available_aspect {
        // Wider than the area - fit to width
        egui::vec2(available.width(), available.width() / aspect)
    } else {
        // Taller than the area - fit to height
        egui::vec2(available.height() * aspect, available.height())
    };

    egui::Rect::from_center_size(available.center(), size)
}

/// Display the video area, recording where it landed in `geometry`.
pub fn show(ui: &mut egui::Ui, surface: &dyn VideoSurface, geometry: &mut WidgetGeometry) {
    ui.style_mut().visuals.extreme_bg_color = egui::Color32::from_gray(16);

    let parent = ui.available_rect_before_wrap();
    let size = egui::vec2(
        geometry.size_hint[0].map_or(geometry.size[0], |hint| parent.width() * hint),
        geometry.size_hint[1].map_or(geometry.size[1], |hint| parent.height() * hint),
    );
    let center = geometry.pos_hint.map_or(parent.center(), |[x, y]| {
        parent.min + egui::vec2(parent.width() * x, parent.height() * y)
    });
    let area = egui::Rect::from_center_size(center, size).intersect(parent);

    geometry.pos = [area.min.x, area.min.y];
    geometry.size = [area.width(), area.height()];

    let painter = ui.painter_at(area);
    painter.rect_filled(area, 0.0, ui.visuals().extreme_bg_color);

    let Some(item) = surface.playitem() else {
        draw_welcome(&painter, area);
        return;
    };

    let frame_rect = fit_rect(area, item.resolution);
    painter.rect_filled(frame_rect, 0.0, egui::Color32::from_gray(40));
    painter.rect_stroke(frame_rect, 0.0, egui::Stroke::new(1.0, egui::Color32::from_gray(70)));

    let (frame, frame_count) = surface.position();
    painter.text(
        frame_rect.center(),
        egui::Align2::CENTER_CENTER,
        item.file_name(),
        egui::FontId::proportional(20.0),
        egui::Color32::from_gray(200),
    );
    painter.text(
        frame_rect.center() + egui::vec2(0.0, 26.0),
        egui::Align2::CENTER_CENTER,
        format!(
            "{} {} @ {:.2} fps  -  frame {} / {}",
            item.resolution,
            item.format.label(),
            item.frame_rate,
            frame + 1,
            frame_count
        ),
        egui::FontId::proportional(14.0),
        egui::Color32::from_gray(150),
    );
}

/// Hint shown before any file is opened.
fn draw_welcome(painter: &egui::Painter, area: egui::Rect) {
    painter.text(
        area.center() - egui::vec2(0.0, 20.0),
        egui::Align2::CENTER_CENTER,
        "Yuvist",
        egui::FontId::proportional(32.0),
        egui::Color32::from_gray(200),
    );
    painter.text(
        area.center() + egui::vec2(0.0, 16.0),
        egui::Align2::CENTER_CENTER,
        "Drop a raw YUV file here, or press Cmd/Ctrl+O",
        egui::FontId::proportional(14.0),
        egui::Color32::from_gray(150),
    );
}
