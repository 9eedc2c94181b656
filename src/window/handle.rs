// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Window capability passed to components that change window geometry.

/// Operations on the native window hosting the viewer.
pub trait WindowHandle {
    /// Current inner size in points, if known.
    fn inner_size(&self) -> Option<[f32; 2]>;

    fn set_inner_size(&mut self, size: [f32; 2]);

    fn set_fullscreen(&mut self, fullscreen: bool);

    fn set_title(&mut self, title: &str);
}

/// `WindowHandle` over the root egui viewport.
pub struct ViewportWindow<'a> {
    ctx: &'a egui::Context,
}

impl<'a> ViewportWindow<'a> {
    pub fn new(ctx: &'a egui::Context) -> Self {
        Self { ctx }
    }

    /// Size of the monitor the window is on, if the backend reports it.
    pub fn monitor_size(&self) -> Option<[f32; 2]> {
        self.ctx
            .input(|i| i.viewport().monitor_size)
            .map(|size| [size.x, size.y])
    }
}

impl WindowHandle for ViewportWindow<'_> {
    fn inner_size(&self) -> Option<[f32; 2]> {
        self.ctx
            .input(|i| i.viewport().inner_rect)
            .map(|rect| [rect.width(), rect.height()])
    }

    fn set_inner_size(&mut self, size: [f32; 2]) {
        self.ctx
            .send_viewport_cmd(egui::ViewportCommand::InnerSize(egui::vec2(size[0], size[1])));
    }

    fn set_fullscreen(&mut self, fullscreen: bool) {
        self.ctx
            .send_viewport_cmd(egui::ViewportCommand::Fullscreen(fullscreen));
    }

    fn set_title(&mut self, title: &str) {
        self.ctx
            .send_viewport_cmd(egui::ViewportCommand::Title(title.to_owned()));
    }
}

/// Window stand-in that records every call, for tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingWindow {
    pub size: Option<[f32; 2]>,
    pub fullscreen: bool,
    pub title: Option<String>,
}

#[cfg(test)]
impl WindowHandle for RecordingWindow {
    fn inner_size(&self) -> Option<[f32; 2]> {
        self.size
    }

    fn set_inner_size(&mut self, size: [f32; 2]) {
        self.size = Some(size);
    }

    fn set_fullscreen(&mut self, fullscreen: bool) {
        self.fullscreen = fullscreen;
    }

    fn set_title(&mut self, title: &str) {
        self.title = Some(title.to_owned());
    }
}
