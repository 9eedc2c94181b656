// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Fullscreen switching for the video display.
//!
//! Entering fullscreen snapshots where the display sits, hides every other
//! panel of the window, and lets the display fill a desktop-sized window.
//! Leaving fullscreen puts everything back exactly as snapshotted.

use super::handle::WindowHandle;

/// Container the video display is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parent {
    CentralPanel,
    Window,
}

/// Panels drawn around the video display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chrome {
    MenuBar,
    ConfigPanel,
    FrontControls,
    StatusBar,
}

impl Chrome {
    pub const ALL: [Chrome; 4] = [
        Chrome::MenuBar,
        Chrome::ConfigPanel,
        Chrome::FrontControls,
        Chrome::StatusBar,
    ];
}

/// Placement of the video display inside its parent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WidgetGeometry {
    pub pos: [f32; 2],
    pub size: [f32; 2],
    /// Relative center inside the parent, if positioned relatively
    pub pos_hint: Option<[f32; 2]>,
    /// Fraction of the parent's size per axis; `None` keeps `size`
    pub size_hint: [Option<f32>; 2],
}

impl Default for WidgetGeometry {
    fn default() -> Self {
        Self {
            pos: [0.0, 0.0],
            size: [100.0, 100.0],
            pos_hint: None,
            size_hint: [Some(1.0), Some(1.0)],
        }
    }
}

/// Where the video display lives and which panels the window shows.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayHost {
    pub parent: Option<Parent>,
    pub geometry: WidgetGeometry,
    pub window_children: Vec<Chrome>,
}

impl Default for DisplayHost {
    fn default() -> Self {
        Self {
            parent: Some(Parent::CentralPanel),
            geometry: WidgetGeometry::default(),
            window_children: Chrome::ALL.to_vec(),
        }
    }
}

impl DisplayHost {
    pub fn shows(&self, chrome: Chrome) -> bool {
        self.window_children.contains(&chrome)
    }
}

#[derive(Debug, Clone)]
struct Snapshot {
    parent: Parent,
    geometry: WidgetGeometry,
    window_children: Vec<Chrome>,
    window_size: Option<[f32; 2]>,
}

/// Fullscreen state machine.
#[derive(Debug, Clone)]
pub struct Fullscreen {
    active: bool,
    allowed: bool,
    desktop_size: [f32; 2],
    snapshot: Option<Snapshot>,
}

impl Fullscreen {
    pub fn new(desktop_size: [f32; 2], allowed: bool) -> Self {
        Self {
            active: false,
            allowed,
            desktop_size,
            snapshot: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_allowed(&self) -> bool {
        self.allowed
    }

    pub fn set_desktop_size(&mut self, size: [f32; 2]) {
        self.desktop_size = size;
    }

    /// Flip fullscreen, if allowed.
    pub fn toggle(
        &mut self,
        host: &mut DisplayHost,
        window: Option<&mut (dyn WindowHandle + '_)>,
    ) {
        if self.allowed {
            self.set(!self.active, host, window);
        }
    }

    /// Enter or leave fullscreen. Without a window or a parent the request
    /// is dropped and the flag stays off.
    pub fn set(
        &mut self,
        fullscreen: bool,
        host: &mut DisplayHost,
        window: Option<&mut (dyn WindowHandle + '_)>,
    ) {
        let Some(window) = window else {
            log::warn!("Cannot switch to fullscreen, window not found");
            if fullscreen {
                self.active = false;
            }
            return;
        };
        let Some(parent) = host.parent else {
            log::warn!("Cannot switch to fullscreen, no parent");
            if fullscreen {
                self.active = false;
            }
            return;
        };

        if fullscreen == self.active {
            return;
        }

        if fullscreen {
            self.snapshot = Some(Snapshot {
                parent,
                geometry: host.geometry,
                window_children: std::mem::take(&mut host.window_children),
                window_size: window.inner_size(),
            });

            host.parent = Some(Parent::Window);
            host.geometry = WidgetGeometry::default();

            window.set_inner_size(self.desktop_size);
            log::info!(
                "Entered fullscreen at {}x{}",
                self.desktop_size[0],
                self.desktop_size[1]
            );
        } else if let Some(snapshot) = self.snapshot.take() {
            host.window_children = snapshot.window_children;
            host.geometry = snapshot.geometry;
            host.parent = Some(snapshot.parent);

            if let Some(size) = snapshot.window_size {
                window.set_inner_size(size);
            }
            log::info!("Left fullscreen");
        }

        self.active = fullscreen;
        window.set_fullscreen(fullscreen);
    }
}
