// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! This module contains the application structure that implements the
//! eframe::App trait. Each frame it collects commands from the panels,
//! shortcuts and dropped files, hands them to the controller, and draws
//! whichever panels the current window layout shows.

use crate::config::ViewerConfig;
use crate::models::play_item::{FrameLayout, PlaybackState};
use crate::player::command::Command;
use crate::player::controller::Controller;
use crate::player::surface::RawSurface;
use crate::ui::{config_panel, front, video};
use crate::window::fullscreen::{Chrome, Fullscreen};
use crate::window::handle::ViewportWindow;
use crate::window::keyboard;
use std::path::PathBuf;

/// Main application state.
pub struct YuvistApp {
    controller: Controller,

    /// Desktop size still has to be read from the monitor
    desktop_size_pending: bool,

    /// Source given on the command line, opened on the first frame
    initial_source: Option<PathBuf>,
}

impl YuvistApp {
    /// Create the application from the loaded configuration.
    pub fn new(config: ViewerConfig, initial_source: Option<PathBuf>) -> Self {
        let layout = FrameLayout {
            format: config.format,
            color_format: config.color_format,
            resolution: config.resolution,
            frame_rate: config.frame_rate,
        };
        let surface = RawSurface::new(layout, config.initial_state);

        let desktop_size = config
            .desktop_size
            .map(|[w, h]| [w as f32, h as f32])
            .unwrap_or(config.max_window_size.map(|v| v as f32));
        let fullscreen = Fullscreen::new(desktop_size, config.allow_fullscreen);

        Self {
            controller: Controller::new(
                Box::new(surface),
                config.playpath,
                fullscreen,
                config.max_window_size,
            ),
            desktop_size_pending: config.desktop_size.is_none(),
            initial_source,
        }
    }

    /// Key presses this frame that map to commands. Matched keys are
    /// consumed so widgets don't also react to them.
    fn key_commands(ctx: &egui::Context) -> Vec<Command> {
        if ctx.wants_keyboard_input() {
            return Vec::new();
        }

        let pressed: Vec<(egui::Key, egui::Modifiers)> = ctx.input(|i| {
            i.events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::Key {
                        key,
                        pressed: true,
                        modifiers,
                        ..
                    } => Some((*key, *modifiers)),
                    _ => None,
                })
                .collect()
        });

        pressed
            .into_iter()
            .filter_map(|(key, modifiers)| {
                let command = keyboard::dispatch(key, modifiers)?;
                ctx.input_mut(|i| i.consume_key(modifiers, key));
                Some(command)
            })
            .collect()
    }

    /// Files dropped onto the window this frame.
    fn dropped_files(ctx: &egui::Context) -> Vec<Command> {
        ctx.input(|i| {
            i.raw
                .dropped_files
                .iter()
                .filter_map(|file| file.path.clone())
                .map(Command::DropFile)
                .collect()
        })
    }

    fn show_menu_bar(&self, ctx: &egui::Context, commands: &mut Vec<Command>) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open...  (Cmd+O)").clicked() {
                        commands.push(Command::OpenFile);
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("Playback", |ui| {
                    let entries = [
                        ("Play / Pause  (Space)", Command::PlayPause),
                        ("Stop", Command::Stop),
                        ("Previous Frame  ([)", Command::PrevFrame),
                        ("Next Frame  (])", Command::NextFrame),
                        ("Previous Video", Command::PrevVideo),
                        ("Next Video", Command::NextVideo),
                        ("Go to Start  (Home)", Command::Seek(0.0)),
                        ("Go to End  (End)", Command::Seek(1.0)),
                    ];
                    for (label, command) in entries {
                        if ui.button(label).clicked() {
                            commands.push(command);
                            ui.close_menu();
                        }
                    }
                });

                ui.menu_button("View", |ui| {
                    let allowed = self.controller.fullscreen.is_allowed();
                    let toggle = egui::Button::new("Fullscreen  (Enter)");
                    if ui.add_enabled(allowed, toggle).clicked() {
                        commands.push(Command::ToggleFullscreen);
                        ui.close_menu();
                    }
                    ui.separator();
                    let presets = [("Half Size", 0.5), ("Actual Size", 1.0), ("Double Size", 2.0)];
                    for (label, scale) in presets {
                        if ui.button(label).clicked() {
                            commands.push(Command::Resize(scale));
                            ui.close_menu();
                        }
                    }
                });

                ui.menu_button("Configure", |ui| {
                    if ui.button("Image Size and Format...").clicked() {
                        commands.push(Command::ConfigYuv);
                        ui.close_menu();
                    }
                    if ui.button("Playlist...").clicked() {
                        commands.push(Command::ConfigPlaylist);
                        ui.close_menu();
                    }
                });
            });
        });
    }
}

impl eframe::App for YuvistApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut window = ViewportWindow::new(ctx);

        if self.desktop_size_pending {
            if let Some(size) = window.monitor_size() {
                self.controller.fullscreen.set_desktop_size(size);
                self.desktop_size_pending = false;
            }
        }

        // Command line sources open in the configured initial state
        if let Some(source) = self.initial_source.take() {
            log::info!("Opening {}", source.display());
            self.controller.surface.set_source(source);
        }

        // Advance playback
        let dt = f64::from(ctx.input(|i| i.stable_dt));
        self.controller.surface.tick(dt);

        let mut commands = Self::dropped_files(ctx);
        commands.extend(Self::key_commands(ctx));

        let host = &self.controller.host;
        if host.shows(Chrome::MenuBar) {
            self.show_menu_bar(ctx, &mut commands);
        }

        // Outermost bottom panel first
        if host.shows(Chrome::StatusBar) {
            egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
                ui.horizontal(|ui| {
                    match self.controller.surface.playitem() {
                        Some(item) => ui.label(item.source.display().to_string()),
                        None => ui.label("No file loaded"),
                    };
                    ui.separator();
                    let playlist = &self.controller.playlist;
                    if playlist.is_empty() {
                        ui.label("Playlist: empty");
                    } else {
                        ui.label(format!("Playlist: {}", playlist.len()));
                    }
                    ui.separator();
                    ui.label(format!("Volume: {:.0}%", self.controller.surface.volume() * 100.0));
                });
            });
        }

        if host.shows(Chrome::ConfigPanel) || host.shows(Chrome::FrontControls) {
            egui::TopBottomPanel::bottom("front_controls").show(ctx, |ui| {
                ui.add_space(4.0);
                ui.horizontal(|ui| {
                    if host.shows(Chrome::FrontControls) {
                        commands.extend(front::show(ui, self.controller.surface.as_ref()));
                    }
                    if host.shows(Chrome::ConfigPanel) {
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            let state = self.controller.observed_state();
                            commands.extend(config_panel::show(ui, state));
                        });
                    }
                });
                ui.add_space(4.0);
            });
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                video::show(
                    ui,
                    self.controller.surface.as_ref(),
                    &mut self.controller.host.geometry,
                );
            });

        if let Some(popup) = self.controller.popup_mut() {
            if let Some(outcome) = popup.show(ctx) {
                self.controller.resolve_popup(outcome);
            }
        }

        for command in commands {
            self.controller.dispatch(command, Some(&mut window));
        }
        self.controller.pump(Some(&mut window));

        if self.controller.surface.state() == PlaybackState::Play {
            ctx.request_repaint();
        }
    }
}
