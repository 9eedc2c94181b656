// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Yuvist - raw YUV video and image viewer
//!
//! A cross-platform desktop application for playing back headerless YUV
//! files with a configurable frame size and chroma format.

mod app;
mod config;
mod io;
mod models;
mod player;
mod ui;
mod window;

use anyhow::Result;
use app::YuvistApp;
use clap::Parser;
use config::ViewerConfig;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Raw YUV file to open on startup
    file: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();
    let config = ViewerConfig::load()?;

    // Start at half the configured frame size
    let [width, height] =
        window::resize::fit_window(config.resolution, 0.5, config.max_window_size);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([width.max(640) as f32, height.max(360) as f32])
            .with_min_inner_size([480.0, 320.0])
            .with_drag_and_drop(true)
            .with_title(format!("Yuvist-{}", env!("CARGO_PKG_VERSION"))),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Yuvist",
        options,
        Box::new(move |_cc| Ok(Box::new(YuvistApp::new(config, args.file)))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
