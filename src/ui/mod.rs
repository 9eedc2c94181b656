// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! UI components for the Yuvist application.

pub mod config_panel;
pub mod front;
pub mod playlist_panel;
pub mod popup;
pub mod resolution_panel;
pub mod video;
