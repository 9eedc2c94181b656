// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Data model for raw sources and the session playlist.

pub mod format;
pub mod play_item;
pub mod playlist;
