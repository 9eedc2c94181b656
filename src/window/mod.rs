// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Window-level behaviour: geometry, fullscreen and shortcuts.

pub mod fullscreen;
pub mod handle;
pub mod keyboard;
pub mod resize;
