// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Playback state, commands and their dispatch.

pub mod command;
pub mod controller;
pub mod surface;
