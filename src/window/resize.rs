// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Window sizing presets.

use crate::models::format::Resolution;

/// Vertical allowance for the control panels around the video.
pub const CHROME_HEIGHT: u32 = 62;

/// Window size showing `resolution` scaled by `scale`, keeping the aspect
/// ratio and staying within `max`.
///
/// Width is fitted first; if the matching height overflows `max`, the
/// height is clamped instead and the width derived from it.
pub fn fit_window(resolution: Resolution, scale: f32, max: [u32; 2]) -> [u32; 2] {
    let ratio = resolution.aspect_ratio();
    let [max_w, max_h] = max.map(|v| v as f32);

    let target_w = (resolution.width as f32 * scale).trunc();
    let target_h = (resolution.height as f32 * scale).trunc() + CHROME_HEIGHT as f32;

    let mut width = max_w.min(target_w);
    let mut height = width / ratio;
    if height > max_h {
        height = max_h.min(target_h);
        width = height * ratio;
    }

    [(width.round() as u32).max(1), (height.round() as u32).max(1)]
}
