// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Raw frame format descriptors.
//!
//! This module defines the chroma subsampling modes, color formats and
//! frame resolutions that describe how a raw YUV file is laid out.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest accepted frame width in pixels.
pub const MAX_WIDTH: u32 = 8192;

/// Largest accepted frame height in pixels.
pub const MAX_HEIGHT: u32 = 4320;

/// Chroma subsampling scheme of a planar YUV frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChromaFormat {
    /// Legacy alias for 4:2:0, kept for sources configured before the
    /// explicit variants existed.
    Yuv,
    Yuv400,
    #[default]
    Yuv420,
    Yuv422,
    /// 4:2:2 with vertical instead of horizontal subsampling.
    Yuv422v,
    Yuv444,
}

impl ChromaFormat {
    /// Formats offered by the picker, one toggle button each.
    pub const SELECTABLE: [ChromaFormat; 5] = [
        ChromaFormat::Yuv400,
        ChromaFormat::Yuv420,
        ChromaFormat::Yuv422,
        ChromaFormat::Yuv422v,
        ChromaFormat::Yuv444,
    ];

    /// Subsampling label shown on the toggle buttons.
    pub fn label(self) -> &'static str {
        match self {
            ChromaFormat::Yuv400 => "4:0:0",
            ChromaFormat::Yuv | ChromaFormat::Yuv420 => "4:2:0",
            ChromaFormat::Yuv422 => "4:2:2",
            ChromaFormat::Yuv422v => "4:2:2v",
            ChromaFormat::Yuv444 => "4:4:4",
        }
    }

    /// Lowercase identifier, as stored in config files.
    pub fn name(self) -> &'static str {
        match self {
            ChromaFormat::Yuv => "yuv",
            ChromaFormat::Yuv400 => "yuv400",
            ChromaFormat::Yuv420 => "yuv420",
            ChromaFormat::Yuv422 => "yuv422",
            ChromaFormat::Yuv422v => "yuv422v",
            ChromaFormat::Yuv444 => "yuv444",
        }
    }

    /// Whether the toggle button for `button` should be lit for this format.
    pub fn lights(self, button: ChromaFormat) -> bool {
        self.canonical() == button.canonical()
    }

    /// Resolve the legacy alias to the explicit variant.
    pub fn canonical(self) -> ChromaFormat {
        match self {
            ChromaFormat::Yuv => ChromaFormat::Yuv420,
            other => other,
        }
    }

    /// Size in bytes of one 8-bit planar frame at `resolution`.
    ///
    /// Subsampled chroma dimensions round up for odd frame sizes.
    pub fn frame_bytes(self, resolution: Resolution) -> u64 {
        let w = u64::from(resolution.width);
        let h = u64::from(resolution.height);
        let half_w = w.div_ceil(2);
        let half_h = h.div_ceil(2);

        let chroma_plane = match self.canonical() {
            ChromaFormat::Yuv400 => 0,
            ChromaFormat::Yuv422 => half_w * h,
            ChromaFormat::Yuv422v => w * half_h,
            ChromaFormat::Yuv444 => w * h,
            _ => half_w * half_h,
        };

        w * h + 2 * chroma_plane
    }
}

impl fmt::Display for ChromaFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Color interpretation of the decoded samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorFormat {
    #[default]
    Yuv,
    Rgb,
}

/// Frame dimensions, always within [1, 8192] x [1, 4320].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[u32; 2]", into = "[u32; 2]")]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    /// Create a resolution, or `None` if either axis is out of range.
    pub fn new(width: u32, height: u32) -> Option<Self> {
        let valid = (1..=MAX_WIDTH).contains(&width) && (1..=MAX_HEIGHT).contains(&height);
        valid.then_some(Self { width, height })
    }

    /// Width divided by height.
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

impl Default for Resolution {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl TryFrom<[u32; 2]> for Resolution {
    type Error = String;

    fn try_from([width, height]: [u32; 2]) -> Result<Self, Self::Error> {
        Self::new(width, height).ok_or_else(|| {
            format!(
                "resolution {}x{} outside 1..={} x 1..={}",
                width, height, MAX_WIDTH, MAX_HEIGHT
            )
        })
    }
}

impl From<Resolution> for [u32; 2] {
    fn from(resolution: Resolution) -> Self {
        [resolution.width, resolution.height]
    }
}

/// Named frame sizes offered by the resolution dropdown.
pub const RESOLUTION_PRESETS: [((u32, u32), &str); 36] = [
    ((128, 96), "SQCIF"),
    ((176, 144), "QCIF"),
    ((320, 240), "QVGA"),
    ((352, 240), "525 SIF"),
    ((352, 288), "CIF"),
    ((352, 480), "525 HHR"),
    ((352, 576), "625 HHR"),
    ((640, 360), "Q720p"),
    ((640, 480), "VGA"),
    ((704, 480), "525 4SIF"),
    ((720, 480), "525 SD"),
    ((704, 576), "4CIF"),
    ((720, 576), "625 SD"),
    ((864, 480), "480p"),
    ((800, 600), "SVGA"),
    ((960, 540), "QHD"),
    ((1024, 768), "XGA"),
    ((1280, 720), "720p HD"),
    ((1280, 960), "4VGA"),
    ((1280, 1024), "SXGA"),
    ((1408, 960), "525 16SIF"),
    ((1408, 1152), "16CIF"),
    ((1600, 1200), "4SVGA"),
    ((1920, 1080), "1080 HD"),
    ((2048, 1024), "2Kx1K"),
    ((2048, 1080), "2Kx1080"),
    ((2560, 1920), "16VGA"),
    ((3616, 1536), "3616x1536"),
    ((3680, 1536), "3672x1536"),
    ((3840, 2160), "4HD"),
    ((4096, 2048), "4Kx2K"),
    ((4096, 2160), "4096x2160"),
    ((4096, 2304), "4096x2304"),
    ((7680, 4320), "7680x4320"),
    ((8192, 4096), "8192x4096"),
    ((8192, 4320), "8192x4320"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_bounds() {
        assert!(Resolution::new(1, 1).is_some());
        assert!(Resolution::new(MAX_WIDTH, MAX_HEIGHT).is_some());
        assert!(Resolution::new(0, 1080).is_none());
        assert!(Resolution::new(8193, 1080).is_none());
        assert!(Resolution::new(1920, 4321).is_none());
    }

    #[test]
    fn test_presets_are_valid() {
        for ((w, h), name) in RESOLUTION_PRESETS {
            assert!(Resolution::new(w, h).is_some(), "preset {} out of range", name);
        }
    }

    #[test]
    fn test_preset_labels() {
        let label = |size| {
            RESOLUTION_PRESETS
                .iter()
                .find(|(preset, _)| *preset == size)
                .map(|(_, name)| *name)
        };
        assert_eq!(label((176, 144)), Some("QCIF"));
        assert_eq!(label((3680, 1536)), Some("3672x1536"));
        assert_eq!(label((1, 1)), None);
    }

    #[test]
    fn test_frame_bytes() {
        let cif = Resolution::new(352, 288).unwrap();
        assert_eq!(ChromaFormat::Yuv400.frame_bytes(cif), 352 * 288);
        assert_eq!(ChromaFormat::Yuv420.frame_bytes(cif), 352 * 288 * 3 / 2);
        assert_eq!(ChromaFormat::Yuv.frame_bytes(cif), 352 * 288 * 3 / 2);
        assert_eq!(ChromaFormat::Yuv422.frame_bytes(cif), 352 * 288 * 2);
        assert_eq!(ChromaFormat::Yuv422v.frame_bytes(cif), 352 * 288 * 2);
        assert_eq!(ChromaFormat::Yuv444.frame_bytes(cif), 352 * 288 * 3);

        // Odd sizes round the chroma planes up
        let odd = Resolution::new(3, 3).unwrap();
        assert_eq!(ChromaFormat::Yuv420.frame_bytes(odd), 9 + 2 * 4);
    }

    #[test]
    fn test_legacy_alias_lights_420() {
        assert!(ChromaFormat::Yuv.lights(ChromaFormat::Yuv420));
        assert!(!ChromaFormat::Yuv.lights(ChromaFormat::Yuv422));
        assert_eq!(ChromaFormat::Yuv.label(), "4:2:0");
    }

    #[test]
    fn test_resolution_serde_rejects_out_of_range() {
        let ok: Resolution = serde_json::from_str("[720, 576]").unwrap();
        assert_eq!(ok, Resolution::new(720, 576).unwrap());
        assert!(serde_json::from_str::<Resolution>("[720, 9999]").is_err());
        assert_eq!(serde_json::to_string(&ok).unwrap(), "[720,576]");
    }
}
