// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Video surface contract and the raw-file implementation.
//!
//! The surface owns the active source, its frame layout, the transport
//! state and the frame cursor. It never calls back into the controller;
//! instead it queues `SurfaceEvent`s that the controller drains once per
//! frame.

use crate::io::media::{self, SourceInfo};
use crate::models::play_item::{FrameLayout, PlayItem, PlaybackState};
use std::path::{Path, PathBuf};

/// Change notifications raised by a surface.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEvent {
    /// A source was (re)loaded with the given parameters
    LoadVideo(PlayItem),
    StateChanged(PlaybackState),
}

/// Playback surface the controller drives.
pub trait VideoSurface {
    fn source(&self) -> Option<&Path>;

    /// Layout used for the current source, or for the next one opened.
    fn layout(&self) -> FrameLayout;

    fn playitem(&self) -> Option<PlayItem> {
        self.source()
            .map(|source| PlayItem::with_layout(source, self.layout()))
    }

    /// Load `item`, replacing both source and layout.
    fn set_playitem(&mut self, item: PlayItem);

    /// Load `source` with the current layout.
    fn set_source(&mut self, source: PathBuf) {
        let item = PlayItem::with_layout(source, self.layout());
        self.set_playitem(item);
    }

    /// Change the layout; reloads the current source if there is one.
    fn set_layout(&mut self, layout: FrameLayout);

    fn state(&self) -> PlaybackState;

    fn set_state(&mut self, state: PlaybackState);

    fn toggle_play_pause(&mut self) {
        let next = match self.state() {
            PlaybackState::Play => PlaybackState::Pause,
            _ => PlaybackState::Play,
        };
        self.set_state(next);
    }

    fn volume(&self) -> f32;

    /// Set the volume, clamped to [0, 1].
    fn set_volume(&mut self, volume: f32);

    /// Current frame index and total frame count.
    fn position(&self) -> (u64, u64);

    /// Jump to a fraction of the source; 0.0 is the first frame, 1.0 the last.
    fn seek(&mut self, fraction: f64);

    /// Pause and move by `delta` frames, stopping at either end.
    fn step_frame(&mut self, delta: i64);

    /// Advance playback by `dt` seconds.
    fn tick(&mut self, dt: f64);

    fn drain_events(&mut self) -> Vec<SurfaceEvent>;
}

/// Surface over a headerless raw YUV file.
#[derive(Debug)]
pub struct RawSurface {
    source: Option<PathBuf>,
    layout: FrameLayout,
    info: Option<SourceInfo>,
    state: PlaybackState,
    volume: f32,
    frame: u64,
    /// Fractional frames accumulated by `tick`
    frame_clock: f64,
    events: Vec<SurfaceEvent>,
}

impl RawSurface {
    pub fn new(layout: FrameLayout, state: PlaybackState) -> Self {
        Self {
            source: None,
            layout,
            info: None,
            state,
            volume: 1.0,
            frame: 0,
            frame_clock: 0.0,
            events: Vec::new(),
        }
    }

    fn frame_count(&self) -> u64 {
        self.info.map_or(0, |info| info.frame_count)
    }

    fn last_frame(&self) -> u64 {
        self.frame_count().saturating_sub(1)
    }

    fn reload(&mut self) {
        let Some(item) = self.playitem() else {
            return;
        };

        self.info = match media::probe(&item) {
            Ok(info) => {
                log::info!(
                    "Loaded {} ({} frames of {} bytes)",
                    item.source.display(),
                    info.frame_count,
                    info.frame_bytes
                );
                Some(info)
            }
            Err(e) => {
                log::warn!("Failed to probe {}: {:#}", item.source.display(), e);
                None
            }
        };
        self.frame = 0;
        self.frame_clock = 0.0;
        self.events.push(SurfaceEvent::LoadVideo(item));
    }
}

impl Default for RawSurface {
    fn default() -> Self {
        Self::new(FrameLayout::default(), PlaybackState::Pause)
    }
}

impl VideoSurface for RawSurface {
    fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    fn layout(&self) -> FrameLayout {
        self.layout
    }

    fn set_playitem(&mut self, item: PlayItem) {
        self.layout = item.layout();
        self.source = Some(item.source);
        self.reload();
    }

    fn set_layout(&mut self, layout: FrameLayout) {
        self.layout = layout;
        self.reload();
    }

    fn state(&self) -> PlaybackState {
        self.state
    }

    fn set_state(&mut self, state: PlaybackState) {
        if state == self.state {
            return;
        }
        match state {
            PlaybackState::Play if self.frame >= self.last_frame() => self.frame = 0,
            PlaybackState::Stop => self.frame = 0,
            _ => {}
        }
        self.frame_clock = 0.0;
        self.state = state;
        self.events.push(SurfaceEvent::StateChanged(state));
    }

    fn volume(&self) -> f32 {
        self.volume
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
    }

    fn position(&self) -> (u64, u64) {
        (self.frame, self.frame_count())
    }

    fn seek(&mut self, fraction: f64) {
        let fraction = fraction.clamp(0.0, 1.0);
        self.frame = (fraction * self.last_frame() as f64).round() as u64;
        self.frame_clock = 0.0;
    }

    fn step_frame(&mut self, delta: i64) {
        self.set_state(PlaybackState::Pause);
        let target = self.frame.saturating_add_signed(delta);
        self.frame = target.min(self.last_frame());
    }

    fn tick(&mut self, dt: f64) {
        if self.state != PlaybackState::Play || self.frame_count() == 0 {
            return;
        }

        self.frame_clock += dt * self.layout.frame_rate;
        let whole = self.frame_clock.floor();
        self.frame_clock -= whole;
        self.frame = self.frame.saturating_add(whole as u64);

        if self.frame >= self.last_frame() {
            self.frame = self.last_frame();
            self.set_state(PlaybackState::Pause);
        }
    }

    fn drain_events(&mut self) -> Vec<SurfaceEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    /// A QCIF 4:2:0 file with `frames` frames.
    fn qcif_file(frames: usize) -> (tempfile::NamedTempFile, FrameLayout) {
        let layout = FrameLayout {
            resolution: crate::models::format::Resolution::new(176, 144).unwrap(),
            ..Default::default()
        };
        let frame = layout.format.frame_bytes(layout.resolution) as usize;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&vec![0u8; frame * frames]).unwrap();
        (file, layout)
    }

    #[test]
    fn test_set_playitem_emits_load() {
        let (file, layout) = qcif_file(10);
        let mut surface = RawSurface::default();
        surface.set_playitem(PlayItem::with_layout(file.path(), layout));

        assert_eq!(surface.position(), (0, 10));
        let events = surface.drain_events();
        assert_eq!(events.len(), 1);
        assert!(matches!(&events[0], SurfaceEvent::LoadVideo(item) if item.source == file.path()));
        assert!(surface.drain_events().is_empty());
    }

    #[test]
    fn test_seek_and_step() {
        let (file, layout) = qcif_file(11);
        let mut surface = RawSurface::default();
        surface.set_playitem(PlayItem::with_layout(file.path(), layout));

        surface.seek(1.0);
        assert_eq!(surface.position().0, 10);
        surface.seek(0.5);
        assert_eq!(surface.position().0, 5);

        surface.step_frame(1);
        assert_eq!(surface.position().0, 6);
        surface.step_frame(100);
        assert_eq!(surface.position().0, 10);
        surface.step_frame(-100);
        assert_eq!(surface.position().0, 0);
    }

    #[test]
    fn test_tick_pauses_at_end() {
        let (file, layout) = qcif_file(5);
        let mut surface = RawSurface::default();
        surface.set_playitem(PlayItem::with_layout(file.path(), layout));
        surface.set_state(PlaybackState::Play);

        surface.tick(0.05);
        assert_eq!(surface.position().0, 1);

        surface.tick(10.0);
        assert_eq!(surface.position().0, 4);
        assert_eq!(surface.state(), PlaybackState::Pause);
    }

    #[test]
    fn test_step_frame_pauses() {
        let (file, layout) = qcif_file(5);
        let mut surface = RawSurface::default();
        surface.set_playitem(PlayItem::with_layout(file.path(), layout));
        surface.set_state(PlaybackState::Play);
        surface.drain_events();

        surface.step_frame(1);
        assert_eq!(surface.state(), PlaybackState::Pause);
        assert_eq!(
            surface.drain_events(),
            vec![SurfaceEvent::StateChanged(PlaybackState::Pause)]
        );
    }

    #[test]
    fn test_missing_source_has_no_frames() {
        let mut surface = RawSurface::default();
        surface.set_source(PathBuf::from("/no/such/clip.yuv"));

        assert_eq!(surface.position(), (0, 0));
        surface.set_state(PlaybackState::Play);
        surface.tick(1.0);
        assert_eq!(surface.position(), (0, 0));
    }

    #[test]
    fn test_volume_clamped() {
        let mut surface = RawSurface::default();
        surface.set_volume(1.7);
        assert_eq!(surface.volume(), 1.0);
        surface.set_volume(-0.2);
        assert_eq!(surface.volume(), 0.0);
    }
}
