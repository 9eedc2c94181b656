// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Playback and navigation controller.
//!
//! The controller is the single place where commands turn into state
//! changes. Panels, shortcuts and dropped files all produce `Command`s;
//! dialogs produce `DialogOutcome`s; the surface produces `SurfaceEvent`s.
//! Everything is applied here on the UI thread.

use super::command::Command;
use super::surface::{SurfaceEvent, VideoSurface};
use crate::io::media::RAW_EXTENSIONS;
use crate::models::format::{ChromaFormat, Resolution};
use crate::models::play_item::{PlayItem, PlaybackState};
use crate::models::playlist::{Playlist, Upsert};
use crate::ui::playlist_panel::PlaylistPanel;
use crate::ui::popup::{DialogOutcome, Popup};
use crate::ui::resolution_panel::ResolutionPanel;
use crate::window::fullscreen::{DisplayHost, Fullscreen};
use crate::window::handle::WindowHandle;
use crate::window::{keyboard, resize};
use std::path::{Path, PathBuf};

pub struct Controller {
    pub playlist: Playlist,
    pub surface: Box<dyn VideoSurface>,
    /// Directory the open dialog starts in
    pub playpath: PathBuf,
    pub host: DisplayHost,
    pub fullscreen: Fullscreen,
    /// Upper bound for the resize presets
    pub max_window_size: [u32; 2],
    popup: Option<Popup>,
    /// Last transport state reported by the surface
    observed_state: PlaybackState,
}

impl Controller {
    pub fn new(
        surface: Box<dyn VideoSurface>,
        playpath: PathBuf,
        fullscreen: Fullscreen,
        max_window_size: [u32; 2],
    ) -> Self {
        let observed_state = surface.state();
        Self {
            playlist: Playlist::new(),
            surface,
            playpath,
            host: DisplayHost::default(),
            fullscreen,
            max_window_size,
            popup: None,
            observed_state,
        }
    }

    pub fn observed_state(&self) -> PlaybackState {
        self.observed_state
    }

    #[cfg(test)]
    pub fn popup(&self) -> Option<&Popup> {
        self.popup.as_ref()
    }

    pub fn popup_mut(&mut self) -> Option<&mut Popup> {
        self.popup.as_mut()
    }

    /// Apply one command.
    pub fn dispatch(
        &mut self,
        command: Command,
        mut window: Option<&mut (dyn WindowHandle + '_)>,
    ) {
        log::debug!("Dispatch {:?}", command);
        match command {
            Command::LoadVideo(item) => self.on_load_video(item, window),
            Command::PrevVideo => self.step_video(-1),
            Command::NextVideo => self.step_video(1),
            Command::OpenFile => self.pick_file(),
            Command::ConfigYuv => self.open_yuv_config(),
            Command::ConfigPlaylist => {
                let size = window.as_deref().and_then(|w| w.inner_size());
                self.open_playlist(size);
            }
            Command::PrevFrame => self.surface.step_frame(-1),
            Command::NextFrame => self.surface.step_frame(1),
            Command::PlayPause => self.surface.toggle_play_pause(),
            Command::Stop => self.surface.set_state(PlaybackState::Stop),
            Command::Seek(fraction) => self.surface.seek(fraction),
            Command::SetVolume(volume) => self.surface.set_volume(volume),
            Command::AdjustVolume(delta) => {
                let volume = keyboard::adjust_volume(self.surface.volume(), delta);
                self.surface.set_volume(volume);
            }
            Command::ToggleFullscreen => {
                self.fullscreen.toggle(&mut self.host, window.as_deref_mut());
            }
            Command::Resize(scale) => self.resize(scale, window),
            Command::DropFile(path) => self.commit_source(path),
        }
    }

    /// Drain surface notifications and apply them.
    pub fn pump(&mut self, mut window: Option<&mut (dyn WindowHandle + '_)>) {
        for event in self.surface.drain_events() {
            match event {
                SurfaceEvent::LoadVideo(item) => {
                    self.dispatch(Command::LoadVideo(item), window.as_deref_mut())
                }
                SurfaceEvent::StateChanged(state) => {
                    log::debug!("Playback state {:?}", state);
                    self.observed_state = state;
                }
            }
        }
    }

    /// Apply the outcome of the open dialog and close it.
    pub fn resolve_popup(&mut self, outcome: DialogOutcome) {
        self.popup = None;
        match outcome {
            DialogOutcome::ConfirmFormat(format, resolution) => {
                self.commit_format(format, resolution)
            }
            DialogOutcome::ConfirmPlayItem(item) => self.commit_playitem(item),
            DialogOutcome::Cancel => log::debug!("Dialog cancelled"),
        }
    }

    /// Reload the current source with a new format and resolution, then play.
    /// Without a source the layout is kept for the next file opened.
    pub fn commit_format(&mut self, format: ChromaFormat, resolution: Resolution) {
        let mut layout = self.surface.layout();
        layout.format = format;
        layout.resolution = resolution;

        match self.surface.source().map(Path::to_path_buf) {
            Some(source) => {
                self.surface.set_playitem(PlayItem::with_layout(source, layout));
                self.surface.set_state(PlaybackState::Play);
            }
            None => self.surface.set_layout(layout),
        }
    }

    pub fn commit_playitem(&mut self, item: PlayItem) {
        self.surface.set_playitem(item);
        self.surface.set_state(PlaybackState::Play);
    }

    /// Play `path` with the current layout.
    pub fn commit_source(&mut self, path: PathBuf) {
        log::info!("Opening {}", path.display());
        self.surface.set_source(path);
        self.surface.set_state(PlaybackState::Play);
    }

    /// Play a file picked from `dir`, remembering `dir` for the next pick.
    pub fn commit_open(&mut self, dir: PathBuf, file_name: &Path) {
        let path = dir.join(file_name);
        self.playpath = dir;
        self.commit_source(path);
    }

    fn on_load_video(&mut self, item: PlayItem, window: Option<&mut (dyn WindowHandle + '_)>) {
        if let Some(window) = window {
            window.set_title(&item.window_title());
        }

        match self.playlist.upsert(item) {
            Upsert::Inserted => log::info!("Playlist has {} items", self.playlist.len()),
            Upsert::Updated => log::debug!("Updated playlist entry"),
        }
    }

    fn step_video(&mut self, delta: i32) {
        let Some(source) = self.surface.source() else {
            return;
        };
        let target = if delta < 0 {
            self.playlist.prev_of(source)
        } else {
            self.playlist.next_of(source)
        };
        if let Some(item) = target.cloned() {
            self.commit_playitem(item);
        }
    }

    fn pick_file(&mut self) {
        let picked = rfd::FileDialog::new()
            .set_title("Open Image File")
            .set_directory(&self.playpath)
            .add_filter("Raw YUV", &RAW_EXTENSIONS)
            .pick_file();

        let Some(path) = picked else {
            return;
        };
        match (path.parent(), path.file_name()) {
            (Some(dir), Some(name)) => {
                let name = PathBuf::from(name);
                self.commit_open(dir.to_path_buf(), &name);
            }
            _ => self.commit_source(path),
        }
    }

    /// Open `popup` unless another one is already showing.
    fn open_popup(&mut self, popup: Popup) -> bool {
        if let Some(current) = &self.popup {
            log::debug!("Ignoring {:?} while {:?} is open", popup.title(), current.title());
            return false;
        }
        self.popup = Some(popup);
        true
    }

    fn open_yuv_config(&mut self) {
        let layout = self.surface.layout();
        let panel = ResolutionPanel::new(layout.format, layout.resolution);
        self.open_popup(Popup::resolution(panel));
    }

    fn open_playlist(&mut self, window_size: Option<[f32; 2]>) {
        let panel = PlaylistPanel::new(&self.playlist, self.surface.source());
        self.open_popup(Popup::playlist(panel, window_size));
    }

    fn resize(&mut self, scale: f32, window: Option<&mut (dyn WindowHandle + '_)>) {
        if self.fullscreen.is_active() {
            log::debug!("Ignoring resize while fullscreen");
            return;
        }
        let Some(window) = window else {
            return;
        };
        let resolution = self.surface.layout().resolution;
        let [width, height] = resize::fit_window(resolution, scale, self.max_window_size);
        log::info!("Resizing window to {}x{}", width, height);
        window.set_inner_size([width as f32, height as f32]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::format::ColorFormat;
    use crate::models::play_item::FrameLayout;
    use crate::player::surface::RawSurface;
    use crate::ui::popup::PopupKind;
    use crate::window::handle::RecordingWindow;

    fn controller() -> Controller {
        Controller::new(
            Box::new(RawSurface::default()),
            PathBuf::from("."),
            Fullscreen::new([1920.0, 1080.0], true),
            [1920, 1080],
        )
    }

    fn item(source: &str) -> PlayItem {
        PlayItem::new(
            source,
            ChromaFormat::Yuv420,
            ColorFormat::Yuv,
            Resolution::new(352, 288).unwrap(),
            30.0,
        )
    }

    /// Controller with a, b, c in the playlist and `current` loaded.
    fn with_abc(current: &str) -> Controller {
        let mut controller = controller();
        for source in ["a.yuv", "b.yuv", "c.yuv"] {
            controller.commit_playitem(item(source));
            controller.pump(None);
        }
        controller.commit_playitem(item(current));
        controller.pump(None);
        controller
    }

    fn current(controller: &Controller) -> PathBuf {
        controller.surface.source().unwrap().to_path_buf()
    }

    #[test]
    fn test_prev_next_navigation() {
        let mut controller = with_abc("b.yuv");
        controller.dispatch(Command::PrevVideo, None);
        assert_eq!(current(&controller), PathBuf::from("a.yuv"));

        let mut controller = with_abc("b.yuv");
        controller.dispatch(Command::NextVideo, None);
        assert_eq!(current(&controller), PathBuf::from("c.yuv"));
        assert_eq!(controller.surface.state(), PlaybackState::Play);
    }

    #[test]
    fn test_navigation_stops_at_ends() {
        let mut controller = with_abc("a.yuv");
        controller.dispatch(Command::PrevVideo, None);
        assert_eq!(current(&controller), PathBuf::from("a.yuv"));

        let mut controller = with_abc("c.yuv");
        controller.dispatch(Command::NextVideo, None);
        assert_eq!(current(&controller), PathBuf::from("c.yuv"));
    }

    #[test]
    fn test_reconfigure_updates_playlist_in_place() {
        let mut controller = with_abc("b.yuv");
        assert_eq!(controller.playlist.len(), 3);

        let hd = Resolution::new(1280, 720).unwrap();
        controller.commit_format(ChromaFormat::Yuv444, hd);
        controller.pump(None);

        assert_eq!(controller.playlist.len(), 3);
        let entry = controller.playlist.get(1).unwrap();
        assert_eq!(entry.source, PathBuf::from("b.yuv"));
        assert_eq!(entry.format, ChromaFormat::Yuv444);
        assert_eq!(entry.resolution, hd);
    }

    #[test]
    fn test_load_video_sets_title() {
        let mut controller = controller();
        let mut window = RecordingWindow::default();
        controller.dispatch(Command::DropFile(PathBuf::from("/clips/foreman.yuv")), None);
        controller.pump(Some(&mut window));

        assert_eq!(window.title.as_deref(), Some("foreman.yuv 1920x1080:YUV420@30"));
        assert_eq!(controller.playlist.len(), 1);
        assert_eq!(controller.observed_state(), PlaybackState::Play);
    }

    #[test]
    fn test_commit_open_remembers_directory() {
        let mut controller = controller();
        controller.commit_open(PathBuf::from("/clips"), Path::new("news.yuv"));

        assert_eq!(controller.playpath, PathBuf::from("/clips"));
        assert_eq!(current(&controller), PathBuf::from("/clips/news.yuv"));
        assert_eq!(controller.surface.state(), PlaybackState::Play);
    }

    #[test]
    fn test_format_without_source_kept_for_next_file() {
        let mut controller = controller();
        let cif = Resolution::new(352, 288).unwrap();
        controller.commit_format(ChromaFormat::Yuv400, cif);

        assert!(controller.surface.source().is_none());
        assert_eq!(
            controller.surface.layout(),
            FrameLayout {
                format: ChromaFormat::Yuv400,
                resolution: cif,
                ..FrameLayout::default()
            }
        );
        assert_ne!(controller.surface.state(), PlaybackState::Play);
    }

    #[test]
    fn test_single_popup_at_a_time() {
        let mut controller = controller();
        controller.dispatch(Command::ConfigYuv, None);
        controller.dispatch(Command::ConfigPlaylist, None);

        assert!(matches!(
            controller.popup().map(|p| &p.kind),
            Some(PopupKind::Resolution(_))
        ));

        controller.resolve_popup(DialogOutcome::Cancel);
        assert!(controller.popup().is_none());

        controller.dispatch(Command::ConfigPlaylist, None);
        assert!(matches!(
            controller.popup().map(|p| &p.kind),
            Some(PopupKind::Playlist(_))
        ));
    }

    #[test]
    fn test_confirm_format_dialog_commits_and_plays() {
        let mut controller = with_abc("a.yuv");
        controller.surface.set_state(PlaybackState::Pause);
        controller.dispatch(Command::ConfigYuv, None);

        let qcif = Resolution::new(176, 144).unwrap();
        controller.resolve_popup(DialogOutcome::ConfirmFormat(ChromaFormat::Yuv422, qcif));
        controller.pump(None);

        assert!(controller.popup().is_none());
        assert_eq!(controller.surface.layout().resolution, qcif);
        assert_eq!(controller.surface.layout().format, ChromaFormat::Yuv422);
        assert_eq!(controller.surface.state(), PlaybackState::Play);
        assert_eq!(controller.playlist.get(0).unwrap().resolution, qcif);
    }

    #[test]
    fn test_volume_commands() {
        let mut controller = controller();
        controller.dispatch(Command::SetVolume(0.95), None);
        controller.dispatch(Command::AdjustVolume(keyboard::VOLUME_STEP), None);
        controller.dispatch(Command::AdjustVolume(keyboard::VOLUME_STEP), None);
        assert_eq!(controller.surface.volume(), 1.0);

        controller.dispatch(Command::SetVolume(0.05), None);
        controller.dispatch(Command::AdjustVolume(-keyboard::VOLUME_STEP), None);
        assert_eq!(controller.surface.volume(), 0.0);
    }

    #[test]
    fn test_resize_uses_source_resolution() {
        let mut controller = controller();
        controller.commit_format(ChromaFormat::Yuv420, Resolution::new(352, 288).unwrap());
        let mut window = RecordingWindow::default();

        controller.dispatch(Command::Resize(2.0), Some(&mut window));
        assert_eq!(window.size, Some([704.0, 576.0]));
    }

    #[test]
    fn test_fullscreen_round_trip() {
        let mut controller = controller();
        let mut window = RecordingWindow {
            size: Some([1024.0, 768.0]),
            ..Default::default()
        };
        let before = controller.host.clone();

        controller.dispatch(Command::ToggleFullscreen, Some(&mut window));
        assert!(controller.fullscreen.is_active());
        controller.dispatch(Command::Resize(1.0), Some(&mut window));
        assert_eq!(window.size, Some([1920.0, 1080.0]));

        controller.dispatch(Command::ToggleFullscreen, Some(&mut window));
        assert!(!controller.fullscreen.is_active());
        assert_eq!(controller.host, before);
        assert_eq!(window.size, Some([1024.0, 768.0]));
    }
}
