//! Transport state for the player: which track is loading or playing, the
//! volume step, and the generation counter that discards superseded loads.

use crate::config::PlayerConfig;
use crate::error::PlayerError;
use crate::playlist::{Playlist, Track};
use instant::Instant;
use std::time::Duration;

/// Three-step volume control cycled by a single button.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum VolumeLevel {
    #[default]
    Full,
    Half,
    Muted,
}

impl VolumeLevel {
    pub fn gain(self) -> f32 {
        match self {
            VolumeLevel::Full => 1.0,
            VolumeLevel::Half => 0.5,
            VolumeLevel::Muted => 0.0,
        }
    }

    /// Full -> Half -> Muted -> Full.
    pub fn next(self) -> Self {
        match self {
            VolumeLevel::Full => VolumeLevel::Half,
            VolumeLevel::Half => VolumeLevel::Muted,
            VolumeLevel::Muted => VolumeLevel::Full,
        }
    }

    pub fn icon_class(self) -> &'static str {
        match self {
            VolumeLevel::Full => "fa-volume-up",
            VolumeLevel::Half => "fa-volume-down",
            VolumeLevel::Muted => "fa-volume-off",
        }
    }
}

pub const VOLUME_ICON_CLASSES: [&str; 3] = ["fa-volume-up", "fa-volume-down", "fa-volume-off"];
pub const PLAY_ICON_CLASS: &str = "fa-play";
pub const PAUSE_ICON_CLASS: &str = "fa-pause";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadPhase {
    Loading,
    Ready,
    Failed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayAction {
    Play,
    Pause,
}

/// Handle for one in-flight track fetch.
#[derive(Clone, Debug)]
pub struct LoadTicket {
    pub generation: u64,
    pub track_index: usize,
    pub url: String,
    started: Instant,
}

impl LoadTicket {
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

/// Monotonic request counter; only the most recent ticket is current.
#[derive(Clone, Debug, Default)]
pub struct LoadTracker {
    generation: u64,
}

impl LoadTracker {
    pub fn begin(&mut self, track_index: usize, url: String) -> LoadTicket {
        self.generation = self.generation.wrapping_add(1);
        LoadTicket {
            generation: self.generation,
            track_index,
            url,
            started: Instant::now(),
        }
    }

    #[inline]
    pub fn is_current(&self, ticket: &LoadTicket) -> bool {
        ticket.generation == self.generation
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

pub struct PlayerState {
    pub playlist: Playlist,
    loads: LoadTracker,
    phase: LoadPhase,
    playing: bool,
    volume: VolumeLevel,
}

impl PlayerState {
    pub fn new(playlist: Playlist) -> Self {
        Self {
            playlist,
            loads: LoadTracker::default(),
            phase: LoadPhase::Loading,
            playing: false,
            volume: VolumeLevel::default(),
        }
    }

    pub fn from_config(config: &PlayerConfig) -> Result<Self, PlayerError> {
        let mut state = Self::new(Playlist::from_config(config)?);
        state.volume = config.initial_volume;
        Ok(state)
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn is_ready(&self) -> bool {
        self.phase == LoadPhase::Ready
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn volume(&self) -> VolumeLevel {
        self.volume
    }

    /// Generation of the most recent load request.
    pub fn load_generation(&self) -> u64 {
        self.loads.generation()
    }

    pub fn controls_enabled(&self) -> bool {
        self.phase != LoadPhase::Loading
    }

    pub fn current_track(&self) -> &Track {
        self.playlist.current()
    }

    pub fn play_icon_class(&self) -> &'static str {
        if self.playing {
            PAUSE_ICON_CLASS
        } else {
            PLAY_ICON_CLASS
        }
    }

    /// Start loading the current track, superseding any load in flight.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.phase = LoadPhase::Loading;
        self.playing = false;
        let index = self.playlist.current_index();
        let ticket = self.loads.begin(index, self.playlist.current_url());
        log::info!(
            "[player] loading track {} (generation {}): {}",
            index,
            ticket.generation,
            ticket.url
        );
        ticket
    }

    pub fn next_track(&mut self) -> LoadTicket {
        self.playlist.next();
        self.begin_load()
    }

    pub fn prev_track(&mut self) -> LoadTicket {
        self.playlist.prev();
        self.begin_load()
    }

    /// The current track finished; move on to the next one.
    pub fn track_ended(&mut self) -> LoadTicket {
        self.next_track()
    }

    /// Accept a finished fetch. Returns `false`, leaving state untouched, when a
    /// newer request has been issued since `ticket`.
    pub fn complete_load(&mut self, ticket: &LoadTicket) -> bool {
        if !self.loads.is_current(ticket) {
            log::debug!(
                "[player] discarding stale load generation {} (current {})",
                ticket.generation,
                self.loads.generation()
            );
            return false;
        }
        self.phase = LoadPhase::Ready;
        self.playing = true;
        true
    }

    /// Record a failed fetch for the current request; stale failures are ignored.
    pub fn fail_load(&mut self, ticket: &LoadTicket) -> bool {
        if !self.loads.is_current(ticket) {
            return false;
        }
        self.phase = LoadPhase::Failed;
        self.playing = false;
        true
    }

    /// Flip between playing and paused. Does nothing until a track is ready.
    pub fn toggle_play(&mut self) -> Option<PlayAction> {
        if !self.is_ready() {
            return None;
        }
        self.playing = !self.playing;
        Some(if self.playing {
            PlayAction::Play
        } else {
            PlayAction::Pause
        })
    }

    /// The media element refused to play. Drops back to paused unless a newer
    /// load has started since `generation` was read.
    pub fn playback_rejected(&mut self, generation: u64) -> bool {
        if generation != self.loads.generation() || !self.is_ready() {
            return false;
        }
        self.playing = false;
        true
    }

    pub fn cycle_volume(&mut self) -> VolumeLevel {
        self.volume = self.volume.next();
        self.volume
    }
}
