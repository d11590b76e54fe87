use crate::config::PlayerConfig;
use crate::error::PlayerError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Track {
    pub file_name: String,
    pub title: String,
}

impl Track {
    pub fn new(file_name: &str, title: &str) -> Self {
        Self {
            file_name: file_name.to_string(),
            title: title.to_string(),
        }
    }
}

/// Fixed, non-empty list of remote tracks with a wrapping cursor.
#[derive(Clone, Debug)]
pub struct Playlist {
    base_url: String,
    tracks: Vec<Track>,
    current: usize,
}

impl Playlist {
    pub fn new(base_url: impl Into<String>, tracks: Vec<Track>) -> Result<Self, PlayerError> {
        if tracks.is_empty() {
            return Err(PlayerError::EmptyPlaylist);
        }
        Ok(Self {
            base_url: base_url.into(),
            tracks,
            current: 0,
        })
    }

    pub fn from_config(config: &PlayerConfig) -> Result<Self, PlayerError> {
        let mut playlist = Self::new(config.base_url.clone(), config.tracks.clone())?;
        playlist.select(config.initial_track)?;
        Ok(playlist)
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> &Track {
        &self.tracks[self.current]
    }

    pub fn url_for(&self, index: usize) -> Option<String> {
        self.tracks
            .get(index)
            .map(|t| format!("{}{}", self.base_url, t.file_name))
    }

    pub fn current_url(&self) -> String {
        format!("{}{}", self.base_url, self.current().file_name)
    }

    pub fn select(&mut self, index: usize) -> Result<(), PlayerError> {
        if index >= self.tracks.len() {
            return Err(PlayerError::TrackOutOfRange {
                index,
                len: self.tracks.len(),
            });
        }
        self.current = index;
        Ok(())
    }

    /// Step forward, wrapping from the last track to the first.
    pub fn next(&mut self) -> usize {
        self.current = (self.current + 1) % self.tracks.len();
        self.current
    }

    /// Step back, wrapping from the first track to the last.
    pub fn prev(&mut self) -> usize {
        self.current = if self.current == 0 {
            self.tracks.len() - 1
        } else {
            self.current - 1
        };
        self.current
    }
}
