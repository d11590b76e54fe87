use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlayerError {
    #[error("playlist has no tracks")]
    EmptyPlaylist,
    #[error("track {index} is out of range for a playlist of {len}")]
    TrackOutOfRange { index: usize, len: usize },
}
