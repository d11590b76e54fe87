use crate::constants::BIN_COUNT;
use crate::player::VolumeLevel;
use crate::playlist::Track;

/// Visualizer setup, fixed for the lifetime of the page.
#[derive(Clone, Debug)]
pub struct VisualizerParams {
    pub bin_count: usize,
    pub seed: u64,
}

impl Default for VisualizerParams {
    fn default() -> Self {
        Self {
            bin_count: BIN_COUNT,
            seed: 42,
        }
    }
}

pub const DEFAULT_BASE_URL: &str = "https://box1182.BlueHost.com/~seanale3/codepen/audio/";

pub const DEFAULT_TRACKS: &[(&str, &str)] = &[
    ("dmwaltz.mp3", "Dmitri Shostakovich - Waltz No. 2"),
    ("nocturne92.mp3", "Frederic Chopin - Nocturne op. 9 no. 2"),
    ("mozart25.mp3", "Mozart - Symphony no. 25"),
    ("trista.mp3", "Heitor Villa-Lobos - Tristorosa"),
    ("waltzflowers.mp3", "Pyotr Tchaikovsky - Waltz of the Flowers"),
];

/// Where tracks come from and how playback starts.
#[derive(Clone, Debug)]
pub struct PlayerConfig {
    pub base_url: String,
    pub tracks: Vec<Track>,
    pub initial_track: usize,
    pub initial_volume: VolumeLevel,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            tracks: DEFAULT_TRACKS
                .iter()
                .map(|(file, title)| Track::new(file, title))
                .collect(),
            initial_track: 0,
            initial_volume: VolumeLevel::Full,
        }
    }
}
