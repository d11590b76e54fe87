pub mod config;
pub mod constants;
pub mod error;
pub mod field;
pub mod particle;
pub mod player;
pub mod playlist;
pub mod state;
pub mod visualizer;

pub use config::*;
pub use constants::*;
pub use error::*;
pub use field::*;
pub use particle::*;
pub use player::*;
pub use playlist::*;
pub use state::*;
pub use visualizer::*;
