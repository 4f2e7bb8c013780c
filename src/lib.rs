pub mod app;
pub mod audio;
pub mod core;
pub mod debug;
pub mod gameplay;
pub mod interaction;
pub mod physics;
pub mod rendering;

// Curated re-exports
pub use crate::app::game::GamePlugin;
pub use crate::core::board::{Ball, BallColor, BallId, Board, BoardEvent, SceneHost, TapOutcome};
pub use crate::core::config::{config::GameConfig, config::WindowConfig};
