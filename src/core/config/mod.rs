pub mod config;

pub use config::{
    AudioConfig, BoardConfig, ConfigReport, EffectsConfig, GameConfig, PhysicsConfig, ScoringConfig,
    WindowConfig,
};
