//! Engine-independent game core: ball arena, matching, scoring and the tap state machine.

pub mod arena;
pub mod ball;
pub mod board;
pub mod host;
pub mod layout;
pub mod matching;
pub mod scoring;
pub mod tap;

pub use arena::{Arena, BallId};
pub use ball::{Ball, BallColor};
pub use board::{Board, BoardSettings, BoardState, TapOutcome};
pub use host::{BoardEvent, ParticleEffect, SceneHost, SoundCue};
pub use layout::{grid_positions, PlayArea};
pub use matching::{find_matches, MatchRule, MatchSet, DEFAULT_LINK_SLOP};
pub use scoring::ScoreRule;
pub use tap::{hit_test, ResetControl, TapTarget};
