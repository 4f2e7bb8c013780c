//! Seam between the board and whatever engine presents it.

use bevy::math::Vec2;
use bevy::prelude::Event;

use super::arena::BallId;
use super::ball::Ball;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    Pop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParticleEffect {
    Explosion,
}

/// Services the board needs from the presentation layer. All calls are fire-and-forget.
pub trait SceneHost {
    fn ball_added(&mut self, id: BallId, ball: &Ball);
    fn ball_removed(&mut self, id: BallId, ball: &Ball);
    fn play_sound(&mut self, cue: SoundCue);
    fn spawn_particles(&mut self, effect: ParticleEffect, at: Vec2, ball: &Ball);
    fn celebrate(&mut self, match_size: usize);
    fn score_changed(&mut self, score: u64);
    fn board_cleared(&mut self);
}

/// Board notifications as plain data, forwarded to ECS systems.
#[derive(Event, Debug, Clone, PartialEq)]
pub enum BoardEvent {
    BallAdded { id: BallId, ball: Ball },
    BallRemoved { id: BallId, ball: Ball },
    Sound(SoundCue),
    Particles { effect: ParticleEffect, at: Vec2, ball: Ball },
    Celebrate { match_size: usize },
    ScoreChanged(u64),
    Cleared,
}

impl SceneHost for Vec<BoardEvent> {
    fn ball_added(&mut self, id: BallId, ball: &Ball) {
        self.push(BoardEvent::BallAdded { id, ball: *ball });
    }

    fn ball_removed(&mut self, id: BallId, ball: &Ball) {
        self.push(BoardEvent::BallRemoved { id, ball: *ball });
    }

    fn play_sound(&mut self, cue: SoundCue) {
        self.push(BoardEvent::Sound(cue));
    }

    fn spawn_particles(&mut self, effect: ParticleEffect, at: Vec2, ball: &Ball) {
        self.push(BoardEvent::Particles {
            effect,
            at,
            ball: *ball,
        });
    }

    fn celebrate(&mut self, match_size: usize) {
        self.push(BoardEvent::Celebrate { match_size });
    }

    fn score_changed(&mut self, score: u64) {
        self.push(BoardEvent::ScoreChanged(score));
    }

    fn board_cleared(&mut self) {
        self.push(BoardEvent::Cleared);
    }
}
