use bevy::math::Vec2;
use bevy::prelude::Resource;
use rand::Rng;

use super::arena::{Arena, BallId};
use super::ball::{Ball, BallColor};
use super::host::{ParticleEffect, SceneHost, SoundCue};
use super::layout::{grid_positions, PlayArea};
use super::matching::{find_matches, MatchRule, MatchSet};
use super::scoring::ScoreRule;
use super::tap::TapTarget;
use crate::core::config::GameConfig;

/// Tunables the board is built from. Layout fields take effect on the next (re)population.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardSettings {
    pub ball_radius: f32,
    pub area: PlayArea,
    pub link_slop: f32,
    pub score_rule: ScoreRule,
    /// Matches strictly larger than this trigger the celebration overlay.
    pub celebrate_above: usize,
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self::from_config(&GameConfig::default())
    }
}

impl BoardSettings {
    pub fn from_config(cfg: &GameConfig) -> Self {
        Self {
            ball_radius: cfg.board.ball_radius,
            area: PlayArea::from_window(cfg.window.width, cfg.window.height, cfg.board.hud_band),
            link_slop: cfg.board.link_slop,
            score_rule: ScoreRule::new(cfg.scoring.min_match, cfg.scoring.exponent_cap),
            celebrate_above: cfg.scoring.celebrate_above,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardState {
    Empty,
    Populated,
}

/// What a tap did to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapOutcome {
    /// Nothing under the pointer, or a stale ball.
    Ignored,
    Reset,
    /// Connected set too small to score; board untouched.
    NoMatch { size: usize },
    Matched {
        size: usize,
        points: u64,
        celebrated: bool,
    },
}

/// Live marbles plus the running score.
#[derive(Resource, Debug, Clone)]
pub struct Board {
    balls: Arena<Ball>,
    score: u64,
    settings: BoardSettings,
    // Layout the current balls were generated with.
    radius: f32,
    area: PlayArea,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BoardSettings::default())
    }
}

impl Board {
    pub fn new(settings: BoardSettings) -> Self {
        Self {
            balls: Arena::new(),
            score: 0,
            radius: settings.ball_radius,
            area: settings.area,
            settings,
        }
    }

    pub fn state(&self) -> BoardState {
        if self.balls.is_empty() {
            BoardState::Empty
        } else {
            BoardState::Populated
        }
    }

    #[inline]
    pub fn score(&self) -> u64 {
        self.score
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.balls.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.balls.is_empty()
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn area(&self) -> PlayArea {
        self.area
    }

    pub fn settings(&self) -> &BoardSettings {
        &self.settings
    }

    /// Match and scoring tuning apply immediately; layout waits for the next populate.
    pub fn set_settings(&mut self, settings: BoardSettings) {
        self.settings = settings;
    }

    pub fn match_rule(&self) -> MatchRule {
        MatchRule::for_radius(self.radius, self.settings.link_slop)
    }

    pub fn get(&self, id: BallId) -> Option<&Ball> {
        self.balls.get(id)
    }

    pub fn balls(&self) -> impl Iterator<Item = (BallId, &Ball)> + '_ {
        self.balls.iter()
    }

    /// Number of balls a fresh populate produces with the current settings.
    pub fn grid_capacity(&self) -> usize {
        grid_positions(&self.settings.area, self.settings.ball_radius).len()
    }

    /// Physics moves balls; the engine reports positions back here. Stale ids are ignored.
    pub fn set_position(&mut self, id: BallId, position: Vec2) -> bool {
        match self.balls.get_mut(id) {
            Some(ball) if position.is_finite() => {
                ball.position = position;
                true
            }
            _ => false,
        }
    }

    /// Nearest live ball whose circle contains `point`.
    pub fn ball_at(&self, point: Vec2) -> Option<BallId> {
        let mut best: Option<(BallId, f32)> = None;
        for (id, ball) in self.balls.iter() {
            if !ball.contains(point, self.radius) {
                continue;
            }
            let d2 = ball.position.distance_squared(point);
            match best {
                Some((_, best_d2)) if d2 >= best_d2 => {}
                _ => best = Some((id, d2)),
            }
        }
        best.map(|(id, _)| id)
    }

    pub fn find_matches(&self, start: BallId) -> MatchSet {
        find_matches(start, &self.balls, &self.match_rule())
    }

    /// Lays out a fresh grid with random colors and zeroes the score.
    pub fn populate<R, H>(&mut self, rng: &mut R, host: &mut H)
    where
        R: Rng + ?Sized,
        H: SceneHost + ?Sized,
    {
        if !self.balls.is_empty() {
            self.clear(host);
        }
        self.radius = self.settings.ball_radius;
        self.area = self.settings.area;
        for position in grid_positions(&self.area, self.radius) {
            let ball = Ball::new(position, BallColor::random(rng));
            let id = self.balls.insert(ball);
            host.ball_added(id, &ball);
        }
        self.score = 0;
        host.score_changed(self.score);
    }

    /// Drops every ball without effects.
    pub fn clear<H: SceneHost + ?Sized>(&mut self, host: &mut H) {
        self.balls.drain();
        host.board_cleared();
    }

    pub fn reset<R, H>(&mut self, rng: &mut R, host: &mut H)
    where
        R: Rng + ?Sized,
        H: SceneHost + ?Sized,
    {
        self.clear(host);
        self.populate(rng, host);
    }

    pub fn tap<R, H>(&mut self, target: Option<TapTarget>, rng: &mut R, host: &mut H) -> TapOutcome
    where
        R: Rng + ?Sized,
        H: SceneHost + ?Sized,
    {
        match target {
            None => TapOutcome::Ignored,
            Some(TapTarget::Reset) => {
                self.reset(rng, host);
                TapOutcome::Reset
            }
            Some(TapTarget::Ball(id)) => self.tap_ball(id, host),
        }
    }

    pub fn tap_ball<H: SceneHost + ?Sized>(&mut self, id: BallId, host: &mut H) -> TapOutcome {
        let matches = self.find_matches(id);
        if matches.is_empty() {
            return TapOutcome::Ignored;
        }
        let size = matches.len();
        let rule = self.settings.score_rule;
        if !rule.qualifies(size) {
            return TapOutcome::NoMatch { size };
        }

        let points = rule.points(size);
        self.score = self.score.saturating_add(points);
        host.score_changed(self.score);

        for member in matches.iter() {
            let Some(ball) = self.balls.remove(member) else {
                continue;
            };
            host.spawn_particles(ParticleEffect::Explosion, ball.position, &ball);
            host.play_sound(SoundCue::Pop);
            host.ball_removed(member, &ball);
        }

        let celebrated = size > self.settings.celebrate_above;
        if celebrated {
            host.celebrate(size);
        }
        TapOutcome::Matched {
            size,
            points,
            celebrated,
        }
    }

    /// Test helper: place a ball at an explicit spot.
    pub fn insert_ball<H: SceneHost + ?Sized>(&mut self, ball: Ball, host: &mut H) -> BallId {
        let id = self.balls.insert(ball);
        host.ball_added(id, &ball);
        id
    }
}
