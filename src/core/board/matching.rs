//! Same-color connected-component search.
//!
//! Two balls are linked when they share a color and their squared center
//! distance is strictly below the rule's squared threshold. The match set is
//! the transitive closure of that relation from the start ball.

use bevy::math::Vec2;

use super::arena::{Arena, BallId};
use super::ball::{Ball, BallColor};

/// Squared threshold scale relative to diameter² (orthogonal neighbors link, diagonals don't).
pub const DEFAULT_LINK_SLOP: f32 = 1.1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchRule {
    link_distance_sq: f32,
}

impl MatchRule {
    pub fn new(link_distance_sq: f32) -> Self {
        Self {
            link_distance_sq: link_distance_sq.max(0.0),
        }
    }

    /// `diameter² * slop`, compared against squared center distance.
    pub fn for_radius(radius: f32, slop: f32) -> Self {
        let diameter = radius * 2.0;
        Self::new(diameter * diameter * slop)
    }

    #[inline]
    pub fn link_distance_sq(&self) -> f32 {
        self.link_distance_sq
    }

    #[inline]
    pub fn links(&self, a: &Ball, b: &Ball) -> bool {
        a.color == b.color && a.position.distance_squared(b.position) < self.link_distance_sq
    }
}

/// Deduplicated set of balls connected to a tapped ball. Members are in discovery order.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchSet {
    color: Option<BallColor>,
    members: Vec<BallId>,
}

impl MatchSet {
    fn empty() -> Self {
        Self {
            color: None,
            members: Vec::new(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn color(&self) -> Option<BallColor> {
        self.color
    }

    pub fn contains(&self, id: BallId) -> bool {
        self.members.contains(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = BallId> + '_ {
        self.members.iter().copied()
    }

    pub fn into_ids(self) -> Vec<BallId> {
        self.members
    }

    /// Members sorted by id; handy for comparing sets regardless of start ball.
    pub fn sorted_ids(&self) -> Vec<BallId> {
        let mut ids = self.members.clone();
        ids.sort_unstable();
        ids
    }
}

pub fn find_matches(start: BallId, balls: &Arena<Ball>, rule: &MatchRule) -> MatchSet {
    let Some(origin) = balls.get(start) else {
        return MatchSet::empty();
    };
    let color = origin.color;

    // Index-addressed snapshot of same-colored candidates; other colors can never join.
    let mut ids: Vec<BallId> = Vec::new();
    let mut positions: Vec<Vec2> = Vec::new();
    let mut start_idx = 0usize;
    for (id, ball) in balls.iter() {
        if ball.color != color {
            continue;
        }
        if id == start {
            start_idx = ids.len();
        }
        ids.push(id);
        positions.push(ball.position);
    }

    let mut visited = vec![false; ids.len()];
    let mut members = Vec::new();
    let mut stack = vec![start_idx];
    visited[start_idx] = true;
    while let Some(i) = stack.pop() {
        members.push(ids[i]);
        let p = positions[i];
        for j in 0..ids.len() {
            if visited[j] {
                continue;
            }
            if p.distance_squared(positions[j]) < rule.link_distance_sq {
                visited[j] = true;
                stack.push(j);
            }
        }
    }

    MatchSet {
        color: Some(color),
        members,
    }
}
