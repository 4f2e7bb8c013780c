use bevy::math::Vec2;
use bevy::prelude::Resource;

use super::arena::BallId;
use super::board::Board;
use super::layout::PlayArea;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapTarget {
    Reset,
    Ball(BallId),
}

/// World-space rectangle of the reset button.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct ResetControl {
    pub center: Vec2,
    pub half_extents: Vec2,
}

impl ResetControl {
    pub fn new(center: Vec2, size: Vec2) -> Self {
        Self {
            center,
            half_extents: (size * 0.5).abs(),
        }
    }

    /// Pinned to the top-left corner of the window that contains `area`.
    pub fn top_left(area: &PlayArea, size: f32) -> Self {
        let half = size * 0.5;
        Self::new(
            Vec2::new(area.min.x + half, area.max.y - half),
            Vec2::splat(size),
        )
    }

    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        let d = (point - self.center).abs();
        d.x <= self.half_extents.x && d.y <= self.half_extents.y
    }
}

/// Resolves a tap point: the reset button wins over any ball beneath it.
pub fn hit_test(point: Vec2, reset: Option<&ResetControl>, board: &Board) -> Option<TapTarget> {
    if !point.is_finite() {
        return None;
    }
    if reset.is_some_and(|r| r.contains(point)) {
        return Some(TapTarget::Reset);
    }
    board.ball_at(point).map(TapTarget::Ball)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::board::ball::{Ball, BallColor};
    use crate::core::board::board::BoardSettings;

    #[test]
    fn reset_takes_precedence() {
        let mut board = Board::new(BoardSettings::default());
        let mut events = Vec::new();
        let id = board.insert_ball(Ball::new(Vec2::new(5.0, 5.0), BallColor::Red), &mut events);
        let reset = ResetControl::new(Vec2::ZERO, Vec2::splat(40.0));
        assert_eq!(hit_test(Vec2::new(5.0, 5.0), Some(&reset), &board), Some(TapTarget::Reset));
        assert_eq!(hit_test(Vec2::new(5.0, 5.0), None, &board), Some(TapTarget::Ball(id)));
    }

    #[test]
    fn empty_space_is_none() {
        let board = Board::new(BoardSettings::default());
        let reset = ResetControl::new(Vec2::ZERO, Vec2::splat(40.0));
        assert_eq!(hit_test(Vec2::new(300.0, 300.0), Some(&reset), &board), None);
        assert_eq!(hit_test(Vec2::new(f32::NAN, 0.0), Some(&reset), &board), None);
    }

    #[test]
    fn top_left_sits_inside_corner() {
        let area = PlayArea::new(Vec2::new(-100.0, -100.0), Vec2::new(100.0, 100.0));
        let reset = ResetControl::top_left(&area, 40.0);
        assert_eq!(reset.center, Vec2::new(-80.0, 80.0));
        assert!(reset.contains(Vec2::new(-99.0, 99.0)));
        assert!(!reset.contains(Vec2::new(-50.0, 99.0)));
    }
}
