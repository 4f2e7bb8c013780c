use bevy::math::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Fixed marble palette. Order matters: it is the index used for display materials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BallColor {
    Blue,
    Gray,
    Green,
    Red,
    Yellow,
}

impl BallColor {
    pub const ALL: [BallColor; 5] = [
        BallColor::Blue,
        BallColor::Gray,
        BallColor::Green,
        BallColor::Red,
        BallColor::Yellow,
    ];

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            BallColor::Blue => "blue",
            BallColor::Gray => "gray",
            BallColor::Green => "green",
            BallColor::Red => "red",
            BallColor::Yellow => "yellow",
        }
    }
}

/// A live marble. Radius is shared board-wide and lives on the board.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub position: Vec2,
    pub color: BallColor,
}

impl Ball {
    pub fn new(position: Vec2, color: BallColor) -> Self {
        Self { position, color }
    }

    #[inline]
    pub fn contains(&self, point: Vec2, radius: f32) -> bool {
        self.position.distance_squared(point) <= radius * radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn palette_indices_are_dense() {
        for (i, c) in BallColor::ALL.iter().enumerate() {
            assert_eq!(c.index(), i);
        }
    }

    #[test]
    fn random_covers_palette() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = [false; 5];
        for _ in 0..500 {
            seen[BallColor::random(&mut rng).index()] = true;
        }
        assert!(seen.iter().all(|s| *s), "every color should appear eventually");
    }

    #[test]
    fn contains_is_inclusive_of_edge() {
        let ball = Ball::new(Vec2::new(10.0, 10.0), BallColor::Red);
        assert!(ball.contains(Vec2::new(30.0, 10.0), 20.0));
        assert!(!ball.contains(Vec2::new(30.1, 10.0), 20.0));
    }
}
