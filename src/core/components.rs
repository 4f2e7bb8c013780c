use bevy::prelude::*;

use crate::core::board::{BallColor, BallId};

/// Marker component identifying a ball entity parent (holds physics body & collider).
#[derive(Component)]
pub struct Ball;

/// Arena handle of the board ball this entity mirrors.
#[derive(Component, Debug, Deref, Copy, Clone, PartialEq, Eq)]
pub struct BoardBall(pub BallId);

/// Logical radius used both for the collider and rendering scale.
#[derive(Component, Debug, Deref, DerefMut, Copy, Clone)]
pub struct BallRadius(pub f32);

/// Palette entry the ball was generated with.
#[derive(Component, Debug, Deref, Copy, Clone, PartialEq, Eq)]
pub struct BallTint(pub BallColor);

/// Tag component for the circle mesh child.
#[derive(Component)]
pub struct BallCircleVisual;

/// Marker for the reset button sprite.
#[derive(Component)]
pub struct ResetButton;

/// Marker for the score label text.
#[derive(Component)]
pub struct ScoreLabel;
