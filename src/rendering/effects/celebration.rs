//! "Wow!" overlay shown for large matches: appear, hold, disappear, despawn.

use bevy::prelude::*;

use crate::core::board::{Board, BoardEvent};
use crate::core::config::GameConfig;
use crate::core::system::system_order::BoardEffectsSet;

const OVERLAY_Z: f32 = 100.0;
const START_SCALE: f32 = 0.001;
const END_SCALE: f32 = 2.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CelebrationPhase {
    Appear,
    Hold,
    Disappear,
}

#[derive(Component, Debug, Clone, Copy)]
pub struct CelebrationTimeline {
    pub elapsed: f32,
    /// Length of each of the three phases.
    pub phase: f32,
}

impl CelebrationTimeline {
    pub fn new(phase: f32) -> Self {
        Self {
            elapsed: 0.0,
            phase: phase.max(0.01),
        }
    }

    #[inline]
    pub fn total(&self) -> f32 {
        self.phase * 3.0
    }

    pub fn finished(&self) -> bool {
        self.elapsed >= self.total()
    }

    /// (phase, scale, alpha) at the current elapsed time.
    pub fn sample(&self) -> (CelebrationPhase, f32, f32) {
        let t = self.elapsed.max(0.0);
        if t < self.phase {
            let k = t / self.phase;
            (
                CelebrationPhase::Appear,
                START_SCALE + (1.0 - START_SCALE) * k,
                k,
            )
        } else if t < self.phase * 2.0 {
            (CelebrationPhase::Hold, 1.0, 1.0)
        } else {
            let k = ((t - self.phase * 2.0) / self.phase).clamp(0.0, 1.0);
            (
                CelebrationPhase::Disappear,
                1.0 + (END_SCALE - 1.0) * k,
                1.0 - k,
            )
        }
    }
}

pub struct CelebrationPlugin;

impl Plugin for CelebrationPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (spawn_celebration, animate_celebration)
                .chain()
                .in_set(BoardEffectsSet),
        );
    }
}

fn spawn_celebration(
    mut commands: Commands,
    mut events: EventReader<BoardEvent>,
    cfg: Res<GameConfig>,
    board: Option<Res<Board>>,
) {
    let at = board.map(|b| b.area().center()).unwrap_or(Vec2::ZERO);
    for event in events.read() {
        let BoardEvent::Celebrate { match_size } = event else {
            continue;
        };
        debug!(match_size = *match_size, "celebration overlay");
        commands.spawn((
            Name::new("Celebration"),
            Text2d::new("Wow!"),
            TextFont {
                font_size: 96.0,
                ..default()
            },
            TextColor(Color::srgba(1.0, 0.85, 0.25, 0.0)),
            Transform::from_translation(at.extend(OVERLAY_Z)).with_scale(Vec3::splat(START_SCALE)),
            CelebrationTimeline::new(cfg.effects.celebration_phase),
        ));
    }
}

fn animate_celebration(
    time: Res<Time>,
    mut commands: Commands,
    mut q: Query<(Entity, &mut CelebrationTimeline, &mut Transform, &mut TextColor)>,
) {
    let dt = time.delta_secs();
    for (entity, mut timeline, mut tf, mut color) in q.iter_mut() {
        timeline.elapsed += dt;
        if timeline.finished() {
            commands.entity(entity).despawn();
            continue;
        }
        let (_, scale, alpha) = timeline.sample();
        tf.scale = Vec3::splat(scale);
        color.0 = color.0.with_alpha(alpha);
    }
}
