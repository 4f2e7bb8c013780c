use bevy::prelude::*;

use crate::core::board::{hit_test, Board, BoardEvent, ResetControl, TapOutcome};
use crate::core::system::system_order::TapInputSet;
use crate::gameplay::board::board::BoardRng;

/// A completed press/release in world coordinates.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct TapEvent {
    pub world_pos: Vec2,
}

/// Emitted once per processed tap (stats, tests).
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct TapResolved {
    pub point: Vec2,
    pub outcome: TapOutcome,
}

pub struct TapPlugin;

impl Plugin for TapPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<TapEvent>()
            .add_event::<TapResolved>()
            .add_systems(
                Update,
                (emit_pointer_taps, handle_taps).chain().in_set(TapInputSet),
            );
    }
}

fn screen_to_world(camera_q: &Query<(&Camera, &GlobalTransform)>, screen_pos: Vec2) -> Option<Vec2> {
    let (camera, cam_tf) = camera_q.iter().next()?;
    camera.viewport_to_world_2d(cam_tf, screen_pos).ok()
}

/// Mouse release at the cursor, or each touch lifted this frame.
fn emit_pointer_taps(
    buttons: Option<Res<ButtonInput<MouseButton>>>,
    touches: Option<Res<Touches>>,
    windows_q: Query<&Window>,
    camera_q: Query<(&Camera, &GlobalTransform)>,
    mut taps: EventWriter<TapEvent>,
) {
    if let Some(touches) = touches.as_deref() {
        for touch in touches.iter_just_released() {
            if let Some(world_pos) = screen_to_world(&camera_q, touch.position()) {
                taps.write(TapEvent { world_pos });
            }
        }
    }
    let released = buttons
        .as_deref()
        .is_some_and(|b| b.just_released(MouseButton::Left));
    if !released {
        return;
    }
    let Ok(window) = windows_q.single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    if let Some(world_pos) = screen_to_world(&camera_q, cursor) {
        taps.write(TapEvent { world_pos });
    }
}

/// Resolves taps against the board; the only writer of board state during play.
pub fn handle_taps(
    mut taps: EventReader<TapEvent>,
    mut board: ResMut<Board>,
    reset: Option<Res<ResetControl>>,
    mut rng: ResMut<BoardRng>,
    mut board_events: EventWriter<BoardEvent>,
    mut resolved: EventWriter<TapResolved>,
) {
    for tap in taps.read() {
        let target = hit_test(tap.world_pos, reset.as_deref(), &board);
        let mut events = Vec::new();
        let outcome = board.tap(target, &mut rng.0, &mut events);
        match outcome {
            TapOutcome::Matched {
                size,
                points,
                celebrated,
            } => {
                if cfg!(feature = "debug") {
                    info!(
                        size,
                        points,
                        score = board.score(),
                        celebrated,
                        "Match cleared"
                    );
                }
            }
            TapOutcome::NoMatch { size } => debug!(size, "Tap on group below minimum"),
            TapOutcome::Reset => info!(balls = board.len(), "Board reset"),
            TapOutcome::Ignored => {}
        }
        board_events.write_batch(events);
        resolved.write(TapResolved {
            point: tap.world_pos,
            outcome,
        });
    }
}
