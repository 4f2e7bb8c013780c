use bevy::prelude::*;

use crate::core::board::Board;
use crate::core::components::BoardBall;
use crate::core::system::system_order::BoardSyncSet;

/// Copies physics-settled ball positions back into the board so matching sees live positions.
pub struct BoardSyncPlugin;

impl Plugin for BoardSyncPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, sync_board_positions.in_set(BoardSyncSet));
    }
}

pub fn sync_board_positions(
    mut board: ResMut<Board>,
    q: Query<(&BoardBall, &Transform), Changed<Transform>>,
) {
    if q.is_empty() {
        return;
    }
    for (ball, tf) in q.iter() {
        board.set_position(ball.0, tf.translation.truncate());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::board::{Ball, BallColor, BoardEvent, BoardSettings};

    #[test]
    fn moved_entities_update_board() {
        let mut app = App::new();
        let mut board = Board::new(BoardSettings::default());
        let mut events: Vec<BoardEvent> = Vec::new();
        let id = board.insert_ball(Ball::new(Vec2::ZERO, BallColor::Red), &mut events);
        app.insert_resource(board);
        app.add_systems(Update, sync_board_positions);
        let e = app
            .world_mut()
            .spawn((BoardBall(id), Transform::from_xyz(0.0, 0.0, 0.0)))
            .id();
        app.update();

        app.world_mut()
            .get_mut::<Transform>(e)
            .expect("transform")
            .translation = Vec3::new(12.0, -30.0, 0.0);
        app.update();

        let board = app.world().resource::<Board>();
        assert_eq!(board.get(id).map(|b| b.position), Some(Vec2::new(12.0, -30.0)));
    }
}
