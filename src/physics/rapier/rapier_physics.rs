use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::core::board::{Board, PlayArea};
use crate::core::config::GameConfig;
use crate::core::system::system_order::BoardEffectsSet;

pub const WALL_THICKNESS: f32 = 20.0;

/// Static container around the play area.
#[derive(Component)]
pub struct BoundaryWall;

pub struct PhysicsSetupPlugin; // our wrapper to configure Rapier & the boundary

impl Plugin for PhysicsSetupPlugin {
    fn build(&self, app: &mut App) {
        let (ppm, debug_render) = app
            .world()
            .get_resource::<GameConfig>()
            .map(|c| (c.physics.pixels_per_meter, c.physics.debug_render))
            .unwrap_or((100.0, false));
        app.add_plugins(RapierPhysicsPlugin::<NoUserData>::pixels_per_meter(
            ppm.max(1.0),
        ))
        .add_systems(Update, (apply_gravity, sync_boundary.in_set(BoardEffectsSet)));
        if debug_render {
            app.add_plugins(RapierDebugRenderPlugin::default());
        }
    }
}

/// (center, half_extents) of the four walls hugging `area` from the outside.
pub fn wall_segments(area: &PlayArea, thickness: f32) -> [(Vec2, Vec2); 4] {
    let t = thickness.max(1.0);
    let half_t = t * 0.5;
    let size = area.size();
    let center = area.center();
    let horiz = Vec2::new(size.x * 0.5 + t, half_t);
    let vert = Vec2::new(half_t, size.y * 0.5 + t);
    [
        (Vec2::new(center.x, area.min.y - half_t), horiz), // floor
        (Vec2::new(center.x, area.max.y + half_t), horiz), // ceiling
        (Vec2::new(area.min.x - half_t, center.y), vert),  // left
        (Vec2::new(area.max.x + half_t, center.y), vert),  // right
    ]
}

/// Keeps the walls around the board's current play area. Layout only moves on repopulate.
pub fn sync_boundary(
    mut commands: Commands,
    board: Res<Board>,
    q_walls: Query<Entity, With<BoundaryWall>>,
    mut built_for: Local<Option<PlayArea>>,
) {
    let area = board.area();
    if *built_for == Some(area) {
        return;
    }
    for wall in q_walls.iter() {
        commands.entity(wall).despawn();
    }
    for (i, (center, half)) in wall_segments(&area, WALL_THICKNESS)
        .into_iter()
        .enumerate()
    {
        commands.spawn((
            Name::new(format!("BoundaryWall{i}")),
            BoundaryWall,
            RigidBody::Fixed,
            Collider::cuboid(half.x, half.y),
            Friction::coefficient(0.0),
            Restitution::coefficient(0.0),
            Transform::from_xyz(center.x, center.y, 0.0),
        ));
    }
    if built_for.is_some() {
        info!(min = ?area.min, max = ?area.max, "Boundary rebuilt for new play area");
    }
    *built_for = Some(area);
}

/// Rapier keeps its configuration on the context entity; mirror the config each frame (cheap, hot-reload friendly).
fn apply_gravity(mut q_cfg: Query<&mut RapierConfiguration>, cfg: Res<GameConfig>) {
    let gravity = Vec2::new(0.0, cfg.physics.gravity_y);
    for mut rapier_cfg in q_cfg.iter_mut() {
        if rapier_cfg.gravity != gravity {
            rapier_cfg.gravity = gravity;
        }
    }
}
