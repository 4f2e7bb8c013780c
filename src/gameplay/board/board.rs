use std::collections::HashMap;

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

use crate::core::board::{BallId, Board, BoardEvent, BoardSettings, ResetControl};
use crate::core::components::{Ball, BallCircleVisual, BallRadius, BallTint, BoardBall};
use crate::core::config::GameConfig;
use crate::core::system::system_order::BoardEffectsSet;
use crate::rendering::materials::materials::{BallDisplayMaterials, CircleMesh};

/// Randomness used for ball colors. Tests insert a seeded one before the plugin.
#[derive(Resource, Deref, DerefMut)]
pub struct BoardRng(pub StdRng);

impl Default for BoardRng {
    fn default() -> Self {
        Self(StdRng::from_entropy())
    }
}

/// Board id -> ECS entity carrying the physics body.
#[derive(Resource, Default, Debug)]
pub struct BallEntities(pub HashMap<BallId, Entity>);

impl BallEntities {
    pub fn get(&self, id: BallId) -> Option<Entity> {
        self.0.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

pub struct BoardPlugin;

impl Plugin for BoardPlugin {
    fn build(&self, app: &mut App) {
        let cfg = app
            .world()
            .get_resource::<GameConfig>()
            .cloned()
            .unwrap_or_default();
        let board = Board::new(BoardSettings::from_config(&cfg));
        let reset = ResetControl::top_left(&board.area(), cfg.board.reset_size);
        if !app.world().contains_resource::<BoardRng>() {
            app.insert_resource(BoardRng::default());
        }
        app.insert_resource(board)
            .insert_resource(reset)
            .init_resource::<BallEntities>()
            .add_event::<BoardEvent>()
            .add_systems(Startup, populate_board)
            .add_systems(
                Update,
                (mirror_board_entities, track_reset_control).in_set(BoardEffectsSet),
            );
    }
}

fn populate_board(
    mut board: ResMut<Board>,
    mut rng: ResMut<BoardRng>,
    mut writer: EventWriter<BoardEvent>,
) {
    let mut events = Vec::new();
    board.populate(&mut rng.0, &mut events);
    info!(
        balls = board.len(),
        radius = board.radius(),
        "Board populated"
    );
    writer.write_batch(events);
}

/// Re-anchors the reset control once a repopulate moved the play area.
pub fn track_reset_control(
    board: Res<Board>,
    cfg: Res<GameConfig>,
    mut reset: ResMut<ResetControl>,
) {
    reset.set_if_neq(ResetControl::top_left(&board.area(), cfg.board.reset_size));
}

/// Keeps one physics entity per live board ball.
pub fn mirror_board_entities(
    mut commands: Commands,
    mut events: EventReader<BoardEvent>,
    mut entities: ResMut<BallEntities>,
    board: Res<Board>,
    cfg: Res<GameConfig>,
    circle_mesh: Option<Res<CircleMesh>>,
    display: Option<Res<BallDisplayMaterials>>,
) {
    for event in events.read() {
        match event {
            BoardEvent::BallAdded { id, ball } => {
                let radius = board.radius();
                let mut ec = commands.spawn((
                    Name::new("Ball"),
                    Ball,
                    BoardBall(*id),
                    BallRadius(radius),
                    BallTint(ball.color),
                    Transform::from_translation(ball.position.extend(0.0)),
                    Visibility::default(),
                    RigidBody::Dynamic,
                    Collider::ball(radius),
                    LockedAxes::ROTATION_LOCKED,
                    Restitution::coefficient(cfg.physics.restitution),
                    Friction::coefficient(cfg.physics.friction),
                ));
                if let (Some(mesh), Some(mat)) = (
                    circle_mesh.as_ref(),
                    display.as_ref().and_then(|d| d.get(ball.color)),
                ) {
                    ec.with_children(|parent| {
                        parent.spawn((
                            BallCircleVisual,
                            Mesh2d(mesh.0.clone()),
                            MeshMaterial2d(mat.clone()),
                            Transform::from_scale(Vec3::splat(radius * 2.0)),
                        ));
                    });
                }
                let entity = ec.id();
                if let Some(old) = entities.0.insert(*id, entity) {
                    warn!(?id, "Ball id already mirrored; replacing entity");
                    commands.entity(old).despawn();
                }
            }
            BoardEvent::BallRemoved { id, .. } => {
                if let Some(entity) = entities.0.remove(id) {
                    if let Ok(mut ec) = commands.get_entity(entity) {
                        ec.try_despawn();
                    }
                }
            }
            BoardEvent::Cleared => {
                for (_, entity) in entities.0.drain() {
                    if let Ok(mut ec) = commands.get_entity(entity) {
                        ec.try_despawn();
                    }
                }
            }
            _ => {}
        }
    }
}
