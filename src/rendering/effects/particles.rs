//! Explosion bursts for removed marbles. Purely cosmetic: nothing here reads or writes the board.

use bevy::prelude::*;
use rand::Rng;

use crate::core::board::{BoardEvent, ParticleEffect};
use crate::core::config::GameConfig;
use crate::core::system::system_order::BoardEffectsSet;
use crate::rendering::materials::materials::CircleMesh;
use crate::rendering::palette::palette::color_for;

const PARTICLE_Z: f32 = 50.0;
const SPARK_DIAMETER: f32 = 6.0;
/// Per-second velocity retention.
const SPARK_DRAG: f32 = 0.35;

/// Root of one burst; despawning it takes the sparks with it.
#[derive(Component, Debug)]
pub struct ExplosionBurst {
    pub elapsed: f32,
    pub lifetime: f32,
    pub material: Handle<ColorMaterial>,
}

impl ExplosionBurst {
    /// 1.0 when fresh, 0.0 at expiry.
    pub fn remaining_fraction(&self) -> f32 {
        if self.lifetime <= 0.0 {
            return 0.0;
        }
        (1.0 - self.elapsed / self.lifetime).clamp(0.0, 1.0)
    }

    pub fn expired(&self) -> bool {
        self.elapsed >= self.lifetime
    }
}

#[derive(Component, Debug)]
pub struct Spark {
    pub velocity: Vec2,
}

pub struct ParticlesPlugin;

impl Plugin for ParticlesPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (spawn_bursts, animate_bursts).chain().in_set(BoardEffectsSet),
        );
    }
}

fn spawn_bursts(
    mut commands: Commands,
    mut events: EventReader<BoardEvent>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    circle: Option<Res<CircleMesh>>,
    cfg: Res<GameConfig>,
) {
    let Some(circle) = circle else {
        events.clear();
        return;
    };
    let fx = &cfg.effects;
    let mut rng = rand::thread_rng();
    for event in events.read() {
        let BoardEvent::Particles {
            effect: ParticleEffect::Explosion,
            at,
            ball,
        } = event
        else {
            continue;
        };
        let material = materials.add(color_for(ball.color));
        commands
            .spawn((
                Name::new("ExplosionBurst"),
                ExplosionBurst {
                    elapsed: 0.0,
                    lifetime: fx.particle_lifetime.max(0.01),
                    material: material.clone(),
                },
                Transform::from_translation(at.extend(PARTICLE_Z)),
                Visibility::Visible,
            ))
            .with_children(|parent| {
                for _ in 0..fx.particle_count {
                    let angle = rng.gen_range(0.0..std::f32::consts::TAU);
                    let speed = fx.particle_speed * rng.gen_range(0.4..1.0);
                    parent.spawn((
                        Spark {
                            velocity: Vec2::from_angle(angle) * speed,
                        },
                        Mesh2d(circle.0.clone()),
                        MeshMaterial2d(material.clone()),
                        Transform::from_scale(Vec3::splat(SPARK_DIAMETER)),
                    ));
                }
            });
    }
}

fn animate_bursts(
    time: Res<Time>,
    mut commands: Commands,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut q_bursts: Query<(Entity, &mut ExplosionBurst, &Children)>,
    mut q_sparks: Query<(&mut Spark, &mut Transform)>,
) {
    let dt = time.delta_secs();
    let retain = SPARK_DRAG.powf(dt);
    for (entity, mut burst, children) in q_bursts.iter_mut() {
        burst.elapsed += dt;
        if burst.expired() {
            commands.entity(entity).despawn();
            continue;
        }
        for child in children.iter() {
            if let Ok((mut spark, mut tf)) = q_sparks.get_mut(child) {
                tf.translation += (spark.velocity * dt).extend(0.0);
                spark.velocity *= retain;
            }
        }
        if let Some(mat) = materials.get_mut(&burst.material) {
            mat.color = mat.color.with_alpha(burst.remaining_fraction());
        }
    }
}
