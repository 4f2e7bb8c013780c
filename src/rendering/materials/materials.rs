use bevy::prelude::*;

use crate::core::board::BallColor;
use crate::rendering::palette::palette::BASE_COLORS;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct BallMaterialsInitSet;

/// One shared material per palette entry, indexed by `BallColor::index()`.
#[derive(Resource)]
pub struct BallDisplayMaterials(pub Vec<Handle<ColorMaterial>>);

impl BallDisplayMaterials {
    pub fn get(&self, color: BallColor) -> Option<&Handle<ColorMaterial>> {
        self.0.get(color.index())
    }
}

/// Unit-diameter circle mesh; entities scale it to their radius.
#[derive(Resource, Clone)]
pub struct CircleMesh(pub Handle<Mesh>);

pub struct MaterialsPlugin;

impl Plugin for MaterialsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_ball_materials.in_set(BallMaterialsInitSet));
    }
}

fn setup_ball_materials(
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut commands: Commands,
) {
    let mut display_handles = Vec::with_capacity(BASE_COLORS.len());
    for c in BASE_COLORS.iter().copied() {
        display_handles.push(materials.add(c));
    }
    commands.insert_resource(BallDisplayMaterials(display_handles));
    commands.insert_resource(CircleMesh(meshes.add(Mesh::from(Circle { radius: 0.5 }))));
}
