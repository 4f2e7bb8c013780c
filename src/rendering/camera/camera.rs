use bevy::prelude::*;

use crate::rendering::palette::palette::BACKGROUND;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(BACKGROUND))
            .add_systems(Startup, setup_camera);
    }
}

fn setup_camera(mut commands: Commands) {
    // Bevy 0.16+: spawn Camera2d component directly; Required Components supply defaults.
    // World origin sits at the window center, y up.
    commands.spawn(Camera2d);
}
