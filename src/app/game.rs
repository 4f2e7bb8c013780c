// This file is part of Marbles.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;

use crate::audio::sounds::SoundPlugin;
use crate::core::system::system_order::{BoardEffectsSet, BoardSyncSet, TapInputSet};
use crate::debug::DebugPlugin;
use crate::gameplay::board::board::BoardPlugin;
use crate::interaction::session::auto_close::AutoClosePlugin;
use crate::interaction::session::config_hot_reload::ConfigHotReloadPlugin;
use crate::interaction::tap::TapPlugin;
use crate::physics::rapier::rapier_physics::PhysicsSetupPlugin;
use crate::physics::sync::board_sync::BoardSyncPlugin;
use crate::rendering::camera::camera::CameraPlugin;
use crate::rendering::effects::celebration::CelebrationPlugin;
use crate::rendering::effects::particles::ParticlesPlugin;
use crate::rendering::hud::hud::HudPlugin;
use crate::rendering::materials::materials::MaterialsPlugin;

/// Everything the game needs on top of `DefaultPlugins`. Insert `GameConfig` first.
pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (
                BoardSyncSet,
                TapInputSet.after(BoardSyncSet),
                BoardEffectsSet.after(TapInputSet),
            ),
        )
        .add_plugins((
            CameraPlugin,
            MaterialsPlugin,
            BoardPlugin,
            PhysicsSetupPlugin,
            BoardSyncPlugin,
            TapPlugin,
            HudPlugin,
            ParticlesPlugin,
            CelebrationPlugin,
            SoundPlugin,
            DebugPlugin,
            ConfigHotReloadPlugin,
            AutoClosePlugin,
        ));
    }
}
