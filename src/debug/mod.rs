//! Debug module: feature gated stats & periodic logging.
//! Built only when compiled with `--features debug`.

#[cfg(feature = "debug")]
mod logging;
#[cfg(feature = "debug")]
pub mod stats; // pub for testing

#[cfg(feature = "debug")]
use crate::core::system::system_order::BoardEffectsSet;
#[cfg(feature = "debug")]
use bevy::prelude::*;

#[cfg(feature = "debug")]
pub use stats::DebugStats;

#[cfg(feature = "debug")]
pub struct DebugPlugin;
#[cfg(feature = "debug")]
impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        use logging::{debug_logging_system, DebugLogState};
        use stats::debug_stats_collect_system;

        app.init_resource::<DebugStats>()
            .init_resource::<DebugLogState>()
            .add_systems(
                Update,
                (debug_stats_collect_system, debug_logging_system)
                    .chain()
                    .after(BoardEffectsSet),
            );
    }
}

#[cfg(not(feature = "debug"))]
pub struct DebugPlugin;
#[cfg(not(feature = "debug"))]
impl bevy::prelude::Plugin for DebugPlugin {
    fn build(&self, _app: &mut bevy::prelude::App) {}
}
