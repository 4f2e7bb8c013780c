use crate::core::board::Board;
use crate::core::config::GameConfig;
use bevy::prelude::*;

#[derive(Resource, Deref, DerefMut)]
struct AutoCloseTimer(Timer);

/// Exits after `window.autoClose` seconds; used by smoke runs and CI.
pub struct AutoClosePlugin;

impl Plugin for AutoClosePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_autoclose)
            .add_systems(Update, check_autoclose);
    }
}

fn setup_autoclose(mut commands: Commands, cfg: Res<GameConfig>) {
    let secs = cfg.window.auto_close;
    if secs > 0.0 {
        info!(seconds = secs, "AutoClose: will exit after {secs} seconds");
        commands.insert_resource(AutoCloseTimer(Timer::from_seconds(secs, TimerMode::Once)));
    }
}

fn check_autoclose(
    time: Res<Time>,
    timer: Option<ResMut<AutoCloseTimer>>,
    board: Option<Res<Board>>,
    mut ev_exit: EventWriter<AppExit>,
) {
    let Some(mut t) = timer else {
        return;
    };
    t.tick(time.delta());
    if t.finished() {
        let score = board.as_deref().map(Board::score).unwrap_or(0);
        info!(score, "AutoClose: timer finished, requesting app exit");
        ev_exit.write(AppExit::Success);
    }
}
