use bevy::prelude::*;
use std::{collections::HashMap, path::PathBuf, time::SystemTime};

use crate::core::board::{Board, BoardSettings};
use crate::core::config::GameConfig;

#[derive(Resource, Debug, Clone)]
pub struct ConfigReloadSettings {
    pub paths: Vec<PathBuf>,
    pub interval_secs: f32,
}

impl Default for ConfigReloadSettings {
    fn default() -> Self {
        Self {
            paths: vec![
                PathBuf::from("assets/config/game.ron"),
                PathBuf::from("assets/config/game.local.ron"),
            ],
            interval_secs: 0.5,
        }
    }
}

#[derive(Resource, Debug)]
struct ConfigReloadState {
    last_mod: HashMap<PathBuf, SystemTime>,
    timer: Timer,
}

impl FromWorld for ConfigReloadState {
    fn from_world(_world: &mut World) -> Self {
        Self {
            last_mod: HashMap::new(),
            timer: Timer::from_seconds(0.5, TimerMode::Repeating),
        }
    }
}

/// Polls the config layers on disk and applies changes while running (desktop only).
pub struct ConfigHotReloadPlugin;

impl Plugin for ConfigHotReloadPlugin {
    fn build(&self, app: &mut App) {
        #[cfg(not(target_arch = "wasm32"))]
        {
            app.init_resource::<ConfigReloadSettings>()
                .init_resource::<ConfigReloadState>()
                .add_systems(Update, poll_and_reload_config);
        }
        #[cfg(target_arch = "wasm32")]
        let _ = app;
    }
}

fn poll_and_reload_config(
    time: Res<Time>,
    settings: Res<ConfigReloadSettings>,
    mut state: ResMut<ConfigReloadState>,
    mut cfg_res: ResMut<GameConfig>,
    mut windows: Query<&mut Window>,
    board: Option<ResMut<Board>>,
) {
    if (state.timer.duration().as_secs_f32() - settings.interval_secs).abs() > f32::EPSILON {
        state
            .timer
            .set_duration(std::time::Duration::from_secs_f32(settings.interval_secs.max(0.05)));
    }
    if !state.timer.tick(time.delta()).finished() {
        return;
    }
    use std::fs;
    use std::time::UNIX_EPOCH;
    let mut dirty = false;
    for path in &settings.paths {
        let Ok(mod_time) = fs::metadata(path).and_then(|m| m.modified()) else {
            continue;
        };
        let entry = state.last_mod.entry(path.clone()).or_insert(UNIX_EPOCH);
        if mod_time > *entry {
            *entry = mod_time;
            dirty = true;
        }
    }
    if !dirty {
        return;
    }
    let (new_cfg, _used, errors) = GameConfig::load_layered(settings.paths.iter());
    for e in errors {
        warn!("CONFIG HOT-RELOAD issue: {e}");
    }
    if *cfg_res == new_cfg {
        return;
    }
    for w in new_cfg.validate() {
        warn!("CONFIG WARNING: {w}");
    }
    info!("Config hot-reload applied");
    if let Ok(mut window) = windows.single_mut() {
        if window.width() != new_cfg.window.width || window.height() != new_cfg.window.height {
            window
                .resolution
                .set(new_cfg.window.width, new_cfg.window.height);
        }
        if window.title != new_cfg.window.title {
            window.title = new_cfg.window.title.clone();
        }
    }
    if let Some(mut board) = board {
        apply_to_board(&mut board, &new_cfg);
    }
    *cfg_res = new_cfg;
}

/// Scoring and match tuning apply now; layout changes land on the next reset.
pub fn apply_to_board(board: &mut Board, cfg: &GameConfig) {
    let settings = BoardSettings::from_config(cfg);
    if settings.area != board.area() || settings.ball_radius != board.radius() {
        info!("Layout change queued until the next reset");
    }
    board.set_settings(settings);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::board::{Ball, BallColor, BoardEvent, PlayArea, TapOutcome, TapTarget};
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn tuning_applies_now_and_layout_on_reset() {
        let cfg = GameConfig::default();
        let mut board = Board::new(BoardSettings::from_config(&cfg));
        let mut events: Vec<BoardEvent> = Vec::new();
        let ids: Vec<_> = (0..3)
            .map(|i| {
                board.insert_ball(
                    Ball::new(Vec2::new(-40.0 + 40.0 * i as f32, 0.0), BallColor::Red),
                    &mut events,
                )
            })
            .collect();
        let old_area = board.area();
        let old_radius = board.radius();

        let mut reloaded = cfg.clone();
        reloaded.scoring.min_match = 4;
        reloaded.board.link_slop = 1.5;
        reloaded.board.ball_radius = 16.0;
        reloaded.window.width = 300.0;
        reloaded.window.height = 500.0;
        apply_to_board(&mut board, &reloaded);

        events.clear();
        assert_eq!(board.tap_ball(ids[1], &mut events), TapOutcome::NoMatch { size: 3 });
        assert_eq!(board.len(), 3);
        assert_eq!(board.area(), old_area);
        assert_eq!(board.radius(), old_radius);
        assert_eq!(board.get(ids[0]).map(|b| b.position), Some(Vec2::new(-40.0, 0.0)));

        let mut rng = StdRng::seed_from_u64(2);
        assert_eq!(board.tap(Some(TapTarget::Reset), &mut rng, &mut events), TapOutcome::Reset);
        assert_eq!(board.area(), PlayArea::from_window(300.0, 500.0, reloaded.board.hud_band));
        assert_eq!(board.radius(), 16.0);
        assert_eq!(board.match_rule().link_distance_sq(), 32.0 * 32.0 * 1.5);
        assert_eq!(board.len(), board.grid_capacity());
    }
}
