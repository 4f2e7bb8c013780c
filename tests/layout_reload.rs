//! Reloaded layout (window size, HUD band) lands on the next reset, scene furniture included.

use bevy::prelude::*;
use marbles::core::board::{Board, BoardSettings, PlayArea, ResetControl, TapTarget};
use marbles::core::config::GameConfig;
use marbles::gameplay::board::board::{BoardPlugin, BoardRng};
use marbles::physics::rapier::rapier_physics::{
    sync_boundary, wall_segments, BoundaryWall, WALL_THICKNESS,
};
use rand::{rngs::StdRng, SeedableRng};

fn test_app(cfg: GameConfig) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.insert_resource(cfg);
    app.insert_resource(BoardRng(StdRng::seed_from_u64(21)));
    app.add_plugins(BoardPlugin);
    app.add_systems(Update, sync_boundary);
    app.update();
    app
}

fn wall_centers(app: &mut App) -> Vec<Vec2> {
    let mut centers: Vec<Vec2> = app
        .world_mut()
        .query_filtered::<&Transform, With<BoundaryWall>>()
        .iter(app.world())
        .map(|tf| tf.translation.truncate())
        .collect();
    centers.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    centers
}

fn expected_centers(area: &PlayArea) -> Vec<Vec2> {
    let mut centers: Vec<Vec2> = wall_segments(area, WALL_THICKNESS)
        .iter()
        .map(|(c, _)| *c)
        .collect();
    centers.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    centers
}

/// What the hot-reload path does: new config resource plus new board settings.
fn reload(app: &mut App, cfg: GameConfig) {
    let settings = BoardSettings::from_config(&cfg);
    app.world_mut().resource_mut::<Board>().set_settings(settings);
    app.insert_resource(cfg);
}

fn tap_reset(app: &mut App) {
    app.world_mut()
        .resource_scope(|world, mut board: Mut<Board>| {
            let mut events = Vec::new();
            let mut rng = StdRng::seed_from_u64(4);
            board.tap(Some(TapTarget::Reset), &mut rng, &mut events);
            world.send_event_batch(events);
        });
    app.update();
}

#[test]
fn layout_waits_for_reset_then_moves_reset_control_and_walls() {
    let cfg = GameConfig::default();
    let mut app = test_app(cfg.clone());
    let old_area = app.world().resource::<Board>().area();
    assert_eq!(wall_centers(&mut app), expected_centers(&old_area));
    let old_reset = *app.world().resource::<ResetControl>();

    let mut smaller = cfg.clone();
    smaller.window.width = 300.0;
    smaller.window.height = 500.0;
    reload(&mut app, smaller.clone());
    app.update();

    // Nothing moves until the board repopulates.
    assert_eq!(app.world().resource::<Board>().area(), old_area);
    assert_eq!(*app.world().resource::<ResetControl>(), old_reset);
    assert_eq!(wall_centers(&mut app), expected_centers(&old_area));

    tap_reset(&mut app);

    let new_area = PlayArea::from_window(300.0, 500.0, smaller.board.hud_band);
    assert_eq!(app.world().resource::<Board>().area(), new_area);
    let reset = *app.world().resource::<ResetControl>();
    assert_eq!(reset, ResetControl::top_left(&new_area, smaller.board.reset_size));
    assert!(new_area.contains(reset.center), "reset stays tappable");
    assert_eq!(wall_centers(&mut app), expected_centers(&new_area));
    assert_eq!(wall_centers(&mut app).len(), 4, "old walls are gone");
}

#[test]
fn balls_after_reset_fit_the_new_area() {
    let cfg = GameConfig::default();
    let mut app = test_app(cfg.clone());
    let mut larger = cfg.clone();
    larger.window.width = 640.0;
    larger.window.height = 960.0;
    reload(&mut app, larger.clone());
    tap_reset(&mut app);

    let board = app.world().resource::<Board>();
    let area = board.area();
    let r = board.radius();
    assert_eq!(area, PlayArea::from_window(640.0, 960.0, larger.board.hud_band));
    for (_, ball) in board.balls() {
        assert!(ball.position.x - r >= area.min.x && ball.position.x + r <= area.max.x);
        assert!(ball.position.y - r >= area.min.y && ball.position.y + r <= area.max.y);
    }
}
