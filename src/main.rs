use bevy::prelude::*;
use marbles::core::config::ConfigReport;
use marbles::{GameConfig, GamePlugin};

#[cfg(target_arch = "wasm32")]
fn load_config() -> (GameConfig, ConfigReport) {
    // No local override layer on wasm; the base config is embedded.
    const RAW: &str = include_str!("../assets/config/game.ron");
    let mut report = ConfigReport::default();
    let cfg = match GameConfig::from_ron_str(RAW) {
        Ok(cfg) => {
            report.notes.push("Embedded config loaded".into());
            cfg
        }
        Err(e) => {
            report
                .warnings
                .push(format!("CONFIG (wasm) parse failure: {e}; using defaults"));
            GameConfig::default()
        }
    };
    report
        .warnings
        .extend(cfg.validate().into_iter().map(|w| format!("CONFIG WARNING: {w}")));
    (cfg, report)
}

#[cfg(not(target_arch = "wasm32"))]
fn load_config() -> (GameConfig, ConfigReport) {
    GameConfig::load_startup("assets/config/game.ron", "assets/config/game.local.ron")
}

fn main() {
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
    }

    let (cfg, report) = load_config();

    let window = Window {
        title: cfg.window.title.clone(),
        resolution: (cfg.window.width, cfg.window.height).into(),
        resizable: false,
        ..default()
    };

    App::new()
        .insert_resource(cfg)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(window),
            ..default()
        }))
        // Loading happens before the log subscriber exists; replay the report once it does.
        .add_systems(Startup, move || {
            for note in &report.notes {
                info!("{note}");
            }
            for warning in &report.warnings {
                warn!("{warning}");
            }
        })
        .add_plugins(GamePlugin)
        .run();
}
