use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core::board::DEFAULT_LINK_SLOP;
use std::{fs, path::Path};

#[derive(Debug, Deserialize, Serialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
    /// Automatically close the app after this many seconds. 0.0 (or omitted) = run indefinitely.
    #[serde(rename = "autoClose")]
    pub auto_close: f32,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 480.0,
            height: 800.0,
            title: "Marbles".into(),
            auto_close: 0.0,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct BoardConfig {
    pub ball_radius: f32,
    /// Strip along the bottom of the window kept free of balls (score label lives there).
    pub hud_band: f32,
    /// Squared link threshold = diameter² * link_slop.
    pub link_slop: f32,
    /// Edge length of the square reset button in the top-left corner.
    pub reset_size: f32,
}
impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            ball_radius: 20.0,
            hud_band: 100.0,
            link_slop: DEFAULT_LINK_SLOP,
            reset_size: 40.0,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct ScoringConfig {
    pub min_match: usize,
    pub exponent_cap: u32,
    pub celebrate_above: usize,
}
impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            min_match: 3,
            exponent_cap: 16,
            celebrate_above: 5,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct PhysicsConfig {
    pub gravity_y: f32,
    pub restitution: f32,
    pub friction: f32,
    pub pixels_per_meter: f32,
    /// Draw Rapier collider outlines.
    pub debug_render: bool,
}
impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity_y: -980.0,
            restitution: 0.0,
            friction: 0.0,
            pixels_per_meter: 100.0,
            debug_render: false,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct EffectsConfig {
    pub particle_count: usize,
    /// Seconds before an explosion burst is despawned.
    pub particle_lifetime: f32,
    pub particle_speed: f32,
    /// Length of each celebration phase (appear, hold, disappear).
    pub celebration_phase: f32,
}
impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            particle_count: 12,
            particle_lifetime: 3.0,
            particle_speed: 140.0,
            celebration_phase: 0.25,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct AudioConfig {
    pub enabled: bool,
    /// Asset path relative to `assets/`.
    pub pop_sound: String,
    pub volume: f32,
}
impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            pop_sound: "sounds/blop.ogg".into(),
            volume: 1.0,
        }
    }
}

/// Messages gathered while loading, replayed once logging is up (`info!` / `warn!`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigReport {
    pub notes: Vec<String>,
    pub warnings: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Resource, Clone, PartialEq, Default)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub board: BoardConfig,
    pub scoring: ScoringConfig,
    pub physics: PhysicsConfig,
    pub effects: EffectsConfig,
    pub audio: AudioConfig,
}

impl GameConfig {
    /// Load from a single RON file (errors contain human-readable context).
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read config: {e}"))?;
        Self::from_ron_str(&data)
    }

    pub fn from_ron_str(data: &str) -> Result<Self, String> {
        ron::from_str(data).map_err(|e| format!("parse RON: {e}"))
    }

    /// Load file; on failure returns default config plus error string.
    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<String>) {
        match Self::load_from_file(&path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Load multiple config layers, later files overriding earlier ones (deep merge).
    /// Missing files are skipped; returns (config, list_of_layer_paths_used, list_of_errors).
    pub fn load_layered<P, I>(paths: I) -> (Self, Vec<String>, Vec<String>)
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = P>,
    {
        use ron::value::Value;
        let mut merged: Option<Value> = None;
        let mut used = Vec::new();
        let mut errors = Vec::new();

        fn merge_value(base: &mut ron::value::Value, overlay: ron::value::Value) {
            use ron::value::Value;
            match (base, overlay) {
                (Value::Map(bm), Value::Map(om)) => {
                    for (k, v) in om.into_iter() {
                        let mut incoming = Some(v);
                        for (ek, ev) in bm.iter_mut() {
                            if *ek == k {
                                if let Some(val) = incoming.take() {
                                    merge_value(ev, val);
                                }
                                break;
                            }
                        }
                        if let Some(val) = incoming {
                            bm.insert(k, val);
                        }
                    }
                }
                (b, o) => *b = o,
            }
        }

        for p in paths {
            let path_ref = p.as_ref();
            match fs::read_to_string(path_ref) {
                Ok(txt) => match ron::from_str::<Value>(&txt) {
                    Ok(val) => {
                        if let Some(cur) = &mut merged {
                            merge_value(cur, val);
                        } else {
                            merged = Some(val);
                        }
                        used.push(path_ref.as_os_str().to_string_lossy().to_string());
                    }
                    Err(e) => errors.push(format!("{}: parse error: {e}", path_ref.display())),
                },
                Err(e) => errors.push(format!("{}: read error: {e}", path_ref.display())),
            }
        }

        if let Some(val) = merged {
            match val.into_rust::<GameConfig>() {
                Ok(cfg) => (cfg, used, errors),
                Err(e) => {
                    let mut evec = errors;
                    evec.push(format!(
                        "failed to deserialize merged config; using defaults: {e}"
                    ));
                    (GameConfig::default(), used, evec)
                }
            }
        } else {
            (GameConfig::default(), used, errors)
        }
    }

    /// Startup load: `base` then an optional `local` override layer. A missing local
    /// layer is not worth reporting; everything else ends up in the report.
    pub fn load_startup(base: impl AsRef<Path>, local: impl AsRef<Path>) -> (Self, ConfigReport) {
        let local_name = local.as_ref().display().to_string();
        let (cfg, used, errors) = Self::load_layered([base.as_ref(), local.as_ref()]);
        let mut report = ConfigReport::default();
        if used.is_empty() {
            report.notes.push("No config layers found; using defaults".into());
        } else {
            report.notes.push(format!("Config layers loaded: {}", used.join(", ")));
        }
        report.warnings.extend(
            errors
                .into_iter()
                .filter(|e| !(e.starts_with(&local_name) && e.contains("read error")))
                .map(|e| format!("CONFIG LOAD ISSUE: {e}")),
        );
        report
            .warnings
            .extend(cfg.validate().into_iter().map(|w| format!("CONFIG WARNING: {w}")));
        (cfg, report)
    }

    /// Validate the configuration returning a list of human‑readable warning strings.
    /// These represent suspicious / potentially unintended values but are not hard errors.
    /// Call at startup and log each warning with `warn!`.
    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            w.push("window dimensions must be > 0".into());
        }
        if self.window.width * self.window.height > 10_000_000.0 {
            w.push(format!(
                "very large window area: {}x{}",
                self.window.width, self.window.height
            ));
        }
        if self.window.auto_close < 0.0 {
            w.push(format!(
                "window.autoClose {} negative -> treated as disabled (should be >= 0)",
                self.window.auto_close
            ));
        } else if self.window.auto_close > 0.0 && self.window.auto_close < 0.01 {
            w.push(format!(
                "window.autoClose {} very small; closes almost immediately",
                self.window.auto_close
            ));
        }

        let b = &self.board;
        if b.ball_radius <= 0.0 {
            w.push("board.ball_radius must be > 0; board will be empty".into());
        } else if b.ball_radius * 2.0 > self.window.width.min(self.window.height - b.hud_band) {
            w.push(format!(
                "board.ball_radius {} too large for the play area; no ball fits",
                b.ball_radius
            ));
        }
        if b.hud_band < 0.0 {
            w.push("board.hud_band negative -> treated as 0".into());
        } else if b.hud_band >= self.window.height {
            w.push(format!(
                "board.hud_band {} covers the whole window height {}",
                b.hud_band, self.window.height
            ));
        }
        if b.link_slop < 1.0 {
            w.push(format!(
                "board.link_slop {} < 1.0; grid neighbors will not link",
                b.link_slop
            ));
        } else if b.link_slop >= 2.0 {
            w.push(format!(
                "board.link_slop {} >= 2.0; diagonal neighbors will link",
                b.link_slop
            ));
        }
        if b.reset_size <= 0.0 {
            w.push("board.reset_size must be > 0; reset button cannot be tapped".into());
        }

        let s = &self.scoring;
        if s.min_match == 0 {
            w.push("scoring.min_match 0 -> treated as 1".into());
        }
        if s.exponent_cap > 63 {
            w.push(format!(
                "scoring.exponent_cap {} exceeds 63 -> clamped to avoid overflow",
                s.exponent_cap
            ));
        }
        if s.celebrate_above < s.min_match {
            w.push(format!(
                "scoring.celebrate_above {} below min_match {}; every match celebrates",
                s.celebrate_above, s.min_match
            ));
        }

        let p = &self.physics;
        if p.gravity_y > 0.0 {
            w.push(format!(
                "physics.gravity_y is positive ({}); balls will pile against the top edge",
                p.gravity_y
            ));
        }
        if p.gravity_y < -5000.0 {
            w.push(format!(
                "physics.gravity_y very large magnitude ({}); integration instability possible",
                p.gravity_y
            ));
        }
        if !(0.0..=1.0).contains(&p.restitution) {
            w.push(format!(
                "physics.restitution {} outside 0..1",
                p.restitution
            ));
        }
        if p.friction < 0.0 {
            w.push("physics.friction negative".into());
        }
        if p.pixels_per_meter <= 0.0 {
            w.push("physics.pixels_per_meter must be > 0".into());
        }

        let e = &self.effects;
        if e.particle_lifetime <= 0.0 {
            w.push("effects.particle_lifetime must be > 0".into());
        }
        if e.particle_count > 500 {
            w.push(format!(
                "effects.particle_count {} very high; large matches may stutter",
                e.particle_count
            ));
        }
        if e.celebration_phase <= 0.0 {
            w.push("effects.celebration_phase must be > 0".into());
        }

        if self.audio.enabled && self.audio.pop_sound.trim().is_empty() {
            w.push("audio.pop_sound empty while audio enabled".into());
        }
        if !(0.0..=2.0).contains(&self.audio.volume) {
            w.push(format!("audio.volume {} outside 0..2", self.audio.volume));
        }
        w
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_validate_cleanly() {
        let warnings = GameConfig::default().validate();
        assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
    }

    #[test]
    fn parse_sample_config() {
        let sample = r#"(
            window: (width: 400.0, height: 700.0, title: "Test"),
            board: (ball_radius: 16.0, hud_band: 80.0, link_slop: 1.2, reset_size: 32.0),
            scoring: (min_match: 4, exponent_cap: 12, celebrate_above: 6),
            physics: (gravity_y: -500.0, restitution: 0.1, friction: 0.0, pixels_per_meter: 50.0),
            effects: (particle_count: 8, particle_lifetime: 2.0, particle_speed: 90.0, celebration_phase: 0.2),
            audio: (enabled: false, pop_sound: "sounds/pop.ogg", volume: 0.5),
        )"#;
        let cfg = GameConfig::load_from_file(write_temp(sample).path()).expect("parse config");
        assert_eq!(cfg.window.width, 400.0);
        assert_eq!(cfg.board.ball_radius, 16.0);
        assert_eq!(cfg.scoring.min_match, 4);
        assert_eq!(cfg.physics.pixels_per_meter, 50.0);
        assert_eq!(cfg.effects.particle_count, 8);
        assert!(!cfg.audio.enabled);
        assert!(cfg.validate().is_empty(), "expected no warnings");
    }

    #[test]
    fn validate_detects_warnings() {
        let mut bad = GameConfig::default();
        bad.window.width = -100.0;
        bad.window.auto_close = -1.0;
        bad.board.ball_radius = 0.0;
        bad.board.link_slop = 0.5;
        bad.scoring.exponent_cap = 80;
        bad.physics.restitution = 1.5;
        bad.effects.particle_lifetime = 0.0;
        bad.audio.pop_sound = " ".into();
        let warnings = bad.validate();
        let joined = warnings.join(" | ");
        assert!(joined.contains("window dimensions must be > 0"));
        assert!(joined.contains("window.autoClose"));
        assert!(joined.contains("board.ball_radius must be > 0"));
        assert!(joined.contains("board.link_slop"));
        assert!(joined.contains("scoring.exponent_cap"));
        assert!(joined.contains("physics.restitution"));
        assert!(joined.contains("effects.particle_lifetime"));
        assert!(joined.contains("audio.pop_sound"));
    }

    #[test]
    fn load_or_default_missing_file() {
        let (cfg, err) = GameConfig::load_or_default("this/file/does/not/exist.ron");
        assert!(err.is_some());
        assert_eq!(cfg, GameConfig::default());
    }

    #[test]
    fn layered_merge_overrides() {
        let base = r"(
            window: (width: 500.0),
            board: (ball_radius: 18.0, hud_band: 90.0),
        )";
        let override_one = r#"(
            window: (title: "Local"),
            board: (ball_radius: 24.0),
        )"#;
        let (cfg, used, errors) = GameConfig::load_layered([
            write_temp(base).path().to_path_buf(),
            write_temp(override_one).path().to_path_buf(),
        ]);
        assert!(errors.is_empty(), "unexpected errors: {errors:?}");
        assert_eq!(used.len(), 2);
        assert_eq!(cfg.window.width, 500.0);
        assert_eq!(cfg.window.title, "Local");
        assert_eq!(cfg.board.ball_radius, 24.0);
        assert_eq!(cfg.board.hud_band, 90.0, "untouched nested field survives the overlay");
        assert_eq!(cfg.window.height, WindowConfig::default().height);
    }

    #[test]
    fn layered_skips_missing_layer_with_error() {
        let base = r"(scoring: (min_match: 4))";
        let (cfg, used, errors) = GameConfig::load_layered([
            write_temp(base).path().to_path_buf(),
            std::path::PathBuf::from("missing/game.local.ron"),
        ]);
        assert_eq!(used.len(), 1);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("read error"));
        assert_eq!(cfg.scoring.min_match, 4);
    }

    #[test]
    fn startup_report_lists_layers_and_skips_missing_local() {
        let base = write_temp("(scoring: (exponent_cap: 80))");
        let (cfg, report) = GameConfig::load_startup(base.path(), "missing/game.local.ron");
        assert_eq!(cfg.scoring.exponent_cap, 80);
        assert_eq!(report.notes.len(), 1);
        assert!(report.notes[0].starts_with("Config layers loaded"));
        assert!(report.notes[0].contains(&base.path().display().to_string()));
        assert_eq!(report.warnings.len(), 1, "only the validation warning: {:?}", report.warnings);
        assert!(report.warnings[0].contains("scoring.exponent_cap"));
    }

    #[test]
    fn startup_report_flags_missing_base() {
        let (cfg, report) =
            GameConfig::load_startup("missing/game.ron", "missing/game.local.ron");
        assert_eq!(cfg, GameConfig::default());
        assert_eq!(report.notes, vec!["No config layers found; using defaults".to_string()]);
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("missing/game.ron"));
    }

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().expect("tmp");
        f.write_all(contents.as_bytes()).unwrap();
        f
    }
}
