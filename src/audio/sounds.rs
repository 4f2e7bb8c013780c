//! One-shot sound effects driven by board events.
//!
//! Sound handles live in the [`GameSounds`] resource and are handed to the
//! playback system as an ordinary system parameter.

use bevy::audio::Volume;
use bevy::prelude::*;

use crate::core::board::{BoardEvent, SoundCue};
use crate::core::config::GameConfig;
use crate::core::system::system_order::BoardEffectsSet;

#[derive(Resource, Debug, Clone)]
pub struct GameSounds {
    pub pop: Handle<AudioSource>,
}

impl GameSounds {
    pub fn handle(&self, cue: SoundCue) -> &Handle<AudioSource> {
        match cue {
            SoundCue::Pop => &self.pop,
        }
    }
}

pub struct SoundPlugin;

impl Plugin for SoundPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_sounds)
            .add_systems(Update, play_sounds.in_set(BoardEffectsSet));
    }
}

fn load_sounds(mut commands: Commands, asset_server: Res<AssetServer>, cfg: Res<GameConfig>) {
    if !cfg.audio.enabled {
        info!("Audio disabled in config; sound effects muted");
        return;
    }
    // A missing file only produces the asset server's own load error; playback stays silent.
    commands.insert_resource(GameSounds {
        pop: asset_server.load(cfg.audio.pop_sound.clone()),
    });
}

fn play_sounds(
    mut commands: Commands,
    mut events: EventReader<BoardEvent>,
    sounds: Option<Res<GameSounds>>,
    cfg: Res<GameConfig>,
) {
    let Some(sounds) = sounds.filter(|_| cfg.audio.enabled) else {
        events.clear();
        return;
    };
    let volume = cfg.audio.volume.max(0.0);
    for event in events.read() {
        let BoardEvent::Sound(cue) = event else {
            continue;
        };
        commands.spawn((
            AudioPlayer::new(sounds.handle(*cue).clone()),
            PlaybackSettings::DESPAWN.with_volume(Volume::Linear(volume)),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_with(cfg: GameConfig, sounds: bool) -> App {
        let mut app = App::new();
        app.insert_resource(cfg);
        app.add_event::<BoardEvent>();
        if sounds {
            app.insert_resource(GameSounds {
                pop: Handle::default(),
            });
        }
        app.add_systems(Update, play_sounds);
        app
    }

    fn players(app: &mut App) -> usize {
        app.world_mut()
            .query::<&AudioPlayer>()
            .iter(app.world())
            .count()
    }

    #[test]
    fn one_player_per_cue() {
        let mut app = app_with(GameConfig::default(), true);
        for _ in 0..3 {
            app.world_mut().send_event(BoardEvent::Sound(SoundCue::Pop));
        }
        app.world_mut().send_event(BoardEvent::ScoreChanged(8));
        app.update();
        assert_eq!(players(&mut app), 3);
    }

    #[test]
    fn silent_without_handles_or_when_disabled() {
        let mut app = app_with(GameConfig::default(), false);
        app.world_mut().send_event(BoardEvent::Sound(SoundCue::Pop));
        app.update();
        assert_eq!(players(&mut app), 0);

        let mut cfg = GameConfig::default();
        cfg.audio.enabled = false;
        let mut app = app_with(cfg, true);
        app.world_mut().send_event(BoardEvent::Sound(SoundCue::Pop));
        app.update();
        assert_eq!(players(&mut app), 0);
    }
}
