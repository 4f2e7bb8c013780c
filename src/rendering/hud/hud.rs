use bevy::prelude::*;

use crate::core::board::{BoardEvent, ResetControl};
use crate::core::components::{ResetButton, ScoreLabel};
use crate::core::system::system_order::BoardEffectsSet;
use crate::gameplay::board::board::track_reset_control;

const HUD_Z: f32 = 100.0;
const SCORE_FONT_SIZE: f32 = 42.0;

pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (spawn_score_label, spawn_reset_button))
            .add_systems(
                Update,
                (
                    update_score_label,
                    follow_reset_control.after(track_reset_control),
                )
                    .in_set(BoardEffectsSet),
            );
    }
}

pub fn score_text(score: u64) -> String {
    format!("Score: {score}")
}

fn spawn_score_label(mut commands: Commands) {
    commands.spawn((
        Text::new(score_text(0)),
        TextFont {
            font_size: SCORE_FONT_SIZE,
            ..default()
        },
        TextColor(Color::srgb(0.92, 0.92, 0.95)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(10.0),
            bottom: Val::Px(10.0),
            ..default()
        },
        ScoreLabel,
    ));
}

fn spawn_reset_button(mut commands: Commands, reset: Option<Res<ResetControl>>) {
    let Some(reset) = reset else {
        return;
    };
    let size = reset.half_extents * 2.0;
    commands
        .spawn((
            Name::new("ResetButton"),
            ResetButton,
            Sprite::from_color(Color::srgba(0.25, 0.28, 0.36, 0.9), size),
            Transform::from_translation(reset.center.extend(HUD_Z)),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text2d::new("Reset"),
                TextFont {
                    font_size: (size.y * 0.3).max(8.0),
                    ..default()
                },
                TextColor(Color::WHITE),
                Transform::from_xyz(0.0, 0.0, 1.0),
            ));
        });
}

fn follow_reset_control(
    reset: Option<Res<ResetControl>>,
    mut q_button: Query<(&mut Transform, &mut Sprite), With<ResetButton>>,
) {
    let Some(reset) = reset.filter(|r| r.is_changed()) else {
        return;
    };
    for (mut tf, mut sprite) in q_button.iter_mut() {
        tf.translation = reset.center.extend(HUD_Z);
        sprite.custom_size = Some(reset.half_extents * 2.0);
    }
}

fn update_score_label(
    mut events: EventReader<BoardEvent>,
    mut q_text: Query<&mut Text, With<ScoreLabel>>,
) {
    let latest = events
        .read()
        .filter_map(|e| match e {
            BoardEvent::ScoreChanged(s) => Some(*s),
            _ => None,
        })
        .last();
    let Some(score) = latest else {
        return;
    };
    for mut text in q_text.iter_mut() {
        text.0 = score_text(score);
    }
}
