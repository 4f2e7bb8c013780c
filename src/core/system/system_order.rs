//! Central system ordering labels to make update sequence explicit.
//! Stages (high-level):
//! 1. BoardSync (physics-settled positions copied into the board)
//! 2. TapInput (hit-test + board mutation, emits BoardEvents)
//! 3. BoardEffects (entity mirror, audio, particles, HUD react to BoardEvents)
//! 4. Rapier + rendering (handled by plugins)
use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct BoardSyncSet; // board positions refreshed from transforms

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct TapInputSet; // the only place the board changes during play

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct BoardEffectsSet; // cosmetic + mirror systems, read-only on the board
