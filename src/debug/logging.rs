#[cfg(feature = "debug")]
use bevy::prelude::*;

#[cfg(feature = "debug")]
use super::stats::DebugStats;
#[cfg(feature = "debug")]
use crate::core::board::Board;

#[cfg(feature = "debug")]
#[derive(Resource)]
pub struct DebugLogState {
    pub log_interval: f32,
    pub time_accum: f32,
    pub frame_counter: u64,
}

#[cfg(feature = "debug")]
impl Default for DebugLogState {
    fn default() -> Self {
        Self {
            log_interval: 5.0,
            time_accum: 0.0,
            frame_counter: 0,
        }
    }
}

#[cfg(feature = "debug")]
pub fn debug_logging_system(
    time: Res<Time>,
    mut state: ResMut<DebugLogState>,
    stats: Res<DebugStats>,
    board: Res<Board>,
) {
    state.frame_counter += 1;
    state.time_accum += time.delta_secs();
    if state.time_accum >= state.log_interval {
        state.time_accum = 0.0;
        info!("SIM frame={} t={:.3}s fps={:.1} ft_ms={:.1} balls={} score={} taps={} matches={} largest={} resets={}",
            state.frame_counter,
            time.elapsed_secs(),
            stats.fps,
            stats.frame_time_ms,
            board.len(),
            board.score(),
            stats.taps,
            stats.matches,
            stats.largest_match,
            stats.resets);
    }
}
