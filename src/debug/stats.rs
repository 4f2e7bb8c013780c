#[cfg(feature = "debug")]
use bevy::prelude::*;

#[cfg(feature = "debug")]
use crate::core::board::TapOutcome;
#[cfg(feature = "debug")]
use crate::interaction::tap::TapResolved;

#[cfg(feature = "debug")]
#[derive(Resource, Default, Debug, Clone, PartialEq)]
pub struct DebugStats {
    pub fps: f32,
    pub frame_time_ms: f32,
    pub taps: u64,
    pub matches: u64,
    pub rejected: u64,
    pub resets: u64,
    pub largest_match: usize,
}

#[cfg(feature = "debug")]
impl DebugStats {
    pub fn record(&mut self, outcome: &TapOutcome) {
        self.taps += 1;
        match *outcome {
            TapOutcome::Matched { size, .. } => {
                self.matches += 1;
                self.largest_match = self.largest_match.max(size);
            }
            TapOutcome::NoMatch { .. } => self.rejected += 1,
            TapOutcome::Reset => self.resets += 1,
            TapOutcome::Ignored => {}
        }
    }
}

#[cfg(feature = "debug")]
pub fn debug_stats_collect_system(
    time: Res<Time>,
    mut stats: ResMut<DebugStats>,
    mut resolved: EventReader<TapResolved>,
) {
    let dt = time.delta_secs().max(1e-6);
    let inst_fps = 1.0 / dt;
    if stats.fps == 0.0 {
        stats.fps = inst_fps;
    } else {
        stats.fps = stats.fps * 0.9 + inst_fps * 0.1;
    }
    let inst_ms = dt * 1000.0;
    if stats.frame_time_ms == 0.0 {
        stats.frame_time_ms = inst_ms;
    } else {
        stats.frame_time_ms = stats.frame_time_ms * 0.9 + inst_ms * 0.1;
    }
    for r in resolved.read() {
        stats.record(&r.outcome);
    }
}
