//! Simulation clock.
//!
//! Every time-derived computation in the game reads `GameClock` rather
//! than wall time, so tests can drive the clock directly and saves stay
//! coherent across sessions.

use bevy::prelude::*;

use crate::shared::*;

pub struct ClockPlugin;

impl Plugin for ClockPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, advance_clock);
    }
}

fn advance_clock(time: Res<Time>, mut clock: ResMut<GameClock>) {
    clock.seconds += time.delta_secs_f64();
}
