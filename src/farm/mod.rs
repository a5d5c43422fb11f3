//! Farm domain — the per-plot growth state machine.
//!
//! Plots move through plant → water/illuminate → grow → prune → harvest.
//! Growth is a pure function of the absolute clock (see `growth.rs`), so
//! the per-frame fold below never double-counts time.

mod actions;
mod growth;

pub use growth::{effective_duration, growing_conditions_met, growth_at, is_ready, sync_growth};

use bevy::prelude::*;

use crate::shared::*;

pub struct FarmPlugin;

impl Plugin for FarmPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                actions::handle_plant,
                actions::handle_water,
                actions::handle_illuminate,
                actions::handle_fertilize,
                actions::handle_prune,
                actions::handle_harvest,
                fold_growth,
                auto_prune,
            )
                .run_if(in_state(GameState::Playing)),
        );
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Per-frame maintenance
// ─────────────────────────────────────────────────────────────────────────────

/// Folds accrued progress into every occupied plot so snapshot readers see
/// a current `accumulated_growth` without calling into the growth math.
/// Re-running with an unchanged clock is a no-op.
fn fold_growth(
    mut farm: ResMut<FarmState>,
    player: Res<PlayerState>,
    registry: Res<CultivarRegistry>,
    clock: Res<GameClock>,
) {
    let now = clock.seconds;
    for plot in farm.plots.iter_mut() {
        let Some(cultivar_id) = plot.cultivar_id.clone() else {
            continue;
        };
        let Some(def) = registry.get(&cultivar_id) else {
            continue;
        };
        sync_growth(plot, now, effective_duration(def, &player));
    }
}

/// With the golden shears upgrade, fully grown plots are pruned without a
/// player request.
fn auto_prune(
    mut farm: ResMut<FarmState>,
    player: Res<PlayerState>,
    registry: Res<CultivarRegistry>,
    clock: Res<GameClock>,
) {
    if !player.has_upgrade(UPGRADE_GOLDEN_SHEARS) {
        return;
    }

    let now = clock.seconds;
    for plot in farm.plots.iter_mut() {
        if plot.pruned {
            continue;
        }
        let Some(cultivar_id) = plot.cultivar_id.clone() else {
            continue;
        };
        let Some(def) = registry.get(&cultivar_id) else {
            continue;
        };
        if is_ready(plot, now, effective_duration(def, &player)) {
            plot.pruned = true;
            info!("[Farm] Golden shears pruned plot {}", plot.id);
        }
    }
}
