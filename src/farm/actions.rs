//! Request handlers for player farm actions.
//!
//! Every handler validates first and silently declines (with an info/warn
//! log) on any failed precondition — nothing is partially applied.

use bevy::prelude::*;

use crate::shared::*;

use super::{effective_duration, growth_at, sync_growth};

/// Processes PlantRequests: seed leaves the inventory, plot becomes
/// occupied with all condition flags reset.
pub fn handle_plant(
    mut events: EventReader<PlantRequest>,
    mut farm: ResMut<FarmState>,
    mut player: ResMut<PlayerState>,
    registry: Res<CultivarRegistry>,
) {
    for ev in events.read() {
        let Some(def) = registry.get(&ev.cultivar_id) else {
            warn!("[Farm] Plant failed — unknown cultivar '{}'", ev.cultivar_id);
            continue;
        };

        let Some(plot) = farm.plot_mut(ev.plot_id) else {
            warn!("[Farm] Plant failed — no plot {}", ev.plot_id);
            continue;
        };

        if !plot.unlocked {
            info!("[Farm] Plant declined — plot {} is locked", ev.plot_id);
            continue;
        }
        if plot.is_occupied() {
            info!("[Farm] Plant declined — plot {} is occupied", ev.plot_id);
            continue;
        }
        if !def.tier.compatible_with(plot.tier) {
            info!(
                "[Farm] Plant declined — '{}' does not fit a {:?} plot",
                ev.cultivar_id, plot.tier
            );
            continue;
        }
        if !player.inventory.try_remove(&ev.cultivar_id, 1) {
            info!("[Farm] Plant declined — no '{}' seed held", ev.cultivar_id);
            continue;
        }

        plot.cultivar_id = Some(ev.cultivar_id.clone());
        plot.accumulated_growth = 0.0;
        plot.growth_anchor = None;
        plot.watered = false;
        plot.illuminated = false;
        plot.pruned = false;
        player.stats.total_planted += 1;

        info!("[Farm] Planted '{}' on plot {}", ev.cultivar_id, ev.plot_id);
    }
}

pub fn handle_water(
    mut events: EventReader<WaterRequest>,
    mut farm: ResMut<FarmState>,
    player: Res<PlayerState>,
    registry: Res<CultivarRegistry>,
    clock: Res<GameClock>,
) {
    for ev in events.read() {
        let now = clock.seconds;
        let Some(plot) = farm.plot_mut(ev.plot_id) else {
            warn!("[Farm] Water failed — no plot {}", ev.plot_id);
            continue;
        };
        if !plot.is_occupied() || plot.watered {
            continue;
        }

        plot.watered = true;
        if let Some(def) = plot.cultivar_id.as_ref().and_then(|id| registry.get(id)) {
            sync_growth(plot, now, effective_duration(def, &player));
        }
        info!("[Farm] Watered plot {}", ev.plot_id);
    }
}

pub fn handle_illuminate(
    mut events: EventReader<IlluminateRequest>,
    mut farm: ResMut<FarmState>,
    player: Res<PlayerState>,
    registry: Res<CultivarRegistry>,
    clock: Res<GameClock>,
) {
    for ev in events.read() {
        let now = clock.seconds;
        let Some(plot) = farm.plot_mut(ev.plot_id) else {
            warn!("[Farm] Illuminate failed — no plot {}", ev.plot_id);
            continue;
        };
        if !plot.is_occupied() || plot.illuminated {
            continue;
        }

        plot.illuminated = true;
        if let Some(def) = plot.cultivar_id.as_ref().and_then(|id| registry.get(id)) {
            sync_growth(plot, now, effective_duration(def, &player));
        }
        info!("[Farm] Illuminated plot {}", ev.plot_id);
    }
}

/// Fertilizing consumes one fertilizer item and doubles the next harvest.
/// It can be applied before or after planting, once per cycle.
pub fn handle_fertilize(
    mut events: EventReader<FertilizeRequest>,
    mut farm: ResMut<FarmState>,
    mut player: ResMut<PlayerState>,
) {
    for ev in events.read() {
        let Some(plot) = farm.plot_mut(ev.plot_id) else {
            warn!("[Farm] Fertilize failed — no plot {}", ev.plot_id);
            continue;
        };
        if !plot.unlocked || plot.fertilized {
            continue;
        }
        if !player.inventory.try_remove(FERTILIZER_KEY, 1) {
            info!("[Farm] Fertilize declined — no fertilizer held");
            continue;
        }

        plot.fertilized = true;
        info!("[Farm] Fertilized plot {}", ev.plot_id);
    }
}

/// Pruning is the manual gate between full growth and harvest.
pub fn handle_prune(
    mut events: EventReader<PruneRequest>,
    mut farm: ResMut<FarmState>,
    player: Res<PlayerState>,
    registry: Res<CultivarRegistry>,
    clock: Res<GameClock>,
) {
    for ev in events.read() {
        let now = clock.seconds;
        let Some(plot) = farm.plot_mut(ev.plot_id) else {
            warn!("[Farm] Prune failed — no plot {}", ev.plot_id);
            continue;
        };
        if plot.pruned {
            continue;
        }
        let Some(def) = plot.cultivar_id.as_ref().and_then(|id| registry.get(id)) else {
            continue;
        };
        if growth_at(plot, now, effective_duration(def, &player)) < 1.0 {
            info!("[Farm] Prune declined — plot {} not fully grown", ev.plot_id);
            continue;
        }

        plot.pruned = true;
        info!("[Farm] Pruned plot {}", ev.plot_id);
    }
}

/// Harvest converts a pruned plot into buds and resets it. Yield scales
/// with plot capacity, fertilizer and the harvest-rig upgrade.
pub fn handle_harvest(
    mut events: EventReader<HarvestRequest>,
    mut farm: ResMut<FarmState>,
    mut player: ResMut<PlayerState>,
    tuning: Res<EconomyTuning>,
    mut harvested: EventWriter<HarvestedEvent>,
    mut xp: EventWriter<ExperienceEvent>,
) {
    for ev in events.read() {
        let Some(plot) = farm.plot_mut(ev.plot_id) else {
            warn!("[Farm] Harvest failed — no plot {}", ev.plot_id);
            continue;
        };
        let Some(cultivar_id) = plot.cultivar_id.clone() else {
            info!("[Farm] Harvest declined — plot {} is empty", ev.plot_id);
            continue;
        };
        if !plot.pruned {
            info!("[Farm] Harvest declined — plot {} not pruned", ev.plot_id);
            continue;
        }

        let fert = if plot.fertilized { tuning.fertilized_bonus } else { 0.0 };
        let quantity =
            (plot.capacity as f32 * (1.0 + fert) * (1.0 + player.harvest_bonus())).ceil() as u64;

        player.inventory.add(&bud_key(&cultivar_id), quantity);
        player.stats.total_harvested += quantity;
        plot.clear();

        harvested.send(HarvestedEvent {
            plot_id: ev.plot_id,
            cultivar_id: cultivar_id.clone(),
            quantity,
        });
        xp.send(ExperienceEvent {
            points: tuning.xp_harvest,
        });

        info!(
            "[Farm] Harvested {} × '{}' from plot {}",
            quantity,
            bud_key(&cultivar_id),
            ev.plot_id
        );
    }
}
