//! Refining buds into extract.

use bevy::prelude::*;

use crate::shared::*;

/// Converts a batch of buds into one extract of the same cultivar.
/// Extract trades at a far higher unit multiplier, so refining is the
/// main value-add loop between harvest and sale.
pub fn handle_refine(
    mut events: EventReader<RefineRequest>,
    mut player: ResMut<PlayerState>,
    cultivars: Res<CultivarRegistry>,
    tuning: Res<EconomyTuning>,
    mut xp: EventWriter<ExperienceEvent>,
) {
    for ev in events.read() {
        if cultivars.get(&ev.cultivar_id).is_none() {
            warn!("[Economy] Refine failed — unknown cultivar '{}'", ev.cultivar_id);
            continue;
        }

        let buds = bud_key(&ev.cultivar_id);
        if !player.inventory.try_remove(&buds, tuning.refine_buds_per_extract) {
            info!(
                "[Economy] Refine declined — need {} × '{}', have {}",
                tuning.refine_buds_per_extract,
                buds,
                player.inventory.count(&buds)
            );
            continue;
        }

        player.inventory.add(&extract_key(&ev.cultivar_id), 1);
        xp.send(ExperienceEvent {
            points: tuning.xp_refine,
        });
        info!(
            "[Economy] Refined {} × '{}' into 1 extract",
            tuning.refine_buds_per_extract, buds
        );
    }
}
