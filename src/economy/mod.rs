//! Economy domain — the transactional ledger.
//!
//! Every operation here is validate-then-commit: all preconditions are
//! checked against live state before anything is mutated, and a failed
//! check declines the whole request with a log line. No handler ever
//! leaves a half-applied trade behind.

mod purchases;
mod refine;
mod trades;

use bevy::prelude::*;

use crate::shared::*;

pub struct EconomyPlugin;

impl Plugin for EconomyPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                trades::handle_accept_offer,
                trades::handle_start_map_deal,
                trades::handle_cancel_map_deal,
                trades::resolve_map_deals,
                purchases::handle_purchase_seed,
                purchases::handle_purchase_fertilizer,
                purchases::handle_purchase_cosmetic,
                purchases::handle_equip_cosmetic,
                purchases::handle_purchase_upgrade,
                purchases::handle_unlock_plot,
                purchases::handle_upgrade_plot,
                refine::handle_refine,
            )
                .run_if(in_state(GameState::Playing)),
        );
    }
}
