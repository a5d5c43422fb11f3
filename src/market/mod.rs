//! Market domain — keeps the counterparty offer pool and the territory
//! board stocked.
//!
//! A full pool reset runs on a long interval and replaces every offer; a
//! cheap per-frame roll occasionally slips an extra offer in without
//! touching the live ones. All draws go through the seeded `MarketRng`.

mod generator;

pub use generator::{generate_map_offer, generate_offer, quoted_price};

use bevy::prelude::*;

use crate::shared::*;

pub struct MarketPlugin;

impl Plugin for MarketPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Playing), initial_stock)
            .add_systems(
                Update,
                (reset_offer_pool, refill_offer_pool, reset_map_board)
                    .run_if(in_state(GameState::Playing)),
            );
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Systems
// ─────────────────────────────────────────────────────────────────────────────

/// Stocks both boards the moment the session starts.
fn initial_stock(
    mut pool: ResMut<OfferPool>,
    mut board: ResMut<MapOfferBoard>,
    player: Res<PlayerState>,
    cultivars: Res<CultivarRegistry>,
    counterparties: Res<CounterpartyRegistry>,
    territories: Res<TerritoryRegistry>,
    tuning: Res<EconomyTuning>,
    clock: Res<GameClock>,
    mut rng: ResMut<MarketRng>,
) {
    fill_pool(&mut pool, &player, &cultivars, &counterparties, &tuning, &mut rng);
    pool.last_reset = clock.seconds;

    fill_board(&mut board, &player, &cultivars, &territories, &tuning, &mut rng);
    board.last_reset = clock.seconds;

    info!(
        "[Market] Opening stock: {} offers, {} territory deals",
        pool.offers.len(),
        board.offers.len()
    );
}

/// Full pool refresh on the reset interval. Fires `OfferPoolResetEvent`
/// so the save domain can autosave on the same beat.
fn reset_offer_pool(
    mut pool: ResMut<OfferPool>,
    player: Res<PlayerState>,
    cultivars: Res<CultivarRegistry>,
    counterparties: Res<CounterpartyRegistry>,
    tuning: Res<EconomyTuning>,
    clock: Res<GameClock>,
    mut rng: ResMut<MarketRng>,
    mut reset_events: EventWriter<OfferPoolResetEvent>,
) {
    if clock.seconds - pool.last_reset < tuning.offer_reset_secs {
        return;
    }

    fill_pool(&mut pool, &player, &cultivars, &counterparties, &tuning, &mut rng);
    pool.last_reset = clock.seconds;
    reset_events.send(OfferPoolResetEvent);
    info!("[Market] Offer pool reset ({} offers)", pool.offers.len());
}

/// Low-probability background refill while the pool is below its cap.
/// Existing offers are never replaced.
fn refill_offer_pool(
    mut pool: ResMut<OfferPool>,
    player: Res<PlayerState>,
    cultivars: Res<CultivarRegistry>,
    counterparties: Res<CounterpartyRegistry>,
    tuning: Res<EconomyTuning>,
    mut rng: ResMut<MarketRng>,
) {
    use rand::Rng;

    if pool.offers.len() >= tuning.offer_pool_max {
        return;
    }
    if !rng.0.gen_bool(tuning.offer_refill_chance) {
        return;
    }

    let id = pool.alloc_id();
    if let Some(offer) = generate_offer(
        id,
        &player,
        &cultivars,
        &counterparties,
        &tuning,
        &mut rng.0,
        None,
    ) {
        info!(
            "[Market] {} drifts in with a new offer",
            offer.counterparty_id
        );
        pool.offers.push(offer);
    }
}

/// Replaces the territory board on its own interval. An active pending
/// deal keeps its own copy of the offer, so a reset never invalidates it.
fn reset_map_board(
    mut board: ResMut<MapOfferBoard>,
    player: Res<PlayerState>,
    cultivars: Res<CultivarRegistry>,
    territories: Res<TerritoryRegistry>,
    tuning: Res<EconomyTuning>,
    clock: Res<GameClock>,
    mut rng: ResMut<MarketRng>,
) {
    if clock.seconds - board.last_reset < tuning.map_reset_secs {
        return;
    }

    fill_board(&mut board, &player, &cultivars, &territories, &tuning, &mut rng);
    board.last_reset = clock.seconds;
    info!("[Market] Territory board reset ({} deals)", board.offers.len());
}

// ─────────────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────────────

fn fill_pool(
    pool: &mut OfferPool,
    player: &PlayerState,
    cultivars: &CultivarRegistry,
    counterparties: &CounterpartyRegistry,
    tuning: &EconomyTuning,
    rng: &mut MarketRng,
) {
    pool.offers.clear();

    // Once the player can meet premium buyers, each batch guarantees at
    // least one crystal offer.
    let premium_reachable =
        player.tier_unlocked(Tier::Rare) || player.tier_unlocked(Tier::Legendary);

    for slot in 0..tuning.offer_pool_target {
        let force = if slot == 0 && premium_reachable {
            Some(Currency::Crystals)
        } else {
            None
        };
        let id = pool.alloc_id();
        if let Some(offer) =
            generate_offer(id, player, cultivars, counterparties, tuning, &mut rng.0, force)
        {
            pool.offers.push(offer);
        }
    }
}

fn fill_board(
    board: &mut MapOfferBoard,
    player: &PlayerState,
    cultivars: &CultivarRegistry,
    territories: &TerritoryRegistry,
    tuning: &EconomyTuning,
    rng: &mut MarketRng,
) {
    board.offers.clear();

    let mut defs: Vec<&TerritoryDef> = territories.territories.values().collect();
    defs.sort_by(|a, b| a.id.cmp(&b.id));

    for territory in defs {
        let id = board.alloc_id();
        if let Some(offer) =
            generate_map_offer(id, territory, player, cultivars, tuning, &mut rng.0)
        {
            board.offers.push(offer);
        }
    }
}
