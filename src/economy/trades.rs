//! Offer acceptance and territory deal settlement.

use bevy::prelude::*;
use rand::Rng;

use crate::shared::*;

/// Processes AcceptOfferRequests against the live pool.
///
/// Stock and funds are re-validated here, not at generation time: an
/// offer created against older inventory simply declines and stays in
/// the pool until the player can honor it or the pool resets.
pub fn handle_accept_offer(
    mut events: EventReader<AcceptOfferRequest>,
    mut pool: ResMut<OfferPool>,
    mut player: ResMut<PlayerState>,
    cultivars: Res<CultivarRegistry>,
    tuning: Res<EconomyTuning>,
    mut accepted: EventWriter<OfferAcceptedEvent>,
    mut xp: EventWriter<ExperienceEvent>,
    mut tier_unlocked: EventWriter<TierUnlockedEvent>,
) {
    for ev in events.read() {
        let Some(offer) = pool.get(ev.offer_id).cloned() else {
            warn!("[Economy] Accept failed — no offer {}", ev.offer_id);
            continue;
        };

        match offer.kind {
            OfferKind::PlayerSells => {
                if !player.inventory.has(&offer.item, offer.quantity) {
                    info!(
                        "[Economy] Accept declined — need {} × '{}', have {}",
                        offer.quantity,
                        offer.item,
                        player.inventory.count(&offer.item)
                    );
                    continue;
                }

                // All checks passed — commit.
                player.inventory.try_remove(&offer.item, offer.quantity);
                player.wallet.credit(offer.currency, offer.price);
                player.stats.total_items_sold += offer.quantity;
                match offer.currency {
                    Currency::Coins => player.stats.total_coins_earned += offer.price,
                    Currency::Crystals => player.stats.total_crystals_earned += offer.price,
                }

                let gain = tuning.reputation_gain(offer.reputation_base, player.level);
                player.reputation.add(&offer.counterparty_id, gain);
                pool.take(ev.offer_id);

                accepted.send(OfferAcceptedEvent {
                    offer_id: offer.id,
                    counterparty_id: offer.counterparty_id.clone(),
                    reputation_gain: gain,
                });
                xp.send(ExperienceEvent {
                    points: tuning.xp_offer,
                });

                info!(
                    "[Economy] Sold {} × '{}' to {} for {} {:?} (+{} rep)",
                    offer.quantity, offer.item, offer.counterparty_id, offer.price, offer.currency, gain
                );
            }
            OfferKind::PlayerBuys => {
                if !player.wallet.try_debit(offer.currency, offer.price) {
                    info!(
                        "[Economy] Accept declined — cannot afford {} {:?}",
                        offer.price, offer.currency
                    );
                    continue;
                }

                player.inventory.add(&offer.item, offer.quantity);
                widen_tiers(&mut player, &cultivars, &offer.item, &mut tier_unlocked);
                pool.take(ev.offer_id);

                accepted.send(OfferAcceptedEvent {
                    offer_id: offer.id,
                    counterparty_id: offer.counterparty_id.clone(),
                    reputation_gain: 0,
                });

                info!(
                    "[Economy] Bought {} × '{}' seeds from {} for {} {:?}",
                    offer.quantity, offer.item, offer.counterparty_id, offer.price, offer.currency
                );
            }
        }
    }
}

/// Buying a seed of a tier the player has not unlocked widens the
/// unlocked set directly. Shared by the shop and partner-offer paths.
pub(super) fn widen_tiers(
    player: &mut PlayerState,
    cultivars: &CultivarRegistry,
    cultivar_id: &str,
    tier_unlocked: &mut EventWriter<TierUnlockedEvent>,
) {
    let Some(def) = cultivars.get(cultivar_id) else {
        return;
    };
    if !player.tier_unlocked(def.tier) {
        player.unlocked_tiers.push(def.tier);
        tier_unlocked.send(TierUnlockedEvent { tier: def.tier });
        info!("[Economy] Tier {:?} unlocked by purchase", def.tier);
    }
}

/// Opens a pending territory deal. Nothing economic happens until the
/// negotiation delay elapses, so the deal stays freely cancellable.
pub fn handle_start_map_deal(
    mut events: EventReader<StartMapDealRequest>,
    mut pending: ResMut<PendingDeal>,
    board: Res<MapOfferBoard>,
    player: Res<PlayerState>,
    tuning: Res<EconomyTuning>,
    clock: Res<GameClock>,
) {
    for ev in events.read() {
        if pending.deal.is_some() {
            info!("[Economy] Deal declined — negotiation already in progress");
            continue;
        }
        let Some(offer) = board.get(ev.offer_id) else {
            warn!("[Economy] Deal failed — no territory offer {}", ev.offer_id);
            continue;
        };
        if !player.inventory.has(&offer.item, offer.quantity) {
            info!(
                "[Economy] Deal declined — need {} × '{}'",
                offer.quantity, offer.item
            );
            continue;
        }

        pending.deal = Some(ActiveDeal {
            offer: offer.clone(),
            resolve_at: clock.seconds + tuning.map_negotiation_secs,
        });
        info!(
            "[Economy] Negotiating in {} — resolves in {:.1}s",
            offer.territory_id, tuning.map_negotiation_secs
        );
    }
}

pub fn handle_cancel_map_deal(
    mut events: EventReader<CancelMapDealRequest>,
    mut pending: ResMut<PendingDeal>,
) {
    for _ in events.read() {
        if pending.deal.take().is_some() {
            info!("[Economy] Negotiation cancelled — nothing changed hands");
        }
    }
}

/// Settles the pending deal once its delay has elapsed.
///
/// Stock is re-validated at this moment; the goods leave the inventory
/// whether or not the risk roll goes bad, and a bust additionally fines a
/// fraction of the coin balance. The fine is computed from the balance,
/// so it can never overdraw.
pub fn resolve_map_deals(
    mut pending: ResMut<PendingDeal>,
    mut board: ResMut<MapOfferBoard>,
    mut player: ResMut<PlayerState>,
    territories: Res<TerritoryRegistry>,
    tuning: Res<EconomyTuning>,
    clock: Res<GameClock>,
    mut rng: ResMut<MarketRng>,
    mut resolved: EventWriter<DealResolvedEvent>,
    mut xp: EventWriter<ExperienceEvent>,
) {
    let ready = matches!(&pending.deal, Some(d) if d.resolve_at <= clock.seconds);
    if !ready {
        return;
    }
    let Some(deal) = pending.deal.take() else {
        return;
    };
    let offer = deal.offer;

    let Some(territory) = territories.get(&offer.territory_id) else {
        warn!(
            "[Economy] Deal dropped — unknown territory '{}'",
            offer.territory_id
        );
        return;
    };
    if !player.inventory.has(&offer.item, offer.quantity) {
        info!(
            "[Economy] Deal fell through — {} × '{}' no longer held",
            offer.quantity, offer.item
        );
        return;
    }

    // Commit: the goods are gone either way once the meet happens.
    board.take(offer.id);
    player.inventory.try_remove(&offer.item, offer.quantity);

    if rng.0.gen_bool(territory.risk_chance) {
        let (lo, hi) = tuning.fine_fraction_range;
        let fraction = rng.0.gen_range(lo..=hi);
        let fine = (player.wallet.coins as f64 * fraction).floor() as u64;
        player.wallet.try_debit(Currency::Coins, fine);
        player.stats.total_deals_busted += 1;

        resolved.send(DealResolvedEvent {
            territory_id: offer.territory_id.clone(),
            busted: true,
            payout: 0,
            fine,
        });
        warn!(
            "[Economy] Busted in {} — goods seized, fined {} coins",
            offer.territory_id, fine
        );
    } else {
        player.wallet.credit(Currency::Coins, offer.price);
        player.stats.total_coins_earned += offer.price;
        player.stats.total_items_sold += offer.quantity;

        let gain = tuning.reputation_gain(tuning.rep_award_coins, player.level);
        player.reputation.add_aggregate(gain);

        resolved.send(DealResolvedEvent {
            territory_id: offer.territory_id.clone(),
            busted: false,
            payout: offer.price,
            fine: 0,
        });
        xp.send(ExperienceEvent {
            points: tuning.xp_map_sale,
        });
        info!(
            "[Economy] Settled in {} — {} coins for {} × '{}'",
            offer.territory_id, offer.price, offer.quantity, offer.item
        );
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use crate::shared::*;

    #[test]
    fn reputation_gain_dampens_with_level() {
        let tuning = EconomyTuning::default();
        // base 12 = coin award × 1.2 multiplier
        let fresh = tuning.reputation_gain(12, 1);
        let veteran = tuning.reputation_gain(12, 20);
        assert!(fresh > veteran);
        assert!(veteran >= 1, "gain never drops to zero");
    }

    #[test]
    fn reputation_gain_floors_at_one() {
        let tuning = EconomyTuning::default();
        assert_eq!(tuning.reputation_gain(1, 50), 1);
    }

    #[test]
    fn wallet_debit_never_overdraws() {
        let mut wallet = Wallet {
            coins: 100,
            crystals: 0,
        };
        assert!(!wallet.try_debit(Currency::Coins, 101));
        assert_eq!(wallet.coins, 100);
        assert!(wallet.try_debit(Currency::Coins, 100));
        assert_eq!(wallet.coins, 0);
    }
}
