//! Catalog purchases: seeds, consumables, cosmetics, upgrades, plot
//! unlocks and capacity upgrades.

use bevy::prelude::*;

use crate::shared::*;

use super::trades::widen_tiers;

/// Seeds are bought straight from the catalog. Legendary seeds are
/// crystal-priced; everything else costs a fraction of the cultivar's
/// base value in coins. Buying into a new tier widens the unlocked set.
pub fn handle_purchase_seed(
    mut events: EventReader<PurchaseSeedRequest>,
    mut player: ResMut<PlayerState>,
    cultivars: Res<CultivarRegistry>,
    tuning: Res<EconomyTuning>,
    mut tier_unlocked: EventWriter<TierUnlockedEvent>,
) {
    for ev in events.read() {
        let Some(def) = cultivars.get(&ev.cultivar_id) else {
            warn!("[Economy] Seed purchase failed — unknown cultivar '{}'", ev.cultivar_id);
            continue;
        };

        let (price, currency) = match def.crystal_price {
            Some(crystals) => (crystals, Currency::Crystals),
            None => (
                ((def.base_value as f64 * tuning.seed_price_factor).floor() as u64).max(1),
                Currency::Coins,
            ),
        };

        if !player.wallet.try_debit(currency, price) {
            info!(
                "[Economy] Seed purchase declined — cannot afford {} {:?}",
                price, currency
            );
            continue;
        }

        player.inventory.add(&ev.cultivar_id, 1);
        widen_tiers(&mut player, &cultivars, &ev.cultivar_id, &mut tier_unlocked);
        info!(
            "[Economy] Bought '{}' seed for {} {:?}",
            ev.cultivar_id, price, currency
        );
    }
}

pub fn handle_purchase_fertilizer(
    mut events: EventReader<PurchaseFertilizerRequest>,
    mut player: ResMut<PlayerState>,
) {
    for ev in events.read() {
        let quantity = ev.quantity.max(1);
        let cost = FERTILIZER_PRICE.saturating_mul(quantity);
        if !player.wallet.try_debit(Currency::Coins, cost) {
            info!("[Economy] Fertilizer declined — cannot afford {} coins", cost);
            continue;
        }
        player.inventory.add(FERTILIZER_KEY, quantity);
        info!("[Economy] Bought {} fertilizer for {} coins", quantity, cost);
    }
}

pub fn handle_purchase_cosmetic(
    mut events: EventReader<PurchaseCosmeticRequest>,
    mut player: ResMut<PlayerState>,
    cosmetics: Res<CosmeticRegistry>,
) {
    for ev in events.read() {
        let Some(def) = cosmetics.get(&ev.cosmetic_id) else {
            warn!("[Economy] Cosmetic purchase failed — unknown '{}'", ev.cosmetic_id);
            continue;
        };
        if player.owned_cosmetics.contains(&def.id) {
            info!("[Economy] Cosmetic declined — '{}' already owned", def.id);
            continue;
        }
        if !player.wallet.try_debit(def.currency, def.price) {
            info!(
                "[Economy] Cosmetic declined — cannot afford {} {:?}",
                def.price, def.currency
            );
            continue;
        }

        player.owned_cosmetics.push(def.id.clone());
        info!("[Economy] Bought cosmetic '{}'", def.id);
    }
}

/// Equipping swaps the matching slot; ownership is required, the slot
/// swap itself is free.
pub fn handle_equip_cosmetic(
    mut events: EventReader<EquipCosmeticRequest>,
    mut player: ResMut<PlayerState>,
    cosmetics: Res<CosmeticRegistry>,
) {
    for ev in events.read() {
        let Some(def) = cosmetics.get(&ev.cosmetic_id) else {
            warn!("[Economy] Equip failed — unknown cosmetic '{}'", ev.cosmetic_id);
            continue;
        };
        if !player.owned_cosmetics.contains(&def.id) {
            info!("[Economy] Equip declined — '{}' not owned", def.id);
            continue;
        }
        player.active_cosmetics.insert(def.slot, def.id.clone());
        info!("[Economy] Equipped '{}' in {:?}", def.id, def.slot);
    }
}

pub fn handle_purchase_upgrade(
    mut events: EventReader<PurchaseUpgradeRequest>,
    mut player: ResMut<PlayerState>,
    upgrades: Res<UpgradeRegistry>,
) {
    for ev in events.read() {
        let Some(def) = upgrades.get(&ev.upgrade_id) else {
            warn!("[Economy] Upgrade purchase failed — unknown '{}'", ev.upgrade_id);
            continue;
        };
        if player.has_upgrade(&def.id) {
            info!("[Economy] Upgrade declined — '{}' already owned", def.id);
            continue;
        }
        if !player.wallet.try_debit(def.currency, def.price) {
            info!(
                "[Economy] Upgrade declined — cannot afford {} {:?}",
                def.price, def.currency
            );
            continue;
        }

        player.owned_upgrades.push(def.id.clone());
        info!("[Economy] Bought upgrade '{}'", def.id);
    }
}

/// Unlocks a locked plot at its catalog expansion price.
pub fn handle_unlock_plot(
    mut events: EventReader<UnlockPlotRequest>,
    mut player: ResMut<PlayerState>,
    mut farm: ResMut<FarmState>,
    catalog: Res<ExpansionCatalog>,
) {
    for ev in events.read() {
        let Some(expansion) = catalog.for_plot(ev.plot_id) else {
            warn!("[Economy] Unlock failed — plot {} is not expandable", ev.plot_id);
            continue;
        };
        let Some(plot) = farm.plot_mut(ev.plot_id) else {
            warn!("[Economy] Unlock failed — no plot {}", ev.plot_id);
            continue;
        };
        if plot.unlocked {
            info!("[Economy] Unlock declined — plot {} already open", ev.plot_id);
            continue;
        }
        if !player.wallet.try_debit(expansion.currency, expansion.cost) {
            info!(
                "[Economy] Unlock declined — cannot afford {} {:?}",
                expansion.cost, expansion.currency
            );
            continue;
        }

        plot.unlocked = true;
        info!(
            "[Economy] Unlocked plot {} for {} {:?}",
            ev.plot_id, expansion.cost, expansion.currency
        );
    }
}

/// Raises a plot's capacity by one, up to its tier-class cap. The cost
/// is dual-currency and both legs must clear before either is debited.
pub fn handle_upgrade_plot(
    mut events: EventReader<UpgradePlotRequest>,
    mut player: ResMut<PlayerState>,
    mut farm: ResMut<FarmState>,
    tuning: Res<EconomyTuning>,
) {
    for ev in events.read() {
        let Some(plot) = farm.plot_mut(ev.plot_id) else {
            warn!("[Economy] Plot upgrade failed — no plot {}", ev.plot_id);
            continue;
        };
        if !plot.unlocked {
            info!("[Economy] Plot upgrade declined — plot {} is locked", ev.plot_id);
            continue;
        }

        let class = plot.tier.class();
        if plot.capacity >= tuning.capacity_cap(class) {
            info!(
                "[Economy] Plot upgrade declined — plot {} is at capacity cap",
                ev.plot_id
            );
            continue;
        }

        let (coins, crystals) = tuning.upgrade_cost(class);
        if !player.wallet.can_afford(Currency::Coins, coins)
            || !player.wallet.can_afford(Currency::Crystals, crystals)
        {
            info!(
                "[Economy] Plot upgrade declined — costs {} coins + {} crystals",
                coins, crystals
            );
            continue;
        }

        player.wallet.try_debit(Currency::Coins, coins);
        player.wallet.try_debit(Currency::Crystals, crystals);
        plot.capacity += 1;
        info!(
            "[Economy] Plot {} capacity raised to {}",
            ev.plot_id, plot.capacity
        );
    }
}
