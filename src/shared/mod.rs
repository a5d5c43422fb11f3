//! Shared resources, events, and states for Astrobotanica.
//!
//! This is the type contract. Every domain plugin imports from here.
//! No domain imports from any other domain directly. The UI front-end is
//! an external collaborator: it reads these resources as read-only
//! snapshots and mutates state exclusively by sending the request events
//! declared at the bottom of this module.

use bevy::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ═══════════════════════════════════════════════════════════════════════
// GAME STATE — top-level state machine
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, States, Default)]
pub enum GameState {
    #[default]
    Loading,
    Playing,
}

// ═══════════════════════════════════════════════════════════════════════
// TIERS & CURRENCIES
// ═══════════════════════════════════════════════════════════════════════

/// Rarity/progression bracket gating cultivars, counterparties and plots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Tier {
    Common,
    Uncommon,
    Rare,
    Legendary,
}

/// Plot compatibility class. `Common` and `Uncommon` are interchangeable
/// for planting purposes — both collapse into the entry class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TierClass {
    Entry,
    Rare,
    Legendary,
}

impl Tier {
    pub const ALL: [Tier; 4] = [Tier::Common, Tier::Uncommon, Tier::Rare, Tier::Legendary];

    pub fn index(self) -> usize {
        match self {
            Tier::Common => 0,
            Tier::Uncommon => 1,
            Tier::Rare => 2,
            Tier::Legendary => 3,
        }
    }

    pub fn class(self) -> TierClass {
        match self {
            Tier::Common | Tier::Uncommon => TierClass::Entry,
            Tier::Rare => TierClass::Rare,
            Tier::Legendary => TierClass::Legendary,
        }
    }

    /// Whether a cultivar of this tier may occupy a plot of `plot_tier`.
    pub fn compatible_with(self, plot_tier: Tier) -> bool {
        self.class() == plot_tier.class()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    Coins,
    Crystals,
}

// ═══════════════════════════════════════════════════════════════════════
// ITEM KEYS
// ═══════════════════════════════════════════════════════════════════════

/// Inventory keys are strings: a cultivar id is its seed, `<id>_bud` the
/// harvested product, `<id>_extract` the refined product. Consumables use
/// their own ids (e.g. `fertilizer`).
pub type ItemKey = String;
pub type CultivarId = String;
pub type CounterpartyId = String;
pub type TerritoryId = String;

pub fn bud_key(cultivar_id: &str) -> ItemKey {
    format!("{cultivar_id}_bud")
}

pub fn extract_key(cultivar_id: &str) -> ItemKey {
    format!("{cultivar_id}_extract")
}

/// Maps a bud/extract item key back to `(cultivar id, is_extract)`.
pub fn cultivar_of_key(key: &str) -> Option<(&str, bool)> {
    if let Some(id) = key.strip_suffix("_extract") {
        return Some((id, true));
    }
    if let Some(id) = key.strip_suffix("_bud") {
        return Some((id, false));
    }
    None
}

// ═══════════════════════════════════════════════════════════════════════
// CATALOG — static reference data, loaded by DataPlugin
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CultivarDef {
    pub id: CultivarId,
    pub name: String,
    pub tier: Tier,
    /// Seconds from planting to harvest-ready under ideal conditions.
    pub growth_secs: f64,
    pub base_value: u64,
    /// Legendary cultivars are bought with crystals instead of coins.
    pub crystal_price: Option<u64>,
}

#[derive(Resource, Debug, Clone, Default)]
pub struct CultivarRegistry {
    pub cultivars: HashMap<CultivarId, CultivarDef>,
}

impl CultivarRegistry {
    pub fn get(&self, id: &str) -> Option<&CultivarDef> {
        self.cultivars.get(id)
    }

    /// Cultivar ids of the given tiers, sorted for deterministic sampling.
    pub fn ids_in_tiers(&self, tiers: &[Tier]) -> Vec<CultivarId> {
        let mut ids: Vec<CultivarId> = self
            .cultivars
            .values()
            .filter(|c| tiers.contains(&c.tier))
            .map(|c| c.id.clone())
            .collect();
        ids.sort();
        ids
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CounterpartyDef {
    pub id: CounterpartyId,
    pub name: String,
    /// Canned greeting, used when the external greeting provider fails.
    pub greeting: String,
    /// Cultivars this counterparty prefers to trade in.
    pub demand: Vec<CultivarId>,
    pub multiplier: f64,
    /// Unlocked-tier gate; `None` means always available.
    pub tier_required: Option<Tier>,
}

#[derive(Resource, Debug, Clone, Default)]
pub struct CounterpartyRegistry {
    pub counterparties: HashMap<CounterpartyId, CounterpartyDef>,
}

impl CounterpartyRegistry {
    pub fn get(&self, id: &str) -> Option<&CounterpartyDef> {
        self.counterparties.get(id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerritoryDef {
    pub id: TerritoryId,
    pub name: String,
    /// Probability a deal in this territory gets busted at settlement.
    pub risk_chance: f64,
    pub price_multiplier: f64,
    /// Premium territories are exempt from the payout cap.
    pub premium: bool,
}

#[derive(Resource, Debug, Clone, Default)]
pub struct TerritoryRegistry {
    pub territories: HashMap<TerritoryId, TerritoryDef>,
}

impl TerritoryRegistry {
    pub fn get(&self, id: &str) -> Option<&TerritoryDef> {
        self.territories.get(id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CosmeticSlot {
    Cape,
    Jewelry,
    Luxury,
    HudTheme,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CosmeticDef {
    pub id: String,
    pub name: String,
    pub slot: CosmeticSlot,
    pub price: u64,
    pub currency: Currency,
}

#[derive(Resource, Debug, Clone, Default)]
pub struct CosmeticRegistry {
    pub cosmetics: HashMap<String, CosmeticDef>,
}

impl CosmeticRegistry {
    pub fn get(&self, id: &str) -> Option<&CosmeticDef> {
        self.cosmetics.get(id)
    }
}

/// Permanent farm upgrades (growth accelerators, harvest rigs…).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpgradeDef {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: u64,
    pub currency: Currency,
}

#[derive(Resource, Debug, Clone, Default)]
pub struct UpgradeRegistry {
    pub upgrades: HashMap<String, UpgradeDef>,
}

impl UpgradeRegistry {
    pub fn get(&self, id: &str) -> Option<&UpgradeDef> {
        self.upgrades.get(id)
    }
}

/// Purchasable plot unlocks for the fixed 12-plot layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlotExpansion {
    pub plot_id: u8,
    pub cost: u64,
    pub currency: Currency,
}

#[derive(Resource, Debug, Clone, Default)]
pub struct ExpansionCatalog {
    pub expansions: Vec<PlotExpansion>,
}

impl ExpansionCatalog {
    pub fn for_plot(&self, plot_id: u8) -> Option<&PlotExpansion> {
        self.expansions.iter().find(|e| e.plot_id == plot_id)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// FARM
// ═══════════════════════════════════════════════════════════════════════

/// A single cultivation slot.
///
/// Growth is derived from absolute clock time: `growth_anchor` records the
/// instant all growing conditions were last satisfied, and
/// `accumulated_growth` folds in progress whenever a condition flag
/// changes. Re-reading growth with an unchanged clock therefore never
/// double-accumulates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plot {
    pub id: u8,
    pub tier: Tier,
    pub cultivar_id: Option<CultivarId>,
    pub accumulated_growth: f32,
    pub growth_anchor: Option<f64>,
    pub watered: bool,
    pub illuminated: bool,
    pub pruned: bool,
    pub fertilized: bool,
    pub unlocked: bool,
    pub capacity: u8,
}

impl Plot {
    pub fn new(id: u8, tier: Tier, unlocked: bool, fertilized: bool) -> Self {
        Self {
            id,
            tier,
            cultivar_id: None,
            accumulated_growth: 0.0,
            growth_anchor: None,
            watered: false,
            illuminated: false,
            pruned: false,
            fertilized,
            unlocked,
            capacity: 1,
        }
    }

    pub fn is_occupied(&self) -> bool {
        self.cultivar_id.is_some()
    }

    /// Resets the plot to empty with all flags cleared.
    pub fn clear(&mut self) {
        self.cultivar_id = None;
        self.accumulated_growth = 0.0;
        self.growth_anchor = None;
        self.watered = false;
        self.illuminated = false;
        self.pruned = false;
        self.fertilized = false;
    }
}

/// All plots, owned by the farm — a sibling aggregate to `PlayerState`.
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct FarmState {
    pub plots: Vec<Plot>,
}

impl Default for FarmState {
    fn default() -> Self {
        // Fixed 12-plot layout: 8 entry-class plots, 2 rare, 2 legendary.
        // The first 6 start unlocked; the legendary plots are sold
        // pre-fertilized.
        let plots = (0..TOTAL_PLOTS)
            .map(|i| {
                let tier = match i {
                    0..=3 => Tier::Common,
                    4..=7 => Tier::Uncommon,
                    8..=9 => Tier::Rare,
                    _ => Tier::Legendary,
                };
                Plot::new(i, tier, i < STARTING_UNLOCKED_PLOTS, i >= 10)
            })
            .collect();
        Self { plots }
    }
}

impl FarmState {
    pub fn plot(&self, id: u8) -> Option<&Plot> {
        self.plots.iter().find(|p| p.id == id)
    }

    pub fn plot_mut(&mut self, id: u8) -> Option<&mut Plot> {
        self.plots.iter_mut().find(|p| p.id == id)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// PLAYER AGGREGATE — wallet, inventory, reputation, progression
// ═══════════════════════════════════════════════════════════════════════

/// Two independent non-negative balances. No operation may drive either
/// below zero; debits validate first and decline otherwise.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Wallet {
    pub coins: u64,
    pub crystals: u64,
}

impl Wallet {
    pub fn balance(&self, currency: Currency) -> u64 {
        match currency {
            Currency::Coins => self.coins,
            Currency::Crystals => self.crystals,
        }
    }

    pub fn can_afford(&self, currency: Currency, amount: u64) -> bool {
        self.balance(currency) >= amount
    }

    pub fn credit(&mut self, currency: Currency, amount: u64) {
        match currency {
            Currency::Coins => self.coins = self.coins.saturating_add(amount),
            Currency::Crystals => self.crystals = self.crystals.saturating_add(amount),
        }
    }

    /// Returns false (and leaves the balance untouched) on insufficient funds.
    pub fn try_debit(&mut self, currency: Currency, amount: u64) -> bool {
        if !self.can_afford(currency, amount) {
            return false;
        }
        match currency {
            Currency::Coins => self.coins -= amount,
            Currency::Crystals => self.crystals -= amount,
        }
        true
    }
}

/// Item-key → count. Counts never go negative: every removal validates
/// against the current balance before committing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Inventory {
    pub items: HashMap<ItemKey, u64>,
}

impl Inventory {
    pub fn count(&self, key: &str) -> u64 {
        self.items.get(key).copied().unwrap_or(0)
    }

    pub fn has(&self, key: &str, quantity: u64) -> bool {
        self.count(key) >= quantity
    }

    pub fn add(&mut self, key: &str, quantity: u64) {
        if quantity == 0 {
            return;
        }
        *self.items.entry(key.to_string()).or_insert(0) += quantity;
    }

    /// Returns false (and changes nothing) if fewer than `quantity` are held.
    pub fn try_remove(&mut self, key: &str, quantity: u64) -> bool {
        let Some(count) = self.items.get_mut(key) else {
            return quantity == 0;
        };
        if *count < quantity {
            return false;
        }
        *count -= quantity;
        if *count == 0 {
            self.items.remove(key);
        }
        true
    }

    /// Item keys with positive count matching a predicate, sorted so
    /// random sampling over them is deterministic for a seeded rng.
    pub fn held_keys<F: Fn(&str) -> bool>(&self, pred: F) -> Vec<ItemKey> {
        let mut keys: Vec<ItemKey> = self
            .items
            .iter()
            .filter(|(k, &v)| v > 0 && pred(k))
            .map(|(k, _)| k.clone())
            .collect();
        keys.sort();
        keys
    }
}

/// Per-counterparty reputation plus the aggregate total. The total is not
/// a cache of the per-counterparty sum: territory deals accrue to the
/// aggregate only, and tier unlocks gate on the aggregate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Reputation {
    pub per_counterparty: HashMap<CounterpartyId, u64>,
    pub total: u64,
}

impl Reputation {
    pub fn with_counterparty(&self, id: &str) -> u64 {
        self.per_counterparty.get(id).copied().unwrap_or(0)
    }

    /// Credits a counterparty trade: both the named counter and the total.
    pub fn add(&mut self, id: &str, gain: u64) {
        *self.per_counterparty.entry(id.to_string()).or_insert(0) += gain;
        self.total = self.total.saturating_add(gain);
    }

    /// Credits the aggregate only (territory deals have no counterparty).
    pub fn add_aggregate(&mut self, gain: u64) {
        self.total = self.total.saturating_add(gain);
    }
}

/// Cumulative play statistics, persisted with the player.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerStats {
    pub total_planted: u64,
    pub total_harvested: u64,
    pub total_items_sold: u64,
    pub total_coins_earned: u64,
    pub total_crystals_earned: u64,
    pub total_deals_busted: u64,
}

#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct PlayerState {
    pub level: u32,
    /// Fractional progress toward the next level, in [0, 100).
    pub experience: f32,
    pub wallet: Wallet,
    pub inventory: Inventory,
    pub reputation: Reputation,
    pub unlocked_tiers: Vec<Tier>,
    pub owned_cosmetics: Vec<String>,
    pub active_cosmetics: HashMap<CosmeticSlot, String>,
    pub owned_upgrades: Vec<String>,
    pub stats: PlayerStats,
}

impl Default for PlayerState {
    fn default() -> Self {
        let mut inventory = Inventory::default();
        inventory.add(STARTER_SEED, STARTER_SEED_COUNT);

        Self {
            level: 1,
            experience: 0.0,
            wallet: Wallet {
                coins: STARTING_COINS,
                crystals: 0,
            },
            inventory,
            reputation: Reputation::default(),
            unlocked_tiers: vec![Tier::Common],
            owned_cosmetics: Vec::new(),
            active_cosmetics: HashMap::new(),
            owned_upgrades: Vec::new(),
            stats: PlayerStats::default(),
        }
    }
}

impl PlayerState {
    pub fn tier_unlocked(&self, tier: Tier) -> bool {
        self.unlocked_tiers.contains(&tier)
    }

    /// The real-valued level the UI displays (e.g. 3.45).
    pub fn level_progress(&self) -> f64 {
        self.level as f64 + (self.experience as f64) / 100.0
    }

    pub fn has_upgrade(&self, id: &str) -> bool {
        self.owned_upgrades.iter().any(|u| u == id)
    }

    /// Growth-duration divisor from owned upgrades (1.0 = no speedup).
    pub fn growth_speed(&self) -> f64 {
        if self.has_upgrade(UPGRADE_HYDRO_SYSTEM) {
            2.0
        } else {
            1.0
        }
    }

    /// External harvest multiplier from owned upgrades.
    pub fn harvest_bonus(&self) -> f32 {
        if self.has_upgrade(UPGRADE_HARVEST_RIG) {
            0.5
        } else {
            0.0
        }
    }

    /// Net worth in coin-equivalents, fed into the wealth damping factor.
    pub fn total_wealth(&self, tuning: &EconomyTuning) -> f64 {
        self.wallet.coins as f64 + self.wallet.crystals as f64 * tuning.premium_conversion as f64
    }
}

// ═══════════════════════════════════════════════════════════════════════
// OFFERS
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OfferKind {
    /// Counterparty buys from the player (stock leaves inventory).
    PlayerSells,
    /// A business partner sells seeds to the player.
    PlayerBuys,
}

/// A generated, time-limited trade proposal from a counterparty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Offer {
    pub id: u64,
    pub counterparty_id: CounterpartyId,
    pub kind: OfferKind,
    pub item: ItemKey,
    pub quantity: u64,
    pub price: u64,
    pub currency: Currency,
    /// Undamped reputation base; the actual gain is recomputed from the
    /// player's level at acceptance time.
    pub reputation_base: u64,
}

/// Bounded pool of live offers, refreshed by the market plugin.
#[derive(Resource, Debug, Clone, Default)]
pub struct OfferPool {
    pub offers: Vec<Offer>,
    pub last_reset: f64,
    pub next_id: u64,
}

impl OfferPool {
    pub fn get(&self, offer_id: u64) -> Option<&Offer> {
        self.offers.iter().find(|o| o.id == offer_id)
    }

    pub fn take(&mut self, offer_id: u64) -> Option<Offer> {
        let idx = self.offers.iter().position(|o| o.id == offer_id)?;
        Some(self.offers.remove(idx))
    }

    pub fn alloc_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

/// A delivery proposal scoped to a territory. Settles in coins only;
/// settlement carries a risk roll.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapOffer {
    pub id: u64,
    pub territory_id: TerritoryId,
    pub item: ItemKey,
    pub quantity: u64,
    pub price: u64,
}

#[derive(Resource, Debug, Clone, Default)]
pub struct MapOfferBoard {
    pub offers: Vec<MapOffer>,
    pub last_reset: f64,
    pub next_id: u64,
}

impl MapOfferBoard {
    pub fn get(&self, offer_id: u64) -> Option<&MapOffer> {
        self.offers.iter().find(|o| o.id == offer_id)
    }

    pub fn take(&mut self, offer_id: u64) -> Option<MapOffer> {
        let idx = self.offers.iter().position(|o| o.id == offer_id)?;
        Some(self.offers.remove(idx))
    }

    pub fn alloc_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

/// An in-flight territory deal. Economy state is untouched until the
/// negotiation delay elapses; cancelling beforehand is free.
#[derive(Debug, Clone)]
pub struct ActiveDeal {
    pub offer: MapOffer,
    pub resolve_at: f64,
}

#[derive(Resource, Debug, Clone, Default)]
pub struct PendingDeal {
    pub deal: Option<ActiveDeal>,
}

// ═══════════════════════════════════════════════════════════════════════
// CLOCK & RNG
// ═══════════════════════════════════════════════════════════════════════

/// Monotonic simulation clock in seconds. Advanced once per frame; every
/// time-derived computation reads this rather than wall time, so tests
/// can drive it directly.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct GameClock {
    pub seconds: f64,
}

/// Seedable random source for all generation. Deterministic under test.
#[derive(Resource)]
pub struct MarketRng(pub SmallRng);

impl Default for MarketRng {
    fn default() -> Self {
        Self(SmallRng::from_entropy())
    }
}

impl MarketRng {
    pub fn seeded(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }
}

// ═══════════════════════════════════════════════════════════════════════
// ECONOMY TUNING — every balance constant, injectable as configuration
// ═══════════════════════════════════════════════════════════════════════

/// Balance table. Logic never hard-codes these values; rebalancing is a
/// data change only.
#[derive(Resource, Debug, Clone)]
pub struct EconomyTuning {
    // Pricing
    pub sale_multiplier: f64,
    pub extract_multiplier: f64,
    pub premium_conversion: u64,
    pub legendary_premium_floor: u64,
    /// Premium-currency probability per tier index.
    pub premium_chance: [f64; 4],
    pub wealth_floor: f64,
    pub wealth_pivot: f64,
    pub wealth_exponent: f64,
    pub rep_bonus_divisor: f64,

    // Reputation
    pub rep_award_coins: u64,
    pub rep_award_crystals: u64,
    pub rep_damping: f64,
    pub rep_level_divisor: f64,
    pub partner_threshold: u64,

    // Offer pool
    pub offer_reset_secs: f64,
    pub offer_pool_target: usize,
    pub offer_pool_max: usize,
    pub offer_refill_chance: f64,
    pub extract_probability: f64,
    pub held_fraction_min: f64,
    pub held_fraction_max: f64,
    pub bud_quantity_range: (u64, u64),
    pub extract_quantity_range: (u64, u64),

    // Territories
    pub map_reset_secs: f64,
    pub map_payout_cap: u64,
    pub map_negotiation_secs: f64,
    pub fine_fraction_range: (f64, f64),

    // Farm
    pub fertilized_bonus: f32,
    pub refine_buds_per_extract: u64,
    pub seed_price_factor: f64,
    /// Capacity cap per plot tier class (entry, rare, legendary).
    pub capacity_caps: [u8; 3],
    /// Plot upgrade cost (coins, crystals) per tier class.
    pub upgrade_costs: [(u64, u64); 3],

    // Progression
    pub xp_harvest: f32,
    pub xp_refine: f32,
    pub xp_offer: f32,
    pub xp_map_sale: f32,
    /// (aggregate reputation, level) AND-gates per tier index.
    pub tier_gates: [(u64, u32); 4],
}

impl Default for EconomyTuning {
    fn default() -> Self {
        Self {
            sale_multiplier: 1.1,
            extract_multiplier: 5.8,
            premium_conversion: 120,
            legendary_premium_floor: 5,
            premium_chance: [0.0, 0.05, 0.2, 0.75],
            wealth_floor: 0.4,
            wealth_pivot: 1000.0,
            wealth_exponent: 0.32,
            rep_bonus_divisor: 2000.0,

            rep_award_coins: 10,
            rep_award_crystals: 30,
            rep_damping: 0.6,
            rep_level_divisor: 8.0,
            partner_threshold: 200,

            offer_reset_secs: 1200.0,
            offer_pool_target: 3,
            offer_pool_max: 5,
            offer_refill_chance: 0.015,
            extract_probability: 0.4,
            held_fraction_min: 0.25,
            held_fraction_max: 0.6,
            bud_quantity_range: (2, 7),
            extract_quantity_range: (1, 2),

            map_reset_secs: 600.0,
            map_payout_cap: 6000,
            map_negotiation_secs: 2.5,
            fine_fraction_range: (0.10, 0.30),

            fertilized_bonus: 1.0,
            refine_buds_per_extract: 5,
            seed_price_factor: 0.5,
            capacity_caps: [3, 4, 5],
            upgrade_costs: [(500, 1), (2000, 5), (8000, 20)],

            xp_harvest: 15.0,
            xp_refine: 30.0,
            xp_offer: 50.0,
            xp_map_sale: 40.0,
            tier_gates: [(0, 1), (50, 2), (200, 5), (800, 12)],
        }
    }
}

impl EconomyTuning {
    pub fn capacity_cap(&self, class: TierClass) -> u8 {
        self.capacity_caps[class_index(class)]
    }

    pub fn upgrade_cost(&self, class: TierClass) -> (u64, u64) {
        self.upgrade_costs[class_index(class)]
    }

    /// Dampening multiplier applied to prices as net worth grows:
    /// `max(floor, (wealth/pivot)^exponent)`.
    pub fn wealth_factor(&self, total_wealth: f64) -> f64 {
        let scaled = (total_wealth / self.wealth_pivot).powf(self.wealth_exponent);
        scaled.max(self.wealth_floor)
    }

    /// Damped reputation gain: shrinks as the player levels, keeping
    /// tier-unlock pacing roughly linear in play time.
    pub fn reputation_gain(&self, base: u64, level: u32) -> u64 {
        let damped = (base as f64 * self.rep_damping
            / (1.0 + level as f64 / self.rep_level_divisor))
            .floor();
        (damped as u64).max(1)
    }
}

fn class_index(class: TierClass) -> usize {
    match class {
        TierClass::Entry => 0,
        TierClass::Rare => 1,
        TierClass::Legendary => 2,
    }
}

// ═══════════════════════════════════════════════════════════════════════
// REQUEST EVENTS — the only mutation surface exposed to the UI
// ═══════════════════════════════════════════════════════════════════════

#[derive(Event, Debug, Clone)]
pub struct PlantRequest {
    pub plot_id: u8,
    pub cultivar_id: CultivarId,
}

#[derive(Event, Debug, Clone)]
pub struct WaterRequest {
    pub plot_id: u8,
}

#[derive(Event, Debug, Clone)]
pub struct IlluminateRequest {
    pub plot_id: u8,
}

#[derive(Event, Debug, Clone)]
pub struct FertilizeRequest {
    pub plot_id: u8,
}

#[derive(Event, Debug, Clone)]
pub struct PruneRequest {
    pub plot_id: u8,
}

#[derive(Event, Debug, Clone)]
pub struct HarvestRequest {
    pub plot_id: u8,
}

#[derive(Event, Debug, Clone)]
pub struct AcceptOfferRequest {
    pub offer_id: u64,
}

#[derive(Event, Debug, Clone)]
pub struct StartMapDealRequest {
    pub offer_id: u64,
}

#[derive(Event, Debug, Clone)]
pub struct CancelMapDealRequest;

#[derive(Event, Debug, Clone)]
pub struct PurchaseSeedRequest {
    pub cultivar_id: CultivarId,
}

#[derive(Event, Debug, Clone)]
pub struct PurchaseFertilizerRequest {
    pub quantity: u64,
}

#[derive(Event, Debug, Clone)]
pub struct PurchaseCosmeticRequest {
    pub cosmetic_id: String,
}

#[derive(Event, Debug, Clone)]
pub struct EquipCosmeticRequest {
    pub cosmetic_id: String,
}

#[derive(Event, Debug, Clone)]
pub struct PurchaseUpgradeRequest {
    pub upgrade_id: String,
}

#[derive(Event, Debug, Clone)]
pub struct UnlockPlotRequest {
    pub plot_id: u8,
}

#[derive(Event, Debug, Clone)]
pub struct UpgradePlotRequest {
    pub plot_id: u8,
}

#[derive(Event, Debug, Clone)]
pub struct RefineRequest {
    pub cultivar_id: CultivarId,
}

#[derive(Event, Debug, Clone)]
pub struct GreetRequest {
    pub counterparty_id: CounterpartyId,
}

#[derive(Event, Debug, Clone)]
pub struct SaveRequestEvent;

#[derive(Event, Debug, Clone)]
pub struct LoadRequestEvent;

// ═══════════════════════════════════════════════════════════════════════
// NOTIFICATION EVENTS — cross-domain + UI read side
// ═══════════════════════════════════════════════════════════════════════

#[derive(Event, Debug, Clone)]
pub struct HarvestedEvent {
    pub plot_id: u8,
    pub cultivar_id: CultivarId,
    pub quantity: u64,
}

#[derive(Event, Debug, Clone)]
pub struct OfferAcceptedEvent {
    pub offer_id: u64,
    pub counterparty_id: CounterpartyId,
    pub reputation_gain: u64,
}

#[derive(Event, Debug, Clone)]
pub struct DealResolvedEvent {
    pub territory_id: TerritoryId,
    pub busted: bool,
    pub payout: u64,
    pub fine: u64,
}

#[derive(Event, Debug, Clone)]
pub struct ExperienceEvent {
    pub points: f32,
}

#[derive(Event, Debug, Clone)]
pub struct LevelUpEvent {
    pub new_level: u32,
    pub reward_cultivar: CultivarId,
}

#[derive(Event, Debug, Clone)]
pub struct TierUnlockedEvent {
    pub tier: Tier,
}

#[derive(Event, Debug, Clone)]
pub struct GreetingEvent {
    pub counterparty_id: CounterpartyId,
    pub text: String,
}

/// Fired after a full offer-pool refresh; the save domain autosaves on it.
#[derive(Event, Debug, Clone)]
pub struct OfferPoolResetEvent;

// ═══════════════════════════════════════════════════════════════════════
// CONSTANTS
// ═══════════════════════════════════════════════════════════════════════

pub const TOTAL_PLOTS: u8 = 12;
pub const STARTING_UNLOCKED_PLOTS: u8 = 6;
pub const STARTING_COINS: u64 = 150;
pub const STARTER_SEED: &str = "emerald_sprout";
pub const STARTER_SEED_COUNT: u64 = 3;
pub const FERTILIZER_KEY: &str = "fertilizer";
pub const FERTILIZER_PRICE: u64 = 40;

pub const UPGRADE_GOLDEN_SHEARS: &str = "golden_shears";
pub const UPGRADE_HYDRO_SYSTEM: &str = "hydro_system";
pub const UPGRADE_HARVEST_RIG: &str = "harvest_rig";
