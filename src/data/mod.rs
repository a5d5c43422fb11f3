//! Data layer — populates all registries at game startup.
//!
//! This plugin runs in OnEnter(GameState::Loading), fills every registry
//! (CultivarRegistry, CounterpartyRegistry, TerritoryRegistry,
//! CosmeticRegistry, UpgradeRegistry, ExpansionCatalog) from the
//! hard-coded game-design data defined in submodules, then transitions
//! the game into GameState::Playing.
//!
//! No other domain needs to seed these resources. All domain plugins can
//! safely read them once GameState has advanced past Loading.

mod cultivars;
mod counterparties;
mod territories;
mod goods;

use bevy::prelude::*;

use crate::shared::*;

pub struct DataPlugin;

impl Plugin for DataPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Loading), load_all_data);
    }
}

/// Single system that populates every registry and then transitions to Playing.
///
/// Registries reference each other only through string IDs, so there is no
/// hard dependency on population order here.
fn load_all_data(
    mut cultivar_registry: ResMut<CultivarRegistry>,
    mut counterparty_registry: ResMut<CounterpartyRegistry>,
    mut territory_registry: ResMut<TerritoryRegistry>,
    mut cosmetic_registry: ResMut<CosmeticRegistry>,
    mut upgrade_registry: ResMut<UpgradeRegistry>,
    mut expansion_catalog: ResMut<ExpansionCatalog>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    info!("DataPlugin: populating registries…");

    cultivars::populate_cultivars(&mut cultivar_registry);
    info!("  Cultivars loaded: {}", cultivar_registry.cultivars.len());

    counterparties::populate_counterparties(&mut counterparty_registry);
    info!(
        "  Counterparties loaded: {}",
        counterparty_registry.counterparties.len()
    );

    territories::populate_territories(&mut territory_registry);
    info!("  Territories loaded: {}", territory_registry.territories.len());

    goods::populate_cosmetics(&mut cosmetic_registry);
    goods::populate_upgrades(&mut upgrade_registry);
    goods::populate_expansions(&mut expansion_catalog);
    info!(
        "  Cosmetics: {}, upgrades: {}, plot expansions: {}",
        cosmetic_registry.cosmetics.len(),
        upgrade_registry.upgrades.len(),
        expansion_catalog.expansions.len()
    );

    info!("DataPlugin: all registries populated. Transitioning to Playing.");
    next_state.set(GameState::Playing);
}

/// Registries populated from the shipped catalog, for unit tests in
/// other domains.
#[cfg(test)]
pub fn test_registries() -> (CultivarRegistry, CounterpartyRegistry) {
    let mut cultivars = CultivarRegistry::default();
    cultivars::populate_cultivars(&mut cultivars);
    let mut cps = CounterpartyRegistry::default();
    counterparties::populate_counterparties(&mut cps);
    (cultivars, cps)
}
