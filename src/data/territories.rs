use crate::shared::*;

/// Populate the TerritoryRegistry with the three delivery zones.
///
/// Risk and reward climb together: the quiet outskirts pay below list
/// price but almost never go wrong, while the astral quarter pays 1.6x,
/// is exempt from the payout cap, and busts one deal in three.
pub fn populate_territories(registry: &mut TerritoryRegistry) {
    let territories: Vec<TerritoryDef> = vec![
        TerritoryDef {
            id: "outer_burbs".into(),
            name: "Outer Burbs".into(),
            risk_chance: 0.05,
            price_multiplier: 0.8,
            premium: false,
        },
        TerritoryDef {
            id: "neon_downtown".into(),
            name: "Neon Downtown".into(),
            risk_chance: 0.15,
            price_multiplier: 1.1,
            premium: false,
        },
        TerritoryDef {
            id: "astral_quarter".into(),
            name: "Astral Quarter".into(),
            risk_chance: 0.35,
            price_multiplier: 1.6,
            premium: true,
        },
    ];

    for territory in territories {
        registry.territories.insert(territory.id.clone(), territory);
    }
}
