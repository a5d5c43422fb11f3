use crate::shared::*;

/// Populate the CounterpartyRegistry with all trading counterparties.
///
/// Multipliers scale with the tier gate: ungated buyers pay close to list
/// price, the legendary-gated freighter pays 1.8x. The `demand` lists bias
/// which cultivars show up in generated offers once the pool reads them
/// through the registry; they also double as the seed range a business
/// partner sells from.
pub fn populate_counterparties(registry: &mut CounterpartyRegistry) {
    let counterparties: Vec<CounterpartyDef> = vec![
        CounterpartyDef {
            id: "captain_moss".into(),
            name: "Captain Moss".into(),
            greeting: "Back again? The greenhouse air suits you.".into(),
            demand: vec!["emerald_sprout".into(), "violet_haze".into()],
            multiplier: 1.2,
            tier_required: None,
        },
        CounterpartyDef {
            id: "zen_keeper".into(),
            name: "The Zen Keeper".into(),
            greeting: "Patience grows the finest harvests, friend.".into(),
            demand: vec!["silver_veil".into(), "verdant_spire".into()],
            multiplier: 1.25,
            tier_required: None,
        },
        CounterpartyDef {
            id: "pocket_broker".into(),
            name: "Pocket Broker".into(),
            greeting: "Quick deals, fair coin. Mostly fair.".into(),
            demand: vec!["azure_bloom".into(), "cerulean_dream".into()],
            multiplier: 1.3,
            tier_required: Some(Tier::Common),
        },
        CounterpartyDef {
            id: "slick_vendor".into(),
            name: "Slick Vendor".into(),
            greeting: "You didn't hear this price from me.".into(),
            demand: vec!["lumen_zest".into(), "sun_herald".into()],
            multiplier: 1.4,
            tier_required: Some(Tier::Rare),
        },
        CounterpartyDef {
            id: "old_pathfinder".into(),
            name: "Old Pathfinder".into(),
            greeting: "I've walked every market lane twice. Show me what you've got.".into(),
            demand: vec!["neon_oracle".into(), "rosy_whisper".into()],
            multiplier: 1.5,
            tier_required: Some(Tier::Rare),
        },
        CounterpartyDef {
            id: "hasty_lunar".into(),
            name: "Hasty Lunar".into(),
            greeting: "No time, no time. Name the quantity and be done.".into(),
            demand: vec!["polar_aurora".into(), "lumen_zest".into()],
            multiplier: 1.6,
            tier_required: Some(Tier::Rare),
        },
        CounterpartyDef {
            id: "stellar_freight".into(),
            name: "Stellar Freight Co.".into(),
            greeting: "Our manifests have room for the extraordinary.".into(),
            demand: vec!["nebula_heart".into(), "platinum_crown".into()],
            multiplier: 1.8,
            tier_required: Some(Tier::Legendary),
        },
    ];

    for cp in counterparties {
        registry.counterparties.insert(cp.id.clone(), cp);
    }
}
