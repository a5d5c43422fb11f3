use crate::shared::*;

/// Populate the CultivarRegistry with all cultivar definitions.
///
/// Growth times and base values follow a steep curve: the entry cultivars
/// mature in under a minute and sell for pocket change, while the
/// legendary ones take up to 15 minutes and anchor the endgame economy.
/// Legendary seeds are priced in crystals; everything else in coins.
pub fn populate_cultivars(registry: &mut CultivarRegistry) {
    let cultivars: Vec<CultivarDef> = vec![
        // ── Common ──────────────────────────────────────────────────────────
        CultivarDef {
            id: "emerald_sprout".into(),
            name: "Emerald Sprout".into(),
            tier: Tier::Common,
            growth_secs: 15.0,
            base_value: 12,
            crystal_price: None,
        },
        CultivarDef {
            id: "lumen_zest".into(),
            name: "Lumen Zest".into(),
            tier: Tier::Common,
            growth_secs: 25.0,
            base_value: 24,
            crystal_price: None,
        },
        // ── Uncommon ────────────────────────────────────────────────────────
        CultivarDef {
            id: "azure_bloom".into(),
            name: "Azure Bloom".into(),
            tier: Tier::Uncommon,
            growth_secs: 40.0,
            base_value: 50,
            crystal_price: None,
        },
        CultivarDef {
            id: "verdant_spire".into(),
            name: "Verdant Spire".into(),
            tier: Tier::Uncommon,
            growth_secs: 55.0,
            base_value: 90,
            crystal_price: None,
        },
        // ── Rare ────────────────────────────────────────────────────────────
        CultivarDef {
            id: "violet_haze".into(),
            name: "Violet Haze".into(),
            tier: Tier::Rare,
            growth_secs: 90.0,
            base_value: 300,
            crystal_price: None,
        },
        CultivarDef {
            id: "cerulean_dream".into(),
            name: "Cerulean Dream".into(),
            tier: Tier::Rare,
            growth_secs: 120.0,
            base_value: 650,
            crystal_price: None,
        },
        CultivarDef {
            id: "rosy_whisper".into(),
            name: "Rosy Whisper".into(),
            tier: Tier::Rare,
            growth_secs: 150.0,
            base_value: 1_100,
            crystal_price: None,
        },
        CultivarDef {
            id: "silver_veil".into(),
            name: "Silver Veil".into(),
            tier: Tier::Rare,
            growth_secs: 180.0,
            base_value: 1_800,
            crystal_price: None,
        },
        CultivarDef {
            id: "sun_herald".into(),
            name: "Sun Herald".into(),
            tier: Tier::Rare,
            growth_secs: 220.0,
            base_value: 2_800,
            crystal_price: None,
        },
        // ── Legendary ───────────────────────────────────────────────────────
        CultivarDef {
            id: "neon_oracle".into(),
            name: "Neon Oracle".into(),
            tier: Tier::Legendary,
            growth_secs: 300.0,
            base_value: 8_000,
            crystal_price: Some(5),
        },
        CultivarDef {
            id: "polar_aurora".into(),
            name: "Polar Aurora".into(),
            tier: Tier::Legendary,
            growth_secs: 450.0,
            base_value: 18_000,
            crystal_price: Some(15),
        },
        CultivarDef {
            id: "platinum_crown".into(),
            name: "Platinum Crown".into(),
            tier: Tier::Legendary,
            growth_secs: 600.0,
            base_value: 45_000,
            crystal_price: Some(50),
        },
        CultivarDef {
            id: "nebula_heart".into(),
            name: "Nebula Heart".into(),
            tier: Tier::Legendary,
            growth_secs: 900.0,
            base_value: 120_000,
            crystal_price: Some(200),
        },
    ];

    for cultivar in cultivars {
        registry.cultivars.insert(cultivar.id.clone(), cultivar);
    }
}
