use crate::shared::*;

/// Populate the CosmeticRegistry. Cosmetics are pure flair: one equip
/// slot each, no gameplay effect.
pub fn populate_cosmetics(registry: &mut CosmeticRegistry) {
    let cosmetics: Vec<CosmeticDef> = vec![
        CosmeticDef {
            id: "aurora_cape".into(),
            name: "Aurora Cape".into(),
            slot: CosmeticSlot::Cape,
            price: 2_500,
            currency: Currency::Coins,
        },
        CosmeticDef {
            id: "comet_cape".into(),
            name: "Comet Cape".into(),
            slot: CosmeticSlot::Cape,
            price: 15,
            currency: Currency::Crystals,
        },
        CosmeticDef {
            id: "prism_ring".into(),
            name: "Prism Ring".into(),
            slot: CosmeticSlot::Jewelry,
            price: 4_000,
            currency: Currency::Coins,
        },
        CosmeticDef {
            id: "void_amulet".into(),
            name: "Void Amulet".into(),
            slot: CosmeticSlot::Jewelry,
            price: 25,
            currency: Currency::Crystals,
        },
        CosmeticDef {
            id: "gravity_lounge".into(),
            name: "Gravity Lounge".into(),
            slot: CosmeticSlot::Luxury,
            price: 50_000,
            currency: Currency::Coins,
        },
        CosmeticDef {
            id: "retro_grid".into(),
            name: "Retro Grid Theme".into(),
            slot: CosmeticSlot::HudTheme,
            price: 1_200,
            currency: Currency::Coins,
        },
        CosmeticDef {
            id: "synthwave".into(),
            name: "Synthwave Theme".into(),
            slot: CosmeticSlot::HudTheme,
            price: 10,
            currency: Currency::Crystals,
        },
    ];

    for cosmetic in cosmetics {
        registry.cosmetics.insert(cosmetic.id.clone(), cosmetic);
    }
}

/// Populate the UpgradeRegistry with the permanent farm upgrades.
pub fn populate_upgrades(registry: &mut UpgradeRegistry) {
    let upgrades: Vec<UpgradeDef> = vec![
        UpgradeDef {
            id: UPGRADE_GOLDEN_SHEARS.into(),
            name: "Golden Shears".into(),
            description: "Ready plots are pruned automatically.".into(),
            price: 1_500,
            currency: Currency::Coins,
        },
        UpgradeDef {
            id: UPGRADE_HYDRO_SYSTEM.into(),
            name: "Hydro System".into(),
            description: "Cultivars grow twice as fast.".into(),
            price: 5_000,
            currency: Currency::Coins,
        },
        UpgradeDef {
            id: UPGRADE_HARVEST_RIG.into(),
            name: "Harvest Rig".into(),
            description: "Every harvest yields 50% more buds.".into(),
            price: 12_000,
            currency: Currency::Coins,
        },
    ];

    for upgrade in upgrades {
        registry.upgrades.insert(upgrade.id.clone(), upgrade);
    }
}

/// Populate the ExpansionCatalog: one entry per locked plot in the fixed
/// layout. The two legendary plots are crystal-priced.
pub fn populate_expansions(catalog: &mut ExpansionCatalog) {
    catalog.expansions = vec![
        PlotExpansion {
            plot_id: 6,
            cost: 500,
            currency: Currency::Coins,
        },
        PlotExpansion {
            plot_id: 7,
            cost: 2_000,
            currency: Currency::Coins,
        },
        PlotExpansion {
            plot_id: 8,
            cost: 8_000,
            currency: Currency::Coins,
        },
        PlotExpansion {
            plot_id: 9,
            cost: 25_000,
            currency: Currency::Coins,
        },
        PlotExpansion {
            plot_id: 10,
            cost: 10,
            currency: Currency::Crystals,
        },
        PlotExpansion {
            plot_id: 11,
            cost: 50,
            currency: Currency::Crystals,
        },
    ];
}
