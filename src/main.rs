mod shared;
mod clock;
mod farm;
mod market;
mod economy;
mod progression;
mod npcs;
mod save;
mod data;

use std::time::Duration;

use bevy::app::ScheduleRunnerPlugin;
use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

use shared::*;

fn main() {
    App::new()
        .add_plugins(
            MinimalPlugins
                .set(ScheduleRunnerPlugin::run_loop(Duration::from_millis(50))),
        )
        .add_plugins(LogPlugin::default())
        .add_plugins(StatesPlugin)
        // Game state
        .init_state::<GameState>()
        // Shared resources
        .init_resource::<PlayerState>()
        .init_resource::<FarmState>()
        .init_resource::<CultivarRegistry>()
        .init_resource::<CounterpartyRegistry>()
        .init_resource::<TerritoryRegistry>()
        .init_resource::<CosmeticRegistry>()
        .init_resource::<UpgradeRegistry>()
        .init_resource::<ExpansionCatalog>()
        .init_resource::<OfferPool>()
        .init_resource::<MapOfferBoard>()
        .init_resource::<PendingDeal>()
        .init_resource::<GameClock>()
        .init_resource::<MarketRng>()
        .init_resource::<EconomyTuning>()
        // Request events
        .add_event::<PlantRequest>()
        .add_event::<WaterRequest>()
        .add_event::<IlluminateRequest>()
        .add_event::<FertilizeRequest>()
        .add_event::<PruneRequest>()
        .add_event::<HarvestRequest>()
        .add_event::<AcceptOfferRequest>()
        .add_event::<StartMapDealRequest>()
        .add_event::<CancelMapDealRequest>()
        .add_event::<PurchaseSeedRequest>()
        .add_event::<PurchaseFertilizerRequest>()
        .add_event::<PurchaseCosmeticRequest>()
        .add_event::<EquipCosmeticRequest>()
        .add_event::<PurchaseUpgradeRequest>()
        .add_event::<UnlockPlotRequest>()
        .add_event::<UpgradePlotRequest>()
        .add_event::<RefineRequest>()
        .add_event::<GreetRequest>()
        .add_event::<SaveRequestEvent>()
        .add_event::<LoadRequestEvent>()
        // Notification events
        .add_event::<HarvestedEvent>()
        .add_event::<OfferAcceptedEvent>()
        .add_event::<DealResolvedEvent>()
        .add_event::<ExperienceEvent>()
        .add_event::<LevelUpEvent>()
        .add_event::<TierUnlockedEvent>()
        .add_event::<GreetingEvent>()
        .add_event::<OfferPoolResetEvent>()
        // Domain plugins
        .add_plugins(clock::ClockPlugin)
        .add_plugins(farm::FarmPlugin)
        .add_plugins(market::MarketPlugin)
        .add_plugins(economy::EconomyPlugin)
        .add_plugins(progression::ProgressionPlugin)
        .add_plugins(npcs::NpcPlugin)
        .add_plugins(save::SavePlugin)
        // Data loading
        .add_plugins(data::DataPlugin)
        .run();
}
