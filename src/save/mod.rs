use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::shared::*;

// ═══════════════════════════════════════════════════════════════════════
// PUBLIC TYPES
// ═══════════════════════════════════════════════════════════════════════

pub const SAVE_VERSION: u32 = 1;

/// The persisted blob: the player aggregate and the plot list. Catalog
/// data is never persisted — registries are rebuilt from the data layer
/// on every start.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveData {
    pub version: u32,
    pub player: PlayerState,
    pub plots: Vec<Plot>,
}

// ═══════════════════════════════════════════════════════════════════════
// EVENTS
// ═══════════════════════════════════════════════════════════════════════

/// Sent by SavePlugin after a save completes (success or failure).
#[derive(Event, Debug, Clone)]
pub struct SaveCompleteEvent {
    pub success: bool,
    pub error_message: Option<String>,
}

/// Sent by SavePlugin after a load completes. A missing or incompatible
/// blob counts as success with `fresh_start: true`.
#[derive(Event, Debug, Clone)]
pub struct LoadCompleteEvent {
    pub fresh_start: bool,
}

// ═══════════════════════════════════════════════════════════════════════
// RESOURCES
// ═══════════════════════════════════════════════════════════════════════

/// Where the blob lives on disk. Tests and embedders may point this
/// somewhere else before sending save/load requests.
#[derive(Resource, Debug, Clone)]
pub struct SavePath(pub PathBuf);

impl Default for SavePath {
    fn default() -> Self {
        let exe_dir = std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
            .unwrap_or_else(|| PathBuf::from("."));
        Self(exe_dir.join("saves").join("astrobotanica.json"))
    }
}

// ═══════════════════════════════════════════════════════════════════════
// PLUGIN
// ═══════════════════════════════════════════════════════════════════════

pub struct SavePlugin;

impl Plugin for SavePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SavePath>()
            .add_event::<SaveCompleteEvent>()
            .add_event::<LoadCompleteEvent>()
            .add_systems(
                Update,
                (handle_save_request, handle_load_request, autosave_on_pool_reset)
                    .run_if(in_state(GameState::Playing)),
            );
    }
}

// ═══════════════════════════════════════════════════════════════════════
// ENCODE / DECODE
// ═══════════════════════════════════════════════════════════════════════

pub fn encode(player: &PlayerState, farm: &FarmState) -> Result<String, String> {
    let data = SaveData {
        version: SAVE_VERSION,
        player: player.clone(),
        plots: farm.plots.clone(),
    };
    serde_json::to_string_pretty(&data).map_err(|e| format!("Serialization failed: {}", e))
}

/// Parses a blob, rejecting unknown versions. Callers treat any error as
/// "start fresh from defaults".
pub fn decode(json: &str) -> Result<SaveData, String> {
    let data: SaveData =
        serde_json::from_str(json).map_err(|e| format!("Deserialization failed: {}", e))?;
    if data.version != SAVE_VERSION {
        return Err(format!(
            "Save version {} is not supported (current: {})",
            data.version, SAVE_VERSION
        ));
    }
    Ok(data)
}

fn write_save(path: &PathBuf, player: &PlayerState, farm: &FarmState) -> Result<(), String> {
    if let Some(dir) = path.parent() {
        if !dir.exists() {
            fs::create_dir_all(dir)
                .map_err(|e| format!("Could not create saves directory: {}", e))?;
        }
    }

    let json = encode(player, farm)?;

    // Write to a temp file first, then rename for atomicity
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, &json)
        .map_err(|e| format!("Write failed for {}: {}", tmp_path.display(), e))?;
    fs::rename(&tmp_path, path).map_err(|e| format!("Rename failed: {}", e))?;

    Ok(())
}

fn read_save(path: &PathBuf) -> Result<SaveData, String> {
    if !path.exists() {
        return Err(format!("No save file at {}", path.display()));
    }
    let json = fs::read_to_string(path)
        .map_err(|e| format!("Read failed for {}: {}", path.display(), e))?;
    decode(&json)
}

// ═══════════════════════════════════════════════════════════════════════
// SYSTEMS
// ═══════════════════════════════════════════════════════════════════════

fn handle_save_request(
    mut save_events: EventReader<SaveRequestEvent>,
    mut complete_events: EventWriter<SaveCompleteEvent>,
    path: Res<SavePath>,
    player: Res<PlayerState>,
    farm: Res<FarmState>,
) {
    for _ in save_events.read() {
        match write_save(&path.0, &player, &farm) {
            Ok(()) => {
                info!("[Save] Saved to {}", path.0.display());
                complete_events.send(SaveCompleteEvent {
                    success: true,
                    error_message: None,
                });
            }
            Err(e) => {
                warn!("[Save] Save FAILED: {}", e);
                complete_events.send(SaveCompleteEvent {
                    success: false,
                    error_message: Some(e),
                });
            }
        }
    }
}

/// Applies a loaded blob, or reinitializes everything from defaults when
/// the blob is missing, unreadable or version-incompatible.
fn handle_load_request(
    mut load_events: EventReader<LoadRequestEvent>,
    mut complete_events: EventWriter<LoadCompleteEvent>,
    path: Res<SavePath>,
    mut player: ResMut<PlayerState>,
    mut farm: ResMut<FarmState>,
) {
    for _ in load_events.read() {
        match read_save(&path.0) {
            Ok(data) => {
                *player = data.player;
                farm.plots = data.plots;
                info!("[Save] Loaded from {}", path.0.display());
                complete_events.send(LoadCompleteEvent { fresh_start: false });
            }
            Err(e) => {
                warn!("[Save] Load fell back to defaults: {}", e);
                *player = PlayerState::default();
                *farm = FarmState::default();
                complete_events.send(LoadCompleteEvent { fresh_start: true });
            }
        }
    }
}

/// The offer-pool reset is the game's slow heartbeat, so it doubles as
/// the autosave trigger.
fn autosave_on_pool_reset(
    mut reset_events: EventReader<OfferPoolResetEvent>,
    mut save_writer: EventWriter<SaveRequestEvent>,
) {
    for _ in reset_events.read() {
        info!("[Save] Autosaving on offer-pool reset");
        save_writer.send(SaveRequestEvent);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blob_round_trips_player_and_plots() {
        let mut player = PlayerState::default();
        player.wallet.coins = 4_321;
        player.inventory.add("azure_bloom", 2);
        player.reputation.add("captain_moss", 40);
        let mut farm = FarmState::default();
        farm.plots[0].cultivar_id = Some("emerald_sprout".into());
        farm.plots[0].watered = true;

        let json = encode(&player, &farm).expect("encode");
        let data = decode(&json).expect("decode");
        assert_eq!(data.player.wallet.coins, 4_321);
        assert_eq!(data.player.inventory.count("azure_bloom"), 2);
        assert_eq!(data.player.reputation.total, 40);
        assert_eq!(data.plots[0].cultivar_id.as_deref(), Some("emerald_sprout"));
        assert!(data.plots[0].watered);
    }

    #[test]
    fn version_mismatch_is_rejected() {
        let player = PlayerState::default();
        let farm = FarmState::default();
        let json = encode(&player, &farm).unwrap();
        let bumped = json.replace(
            &format!("\"version\": {}", SAVE_VERSION),
            "\"version\": 999",
        );
        assert!(decode(&bumped).is_err());
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(decode("not json at all").is_err());
        assert!(decode("{}").is_err());
    }
}
