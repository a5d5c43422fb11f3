//! NPC domain — the greeting boundary.
//!
//! Greeting text may come from an external generator the embedding
//! application injects. That collaborator is allowed to fail; the canned
//! line from the counterparty catalog always stands in, and no economy
//! state is ever touched on this path.

use bevy::prelude::*;

use crate::shared::*;

pub struct NpcPlugin;

impl Plugin for NpcPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GreetingProvider>().add_systems(
            Update,
            handle_greet.run_if(in_state(GameState::Playing)),
        );
    }
}

/// Injectable greeting source. The embedding application may replace
/// this resource with a closure backed by whatever generator it likes.
#[derive(Resource)]
pub struct GreetingProvider(
    pub Box<dyn Fn(&CounterpartyDef) -> Result<String, String> + Send + Sync>,
);

impl Default for GreetingProvider {
    fn default() -> Self {
        Self(Box::new(|_| Err("no greeting provider configured".into())))
    }
}

/// Resolves a greeting, falling back to the catalog line on any error.
pub fn greeting_for(provider: &GreetingProvider, def: &CounterpartyDef) -> String {
    match (provider.0)(def) {
        Ok(text) => text,
        Err(reason) => {
            info!(
                "[Npcs] Greeting provider failed for '{}' ({reason}) — using canned line",
                def.id
            );
            def.greeting.clone()
        }
    }
}

fn handle_greet(
    mut events: EventReader<GreetRequest>,
    provider: Res<GreetingProvider>,
    counterparties: Res<CounterpartyRegistry>,
    mut greetings: EventWriter<GreetingEvent>,
) {
    for ev in events.read() {
        let Some(def) = counterparties.get(&ev.counterparty_id) else {
            warn!("[Npcs] Greet failed — unknown counterparty '{}'", ev.counterparty_id);
            continue;
        };

        greetings.send(GreetingEvent {
            counterparty_id: def.id.clone(),
            text: greeting_for(&provider, def),
        });
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_def() -> CounterpartyDef {
        CounterpartyDef {
            id: "captain_moss".into(),
            name: "Captain Moss".into(),
            greeting: "Back again?".into(),
            demand: vec![],
            multiplier: 1.2,
            tier_required: None,
        }
    }

    #[test]
    fn provider_failure_falls_back_to_canned_line() {
        let provider = GreetingProvider::default();
        assert_eq!(greeting_for(&provider, &sample_def()), "Back again?");
    }

    #[test]
    fn injected_provider_text_wins() {
        let provider =
            GreetingProvider(Box::new(|def| Ok(format!("Welcome back, friend of {}!", def.name))));
        assert_eq!(
            greeting_for(&provider, &sample_def()),
            "Welcome back, friend of Captain Moss!"
        );
    }
}
