//! Progression domain — experience, levels and tier unlocks.
//!
//! Other domains only ever emit `ExperienceEvent`s; everything that
//! follows from them (level-ups, reward seeds, tier gates) is decided
//! here.

use bevy::prelude::*;
use rand::seq::SliceRandom;

use crate::shared::*;

pub struct ProgressionPlugin;

impl Plugin for ProgressionPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (apply_experience, reevaluate_tier_gates)
                .chain()
                .run_if(in_state(GameState::Playing)),
        );
    }
}

/// Folds experience points into the player, returning the number of
/// levels gained. Overshoot carries into the next level.
pub fn apply_points(player: &mut PlayerState, points: f32) -> u32 {
    let mut gained = 0;
    player.experience += points.max(0.0);
    while player.experience >= 100.0 {
        player.experience -= 100.0;
        player.level += 1;
        gained += 1;
    }
    gained
}

/// Reward band for a freshly reached level: the early game hands out
/// entry seeds, the late game legendaries.
pub fn reward_tier(level: u32) -> Tier {
    match level {
        0..=4 => Tier::Common,
        5..=9 => Tier::Uncommon,
        10..=14 => Tier::Rare,
        _ => Tier::Legendary,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Systems
// ─────────────────────────────────────────────────────────────────────────────

/// Accrues experience and hands out level-up reward seeds.
fn apply_experience(
    mut events: EventReader<ExperienceEvent>,
    mut player: ResMut<PlayerState>,
    cultivars: Res<CultivarRegistry>,
    mut rng: ResMut<MarketRng>,
    mut level_ups: EventWriter<LevelUpEvent>,
) {
    for ev in events.read() {
        if apply_points(&mut player, ev.points) == 0 {
            continue;
        }

        // One reward per level-up request, even when a large grant spans
        // multiple levels; the band tracks the level actually reached.
        let tier = reward_tier(player.level);
        let ids = cultivars.ids_in_tiers(&[tier]);
        let Some(reward) = ids.choose(&mut rng.0).cloned() else {
            warn!("[Progression] No {:?} cultivar available as reward", tier);
            continue;
        };

        player.inventory.add(&reward, 1);
        level_ups.send(LevelUpEvent {
            new_level: player.level,
            reward_cultivar: reward.clone(),
        });
        info!(
            "[Progression] Level {} reached — reward seed '{}'",
            player.level, reward
        );
    }
}

/// Re-checks every tier gate against the aggregate reputation and level.
/// Unlocks are strictly additive; a tier once unlocked is never removed.
fn reevaluate_tier_gates(
    mut player: ResMut<PlayerState>,
    tuning: Res<EconomyTuning>,
    mut tier_unlocked: EventWriter<TierUnlockedEvent>,
) {
    for tier in Tier::ALL {
        if player.tier_unlocked(tier) {
            continue;
        }
        let (rep_gate, level_gate) = tuning.tier_gates[tier.index()];
        if player.reputation.total >= rep_gate && player.level >= level_gate {
            player.unlocked_tiers.push(tier);
            tier_unlocked.send(TierUnlockedEvent { tier });
            info!("[Progression] Tier {:?} unlocked", tier);
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overshoot_carries_into_the_next_level() {
        let mut player = PlayerState::default();
        player.experience = 90.0;
        let gained = apply_points(&mut player, 50.0);
        assert_eq!(gained, 1);
        assert_eq!(player.level, 2);
        assert!((player.experience - 40.0).abs() < 1e-4);
    }

    #[test]
    fn a_large_grant_spans_multiple_levels() {
        let mut player = PlayerState::default();
        let gained = apply_points(&mut player, 250.0);
        assert_eq!(gained, 2);
        assert_eq!(player.level, 3);
        assert!((player.experience - 50.0).abs() < 1e-4);
    }

    #[test]
    fn reward_bands_cover_all_levels() {
        assert_eq!(reward_tier(1), Tier::Common);
        assert_eq!(reward_tier(5), Tier::Uncommon);
        assert_eq!(reward_tier(14), Tier::Rare);
        assert_eq!(reward_tier(40), Tier::Legendary);
    }

    #[test]
    fn negative_points_are_ignored() {
        let mut player = PlayerState::default();
        player.experience = 10.0;
        apply_points(&mut player, -500.0);
        assert_eq!(player.experience, 10.0);
        assert_eq!(player.level, 1);
    }
}
