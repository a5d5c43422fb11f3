//! Pure growth math over `Plot` and the absolute clock.
//!
//! A plot only accrues progress while occupied, watered and illuminated.
//! `growth_anchor` holds the clock instant those conditions were last
//! satisfied; `accumulated_growth` folds in everything earned before that.
//! Reading growth is therefore idempotent: the same `now` always yields
//! the same value, no matter how often it is asked.

use crate::shared::*;

/// All conditions under which a plot accrues growth.
pub fn growing_conditions_met(plot: &Plot) -> bool {
    plot.is_occupied() && plot.watered && plot.illuminated
}

/// Seconds to full maturity for this cultivar, after upgrade speedups.
pub fn effective_duration(def: &CultivarDef, player: &PlayerState) -> f64 {
    def.growth_secs / player.growth_speed()
}

/// Growth fraction in [0, 1] at the given clock time.
pub fn growth_at(plot: &Plot, now: f64, duration: f64) -> f32 {
    if !plot.is_occupied() {
        return 0.0;
    }
    let mut growth = plot.accumulated_growth;
    if let Some(anchor) = plot.growth_anchor {
        if duration > 0.0 {
            growth += ((now - anchor).max(0.0) / duration) as f32;
        }
    }
    growth.clamp(0.0, 1.0)
}

/// Folds accrued progress into `accumulated_growth` and re-anchors.
///
/// Call this whenever a condition flag changes (and once per frame from
/// the farm plugin). Pausing a condition keeps the progress earned so
/// far; restoring it resumes from the fold, never from zero.
pub fn sync_growth(plot: &mut Plot, now: f64, duration: f64) {
    plot.accumulated_growth = growth_at(plot, now, duration);
    plot.growth_anchor = if growing_conditions_met(plot) && plot.accumulated_growth < 1.0 {
        Some(now)
    } else {
        None
    };
}

/// Whether the plot has reached full growth.
pub fn is_ready(plot: &Plot, now: f64, duration: f64) -> bool {
    plot.is_occupied() && growth_at(plot, now, duration) >= 1.0
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn planted_plot() -> Plot {
        let mut plot = Plot::new(0, Tier::Common, true, false);
        plot.cultivar_id = Some("emerald_sprout".into());
        plot
    }

    #[test]
    fn growth_reaches_one_after_full_duration() {
        let mut plot = planted_plot();
        plot.watered = true;
        plot.illuminated = true;
        sync_growth(&mut plot, 0.0, 15.0);

        assert!(growth_at(&plot, 7.5, 15.0) - 0.5 < 1e-4);
        assert_eq!(growth_at(&plot, 15.0, 15.0), 1.0);
        // Overshooting the duration clamps.
        assert_eq!(growth_at(&plot, 400.0, 15.0), 1.0);
    }

    #[test]
    fn rereading_with_unchanged_clock_is_idempotent() {
        let mut plot = planted_plot();
        plot.watered = true;
        plot.illuminated = true;
        sync_growth(&mut plot, 0.0, 15.0);

        sync_growth(&mut plot, 6.0, 15.0);
        let first = plot.accumulated_growth;
        sync_growth(&mut plot, 6.0, 15.0);
        sync_growth(&mut plot, 6.0, 15.0);
        assert_eq!(plot.accumulated_growth, first);
        assert_eq!(growth_at(&plot, 6.0, 15.0), first);
    }

    #[test]
    fn clearing_a_condition_pauses_but_keeps_progress() {
        let mut plot = planted_plot();
        plot.watered = true;
        plot.illuminated = true;
        sync_growth(&mut plot, 0.0, 15.0);

        // 6 seconds in, the light goes out.
        plot.illuminated = false;
        sync_growth(&mut plot, 6.0, 15.0);
        let paused = plot.accumulated_growth;
        assert!(paused > 0.39 && paused < 0.41);
        assert!(plot.growth_anchor.is_none());

        // A long dark stretch accrues nothing.
        assert_eq!(growth_at(&plot, 1000.0, 15.0), paused);

        // Light restored: growth resumes from the fold.
        plot.illuminated = true;
        sync_growth(&mut plot, 1000.0, 15.0);
        let resumed = growth_at(&plot, 1003.0, 15.0);
        assert!(resumed > paused);
        assert!(resumed < 1.0);
    }

    #[test]
    fn unoccupied_plot_never_grows() {
        let mut plot = Plot::new(3, Tier::Rare, true, false);
        plot.watered = true;
        plot.illuminated = true;
        sync_growth(&mut plot, 0.0, 90.0);
        assert!(plot.growth_anchor.is_none());
        assert_eq!(growth_at(&plot, 500.0, 90.0), 0.0);
    }

    #[test]
    fn hydro_system_halves_the_duration() {
        let mut player = PlayerState::default();
        let def = CultivarDef {
            id: "emerald_sprout".into(),
            name: "Emerald Sprout".into(),
            tier: Tier::Common,
            growth_secs: 15.0,
            base_value: 12,
            crystal_price: None,
        };
        assert_eq!(effective_duration(&def, &player), 15.0);
        player.owned_upgrades.push(UPGRADE_HYDRO_SYSTEM.into());
        assert_eq!(effective_duration(&def, &player), 7.5);
    }
}
