use rand::Rng;
use serde::{Deserialize, Serialize};

use duelsnake_core::time::IntervalTrigger;

use crate::config::DuelConfig;

/// Draw the hidden gap for a round from `[gap_min, gap_max)`.
pub fn roll_gap<R: Rng + ?Sized>(rng: &mut R, config: &DuelConfig) -> f64 {
    let (min, max) = (config.powerup_gap_min_secs, config.powerup_gap_max_secs);
    if max > min {
        rng.random_range(min..max)
    } else {
        min
    }
}

/// What the schedule wants done this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleAction {
    Hide,
    Show,
}

/// Visibility timing for the power-up.
///
/// While shown, `visible_window` counts down the on-screen time. While
/// hidden, `gap` counts from the moment it was hidden (timeout or pickup).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerUpSchedule {
    visible: bool,
    visible_window: IntervalTrigger,
    gap: IntervalTrigger,
}

impl PowerUpSchedule {
    /// A hidden schedule whose first gap starts at `now`.
    pub fn new<R: Rng + ?Sized>(rng: &mut R, config: &DuelConfig, now: f64) -> Self {
        Self {
            visible: false,
            visible_window: IntervalTrigger::new(config.powerup_visible_secs, now),
            gap: IntervalTrigger::new(roll_gap(rng, config), now),
        }
    }

    /// Return to hidden with a freshly rolled gap starting at `now`.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R, config: &DuelConfig, now: f64) {
        *self = Self::new(rng, config, now);
    }

    /// Check the timers at `now`. Never asks to show while already shown.
    pub fn poll(&mut self, now: f64) -> Option<ScheduleAction> {
        if self.visible {
            self.visible_window.fire(now).then_some(ScheduleAction::Hide)
        } else {
            self.gap.fire(now).then_some(ScheduleAction::Show)
        }
    }

    pub fn mark_shown(&mut self, now: f64) {
        self.visible = true;
        self.visible_window.rearm(now);
    }

    pub fn mark_hidden(&mut self, now: f64) {
        self.visible = false;
        self.gap.rearm(now);
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn hidden_at(&self) -> f64 {
        self.gap.last_fired()
    }

    /// Hidden gap rolled for this round.
    pub fn gap(&self) -> f64 {
        self.gap.interval()
    }
}
