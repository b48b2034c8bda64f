//! Screen shake after hard drops.
//!
//! The core only bumps a counter; this tracks the last value it saw and turns
//! every change into a short horizontal jitter of the play area.

use crate::types::SHAKE_DURATION_MS;

/// Largest displacement, in terminal columns.
const MAX_AMPLITUDE: i16 = 2;

/// Sign flips every this many milliseconds.
const JITTER_PERIOD_MS: u64 = 25;

#[derive(Debug, Clone, Default)]
pub struct ShakeEffect {
    seen: Option<u32>,
    started_ms: Option<u64>,
}

impl ShakeEffect {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the current trigger counter.
    ///
    /// The first value observed is the baseline. Any later change (re)starts
    /// the window at `now_ms`; returns whether it did.
    pub fn observe(&mut self, shake_trigger: u32, now_ms: u64) -> bool {
        let changed = self.seen.is_some_and(|prev| prev != shake_trigger);
        self.seen = Some(shake_trigger);
        if changed {
            self.started_ms = Some(now_ms);
        }
        changed
    }

    pub fn is_active(&self, now_ms: u64) -> bool {
        self.started_ms
            .is_some_and(|start| now_ms.saturating_sub(start) < SHAKE_DURATION_MS as u64)
    }

    /// Horizontal offset for a frame at `now_ms`; zero outside the window.
    pub fn offset(&self, now_ms: u64) -> i16 {
        let Some(start) = self.started_ms else {
            return 0;
        };
        let elapsed = now_ms.saturating_sub(start);
        let duration = SHAKE_DURATION_MS as u64;
        if elapsed >= duration {
            return 0;
        }

        let remaining = (duration - elapsed) as i64;
        let amplitude =
            ((MAX_AMPLITUDE as i64 * remaining + duration as i64 - 1) / duration as i64) as i16;
        if (elapsed / JITTER_PERIOD_MS) % 2 == 0 {
            amplitude
        } else {
            -amplitude
        }
    }
}
