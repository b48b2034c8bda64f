//! Gravity scheduler.
//!
//! The loop is driven by the caller's clock: `frame` is called once per
//! display frame with a monotonic timestamp in milliseconds. Gravity only runs
//! while the session is playing; leaving `Playing` disarms the schedule and
//! coming back starts a fresh interval.

use std::time::Duration;

use tracing::{debug, trace};

use neo_tetris_core::{GameState, MoveOutcome};

/// What a single frame did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Not playing; nothing scheduled.
    Idle,
    /// Schedule (re-)armed on this frame; no drop yet.
    Armed,
    /// Armed, interval not yet exceeded.
    Waiting,
    /// One gravity step was applied.
    Dropped(MoveOutcome),
}

impl FrameOutcome {
    pub fn dropped(self) -> bool {
        matches!(self, FrameOutcome::Dropped(_))
    }
}

#[derive(Debug, Clone, Default)]
pub struct GameLoop {
    last_drop_ms: Option<u64>,
}

impl GameLoop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_armed(&self) -> bool {
        self.last_drop_ms.is_some()
    }

    /// Forget the schedule; the next playing frame re-arms it.
    pub fn disarm(&mut self) {
        self.last_drop_ms = None;
    }

    /// Advance one frame.
    ///
    /// Drops once when strictly more than the current level's interval has
    /// elapsed since the last drop (or since arming). The interval is read
    /// from `state` every frame so level changes apply immediately.
    pub fn frame(&mut self, state: &mut GameState, now_ms: u64) -> FrameOutcome {
        if !state.is_playing() {
            if self.last_drop_ms.take().is_some() {
                debug!(status = state.status().as_str(), "gravity disarmed");
            }
            return FrameOutcome::Idle;
        }

        let Some(last) = self.last_drop_ms else {
            self.last_drop_ms = Some(now_ms);
            debug!(now_ms, interval_ms = state.drop_interval_ms(), "gravity armed");
            return FrameOutcome::Armed;
        };

        let interval = u64::from(state.drop_interval_ms());
        if now_ms.saturating_sub(last) <= interval {
            return FrameOutcome::Waiting;
        }

        self.last_drop_ms = Some(now_ms);
        let outcome = state.gravity_drop();
        trace!(now_ms, ?outcome, "gravity drop");
        FrameOutcome::Dropped(outcome)
    }

    /// Time left before the next frame would drop.
    ///
    /// `None` while disarmed or not playing. Zero when a drop is due.
    pub fn time_until_drop(&self, state: &GameState, now_ms: u64) -> Option<Duration> {
        if !state.is_playing() {
            return None;
        }
        let last = self.last_drop_ms?;
        // A drop needs strictly more than the interval.
        let due = last
            .saturating_add(u64::from(state.drop_interval_ms()))
            .saturating_add(1);
        Some(Duration::from_millis(due.saturating_sub(now_ms)))
    }
}
