//! Hold-to-roll gesture: preview rolls while the button is held, one committed roll at the end.
//!
//! The gesture is driven by the UI's timer and touch events. It never touches the game itself;
//! it only tells the caller whether to draw a preview (`preview_roll`) or run the roll
//! transaction (`commit_roll`). Release and the hold limit both finalize, and the `finalized`
//! flag makes sure only the first of them produces a commit.

use std::time::{Duration, Instant};

/// Timing for a hold gesture.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct HoldConfig {
    /// Minimum gap between preview rolls.
    pub tick_interval: Duration,
    /// Holding this long commits the roll without waiting for release.
    pub max_hold: Duration,
}

impl Default for HoldConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(100),
            max_hold: Duration::from_secs(7),
        }
    }
}

/// Events fed to the gesture.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum HoldInput {
    Press,
    Tick,
    MaxTimeElapsed,
    Release,
}

/// What the caller should do in response to an input.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum HoldStep {
    /// A hold began; draw an initial preview if wanted.
    Started,
    /// Draw a preview roll. Nothing is persisted.
    Preview,
    /// Run the roll transaction exactly once.
    Commit,
    Ignored,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum HoldPhase {
    Idle,
    Holding {
        started_at: Instant,
        last_preview_at: Instant,
    },
    /// The hold limit fired the commit; waiting for the finger to lift.
    Committing,
}

#[derive(Clone, Debug)]
pub struct HoldGesture {
    config: HoldConfig,
    phase: HoldPhase,
    finalized: bool,
}

impl Default for HoldGesture {
    fn default() -> Self {
        Self::new(HoldConfig::default())
    }
}

impl HoldGesture {
    pub fn new(config: HoldConfig) -> Self {
        Self {
            config,
            phase: HoldPhase::Idle,
            finalized: false,
        }
    }

    pub fn phase(&self) -> HoldPhase {
        self.phase
    }

    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    pub fn handle(&mut self, input: HoldInput, now: Instant) -> HoldStep {
        let step = match input {
            HoldInput::Press => self.press(now),
            HoldInput::Tick => self.tick(now),
            HoldInput::MaxTimeElapsed => self.expire(),
            HoldInput::Release => self.release(),
        };
        log::debug!("Hold {:?} -> {:?} ({:?})", input, step, self.phase);
        step
    }

    fn press(&mut self, now: Instant) -> HoldStep {
        self.finalized = false;
        self.phase = HoldPhase::Holding {
            started_at: now,
            last_preview_at: now,
        };
        HoldStep::Started
    }

    fn tick(&mut self, now: Instant) -> HoldStep {
        let HoldPhase::Holding {
            started_at,
            last_preview_at,
        } = self.phase
        else {
            return HoldStep::Ignored;
        };
        if now.saturating_duration_since(started_at) >= self.config.max_hold {
            return self.expire();
        }
        if now.saturating_duration_since(last_preview_at) >= self.config.tick_interval {
            self.phase = HoldPhase::Holding {
                started_at,
                last_preview_at: now,
            };
            return HoldStep::Preview;
        }
        HoldStep::Ignored
    }

    fn expire(&mut self) -> HoldStep {
        if self.finalized || !matches!(self.phase, HoldPhase::Holding { .. }) {
            return HoldStep::Ignored;
        }
        self.finalized = true;
        self.phase = HoldPhase::Committing;
        HoldStep::Commit
    }

    fn release(&mut self) -> HoldStep {
        let was_holding = matches!(self.phase, HoldPhase::Holding { .. });
        self.phase = HoldPhase::Idle;
        if self.finalized || !was_holding {
            return HoldStep::Ignored;
        }
        self.finalized = true;
        HoldStep::Commit
    }
}
