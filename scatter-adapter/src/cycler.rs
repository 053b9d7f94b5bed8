use alloc::sync::Arc;

use scatter::{Error, Result};

use crate::{Translation, TranslationTable};

/// Default period between translation changes.
pub const DEFAULT_CYCLE_PERIOD_MS: u64 = 1000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CyclerState {
    Idle,
    Running { next_due_ms: u64 },
    Cancelled,
}

/// Rotates a display index through a [`TranslationTable`] on a fixed period.
///
/// The cycler owns no timer. Adapters drive it either from a host interval timer (`fire()` once
/// per period) or from their frame loop (`tick(now_ms)`). It only advances between `start` and
/// `cancel`; a cancelled cycler never advances again, so a torn-down mount cannot keep cycling.
#[derive(Clone, Debug)]
pub struct TranslationCycler {
    table: Arc<TranslationTable>,
    period_ms: u64,
    index: usize,
    state: CyclerState,
}

impl TranslationCycler {
    pub fn new(table: Arc<TranslationTable>, period_ms: u64) -> Result<Self> {
        if period_ms == 0 {
            return Err(Error::InvalidCyclePeriod);
        }
        Ok(Self {
            table,
            period_ms,
            index: 0,
            state: CyclerState::Idle,
        })
    }

    pub fn table(&self) -> &TranslationTable {
        &self.table
    }

    pub fn period_ms(&self) -> u64 {
        self.period_ms
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> &Translation {
        // Tables are never empty and `index` is always reduced modulo `len`.
        &self.table.as_slice()[self.index]
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, CyclerState::Running { .. })
    }

    pub fn is_cancelled(&self) -> bool {
        self.state == CyclerState::Cancelled
    }

    pub fn next_due_ms(&self) -> Option<u64> {
        match self.state {
            CyclerState::Running { next_due_ms } => Some(next_due_ms),
            _ => None,
        }
    }

    /// Starts cycling; the first change is due one period after `now_ms`.
    ///
    /// No-op when already running or cancelled.
    pub fn start(&mut self, now_ms: u64) {
        if self.state != CyclerState::Idle {
            return;
        }
        adebug!(now_ms, period_ms = self.period_ms, "TranslationCycler::start");
        self.state = CyclerState::Running {
            next_due_ms: now_ms.saturating_add(self.period_ms),
        };
    }

    /// Stops cycling for good. Idempotent.
    pub fn cancel(&mut self) {
        if self.state == CyclerState::Cancelled {
            return;
        }
        adebug!(index = self.index, "TranslationCycler::cancel");
        self.state = CyclerState::Cancelled;
    }

    /// Advances by one step, as a host interval timer would.
    ///
    /// Returns `false` (and does nothing) unless running.
    pub fn fire(&mut self) -> bool {
        let CyclerState::Running { next_due_ms } = self.state else {
            return false;
        };
        self.state = CyclerState::Running {
            next_due_ms: next_due_ms.saturating_add(self.period_ms),
        };
        self.advance(1);
        true
    }

    /// Advances by every whole period elapsed up to `now_ms`.
    ///
    /// Returns `true` when at least one period elapsed.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let CyclerState::Running { next_due_ms } = self.state else {
            return false;
        };
        if now_ms < next_due_ms {
            return false;
        }
        let steps = (now_ms - next_due_ms) / self.period_ms + 1;
        self.state = CyclerState::Running {
            next_due_ms: next_due_ms.saturating_add(steps.saturating_mul(self.period_ms)),
        };
        self.advance(steps);
        true
    }

    fn advance(&mut self, steps: u64) {
        let len = self.table.len() as u64;
        let next = (self.index as u64 + steps % len) % len;
        self.index = next as usize;
        atrace!(index = self.index, code = %self.current().code, "TranslationCycler::advance");
    }
}
