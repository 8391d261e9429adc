//! The "copied" indicator.
//!
//! Each copy marks its symbol as the last copied one and schedules a clear
//! [`COPIED_INDICATOR_DURATION`] later. Scheduled clears are never cancelled;
//! when one fires it only takes effect if the symbol it was scheduled for is
//! still the last copied one, so an older clear can't wipe out the indicator
//! of a newer copy.

use std::time::{Duration, Instant};

/// How long a symbol shows as copied.
pub const COPIED_INDICATOR_DURATION: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingClear {
    symbol_id: String,
    due: Instant,
}

#[derive(Debug, Default)]
pub struct CopyIndicator {
    last_copied: Option<String>,
    pending: Vec<PendingClear>,
}

impl CopyIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id of the symbol currently shown as copied.
    pub fn last_copied(&self) -> Option<&str> {
        self.last_copied.as_deref()
    }

    pub fn is_copied(&self, symbol_id: &str) -> bool {
        self.last_copied.as_deref() == Some(symbol_id)
    }

    /// Mark `symbol_id` as copied at `now` and schedule its clear.
    pub fn mark(&mut self, symbol_id: &str, now: Instant) {
        self.last_copied = Some(symbol_id.to_string());
        self.pending.push(PendingClear {
            symbol_id: symbol_id.to_string(),
            due: now + COPIED_INDICATOR_DURATION,
        });
    }

    /// A scheduled clear for `symbol_id` firing.
    ///
    /// Returns whether the indicator was cleared.
    pub fn expire(&mut self, symbol_id: &str) -> bool {
        if self.is_copied(symbol_id) {
            self.last_copied = None;
            true
        } else {
            false
        }
    }

    /// Fire every scheduled clear due at or before `now`, oldest first.
    ///
    /// Returns whether the indicator changed.
    pub fn fire_due(&mut self, now: Instant) -> bool {
        let (due, pending): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|p| p.due <= now);
        self.pending = pending;

        let mut changed = false;
        for clear in due {
            changed |= self.expire(&clear.symbol_id);
        }
        changed
    }

    /// Earliest scheduled clear, if any.
    pub fn next_due(&self) -> Option<Instant> {
        self.pending.iter().map(|p| p.due).min()
    }
}
