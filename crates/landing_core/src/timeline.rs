//! Deterministic driver for the reducer on a virtual clock.

use std::time::Duration;

use shared::domain::ItemId;
use tracing::{debug, info};

use crate::{
    intro::IntroStage,
    state::{update, Msg, TransitionRejected, UiAction, UiState},
};

#[derive(Debug, Clone, Copy, PartialEq)]
struct Pending {
    due: Duration,
    seq: u64,
    msg: Msg,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimelineEntry {
    pub at: Duration,
    pub msg: Msg,
    pub outcome: Result<IntroStage, TransitionRejected>,
}

/// Owns a `UiState` and delivers scheduled messages in due order.
#[derive(Debug, Clone)]
pub struct Timeline {
    state: UiState,
    now: Duration,
    seq: u64,
    queue: Vec<Pending>,
    log: Vec<TimelineEntry>,
    scrolled: Vec<ItemId>,
}

impl Timeline {
    pub fn new(state: UiState) -> Self {
        Self {
            state,
            now: Duration::ZERO,
            seq: 0,
            queue: Vec::new(),
            log: Vec::new(),
            scrolled: Vec::new(),
        }
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn log(&self) -> &[TimelineEntry] {
        &self.log
    }

    /// Items the host was asked to scroll into view, in order.
    pub fn scrolled(&self) -> &[ItemId] {
        &self.scrolled
    }

    /// Applies `msg` now and queues whatever it schedules.
    pub fn dispatch(&mut self, msg: Msg) -> Result<IntroStage, TransitionRejected> {
        let outcome = update(&mut self.state, msg);
        let result = match outcome {
            Ok(actions) => {
                for action in actions {
                    self.enqueue(action);
                }
                Ok(self.state.stage())
            }
            Err(reason) => Err(reason),
        };
        self.log.push(TimelineEntry {
            at: self.now,
            msg,
            outcome: result,
        });
        result
    }

    fn enqueue(&mut self, action: UiAction) {
        match action {
            UiAction::Schedule { after, msg } => {
                self.seq += 1;
                debug!(?msg, due_ms = (self.now + after).as_millis(), "queued ui timer");
                self.queue.push(Pending {
                    due: self.now + after,
                    seq: self.seq,
                    msg,
                });
            }
            UiAction::ScrollIntoView(id) => self.scrolled.push(id),
        }
    }

    fn next_due(&self, limit: Duration) -> Option<usize> {
        self.queue
            .iter()
            .enumerate()
            .filter(|(_, pending)| pending.due <= limit)
            .min_by_key(|(_, pending)| (pending.due, pending.seq))
            .map(|(index, _)| index)
    }

    /// Moves the clock forward by `by`, delivering every message that falls
    /// due on the way. Rejections are logged, not returned.
    pub fn advance(&mut self, by: Duration) {
        let target = self.now + by;
        while let Some(index) = self.next_due(target) {
            let pending = self.queue.remove(index);
            self.now = pending.due;
            if let Err(reason) = self.dispatch(pending.msg) {
                info!(%reason, at_ms = self.now.as_millis(), "scheduled ui message dropped");
            }
        }
        self.now = target;
    }

    /// Delivers everything still queued, including what those deliveries
    /// schedule in turn.
    pub fn run_until_idle(&mut self) {
        while let Some(due) = self.queue.iter().map(|pending| pending.due).min() {
            let by = due.saturating_sub(self.now);
            self.advance(by);
        }
    }

    pub fn into_state(self) -> UiState {
        self.state
    }
}

#[cfg(test)]
#[path = "tests/timeline_tests.rs"]
mod tests;
