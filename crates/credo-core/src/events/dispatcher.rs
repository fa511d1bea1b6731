//! EventDispatcher — synchronous event dispatch with zero overhead when empty.

use std::sync::Arc;

use tracing::warn;

use super::handler::CredibilityEventHandler;
use super::types::CredibilityEvent;

/// Synchronous event dispatcher wrapping a list of handlers.
///
/// When no handlers are registered, `dispatch` iterates over an empty Vec —
/// effectively zero cost.
#[derive(Default)]
pub struct EventDispatcher {
    handlers: Vec<Arc<dyn CredibilityEventHandler>>,
}

impl EventDispatcher {
    /// Create a new empty dispatcher.
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Register an event handler.
    pub fn register(&mut self, handler: Arc<dyn CredibilityEventHandler>) {
        self.handlers.push(handler);
    }

    /// Returns the number of registered handlers.
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Dispatch a single event to all registered handlers.
    /// A panicking handler does not prevent subsequent handlers from
    /// receiving the event.
    pub fn dispatch(&self, event: &CredibilityEvent) {
        for handler in &self.handlers {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                deliver(handler.as_ref(), event);
            }));
            if result.is_err() {
                warn!(?event, "event handler panicked; continuing with remaining handlers");
            }
        }
    }

    /// Dispatch a batch of events in order, e.g. the list returned by one
    /// engine operation.
    pub fn dispatch_all(&self, events: &[CredibilityEvent]) {
        for event in events {
            self.dispatch(event);
        }
    }
}

fn deliver(handler: &dyn CredibilityEventHandler, event: &CredibilityEvent) {
    match event {
        CredibilityEvent::TaskApproved(e) => handler.on_task_approved(e),
        CredibilityEvent::TaskRejected(e) => handler.on_task_rejected(e),
        CredibilityEvent::StreakBonusAwarded(e) => handler.on_streak_bonus_awarded(e),
        CredibilityEvent::TierImproved(e) => handler.on_tier_improved(e),
        CredibilityEvent::LowCredibilityWarning(e) => handler.on_low_credibility_warning(e),
        CredibilityEvent::RedemptionBonusUnlocked(e) => {
            handler.on_redemption_bonus_unlocked(e)
        }
        CredibilityEvent::RedemptionBonusExpired(e) => handler.on_redemption_bonus_expired(e),
    }
}
