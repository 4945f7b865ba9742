//! # Controller Events
//!
//! Zero-payload notifications the controller broadcasts to the host.
//! Modeled as a plain observer list: delivery order is subscription
//! order, and an observer removed between broadcasts simply stops
//! receiving. There is no delivery guarantee for an observer that
//! unsubscribes mid-stream.

/// Observable controller notifications.
///
/// All variants carry no payload; the host reads controller state
/// through accessors if it needs detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GizmoEvent {
    /// A transform mode was activated via `switch_on_mode`.
    ModeEnabled,
    /// The transform mode was deactivated via `switch_off_mode`.
    ModeDisabled,
    /// A grab began; emitted before the first engine tick.
    ManipulationStarted,
    /// A grab ended; emitted before the engine timer is cancelled.
    ManipulationStopped,
}

/// Handle returned by [`EventBus::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(GizmoEvent)>;

/// Ordered observer list for [`GizmoEvent`] broadcasts.
#[derive(Default)]
pub struct EventBus {
    next_id: u64,
    observers: Vec<(SubscriptionId, Observer)>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer. Observers are invoked in subscription order.
    pub fn subscribe(&mut self, observer: impl FnMut(GizmoEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer. Returns false when the id is unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != before
    }

    /// Number of live observers.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub(crate) fn emit(&mut self, event: GizmoEvent) {
        for (_, observer) in &mut self.observers {
            observer(event);
        }
    }
}
