//! The dispatcher itself.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tracing::{debug, warn};

use super::history::EventHistory;
use super::listener::{EventListener, FnListener, ListenerId};
use crate::event::{Event, EventKind, EventPayload};

/// Default audit-buffer capacity.
pub const DEFAULT_HISTORY_CAPACITY: usize = 1000;

/// Source recorded on events emitted without an explicit origin.
const DEFAULT_SOURCE: &str = "portal";

struct Registration {
    id: ListenerId,
    listener: Arc<dyn EventListener>,
}

/// In-process publish/subscribe dispatcher.
///
/// Construct one per process (or one per test) and share it via `Arc`;
/// there is deliberately no global instance. Internal state sits behind
/// `std::sync::Mutex` and locks are never held across an `.await`, so a
/// listener may re-enter the bus, e.g. to emit a follow-up event.
///
/// ## Example
///
/// ```
/// use std::sync::Arc;
/// use portal_events::{EventBus, EventKind, EventPayload};
///
/// # tokio_test::block_on(async {
/// let bus = Arc::new(EventBus::new());
/// bus.on_fn(EventKind::TicketUpdated, "audit", |event| async move {
///     println!("{}", event.to_json());
///     Ok(())
/// });
///
/// bus.emit(EventPayload::TicketUpdated {
///     ticket_id: uuid::Uuid::new_v4(),
///     status: "resolved".into(),
/// })
/// .await;
///
/// assert_eq!(bus.history(Some(EventKind::TicketUpdated), 100).len(), 1);
/// # });
/// ```
pub struct EventBus {
    listeners: Mutex<HashMap<EventKind, Vec<Registration>>>,
    history: Mutex<EventHistory>,
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    /// Create a bus with the default history capacity (1000 events).
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    /// Create a bus with a custom history capacity.
    pub fn with_capacity(history_capacity: usize) -> Self {
        Self {
            listeners: Mutex::new(HashMap::new()),
            history: Mutex::new(EventHistory::new(history_capacity)),
        }
    }

    /// Register `listener` for `kind`. Listeners for one kind are invoked
    /// in registration order on every emit.
    pub fn on(&self, kind: EventKind, listener: Arc<dyn EventListener>) -> ListenerId {
        let id = ListenerId::next();
        self.listeners
            .lock()
            .unwrap()
            .entry(kind)
            .or_default()
            .push(Registration { id, listener });
        id
    }

    /// Register an async closure as a named listener for `kind`.
    pub fn on_fn<F, Fut>(&self, kind: EventKind, name: &str, f: F) -> ListenerId
    where
        F: Fn(Event) -> Fut + Send + Sync + 'static,
        Fut: std::future::Future<Output = anyhow::Result<()>> + Send + 'static,
    {
        self.on(kind, Arc::new(FnListener::new(name, f)))
    }

    /// Remove the registration identified by `id`. Returns `false` if it
    /// was not registered under `kind`.
    pub fn off(&self, kind: EventKind, id: ListenerId) -> bool {
        let mut listeners = self.listeners.lock().unwrap();
        if let Some(list) = listeners.get_mut(&kind) {
            if let Some(pos) = list.iter().position(|r| r.id == id) {
                list.remove(pos);
                return true;
            }
        }
        false
    }

    /// Emit `payload` with the default source.
    pub async fn emit(&self, payload: EventPayload) {
        self.emit_from(payload, DEFAULT_SOURCE).await;
    }

    /// Emit `payload`, recording `source` as its origin.
    ///
    /// The event is appended to history first (evicting the oldest entry
    /// past capacity), then every listener registered for its kind runs
    /// sequentially, each awaited to completion before the next starts. A
    /// listener `Err` is logged and skipped over; `emit_from` itself never
    /// fails. Delivery is best effort only and does not survive restart.
    pub async fn emit_from(&self, payload: EventPayload, source: &str) {
        let event = Event::new(payload, source);
        let kind = event.kind();
        self.history.lock().unwrap().push(event.clone());

        // Snapshot the listener list under the lock and dispatch outside
        // it. An on/off racing this emit affects the next emit, not this
        // one, and listeners are free to re-enter the bus.
        let snapshot: Vec<(ListenerId, Arc<dyn EventListener>)> = {
            let listeners = self.listeners.lock().unwrap();
            listeners
                .get(&kind)
                .map(|list| {
                    list.iter()
                        .map(|r| (r.id, Arc::clone(&r.listener)))
                        .collect()
                })
                .unwrap_or_default()
        };

        debug!(kind = %kind, source = %event.source, listeners = snapshot.len(), "emitting event");

        for (id, listener) in snapshot {
            if let Err(error) = listener.handle(event.clone()).await {
                warn!(
                    kind = %kind,
                    listener = listener.name(),
                    id = %id,
                    error = %error,
                    "listener failed, continuing with remaining listeners"
                );
            }
        }
    }

    /// The most recent `limit` events in chronological order, optionally
    /// filtered to one kind.
    pub fn history(&self, filter: Option<EventKind>, limit: usize) -> Vec<Event> {
        self.history.lock().unwrap().recent(filter, limit)
    }

    /// Number of events currently held in the audit buffer.
    pub fn history_len(&self) -> usize {
        self.history.lock().unwrap().len()
    }

    /// Empty the audit buffer. Listener registrations are unaffected.
    pub fn clear_history(&self) {
        self.history.lock().unwrap().clear();
    }

    /// Number of listeners currently registered for `kind`.
    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.listeners
            .lock()
            .unwrap()
            .get(&kind)
            .map_or(0, Vec::len)
    }
}
