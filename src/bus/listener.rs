//! Listener trait and registration handle.

use std::fmt;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use futures::future::BoxFuture;

use crate::event::Event;

static NEXT_LISTENER_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque handle identifying one registration, returned by
/// [`EventBus::on`](crate::bus::EventBus::on).
///
/// Closures have no usable identity in Rust, so removal goes through this
/// id rather than by matching the callback itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

impl ListenerId {
    pub(crate) fn next() -> Self {
        Self(NEXT_LISTENER_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "listener-{}", self.0)
    }
}

/// A registered callback invoked for every matching emit.
///
/// Failures are isolated at the bus: an `Err` is logged under `name()` and
/// neither reaches the emitting caller nor blocks listeners registered
/// after this one.
#[async_trait]
pub trait EventListener: Send + Sync {
    /// Name used in structured logs when this listener fails.
    fn name(&self) -> &str;

    async fn handle(&self, event: Event) -> anyhow::Result<()>;
}

type Callback = Box<dyn Fn(Event) -> BoxFuture<'static, anyhow::Result<()>> + Send + Sync>;

/// Adapter turning an async closure into a named [`EventListener`].
pub struct FnListener {
    name: String,
    callback: Callback,
}

impl FnListener {
    pub fn new<F, Fut>(name: impl Into<String>, f: F) -> Self
    where
        F: Fn(Event) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
    {
        Self {
            name: name.into(),
            callback: Box::new(move |event| Box::pin(f(event))),
        }
    }
}

#[async_trait]
impl EventListener for FnListener {
    fn name(&self) -> &str {
        &self.name
    }

    async fn handle(&self, event: Event) -> anyhow::Result<()> {
        (self.callback)(event).await
    }
}
