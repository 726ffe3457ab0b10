//! In-process publish/subscribe dispatcher.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                        EventBus                          │
//! │  on(kind, listener) / off(kind, id)                      │
//! │  emit(payload) ── append to history, then await each     │
//! │                   listener for that kind in order        │
//! │  history(filter, limit) / clear_history()                │
//! └──────────────────────────────────────────────────────────┘
//!            │                                │
//!            ▼                                ▼
//! ┌─────────────────────┐        ┌─────────────────────────┐
//! │ EventListener trait │        │ EventHistory (bounded   │
//! │ (async, named)      │        │ FIFO audit buffer)      │
//! └─────────────────────┘        └─────────────────────────┘
//! ```
//!
//! Delivery is best effort: no acknowledgment, no retry, no persistence.
//! A listener returning `Err` is logged and skipped over; it never fails
//! the emit or blocks listeners after it. Ordering is guaranteed only
//! within one kind's listener list on a single emit call.

mod event_bus;
mod history;
mod listener;

pub use event_bus::{EventBus, DEFAULT_HISTORY_CAPACITY};
pub use listener::{EventListener, FnListener, ListenerId};
