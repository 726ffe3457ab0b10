//! In-process event backbone for an MSP client portal.
//!
//! Three pieces:
//! - [`EventBus`] — publish/subscribe dispatcher with ordered per-kind
//!   listener lists and a bounded audit history. Best-effort delivery;
//!   listener failures are isolated and logged.
//! - [`handlers`] — the fixed cross-service listener set wired at boot
//!   (ticket triage, payment/service/shipment/chat logging).
//! - [`ai`] — the deterministic keyword-table classifier the triage
//!   handler runs over new tickets.
//!
//! The bus is an explicit value, not a global: construct one in an `Arc`
//! at startup, call [`register_cross_service_handlers`], and emit from the
//! route handlers after their database write succeeds.
//!
//! ```
//! use std::sync::Arc;
//! use portal_events::{register_cross_service_handlers, EventBus, EventPayload};
//!
//! # tokio_test::block_on(async {
//! let bus = Arc::new(EventBus::new());
//! register_cross_service_handlers(&bus);
//!
//! bus.emit(EventPayload::TicketCreated {
//!     ticket_id: uuid::Uuid::new_v4(),
//!     client_id: uuid::Uuid::new_v4(),
//!     title: "VPN keeps disconnecting".into(),
//!     description: "drops every few minutes since this morning".into(),
//! })
//! .await;
//! # });
//! ```

pub mod ai;
pub mod bus;
pub mod event;
pub mod handlers;

pub use bus::{EventBus, EventListener, FnListener, ListenerId, DEFAULT_HISTORY_CAPACITY};
pub use event::{Event, EventKind, EventPayload};
pub use handlers::register_cross_service_handlers;
