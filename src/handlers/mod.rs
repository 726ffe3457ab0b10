//! Cross-service wiring.
//!
//! One listener per portal lifecycle event, registered once at process
//! startup. Only the ticket-triage handler has a real body today: it runs
//! the heuristic classifier and publishes the verdict back on the bus. The
//! rest log the event and stop there — their durable side effects (receipt
//! generation, notification fan-out, provisioning hooks) belong to the
//! portal's persistence layer and are not implemented here.

mod chat;
mod payments;
mod services;
mod shipments;
mod tickets;

pub use chat::ChatActivityHandler;
pub use payments::PaymentLogHandler;
pub use services::ServiceLifecycleHandler;
pub use shipments::ShipmentTrackingHandler;
pub use tickets::{TicketTriageHandler, TicketUpdatedHandler};

use std::sync::Arc;

use crate::bus::EventBus;
use crate::event::EventKind;

/// Register the portal's fixed listener set on `bus`. Call once at boot.
///
/// The triage handler keeps a `Weak` reference back to the bus so it can
/// emit `ticket:classified` without creating a reference cycle.
pub fn register_cross_service_handlers(bus: &Arc<EventBus>) {
    bus.on(
        EventKind::TicketCreated,
        Arc::new(TicketTriageHandler::new(Arc::downgrade(bus))),
    );
    bus.on(EventKind::TicketUpdated, Arc::new(TicketUpdatedHandler));

    let payments = Arc::new(PaymentLogHandler);
    bus.on(EventKind::PaymentCompleted, payments.clone());
    bus.on(EventKind::PaymentFailed, payments);

    let services = Arc::new(ServiceLifecycleHandler);
    bus.on(EventKind::ServiceActivated, services.clone());
    bus.on(EventKind::ServiceSuspended, services);

    let shipments = Arc::new(ShipmentTrackingHandler);
    bus.on(EventKind::ShipmentCreated, shipments.clone());
    bus.on(EventKind::ShipmentDelivered, shipments);

    bus.on(EventKind::ChatMessage, Arc::new(ChatActivityHandler));
}
