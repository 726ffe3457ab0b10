//! The portal event catalog.
//!
//! Events are a closed tagged union rather than an open string namespace:
//! each variant carries exactly the identifiers and scalars a downstream
//! handler needs, never full entity state (tickets, invoices, services and
//! shipments are owned by the portal's persistence layer). The colon-form
//! names (`"ticket:created"`, `"payment:completed"`) are the wire/log names
//! used for history filtering and structured logging.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::ai::Priority;

/// Discriminant for [`EventPayload`].
///
/// Listener registration and history filtering key on this, so adding a
/// payload variant without a matching kind fails to compile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    TicketCreated,
    TicketUpdated,
    TicketClassified,
    PaymentCompleted,
    PaymentFailed,
    ServiceActivated,
    ServiceSuspended,
    ShipmentCreated,
    ShipmentDelivered,
    ChatMessage,
}

impl EventKind {
    /// The colon-form name used in logs and serialized events.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::TicketCreated => "ticket:created",
            EventKind::TicketUpdated => "ticket:updated",
            EventKind::TicketClassified => "ticket:classified",
            EventKind::PaymentCompleted => "payment:completed",
            EventKind::PaymentFailed => "payment:failed",
            EventKind::ServiceActivated => "service:activated",
            EventKind::ServiceSuspended => "service:suspended",
            EventKind::ShipmentCreated => "shipment:created",
            EventKind::ShipmentDelivered => "shipment:delivered",
            EventKind::ChatMessage => "chat:message",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Typed payload for each portal event.
///
/// Payloads reference entities by id; amounts are integer cents.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EventPayload {
    #[serde(rename = "ticket:created")]
    TicketCreated {
        ticket_id: Uuid,
        client_id: Uuid,
        title: String,
        description: String,
    },
    #[serde(rename = "ticket:updated")]
    TicketUpdated { ticket_id: Uuid, status: String },
    #[serde(rename = "ticket:classified")]
    TicketClassified {
        ticket_id: Uuid,
        category: String,
        department: String,
        priority: Priority,
        confidence: f32,
    },
    #[serde(rename = "payment:completed")]
    PaymentCompleted {
        invoice_id: Uuid,
        client_id: Uuid,
        amount_cents: i64,
    },
    #[serde(rename = "payment:failed")]
    PaymentFailed { invoice_id: Uuid, reason: String },
    #[serde(rename = "service:activated")]
    ServiceActivated { service_id: Uuid, client_id: Uuid },
    #[serde(rename = "service:suspended")]
    ServiceSuspended { service_id: Uuid, reason: String },
    #[serde(rename = "shipment:created")]
    ShipmentCreated {
        shipment_id: Uuid,
        carrier: String,
        tracking_number: String,
    },
    #[serde(rename = "shipment:delivered")]
    ShipmentDelivered { shipment_id: Uuid },
    #[serde(rename = "chat:message")]
    ChatMessage { session_id: Uuid, sender_id: Uuid },
}

impl EventPayload {
    pub fn kind(&self) -> EventKind {
        match self {
            EventPayload::TicketCreated { .. } => EventKind::TicketCreated,
            EventPayload::TicketUpdated { .. } => EventKind::TicketUpdated,
            EventPayload::TicketClassified { .. } => EventKind::TicketClassified,
            EventPayload::PaymentCompleted { .. } => EventKind::PaymentCompleted,
            EventPayload::PaymentFailed { .. } => EventKind::PaymentFailed,
            EventPayload::ServiceActivated { .. } => EventKind::ServiceActivated,
            EventPayload::ServiceSuspended { .. } => EventKind::ServiceSuspended,
            EventPayload::ShipmentCreated { .. } => EventKind::ShipmentCreated,
            EventPayload::ShipmentDelivered { .. } => EventKind::ShipmentDelivered,
            EventPayload::ChatMessage { .. } => EventKind::ChatMessage,
        }
    }
}

/// An immutable record of one emitted event.
///
/// Constructed by the bus at emit time; retained only in the bounded history
/// buffer. `source` names the module that emitted it (default `"portal"`).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Event {
    pub payload: EventPayload,
    pub timestamp: DateTime<Utc>,
    pub source: String,
}

impl Event {
    pub(crate) fn new(payload: EventPayload, source: impl Into<String>) -> Self {
        Self {
            payload,
            timestamp: Utc::now(),
            source: source.into(),
        }
    }

    pub fn kind(&self) -> EventKind {
        self.payload.kind()
    }

    /// JSON rendering for audit logs.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}
