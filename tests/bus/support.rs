use portal_events::{Event, EventPayload};
use uuid::Uuid;

pub fn ticket_created(title: &str, description: &str) -> EventPayload {
    EventPayload::TicketCreated {
        ticket_id: Uuid::new_v4(),
        client_id: Uuid::new_v4(),
        title: title.into(),
        description: description.into(),
    }
}

pub fn payment_completed(amount_cents: i64) -> EventPayload {
    EventPayload::PaymentCompleted {
        invoice_id: Uuid::new_v4(),
        client_id: Uuid::new_v4(),
        amount_cents,
    }
}

pub fn chat_message() -> EventPayload {
    EventPayload::ChatMessage {
        session_id: Uuid::new_v4(),
        sender_id: Uuid::new_v4(),
    }
}

/// Extract amounts from payment:completed events, panicking on anything else.
pub fn payment_amounts(events: &[Event]) -> Vec<i64> {
    events
        .iter()
        .map(|e| match e.payload {
            EventPayload::PaymentCompleted { amount_cents, .. } => amount_cents,
            _ => panic!("expected payment:completed, got {}", e.kind()),
        })
        .collect()
}
