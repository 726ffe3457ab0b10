use std::sync::Arc;

use portal_events::ai::Priority;
use portal_events::{register_cross_service_handlers, EventBus, EventKind, EventPayload};
use uuid::Uuid;

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn ticket(title: &str, description: &str) -> (Uuid, EventPayload) {
    let ticket_id = Uuid::new_v4();
    let payload = EventPayload::TicketCreated {
        ticket_id,
        client_id: Uuid::new_v4(),
        title: title.into(),
        description: description.into(),
    };
    (ticket_id, payload)
}

#[tokio::test]
async fn new_ticket_is_triaged_onto_the_bus() {
    init_tracing();
    let bus = Arc::new(EventBus::new());
    register_cross_service_handlers(&bus);

    let (ticket_id, payload) = ticket("Server is DOWN", "production outage");
    bus.emit(payload).await;

    let classified = bus.history(Some(EventKind::TicketClassified), 100);
    assert_eq!(classified.len(), 1);
    assert_eq!(classified[0].source, "ai-service");

    match &classified[0].payload {
        EventPayload::TicketClassified {
            ticket_id: classified_id,
            category,
            department,
            priority,
            confidence,
        } => {
            assert_eq!(*classified_id, ticket_id);
            assert_eq!(category, "Critical Incident");
            assert_eq!(department, "Infrastructure");
            assert_eq!(*priority, Priority::Critical);
            assert!((confidence - 0.9).abs() < f32::EPSILON);
        }
        other => panic!("expected ticket:classified, got {:?}", other),
    }
}

#[tokio::test]
async fn unremarkable_ticket_falls_back_to_general_support() {
    let bus = Arc::new(EventBus::new());
    register_cross_service_handlers(&bus);

    let (_, payload) = ticket("invoice question", "need a copy of last month's statement");
    bus.emit(payload).await;

    let classified = bus.history(Some(EventKind::TicketClassified), 100);
    assert_eq!(classified.len(), 1);
    match &classified[0].payload {
        EventPayload::TicketClassified {
            category, priority, ..
        } => {
            assert_eq!(category, "General Support");
            assert_eq!(*priority, Priority::Medium);
        }
        other => panic!("expected ticket:classified, got {:?}", other),
    }
}

#[tokio::test]
async fn stub_handlers_accept_every_lifecycle_event() {
    init_tracing();
    let bus = Arc::new(EventBus::new());
    register_cross_service_handlers(&bus);

    bus.emit(EventPayload::TicketUpdated {
        ticket_id: Uuid::new_v4(),
        status: "resolved".into(),
    })
    .await;
    bus.emit(EventPayload::PaymentCompleted {
        invoice_id: Uuid::new_v4(),
        client_id: Uuid::new_v4(),
        amount_cents: 125_00,
    })
    .await;
    bus.emit(EventPayload::PaymentFailed {
        invoice_id: Uuid::new_v4(),
        reason: "insufficient funds".into(),
    })
    .await;
    bus.emit(EventPayload::ServiceActivated {
        service_id: Uuid::new_v4(),
        client_id: Uuid::new_v4(),
    })
    .await;
    bus.emit(EventPayload::ServiceSuspended {
        service_id: Uuid::new_v4(),
        reason: "non-payment".into(),
    })
    .await;
    bus.emit(EventPayload::ShipmentCreated {
        shipment_id: Uuid::new_v4(),
        carrier: "ups".into(),
        tracking_number: "1Z999AA10123456784".into(),
    })
    .await;
    bus.emit(EventPayload::ShipmentDelivered {
        shipment_id: Uuid::new_v4(),
    })
    .await;
    bus.emit(EventPayload::ChatMessage {
        session_id: Uuid::new_v4(),
        sender_id: Uuid::new_v4(),
    })
    .await;

    // All eight stub-handled events recorded; none triggered triage.
    assert_eq!(bus.history_len(), 8);
    assert!(bus.history(Some(EventKind::TicketClassified), 100).is_empty());
}

#[tokio::test]
async fn account_ticket_routes_to_service_desk() {
    let bus = Arc::new(EventBus::new());
    register_cross_service_handlers(&bus);
    let (_, payload) = ticket("forgot my password", "");
    bus.emit(payload).await;

    let classified = bus.history(Some(EventKind::TicketClassified), 100);
    match &classified[0].payload {
        EventPayload::TicketClassified {
            category,
            priority,
            confidence,
            ..
        } => {
            assert_eq!(category, "Access & Permissions");
            assert_eq!(*priority, Priority::High);
            assert!((confidence - 0.75).abs() < f32::EPSILON);
        }
        other => panic!("expected ticket:classified, got {:?}", other),
    }
}
