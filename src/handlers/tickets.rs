//! Ticket lifecycle listeners.

use std::sync::Weak;

use async_trait::async_trait;
use tracing::info;

use crate::ai;
use crate::bus::{EventBus, EventListener};
use crate::event::{Event, EventPayload};

/// Classifies newly created tickets and publishes the verdict back on the
/// bus as `ticket:classified` (source `"ai-service"`).
pub struct TicketTriageHandler {
    bus: Weak<EventBus>,
}

impl TicketTriageHandler {
    pub fn new(bus: Weak<EventBus>) -> Self {
        Self { bus }
    }
}

#[async_trait]
impl EventListener for TicketTriageHandler {
    fn name(&self) -> &str {
        "ticket-triage"
    }

    async fn handle(&self, event: Event) -> anyhow::Result<()> {
        let EventPayload::TicketCreated {
            ticket_id,
            title,
            description,
            ..
        } = event.payload
        else {
            return Ok(());
        };

        let verdict = ai::classify_ticket(&title, &description);
        let eta = ai::predict_resolution_time(verdict.priority);
        info!(
            ticket_id = %ticket_id,
            category = verdict.category,
            department = verdict.department,
            priority = %verdict.priority,
            confidence = verdict.confidence,
            eta_hours = eta.num_hours(),
            "ticket triaged"
        );

        if let Some(bus) = self.bus.upgrade() {
            bus.emit_from(
                EventPayload::TicketClassified {
                    ticket_id,
                    category: verdict.category.to_string(),
                    department: verdict.department.to_string(),
                    priority: verdict.priority,
                    confidence: verdict.confidence,
                },
                "ai-service",
            )
            .await;
        }
        Ok(())
    }
}

/// Stub: notification fan-out for status changes is not built yet; the
/// update itself is persisted by the ticket module before the emit.
pub struct TicketUpdatedHandler;

#[async_trait]
impl EventListener for TicketUpdatedHandler {
    fn name(&self) -> &str {
        "ticket-updated-log"
    }

    async fn handle(&self, event: Event) -> anyhow::Result<()> {
        if let EventPayload::TicketUpdated { ticket_id, status } = &event.payload {
            info!(ticket_id = %ticket_id, status = %status, "ticket updated");
        }
        Ok(())
    }
}
