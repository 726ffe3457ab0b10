//! Payment lifecycle listeners.

use async_trait::async_trait;
use tracing::{info, warn};

use crate::bus::EventListener;
use crate::event::{Event, EventPayload};

/// Stub: receipt generation and dunning hooks are not built yet; the
/// billing module records the payment before the event is emitted.
pub struct PaymentLogHandler;

#[async_trait]
impl EventListener for PaymentLogHandler {
    fn name(&self) -> &str {
        "payment-log"
    }

    async fn handle(&self, event: Event) -> anyhow::Result<()> {
        match &event.payload {
            EventPayload::PaymentCompleted {
                invoice_id,
                client_id,
                amount_cents,
            } => {
                info!(
                    invoice_id = %invoice_id,
                    client_id = %client_id,
                    amount_cents = amount_cents,
                    "payment completed"
                );
            }
            EventPayload::PaymentFailed { invoice_id, reason } => {
                warn!(invoice_id = %invoice_id, reason = %reason, "payment failed");
            }
            _ => {}
        }
        Ok(())
    }
}
