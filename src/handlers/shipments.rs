//! Procurement shipment listeners.

use async_trait::async_trait;
use tracing::info;

use crate::bus::EventListener;
use crate::event::{Event, EventPayload};

/// Stub: client-facing tracking notifications are not built yet; carrier
/// state lives in the procurement module.
pub struct ShipmentTrackingHandler;

#[async_trait]
impl EventListener for ShipmentTrackingHandler {
    fn name(&self) -> &str {
        "shipment-tracking-log"
    }

    async fn handle(&self, event: Event) -> anyhow::Result<()> {
        match &event.payload {
            EventPayload::ShipmentCreated {
                shipment_id,
                carrier,
                tracking_number,
            } => {
                info!(
                    shipment_id = %shipment_id,
                    carrier = %carrier,
                    tracking_number = %tracking_number,
                    "shipment created"
                );
            }
            EventPayload::ShipmentDelivered { shipment_id } => {
                info!(shipment_id = %shipment_id, "shipment delivered");
            }
            _ => {}
        }
        Ok(())
    }
}
