//! Managed-service lifecycle listeners.

use async_trait::async_trait;
use tracing::info;

use crate::bus::EventListener;
use crate::event::{Event, EventPayload};

/// Stub: provisioning and de-provisioning hooks (VPN accounts, phone
/// extensions) are not built yet.
pub struct ServiceLifecycleHandler;

#[async_trait]
impl EventListener for ServiceLifecycleHandler {
    fn name(&self) -> &str {
        "service-lifecycle-log"
    }

    async fn handle(&self, event: Event) -> anyhow::Result<()> {
        match &event.payload {
            EventPayload::ServiceActivated {
                service_id,
                client_id,
            } => {
                info!(service_id = %service_id, client_id = %client_id, "service activated");
            }
            EventPayload::ServiceSuspended { service_id, reason } => {
                info!(service_id = %service_id, reason = %reason, "service suspended");
            }
            _ => {}
        }
        Ok(())
    }
}
