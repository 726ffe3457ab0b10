//! Chat listeners.

use async_trait::async_trait;
use tracing::debug;

use crate::bus::EventListener;
use crate::event::{Event, EventKind};

/// Stub: session analytics are not built yet. Logs the full event as JSON
/// at debug level for support-session audits.
pub struct ChatActivityHandler;

#[async_trait]
impl EventListener for ChatActivityHandler {
    fn name(&self) -> &str {
        "chat-activity-log"
    }

    async fn handle(&self, event: Event) -> anyhow::Result<()> {
        if event.kind() == EventKind::ChatMessage {
            debug!(event = %event.to_json(), "chat activity");
        }
        Ok(())
    }
}
