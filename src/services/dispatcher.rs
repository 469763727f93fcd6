/// Batch entry dispatcher
///
/// Decodes each raw record of an inbound batch and hands it to the
/// event processor independently. A decode or processing failure is
/// logged and counted, never propagated: one bad item must not abort
/// the batch, and the host always gets a summary acknowledgment.
/// Redelivery of failed items is the transport's responsibility.
use std::sync::Arc;

use tracing::{error, warn};

use crate::error::{AppError, Result};
use crate::models::{DispatchSummary, EventRecord, Notification};
use crate::services::event_processor::EventProcessor;

pub struct EventDispatcher {
    processor: Arc<EventProcessor>,
}

impl EventDispatcher {
    pub fn new(processor: Arc<EventProcessor>) -> Self {
        Self { processor }
    }

    /// Process every record of a batch, isolating per-item failures.
    pub async fn dispatch(&self, records: &[EventRecord]) -> DispatchSummary {
        let mut summary = DispatchSummary {
            received: records.len(),
            processed: 0,
            failed: 0,
        };

        for record in records {
            match decode_record(record) {
                Ok(notification) => match self.processor.process(&notification).await {
                    Ok(()) => summary.processed += 1,
                    Err(e) => {
                        error!(
                            "failed to process notification for user id {}: {}",
                            notification.id, e
                        );
                        summary.failed += 1;
                    }
                },
                Err(e) => {
                    warn!("failed to decode batch record: {}", e);
                    summary.failed += 1;
                }
            }
        }

        summary
    }
}

fn decode_record(record: &EventRecord) -> Result<Notification> {
    let notification: Notification = serde_json::from_str(&record.message)?;
    if notification.name.trim().is_empty() {
        return Err(AppError::InvalidNotification(
            "notification name must not be empty".to_string(),
        ));
    }
    Ok(notification)
}
