/// Event ingestion handlers
use actix_web::{web, HttpResponse, Result as ActixResult};
use serde::Serialize;
use std::sync::Arc;

use crate::models::EventBatch;
use crate::services::EventDispatcher;

/// API Response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

/// Ingest a batch of registration events
///
/// POST /v1/events
///
/// Always answers 200 with a processing summary: per-item failures are
/// logged and counted by the dispatcher, never surfaced as an error.
pub async fn ingest_events(
    dispatcher: web::Data<Arc<EventDispatcher>>,
    batch: web::Json<EventBatch>,
) -> ActixResult<HttpResponse> {
    let summary = dispatcher.dispatch(&batch.records).await;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(summary)))
}

pub fn register_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/v1/events", web::post().to(ingest_events));
}
