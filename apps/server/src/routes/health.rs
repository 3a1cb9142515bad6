use actix_web::{http::StatusCode, web, HttpResponse};
use serde::Serialize;

use crate::source::SnapshotStore;

#[derive(Serialize)]
pub struct LivenessResponse {
    status: &'static str,
}

#[derive(Serialize)]
pub struct ReadinessResponse {
    status: &'static str,
    checks: ReadinessChecks,
}

#[derive(Serialize)]
pub struct ReadinessChecks {
    data_source: &'static str,
}

/// Liveness check - is the process running?
/// Returns 200 if the server is alive.
pub async fn liveness() -> HttpResponse {
    HttpResponse::Ok().json(LivenessResponse { status: "ok" })
}

/// Readiness check - can the board be served?
/// Loads the ticket snapshot if needed. Returns 200 once it is available,
/// 503 otherwise.
pub async fn readiness(store: web::Data<SnapshotStore>) -> HttpResponse {
    let source_healthy = store.snapshot().await.is_ok();

    let (status, source_status, http_status) = if source_healthy {
        ("ready", "ok", StatusCode::OK)
    } else {
        ("not_ready", "error", StatusCode::SERVICE_UNAVAILABLE)
    };

    let response = ReadinessResponse {
        status,
        checks: ReadinessChecks {
            data_source: source_status,
        },
    };

    HttpResponse::build(http_status).json(response)
}

/// Configure health routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/health")
            .route("", web::get().to(liveness))
            .route("/ready", web::get().to(readiness)),
    );
}
