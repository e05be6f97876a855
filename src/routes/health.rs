use actix_web::{get, web, HttpResponse, Scope};
use metrics_exporter_prometheus::PrometheusHandle;

use crate::utils::errors::ApiError;

#[get("")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().body("OK")
}

#[get("/metrics")]
pub async fn prometheus_metrics(
    handle: Option<web::Data<PrometheusHandle>>,
) -> Result<HttpResponse, ApiError> {
    let handle = handle
        .ok_or_else(|| ApiError::Unavailable("metrics recorder not installed".into()))?;

    Ok(HttpResponse::Ok()
        .content_type("text/plain; version=0.0.4")
        .body(handle.render()))
}

pub fn health_scope() -> Scope {
    web::scope("/health")
        .service(health_check)
}
