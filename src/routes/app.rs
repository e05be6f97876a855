use actix_web::{web, HttpRequest, HttpResponse, ResponseError};

use crate::routes::{
    health::{health_scope, prometheus_metrics},
    hello::hello_scope,
};
use crate::utils::errors::{query_error_handler, ApiError};

/// Full routing table, shared by `main` and the integration tests.
pub fn configure_app(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .service(hello_scope())
        .service(health_scope())
        .service(prometheus_metrics);
}

/// Default service for anything the routing table doesn't match.
pub async fn not_found(req: HttpRequest) -> HttpResponse {
    ApiError::NotFound(format!("{} {}", req.method(), req.path())).error_response()
}
