// src/routes/hello.rs

use actix_web::dev::HttpServiceFactory;
use actix_web::{get, http::header::ContentType, web, HttpResponse, Responder};
use serde::Deserialize;

use crate::dto::HelloResponseDto;
use crate::middleware::path_logger::PathLogger;

#[derive(Debug, Deserialize)]
pub struct HelloQuery {
    pub name: String,
    pub amount: i32,
}

#[get("")]
pub async fn hello() -> impl Responder {
    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body("hello")
}

/// Echoes `name` and `amount` back as JSON. Rejected queries never reach here;
/// see `utils::errors::query_error_handler`.
#[get("/dto")]
pub async fn hello_dto(query: web::Query<HelloQuery>) -> impl Responder {
    let HelloQuery { name, amount } = query.into_inner();
    HttpResponse::Ok().json(HelloResponseDto::new(name, amount))
}

pub fn hello_scope() -> impl HttpServiceFactory {
    web::scope("/hello")
        .wrap(PathLogger)
        .service(hello)
        .service(hello_dto)
}
