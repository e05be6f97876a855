// tests/hello_routes.rs
use actix_web::{http::StatusCode, test, web, App};
use hello_backend::dto::HelloResponseDto;
use hello_backend::routes::{configure_app, hello::hello_scope, not_found};
use hello_backend::utils::types::ApiResponse;
use serde_json::Value;

#[actix_rt::test]
async fn hello_returns_hello() {
    let app = test::init_service(App::new().configure(configure_app)).await;

    let req = test::TestRequest::get().uri("/hello").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get("content-type").unwrap(),
        "text/plain; charset=utf-8"
    );

    let body = test::read_body(resp).await;
    assert_eq!(body, web::Bytes::from_static(b"hello"));
}

#[actix_rt::test]
async fn hello_dto_echoes_name_and_amount() {
    let app = test::init_service(App::new().configure(configure_app)).await;

    let req = test::TestRequest::get()
        .uri("/hello/dto?name=hello&amount=1000")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get("content-type").unwrap(),
        "application/json"
    );

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["name"], "hello");
    assert_eq!(body["amount"], 1000);
    assert_eq!(body.as_object().unwrap().len(), 2);
}

#[actix_rt::test]
async fn hello_dto_accepts_zero_and_negative_amounts() {
    let app = test::init_service(App::new().configure(configure_app)).await;

    for (amount, expected) in [("0", 0), ("-42", -42), ("2147483647", i32::MAX)] {
        let uri = format!("/hello/dto?name=edge&amount={amount}");
        let req = test::TestRequest::get().uri(&uri).to_request();
        let dto: HelloResponseDto = test::call_and_read_body_json(&app, req).await;
        assert_eq!(dto, HelloResponseDto::new("edge", expected));
    }
}

#[actix_rt::test]
async fn hello_dto_decodes_name() {
    let app = test::init_service(App::new().configure(configure_app)).await;

    let req = test::TestRequest::get()
        .uri("/hello/dto?name=hello%20world&amount=7")
        .to_request();
    let dto: HelloResponseDto = test::call_and_read_body_json(&app, req).await;
    assert_eq!(dto.name, "hello world");
    assert_eq!(dto.amount, 7);

    let req = test::TestRequest::get()
        .uri("/hello/dto?name=&amount=7")
        .to_request();
    let dto: HelloResponseDto = test::call_and_read_body_json(&app, req).await;
    assert_eq!(dto.name, "");
}

#[actix_rt::test]
async fn hello_dto_rejects_bad_queries() {
    let app = test::init_service(App::new().configure(configure_app)).await;

    for uri in [
        "/hello/dto?name=hello",
        "/hello/dto?name=hello&amount=",
        "/hello/dto?name=hello&amount=abc",
        "/hello/dto?name=hello&amount=12.5",
        "/hello/dto?name=hello&amount=2147483648",
        "/hello/dto?amount=1000",
        "/hello/dto",
    ] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "uri: {uri}");

        let body: ApiResponse<Value> = test::read_body_json(resp).await;
        assert!(!body.success, "uri: {uri}");
        assert!(body.data.is_none());
        assert!(body
            .message
            .unwrap_or_default()
            .starts_with("Invalid query"));
    }
}

#[actix_rt::test]
async fn repeated_calls_are_identical() {
    let app = test::init_service(App::new().configure(configure_app)).await;

    for uri in ["/hello", "/hello/dto?name=hello&amount=1000"] {
        let first = test::call_and_read_body(&app, test::TestRequest::get().uri(uri).to_request()).await;
        let second = test::call_and_read_body(&app, test::TestRequest::get().uri(uri).to_request()).await;
        assert_eq!(first, second, "uri: {uri}");
    }
}

#[actix_rt::test]
async fn hello_scope_alone_still_serves() {
    // Without configure_app there is no QueryConfig; only the happy paths are checked.
    let app = test::init_service(
        App::new()
            .service(hello_scope())
            .default_service(web::to(not_found)),
    )
    .await;

    let req = test::TestRequest::get().uri("/hello").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri("/hello/dto?name=scope&amount=1")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get().uri("/hello/missing").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
