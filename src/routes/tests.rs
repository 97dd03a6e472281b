use actix_web::{http::StatusCode, test, web, App};
use serde_json::{json, Value};

use super::configure_all_routes;
use crate::{
    config::StorageBackend,
    core::AppState,
    repositories::Repositories,
    services::auth::TokenService,
};

fn state() -> web::Data<AppState> {
    web::Data::new(AppState::new(
        Repositories::in_memory(),
        TokenService::new("route-test-secret", 7),
        4,
        StorageBackend::Memory,
    ))
}

macro_rules! app {
    ($state:expr) => {
        test::init_service(App::new().app_data($state.clone()).configure(configure_all_routes)).await
    };
}

macro_rules! register_and_login {
    ($app:expr, $username:expr) => {{
        let req = test::TestRequest::post()
            .uri("/api/register")
            .set_json(json!({ "username": $username, "password": "secret" }))
            .to_request();
        let res = test::call_service(&$app, req).await;
        assert_eq!(res.status(), StatusCode::CREATED);

        let req = test::TestRequest::post()
            .uri("/api/login")
            .set_json(json!({ "username": $username, "password": "secret" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&$app, req).await;
        format!("Bearer {}", body["token"].as_str().unwrap())
    }};
}

#[actix_web::test]
async fn test_health_reports_storage_backend() {
    let state = state();
    let app = app!(state);

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "healthy");
    assert_eq!(body["features"]["storage"], "In-Memory");
}

#[actix_web::test]
async fn test_register_login_and_verify_token() {
    let state = state();
    let app = app!(state);

    let req = test::TestRequest::post()
        .uri("/api/register")
        .set_json(json!({ "username": "alice", "password": "secret" }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body, json!({ "message": "User created successfully" }));

    let req = test::TestRequest::post()
        .uri("/api/register")
        .set_json(json!({ "username": "alice", "password": "other" }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["message"], "Username already exists");

    let req = test::TestRequest::post()
        .uri("/api/login")
        .set_json(json!({ "username": "alice", "password": "secret" }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);
    let login: Value = test::read_body_json(res).await;
    assert_eq!(login["message"], "Login successful");
    assert_eq!(login["user"]["username"], "alice");
    assert!(login["user"]["password"].is_null());

    let req = test::TestRequest::get()
        .uri("/api/verify-token")
        .insert_header(("Authorization", format!("Bearer {}", login["token"].as_str().unwrap())))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["valid"], true);
    assert_eq!(body["user"]["userId"], login["user"]["id"]);
    assert_eq!(body["user"]["username"], "alice");
}

#[actix_web::test]
async fn test_login_with_bad_credentials() {
    let state = state();
    let app = app!(state);
    register_and_login!(app, "alice");

    for payload in [
        json!({ "username": "alice", "password": "wrong" }),
        json!({ "username": "nobody", "password": "secret" }),
    ] {
        let req = test::TestRequest::post().uri("/api/login").set_json(payload).to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["message"], "Invalid credentials");
    }
}

#[actix_web::test]
async fn test_malformed_json_body_is_bad_request() {
    let state = state();
    let app = app!(state);

    let req = test::TestRequest::post()
        .uri("/api/register")
        .insert_header(("Content-Type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(res).await;
    assert!(body["message"].is_string());
}

#[actix_web::test]
async fn test_protected_routes_require_token() {
    let state = state();
    let app = app!(state);

    for uri in ["/api/entries/2024-03-15", "/api/statistics", "/api/verify-token"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED, "{}", uri);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["message"], "Access token required");
    }

    let req = test::TestRequest::post()
        .uri("/api/entries")
        .set_json(json!({ "date": "2024-03-15", "content": "x" }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::get()
        .uri("/api/export?startDate=2024-01-01&endDate=2024-01-03")
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["message"], "Access token required");

    let req = test::TestRequest::get()
        .uri("/api/statistics")
        .insert_header(("Authorization", "Token abc"))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::get()
        .uri("/api/statistics")
        .insert_header(("Authorization", "Bearer not-a-token"))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["message"], "Invalid or expired token");
}

#[actix_web::test]
async fn test_unknown_api_routes_are_not_found() {
    let state = state();
    let app = app!(state);

    for uri in ["/api/nope", "/api/entries", "/api/register"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND, "{}", uri);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["message"], "Not found");
    }
}

#[actix_web::test]
async fn test_token_from_other_secret_is_forbidden() {
    let state = state();
    let app = app!(state);

    let mut user = crate::domain::entities::users::user::User::new("mallory".to_string(), "x".to_string());
    user.id = Some(mongodb::bson::oid::ObjectId::new());
    let forged = TokenService::new("some-other-secret", 7).generate_token(&user).unwrap();

    let req = test::TestRequest::get()
        .uri("/api/statistics")
        .insert_header(("Authorization", format!("Bearer {}", forged)))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);
}

#[actix_web::test]
async fn test_save_and_get_entry() {
    let state = state();
    let app = app!(state);
    let token = register_and_login!(app, "alice");

    let req = test::TestRequest::get()
        .uri("/api/entries/2024-03-15")
        .insert_header(("Authorization", token.clone()))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!({ "entry": "" }));

    for content in ["first draft", "final"] {
        let req = test::TestRequest::post()
            .uri("/api/entries")
            .insert_header(("Authorization", token.clone()))
            .set_json(json!({ "date": "2024-03-15", "content": content }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["message"], "Entry saved successfully");
    }

    let req = test::TestRequest::get()
        .uri("/api/entries/2024-03-15")
        .insert_header(("Authorization", token.clone()))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["entry"], "final");

    // 다른 사용자에게는 보이지 않음
    let other = register_and_login!(app, "bob");
    let req = test::TestRequest::get()
        .uri("/api/entries/2024-03-15")
        .insert_header(("Authorization", other))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["entry"], "");
}

#[actix_web::test]
async fn test_malformed_dates_are_bad_request() {
    let state = state();
    let app = app!(state);
    let token = register_and_login!(app, "alice");

    let req = test::TestRequest::get()
        .uri("/api/entries/2024-3-5")
        .insert_header(("Authorization", token.clone()))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/api/entries")
        .insert_header(("Authorization", token.clone()))
        .set_json(json!({ "date": "2024-02-30", "content": "x" }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::get()
        .uri("/api/export?startDate=yesterday&endDate=2024-01-03")
        .insert_header(("Authorization", token))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_statistics() {
    let state = state();
    let app = app!(state);
    let token = register_and_login!(app, "alice");

    for date in ["2024-02-01", "2024-01-01", "2024-01-08"] {
        let req = test::TestRequest::post()
            .uri("/api/entries")
            .insert_header(("Authorization", token.clone()))
            .set_json(json!({ "date": date, "content": "text" }))
            .to_request();
        test::call_service(&app, req).await;
    }

    let req = test::TestRequest::get()
        .uri("/api/statistics")
        .insert_header(("Authorization", token))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["entryDates"], json!(["2024-01-01", "2024-01-08", "2024-02-01"]));
    assert_eq!(body["entriesByMonth"], json!({ "2024-01": 2, "2024-02": 1 }));
    assert_eq!(body["entriesByWeek"], json!({ "2024-W1": 1, "2024-W2": 1, "2024-W5": 1 }));
    assert_eq!(body["weekdayData"], json!([0, 2, 0, 0, 1, 0, 0]));
}

#[actix_web::test]
async fn test_statistics_for_new_user_are_empty() {
    let state = state();
    let app = app!(state);
    let token = register_and_login!(app, "alice");

    let req = test::TestRequest::get()
        .uri("/api/statistics")
        .insert_header(("Authorization", token))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["entryDates"], json!([]));
    assert_eq!(body["entriesByMonth"], json!({}));
    assert_eq!(body["entriesByWeek"], json!({}));
    assert_eq!(body["weekdayData"], json!([0, 0, 0, 0, 0, 0, 0]));
}

#[actix_web::test]
async fn test_export_with_and_without_empty_days() {
    let state = state();
    let app = app!(state);
    let token = register_and_login!(app, "alice");

    let req = test::TestRequest::post()
        .uri("/api/entries")
        .insert_header(("Authorization", token.clone()))
        .set_json(json!({ "date": "2024-01-02", "content": "x" }))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::get()
        .uri("/api/export?startDate=2024-01-01&endDate=2024-01-03&includeEmpty=true")
        .insert_header(("Authorization", token.clone()))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["entries"], json!({ "2024-01-01": "", "2024-01-02": "x", "2024-01-03": "" }));
    assert_eq!(body["metadata"]["totalEntries"], 1);
    assert_eq!(body["metadata"]["version"], "1.0");
    assert_eq!(body["metadata"]["dateRange"], json!({ "start": "2024-01-01", "end": "2024-01-03" }));
    assert!(body["metadata"]["exportDate"].as_str().unwrap().ends_with('Z'));

    let req = test::TestRequest::get()
        .uri("/api/export?startDate=2024-01-01&endDate=2024-01-03&includeEmpty=yes")
        .insert_header(("Authorization", token.clone()))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["entries"], json!({ "2024-01-02": "x" }));

    let req = test::TestRequest::get()
        .uri("/api/export?startDate=2024-01-05&endDate=2024-01-01&includeEmpty=true")
        .insert_header(("Authorization", token))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["entries"], json!({}));
    assert_eq!(body["metadata"]["totalEntries"], 0);
}

#[actix_web::test]
async fn test_export_fill_range_is_capped() {
    let state = state();
    let app = app!(state);
    let token = register_and_login!(app, "alice");

    let req = test::TestRequest::get()
        .uri("/api/export?startDate=0001-01-01&endDate=9999-12-31&includeEmpty=true")
        .insert_header(("Authorization", token.clone()))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(res).await;
    assert!(body["message"].as_str().unwrap().contains("includeEmpty"));

    let req = test::TestRequest::get()
        .uri("/api/export?startDate=0001-01-01&endDate=9999-12-31")
        .insert_header(("Authorization", token))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);
}
