use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase};
use tower::ServiceExt;
use uuid::Uuid;

use server::routes;
use server::state::AppState;

fn app_with(db: DatabaseConnection) -> axum::Router {
    let cors = tower_http::cors::CorsLayer::very_permissive();
    routes::build_router(AppState { db, jwt_secret: "test-secret".into() }, cors)
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_is_open() {
    let app = app_with(MockDatabase::new(DatabaseBackend::Postgres).into_connection());
    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn application_status_for_unsubmitted_profile_is_successful_null() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<models::artisan::Model>::new()])
        .into_connection();
    let app = app_with(db);

    let uri = format!("/artisan/application-status/{}", Uuid::new_v4());
    let response =
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap()).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["status"], "success");
    assert_eq!(json["message"], "application status");
    assert!(json["data"].is_null());
}

#[tokio::test]
async fn unknown_entity_maps_to_not_found_envelope() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<models::language_service::Model>::new()])
        .into_connection();
    let app = app_with(db);

    let body = serde_json::json!({ "languageServiceId": Uuid::new_v4(), "status": false });
    let response = app
        .oneshot(
            Request::builder()
                .method("PATCH")
                .uri("/language/toggle-status")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["status"], "error");
    assert!(json["data"].is_null());
}
