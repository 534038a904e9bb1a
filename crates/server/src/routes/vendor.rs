//! Vendor registration and login. Login failures always answer 401 with the
//! standard envelope.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use tracing::error;
use validator::Validate;

use common::types::ApiResponse;
use service::vendor::domain::{VendorLogin, VendorRegistration, VendorSession};
use service::vendor::repository::SeaOrmVendorRepository;
use service::vendor::service::{VendorAuthConfig, VendorService};

use crate::errors::{validation_failure, ApiError};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/register", post(register)).route("/login", post(login))
}

fn vendor_service(state: &AppState) -> VendorService<SeaOrmVendorRepository> {
    VendorService::new(
        Arc::new(SeaOrmVendorRepository { db: state.db.clone() }),
        VendorAuthConfig { jwt_secret: Some(state.jwt_secret.clone()) },
    )
}

async fn register(
    State(state): State<AppState>,
    Json(input): Json<VendorRegistration>,
) -> Result<(StatusCode, Json<ApiResponse<()>>), ApiError> {
    input.validate().map_err(validation_failure)?;
    vendor_service(&state).register(input).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success("Vendor registered successfully", None))))
}

async fn login(State(state): State<AppState>, Json(input): Json<VendorLogin>) -> Response {
    if let Err(err) = input.validate() {
        return validation_failure(err).into_response();
    }
    match vendor_service(&state).login(input).await {
        Ok(session) => (
            StatusCode::OK,
            Json(ApiResponse::<VendorSession>::success("Vendor login successful", Some(session))),
        )
            .into_response(),
        Err(err) => {
            error!(error = %err, "vendor login failed");
            (StatusCode::UNAUTHORIZED, Json(ApiResponse::<()>::error(err.to_string())))
                .into_response()
        }
    }
}
