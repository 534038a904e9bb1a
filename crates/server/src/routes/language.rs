//! Language-service endpoints: listing, filters, status lifecycle, bookings
//! and the exploration search.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, patch, post};
use axum::{Json, Router};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use common::types::ApiResponse;
use service::language::{
    self as language_service, ExplorationCriteria, LanguageBookingRequest, LanguageServiceFilters,
};

use crate::errors::{validation_failure, ApiError};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/all", get(all))
        .route("/filters", get(filters))
        .route("/application-status/:account_id", get(application_status))
        .route("/:language_service_id", get(by_id))
        .route("/create-booking", post(create_booking))
        .route("/find-language-exploration", post(find_exploration))
        .route("/toggle-status", patch(toggle_status))
}

async fn all(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<ApiResponse<Vec<models::language_service::Model>>>), ApiError> {
    let services = language_service::list_all(&state.db).await?;
    Ok((StatusCode::OK, Json(ApiResponse::success("language services fetched", Some(services)))))
}

async fn by_id(
    State(state): State<AppState>,
    Path(language_service_id): Path<Uuid>,
) -> Result<(StatusCode, Json<ApiResponse<models::language_service::Model>>), ApiError> {
    let found = language_service::by_id(&state.db, language_service_id).await?;
    Ok((StatusCode::OK, Json(ApiResponse::success("language service fetched", found))))
}

async fn application_status(
    State(state): State<AppState>,
    Path(account_id): Path<Uuid>,
) -> Result<(StatusCode, Json<ApiResponse<models::language_service::Model>>), ApiError> {
    let status = language_service::application_status(&state.db, account_id).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success("application status", status))))
}

async fn filters(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<ApiResponse<LanguageServiceFilters>>), ApiError> {
    let filters = language_service::filters(&state.db).await?;
    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("language service filters fetched", Some(filters))),
    ))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ToggleStatusRequest {
    language_service_id: Uuid,
    status: bool,
}

async fn toggle_status(
    State(state): State<AppState>,
    Json(input): Json<ToggleStatusRequest>,
) -> Result<(StatusCode, Json<ApiResponse<()>>), ApiError> {
    language_service::toggle_status(&state.db, input.language_service_id, input.status).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success("language service status updated", None))))
}

async fn create_booking(
    State(state): State<AppState>,
    Json(input): Json<LanguageBookingRequest>,
) -> Result<(StatusCode, Json<ApiResponse<models::language_booking::Model>>), ApiError> {
    input.validate().map_err(validation_failure)?;
    let booking = language_service::create_booking(&state.db, input).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success("Language booking created successfully", Some(booking))),
    ))
}

async fn find_exploration(
    State(state): State<AppState>,
    Json(criteria): Json<ExplorationCriteria>,
) -> Result<(StatusCode, Json<ApiResponse<Vec<models::language_service::Model>>>), ApiError> {
    let services = language_service::find_exploration(&state.db, criteria).await?;
    Ok((StatusCode::OK, Json(ApiResponse::success("Language exploration found", Some(services)))))
}
