//! Fair endpoints. Event creation/update require a verified account token;
//! `/update-event` stays open as an alias for the existing frontend.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::middleware;
use axum::routing::{get, patch, post, put};
use axum::{Json, Router};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use common::types::ApiResponse;
use service::fair::{
    self as fair_service, FairBookingRequest, FairBookingSummary, FairBookingView, FairDetail,
    FairEventCreation, FairEventMatch, FairEventUpdate, FairSearchCriteria,
};
use service::pagination::{Page, PageQuery};

use crate::auth;
use crate::errors::{validation_failure, ApiError};
use crate::state::AppState;

pub fn router(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/create-event", post(create_event))
        .route("/event", patch(update_event))
        .route_layer(middleware::from_fn_with_state(state, auth::require_account));

    Router::new()
        .route("/detail/:account_id", get(profile_by_account))
        .route("/events/:account_id", get(events_by_account))
        .route("/event/:event_id", get(event_by_id))
        .route("/all", get(all))
        .route("/pagination", get(pagination))
        .route("/application-status/:account_id", get(application_status))
        .route("/bookings/:account_id", get(bookings))
        .route("/:fair_id", get(detail_by_id))
        .route("/toggle-status", put(toggle_status))
        .route("/create-booking", post(create_booking))
        .route("/update-event", patch(update_event))
        .route("/find-fair", post(find_by_criteria))
        .merge(protected)
}

async fn application_status(
    State(state): State<AppState>,
    Path(account_id): Path<Uuid>,
) -> Result<(StatusCode, Json<ApiResponse<models::fair::Model>>), ApiError> {
    let status = fair_service::application_status(&state.db, account_id).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success("application status", status))))
}

async fn profile_by_account(
    State(state): State<AppState>,
    Path(account_id): Path<Uuid>,
) -> Result<(StatusCode, Json<ApiResponse<models::fair::Model>>), ApiError> {
    let fair = fair_service::profile_by_account_id(&state.db, account_id).await?;
    Ok((StatusCode::OK, Json(ApiResponse::success("fair details", fair))))
}

async fn create_event(
    State(state): State<AppState>,
    Json(input): Json<FairEventCreation>,
) -> Result<(StatusCode, Json<ApiResponse<()>>), ApiError> {
    input.validate().map_err(validation_failure)?;
    fair_service::create_event(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success("fair event created", None))))
}

async fn update_event(
    State(state): State<AppState>,
    Json(input): Json<FairEventUpdate>,
) -> Result<(StatusCode, Json<ApiResponse<()>>), ApiError> {
    input.validate().map_err(validation_failure)?;
    fair_service::update_event(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success("fair event updated", None))))
}

async fn events_by_account(
    State(state): State<AppState>,
    Path(account_id): Path<Uuid>,
) -> Result<(StatusCode, Json<ApiResponse<Vec<models::fair_event::Model>>>), ApiError> {
    let events = fair_service::events_by_account(&state.db, account_id).await?;
    Ok((StatusCode::OK, Json(ApiResponse::success("events fetched successfully", Some(events)))))
}

async fn event_by_id(
    State(state): State<AppState>,
    Path(event_id): Path<Uuid>,
) -> Result<(StatusCode, Json<ApiResponse<models::fair_event::Model>>), ApiError> {
    let event = fair_service::event_by_id(&state.db, event_id).await?;
    Ok((StatusCode::OK, Json(ApiResponse::success("event fetched successfully", Some(event)))))
}

async fn all(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<ApiResponse<Vec<models::fair::Model>>>), ApiError> {
    let fairs = fair_service::list_all(&state.db).await?;
    Ok((StatusCode::OK, Json(ApiResponse::success("all fairs", Some(fairs)))))
}

async fn pagination(
    State(state): State<AppState>,
    Query(page): Query<PageQuery>,
) -> Result<(StatusCode, Json<ApiResponse<Page<models::fair::Model>>>), ApiError> {
    let page = fair_service::paginate(&state.db, page).await?;
    Ok((StatusCode::OK, Json(ApiResponse::success("all fairs", Some(page)))))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ToggleStatusRequest {
    fair_id: Uuid,
    status: bool,
}

async fn toggle_status(
    State(state): State<AppState>,
    Json(input): Json<ToggleStatusRequest>,
) -> Result<(StatusCode, Json<ApiResponse<()>>), ApiError> {
    fair_service::toggle_status(&state.db, input.fair_id, input.status).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success("fair toggle status", None))))
}

async fn detail_by_id(
    State(state): State<AppState>,
    Path(fair_id): Path<Uuid>,
) -> Result<(StatusCode, Json<ApiResponse<FairDetail>>), ApiError> {
    let detail = fair_service::detail_by_id(&state.db, fair_id).await?;
    Ok((StatusCode::OK, Json(ApiResponse::success("fair details", detail))))
}

async fn create_booking(
    State(state): State<AppState>,
    Json(input): Json<FairBookingRequest>,
) -> Result<(StatusCode, Json<ApiResponse<FairBookingSummary>>), ApiError> {
    input.validate().map_err(validation_failure)?;
    let summary = fair_service::create_booking(&state.db, input).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success("Fair booking created successfully", Some(summary))),
    ))
}

async fn bookings(
    State(state): State<AppState>,
    Path(account_id): Path<Uuid>,
) -> Result<(StatusCode, Json<ApiResponse<Vec<FairBookingView>>>), ApiError> {
    let bookings = fair_service::bookings_by_account(&state.db, account_id).await?;
    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Fair bookings fetched successfully", Some(bookings))),
    ))
}

async fn find_by_criteria(
    State(state): State<AppState>,
    Json(criteria): Json<FairSearchCriteria>,
) -> Result<(StatusCode, Json<ApiResponse<Vec<FairEventMatch>>>), ApiError> {
    let fairs = fair_service::find_by_criteria(&state.db, criteria).await?;
    Ok((StatusCode::OK, Json(ApiResponse::success("Fair(s) found", Some(fairs)))))
}
