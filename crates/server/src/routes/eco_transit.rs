//! Eco-transit endpoints: registration, options, bookings with the
//! server-computed total, filter facets and the adventure search.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use uuid::Uuid;
use validator::Validate;

use common::types::ApiResponse;
use service::eco_transit::{
    self as eco_transit_service, AdventureMatch, AdventureSearchCriteria, EcoTransitBookingRequest,
    EcoTransitDetail, EcoTransitFilters, EcoTransitListItem, OptionCreation,
};
use service::registration::{self, EcoTransitRegistration};

use crate::errors::{validation_failure, ApiError};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create))
        .route("/all", get(all))
        .route("/filters", get(filters))
        .route("/application-status/:account_id", get(application_status))
        .route("/:transit_id", get(detail))
        .route("/option", post(create_option))
        .route("/options/:transit_id", get(options))
        .route("/booking", post(create_booking))
        .route("/bookings/:transit_id", get(bookings))
        .route("/find-eco-transit-adventure", post(find_adventure))
}

async fn create(
    State(state): State<AppState>,
    Json(input): Json<EcoTransitRegistration>,
) -> Result<(StatusCode, Json<ApiResponse<()>>), ApiError> {
    input.validate().map_err(validation_failure)?;
    registration::create_eco_transit(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success("eco transit created", None))))
}

async fn all(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<ApiResponse<Vec<EcoTransitListItem>>>), ApiError> {
    let transits = eco_transit_service::list_all(&state.db).await?;
    Ok((StatusCode::OK, Json(ApiResponse::success("Eco transit detail", Some(transits)))))
}

async fn application_status(
    State(state): State<AppState>,
    Path(account_id): Path<Uuid>,
) -> Result<(StatusCode, Json<ApiResponse<models::eco_transit::Model>>), ApiError> {
    let status = eco_transit_service::application_status(&state.db, account_id).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success("application status", status))))
}

async fn detail(
    State(state): State<AppState>,
    Path(transit_id): Path<Uuid>,
) -> Result<(StatusCode, Json<ApiResponse<EcoTransitDetail>>), ApiError> {
    let detail = eco_transit_service::detail(&state.db, transit_id).await?;
    Ok((StatusCode::OK, Json(ApiResponse::success("Eco transit detail", detail))))
}

async fn create_option(
    State(state): State<AppState>,
    Json(input): Json<OptionCreation>,
) -> Result<(StatusCode, Json<ApiResponse<models::eco_transit_option::Model>>), ApiError> {
    input.validate().map_err(validation_failure)?;
    let option = eco_transit_service::create_option(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success("Eco transit option created", Some(option)))))
}

async fn options(
    State(state): State<AppState>,
    Path(transit_id): Path<Uuid>,
) -> Result<(StatusCode, Json<ApiResponse<Vec<models::eco_transit_option::Model>>>), ApiError> {
    let options = eco_transit_service::options_by_transit(&state.db, transit_id).await?;
    Ok((StatusCode::OK, Json(ApiResponse::success("Eco transit options", Some(options)))))
}

async fn create_booking(
    State(state): State<AppState>,
    Json(input): Json<EcoTransitBookingRequest>,
) -> Result<(StatusCode, Json<ApiResponse<models::eco_transit_booking::Model>>), ApiError> {
    input.validate().map_err(validation_failure)?;
    let booking = eco_transit_service::create_booking(&state.db, input).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success("Eco transit booking created", Some(booking))),
    ))
}

async fn bookings(
    State(state): State<AppState>,
    Path(transit_id): Path<Uuid>,
) -> Result<(StatusCode, Json<ApiResponse<Vec<models::eco_transit_booking::Model>>>), ApiError> {
    let bookings = eco_transit_service::bookings_by_transit(&state.db, transit_id).await?;
    Ok((StatusCode::OK, Json(ApiResponse::success("Eco transit bookings", Some(bookings)))))
}

async fn filters(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<ApiResponse<EcoTransitFilters>>), ApiError> {
    let filters = eco_transit_service::filters(&state.db).await?;
    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Eco transit filters fetched successfully", Some(filters))),
    ))
}

async fn find_adventure(
    State(state): State<AppState>,
    Json(criteria): Json<AdventureSearchCriteria>,
) -> Result<(StatusCode, Json<ApiResponse<Vec<AdventureMatch>>>), ApiError> {
    let adventures = eco_transit_service::find_adventure(&state.db, criteria).await?;
    Ok((StatusCode::OK, Json(ApiResponse::success("Eco transit adventure found", Some(adventures)))))
}
