//! Artisan endpoints: listing, application status, portfolio, bookings and
//! the consumer-facing search family.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use common::types::ApiResponse;
use service::artisan::{
    self as artisan_service, ArtisanBookingRequest, ArtisanBookingView, ArtisanDetail,
    BookedDateRange, CraftSearchCriteria, NearbySearchCriteria, PortfolioUpdate,
    SustainableTourCriteria, TraditionalTourCriteria,
};
use service::pagination::{Page, PageQuery};

use crate::errors::{validation_failure, ApiError};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/pagination", get(pagination))
        .route("/all", get(all))
        .route("/detail/:account_id", get(detail_by_account))
        .route("/application-status/:account_id", get(application_status))
        .route("/account-portfolio/:account_id", get(portfolio_by_account))
        .route("/artisan-portfolio/:artisan_id", get(portfolio_by_artisan))
        .route("/bookings/:account_id", get(bookings))
        .route("/booked-dates/:artisan_id", get(booked_dates))
        .route("/:artisan_id", get(detail_by_artisan))
        .route("/toggle-status", put(toggle_status))
        .route("/portfolio", post(update_portfolio))
        .route("/create-booking", post(create_booking))
        .route("/find-artisan", post(find_by_craft))
        .route("/find-nearby-artisan", post(find_nearby))
        .route("/find-traditional-tour", post(find_traditional_tour))
        .route("/find-sustainable-living-tour", post(find_sustainable_living_tour))
}

async fn pagination(
    State(state): State<AppState>,
    Query(page): Query<PageQuery>,
) -> Result<(StatusCode, Json<ApiResponse<Page<ArtisanDetail>>>), ApiError> {
    let page = artisan_service::paginate(&state.db, page).await?;
    Ok((StatusCode::OK, Json(ApiResponse::success("all artisan", Some(page)))))
}

async fn all(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<ApiResponse<Vec<ArtisanDetail>>>), ApiError> {
    let artisans = artisan_service::list_all(&state.db).await?;
    Ok((StatusCode::OK, Json(ApiResponse::success("all artisan", Some(artisans)))))
}

async fn detail_by_account(
    State(state): State<AppState>,
    Path(account_id): Path<Uuid>,
) -> Result<(StatusCode, Json<ApiResponse<ArtisanDetail>>), ApiError> {
    let detail = artisan_service::detail_by_account_id(&state.db, account_id).await?;
    Ok((StatusCode::OK, Json(ApiResponse::success("artisan detail", detail))))
}

async fn detail_by_artisan(
    State(state): State<AppState>,
    Path(artisan_id): Path<Uuid>,
) -> Result<(StatusCode, Json<ApiResponse<ArtisanDetail>>), ApiError> {
    let detail = artisan_service::detail_by_artisan_id(&state.db, artisan_id).await?;
    Ok((StatusCode::OK, Json(ApiResponse::success("artisan detail", detail))))
}

async fn application_status(
    State(state): State<AppState>,
    Path(account_id): Path<Uuid>,
) -> Result<(StatusCode, Json<ApiResponse<ArtisanDetail>>), ApiError> {
    let status = artisan_service::application_status(&state.db, account_id).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success("application status", status))))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ToggleStatusRequest {
    artisan_id: Uuid,
    status: bool,
}

async fn toggle_status(
    State(state): State<AppState>,
    Json(input): Json<ToggleStatusRequest>,
) -> Result<(StatusCode, Json<ApiResponse<()>>), ApiError> {
    artisan_service::toggle_status(&state.db, input.artisan_id, input.status).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success("artisan toggle status", None))))
}

async fn update_portfolio(
    State(state): State<AppState>,
    Json(input): Json<PortfolioUpdate>,
) -> Result<(StatusCode, Json<ApiResponse<()>>), ApiError> {
    artisan_service::update_portfolio(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success("portfolio updated", None))))
}

async fn portfolio_by_account(
    State(state): State<AppState>,
    Path(account_id): Path<Uuid>,
) -> Result<(StatusCode, Json<ApiResponse<models::portfolio::Model>>), ApiError> {
    let portfolio = artisan_service::portfolio_by_account_id(&state.db, account_id).await?;
    Ok((StatusCode::OK, Json(ApiResponse::success("portfolio fetched", portfolio))))
}

async fn portfolio_by_artisan(
    State(state): State<AppState>,
    Path(artisan_id): Path<Uuid>,
) -> Result<(StatusCode, Json<ApiResponse<models::portfolio::Model>>), ApiError> {
    let portfolio = artisan_service::portfolio_by_artisan_id(&state.db, artisan_id).await?;
    Ok((StatusCode::OK, Json(ApiResponse::success("portfolio fetched", portfolio))))
}

async fn create_booking(
    State(state): State<AppState>,
    Json(input): Json<ArtisanBookingRequest>,
) -> Result<(StatusCode, Json<ApiResponse<()>>), ApiError> {
    input.validate().map_err(validation_failure)?;
    artisan_service::create_booking(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success("artisan booking created", None))))
}

async fn bookings(
    State(state): State<AppState>,
    Path(account_id): Path<Uuid>,
) -> Result<(StatusCode, Json<ApiResponse<Vec<ArtisanBookingView>>>), ApiError> {
    let bookings = artisan_service::bookings_by_account(&state.db, account_id).await?;
    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Artisan bookings fetched successfully", Some(bookings))),
    ))
}

async fn booked_dates(
    State(state): State<AppState>,
    Path(artisan_id): Path<Uuid>,
) -> Result<(StatusCode, Json<ApiResponse<Vec<BookedDateRange>>>), ApiError> {
    let dates = artisan_service::booked_dates(&state.db, artisan_id).await?;
    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Artisan booked dates fetched successfully", Some(dates))),
    ))
}

async fn find_by_craft(
    State(state): State<AppState>,
    Json(criteria): Json<CraftSearchCriteria>,
) -> Result<(StatusCode, Json<ApiResponse<Vec<ArtisanDetail>>>), ApiError> {
    let artisans = artisan_service::find_by_craft(&state.db, criteria).await?;
    Ok((StatusCode::OK, Json(ApiResponse::success("Artisan(s) found", Some(artisans)))))
}

async fn find_nearby(
    State(state): State<AppState>,
    Json(criteria): Json<NearbySearchCriteria>,
) -> Result<(StatusCode, Json<ApiResponse<Vec<ArtisanDetail>>>), ApiError> {
    let artisans = artisan_service::find_nearby(&state.db, criteria).await?;
    Ok((StatusCode::OK, Json(ApiResponse::success("Nearby artisan(s) found", Some(artisans)))))
}

async fn find_traditional_tour(
    State(state): State<AppState>,
    Json(criteria): Json<TraditionalTourCriteria>,
) -> Result<(StatusCode, Json<ApiResponse<Vec<ArtisanDetail>>>), ApiError> {
    let tours = artisan_service::find_traditional_tour(&state.db, criteria).await?;
    Ok((StatusCode::OK, Json(ApiResponse::success("Traditional tour found", Some(tours)))))
}

async fn find_sustainable_living_tour(
    State(state): State<AppState>,
    Json(criteria): Json<SustainableTourCriteria>,
) -> Result<(StatusCode, Json<ApiResponse<Vec<ArtisanDetail>>>), ApiError> {
    let tours = artisan_service::find_sustainable_living_tour(&state.db, criteria).await?;
    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Sustainable living tour(s) found", Some(tours))),
    ))
}
