//! Provider registration endpoints: one create/update pair per profile type.
//! Creates respond 201; updates keep the 201 convention this API has always
//! used. The safari update takes its account from the verified token.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::middleware;
use axum::routing::{post, put};
use axum::{Extension, Json, Router};
use uuid::Uuid;
use validator::Validate;

use common::types::ApiResponse;
use service::language::{self as language_service, LanguageServiceUpdate};
use service::registration::{
    self, ArtisanProfileUpdate, ArtisanRegistration, EcoTransitProfileUpdate,
    EcoTransitRegistration, FairProfileUpdate, FairRegistration, HotelProfileUpdate,
    HotelRegistration, LanguageServiceRegistration, RestaurantRegistration, RestaurantUpdate,
    SafariProfileUpdate, SafariRegistration, ShopProfileUpdate, ShopRegistration,
    ShopRegistrationSummary, TravelPlanerProfileUpdate, TravelPlanerRegistration,
};

use crate::auth::{self, AuthAccount};
use crate::errors::{validation_failure, ApiError};
use crate::state::AppState;

pub fn router(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/safari", put(update_safari))
        .route_layer(middleware::from_fn_with_state(state, auth::require_account));

    Router::new()
        .route("/artisan", post(create_artisan).put(update_artisan))
        .route("/safari", post(create_safari))
        .route("/fair", post(create_fair).put(update_fair))
        .route("/shop", post(create_shop).put(update_shop))
        .route("/restaurant", post(create_restaurant).put(update_restaurant))
        .route("/travel-planer", post(create_travel_planer).put(update_travel_planer))
        .route("/hotel", post(create_hotel).put(update_hotel))
        .route("/language-service", post(create_language_service))
        .route(
            "/language-service/:language_service_id",
            put(update_language_service).delete(delete_language_service),
        )
        .route("/eco-transit", post(create_eco_transit).put(update_eco_transit))
        .merge(protected)
}

async fn create_artisan(
    State(state): State<AppState>,
    Json(input): Json<ArtisanRegistration>,
) -> Result<(StatusCode, Json<ApiResponse<()>>), ApiError> {
    input.validate().map_err(validation_failure)?;
    registration::create_artisan(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success("artisan created", None))))
}

async fn update_artisan(
    State(state): State<AppState>,
    Json(input): Json<ArtisanProfileUpdate>,
) -> Result<(StatusCode, Json<ApiResponse<()>>), ApiError> {
    registration::update_artisan(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success("artisan updated", None))))
}

async fn create_safari(
    State(state): State<AppState>,
    Json(input): Json<SafariRegistration>,
) -> Result<(StatusCode, Json<ApiResponse<()>>), ApiError> {
    input.validate().map_err(validation_failure)?;
    registration::create_safari(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success("safari created", None))))
}

async fn update_safari(
    State(state): State<AppState>,
    Extension(AuthAccount(account_id)): Extension<AuthAccount>,
    Json(input): Json<SafariProfileUpdate>,
) -> Result<(StatusCode, Json<ApiResponse<()>>), ApiError> {
    registration::update_safari(&state.db, account_id, input).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success("safari updated", None))))
}

async fn create_fair(
    State(state): State<AppState>,
    Json(input): Json<FairRegistration>,
) -> Result<(StatusCode, Json<ApiResponse<()>>), ApiError> {
    input.validate().map_err(validation_failure)?;
    registration::create_fair(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success("fair created", None))))
}

async fn update_fair(
    State(state): State<AppState>,
    Json(input): Json<FairProfileUpdate>,
) -> Result<(StatusCode, Json<ApiResponse<()>>), ApiError> {
    registration::update_fair(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success("fair updated", None))))
}

async fn create_shop(
    State(state): State<AppState>,
    Json(input): Json<ShopRegistration>,
) -> Result<(StatusCode, Json<ApiResponse<ShopRegistrationSummary>>), ApiError> {
    input.validate().map_err(validation_failure)?;
    let summary = registration::create_shop(&state.db, input).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success("Vendor registration successful", Some(summary))),
    ))
}

async fn update_shop(
    State(state): State<AppState>,
    Json(input): Json<ShopProfileUpdate>,
) -> Result<(StatusCode, Json<ApiResponse<()>>), ApiError> {
    registration::update_shop(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success("shop updated", None))))
}

async fn create_restaurant(
    State(state): State<AppState>,
    Json(input): Json<RestaurantRegistration>,
) -> Result<(StatusCode, Json<ApiResponse<()>>), ApiError> {
    input.validate().map_err(validation_failure)?;
    registration::create_restaurant(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success("restaurant created", None))))
}

async fn update_restaurant(
    State(state): State<AppState>,
    Json(input): Json<RestaurantUpdate>,
) -> Result<(StatusCode, Json<ApiResponse<()>>), ApiError> {
    registration::update_restaurant(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success("restaurant updated", None))))
}

async fn create_travel_planer(
    State(state): State<AppState>,
    Json(input): Json<TravelPlanerRegistration>,
) -> Result<(StatusCode, Json<ApiResponse<()>>), ApiError> {
    input.validate().map_err(validation_failure)?;
    registration::create_travel_planer(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success("travel planer created", None))))
}

async fn update_travel_planer(
    State(state): State<AppState>,
    Json(input): Json<TravelPlanerProfileUpdate>,
) -> Result<(StatusCode, Json<ApiResponse<()>>), ApiError> {
    registration::update_travel_planer(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success("travel planer updated", None))))
}

async fn create_hotel(
    State(state): State<AppState>,
    Json(input): Json<HotelRegistration>,
) -> Result<(StatusCode, Json<ApiResponse<()>>), ApiError> {
    input.validate().map_err(validation_failure)?;
    registration::create_hotel(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success("Hotel created successfully", None))))
}

async fn update_hotel(
    State(state): State<AppState>,
    Json(input): Json<HotelProfileUpdate>,
) -> Result<(StatusCode, Json<ApiResponse<()>>), ApiError> {
    registration::update_hotel(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success("hotel updated", None))))
}

async fn create_language_service(
    State(state): State<AppState>,
    Json(input): Json<LanguageServiceRegistration>,
) -> Result<(StatusCode, Json<ApiResponse<()>>), ApiError> {
    input.validate().map_err(validation_failure)?;
    registration::create_language_service(&state.db, input).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success("Language service created successfully", None)),
    ))
}

async fn update_language_service(
    State(state): State<AppState>,
    Path(language_service_id): Path<Uuid>,
    Json(mut input): Json<LanguageServiceUpdate>,
) -> Result<(StatusCode, Json<ApiResponse<models::language_service::Model>>), ApiError> {
    input.language_service_id = language_service_id;
    let updated = language_service::update(&state.db, input).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success("Language service updated successfully", Some(updated))),
    ))
}

async fn delete_language_service(
    State(state): State<AppState>,
    Path(language_service_id): Path<Uuid>,
) -> Result<(StatusCode, Json<ApiResponse<()>>), ApiError> {
    language_service::delete(&state.db, language_service_id).await?;
    Ok((StatusCode::OK, Json(ApiResponse::success("Language service deleted", None))))
}

async fn create_eco_transit(
    State(state): State<AppState>,
    Json(input): Json<EcoTransitRegistration>,
) -> Result<(StatusCode, Json<ApiResponse<()>>), ApiError> {
    input.validate().map_err(validation_failure)?;
    registration::create_eco_transit(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success("eco transit created", None))))
}

async fn update_eco_transit(
    State(state): State<AppState>,
    Json(input): Json<EcoTransitProfileUpdate>,
) -> Result<(StatusCode, Json<ApiResponse<()>>), ApiError> {
    registration::update_eco_transit(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success("eco transit updated", None))))
}
