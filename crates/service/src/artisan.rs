//! Artisan domain: application status, listing/pagination, portfolio,
//! bookings and the craft/location search endpoints.

use chrono::Utc;
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, LoaderTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use models::{artisan, artisan_booking, artisan_package, booking_detail, craft, portfolio, sub_craft};

use crate::errors::{none_if_unmigrated, ServiceError};
use crate::pagination::{Page, PageQuery};
use crate::query::contains_ci;

const NO_CRAFT_MATCH: &str = "No artisan craft found";

/// Artisan row with its taxonomy rows resolved.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtisanDetail {
    #[serde(flatten)]
    pub artisan: artisan::Model,
    pub craft: Option<craft::Model>,
    pub sub_craft: Option<sub_craft::Model>,
}

async fn with_taxonomy(
    db: &DatabaseConnection,
    artisans: Vec<artisan::Model>,
) -> Result<Vec<ArtisanDetail>, ServiceError> {
    let crafts = artisans.load_one(craft::Entity, db).await.map_err(ServiceError::from_db)?;
    let subs = artisans.load_one(sub_craft::Entity, db).await.map_err(ServiceError::from_db)?;
    Ok(artisans
        .into_iter()
        .zip(crafts)
        .zip(subs)
        .map(|((artisan, craft), sub_craft)| ArtisanDetail { artisan, craft, sub_craft })
        .collect())
}

/// Profile-or-null for a given account; null means "not yet submitted",
/// including when the table itself has not been migrated.
pub async fn application_status(
    db: &DatabaseConnection,
    account_id: Uuid,
) -> Result<Option<ArtisanDetail>, ServiceError> {
    let found = match artisan::Entity::find()
        .filter(artisan::Column::AccountId.eq(account_id))
        .one(db)
        .await
    {
        Ok(found) => found,
        Err(err) => return none_if_unmigrated(err),
    };
    let Some(found) = found else { return Ok(None) };
    Ok(with_taxonomy(db, vec![found]).await?.pop())
}

pub async fn detail_by_account_id(
    db: &DatabaseConnection,
    account_id: Uuid,
) -> Result<Option<ArtisanDetail>, ServiceError> {
    let found = artisan::Entity::find()
        .filter(artisan::Column::AccountId.eq(account_id))
        .one(db)
        .await
        .map_err(ServiceError::from_db)?;
    let Some(found) = found else { return Ok(None) };
    Ok(with_taxonomy(db, vec![found]).await?.pop())
}

pub async fn detail_by_artisan_id(
    db: &DatabaseConnection,
    artisan_id: Uuid,
) -> Result<Option<ArtisanDetail>, ServiceError> {
    let found = artisan::Entity::find_by_id(artisan_id)
        .one(db)
        .await
        .map_err(ServiceError::from_db)?;
    let Some(found) = found else { return Ok(None) };
    Ok(with_taxonomy(db, vec![found]).await?.pop())
}

/// Flip the visibility flag. Related bookings are untouched.
pub async fn toggle_status(
    db: &DatabaseConnection,
    artisan_id: Uuid,
    status: bool,
) -> Result<(), ServiceError> {
    let mut am: artisan::ActiveModel = artisan::Entity::find_by_id(artisan_id)
        .one(db)
        .await
        .map_err(ServiceError::from_db)?
        .ok_or_else(|| ServiceError::not_found("Artisan"))?
        .into();
    am.is_active = Set(status);
    am.update(db).await.map_err(ServiceError::from_db)?;
    Ok(())
}

pub async fn list_all(db: &DatabaseConnection) -> Result<Vec<ArtisanDetail>, ServiceError> {
    let artisans = artisan::Entity::find()
        .order_by_desc(artisan::Column::CreatedAt)
        .all(db)
        .await
        .map_err(ServiceError::from_db)?;
    with_taxonomy(db, artisans).await
}

pub async fn paginate(
    db: &DatabaseConnection,
    page: PageQuery,
) -> Result<Page<ArtisanDetail>, ServiceError> {
    let total = artisan::Entity::find().count(db).await.map_err(ServiceError::from_db)?;
    let artisans = artisan::Entity::find()
        .order_by_desc(artisan::Column::CreatedAt)
        .offset(page.skip())
        .limit(page.take())
        .all(db)
        .await
        .map_err(ServiceError::from_db)?;
    Ok(Page { items: with_taxonomy(db, artisans).await?, metadata: page.meta(total) })
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioUpdate {
    pub account_id: Uuid,
    pub images: Vec<String>,
}

/// Replace the artisan's portfolio images wholesale (never merged).
pub async fn update_portfolio(
    db: &DatabaseConnection,
    input: PortfolioUpdate,
) -> Result<(), ServiceError> {
    let owner = artisan::Entity::find()
        .filter(artisan::Column::AccountId.eq(input.account_id))
        .one(db)
        .await
        .map_err(ServiceError::from_db)?
        .ok_or_else(|| ServiceError::not_found("Artisan"))?;

    let existing = portfolio::Entity::find()
        .filter(portfolio::Column::ArtisanId.eq(owner.artisan_id))
        .one(db)
        .await
        .map_err(ServiceError::from_db)?;
    match existing {
        Some(found) => {
            let mut am: portfolio::ActiveModel = found.into();
            am.images = Set(input.images.into());
            am.update(db).await.map_err(ServiceError::from_db)?;
        }
        None => {
            portfolio::ActiveModel {
                portfolio_id: Set(Uuid::new_v4()),
                artisan_id: Set(owner.artisan_id),
                images: Set(input.images.into()),
            }
            .insert(db)
            .await
            .map_err(ServiceError::from_db)?;
        }
    }
    Ok(())
}

pub async fn portfolio_by_artisan_id(
    db: &DatabaseConnection,
    artisan_id: Uuid,
) -> Result<Option<portfolio::Model>, ServiceError> {
    portfolio::Entity::find()
        .filter(portfolio::Column::ArtisanId.eq(artisan_id))
        .one(db)
        .await
        .map_err(ServiceError::from_db)
}

pub async fn portfolio_by_account_id(
    db: &DatabaseConnection,
    account_id: Uuid,
) -> Result<Option<portfolio::Model>, ServiceError> {
    let owner = artisan::Entity::find()
        .filter(artisan::Column::AccountId.eq(account_id))
        .one(db)
        .await
        .map_err(ServiceError::from_db)?
        .ok_or_else(|| ServiceError::not_found("Artisan"))?;
    portfolio_by_artisan_id(db, owner.artisan_id).await
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ArtisanBookingRequest {
    pub first_name: String,
    pub last_name: String,
    #[validate(email)]
    pub email: String,
    pub phone: String,
    pub additional_note: Option<String>,
    pub start_date: DateTimeWithTimeZone,
    pub end_date: DateTimeWithTimeZone,
    pub package_id: Uuid,
    pub artisan_id: Uuid,
}

/// Two-step write: contact detail first, then the booking referencing it.
#[instrument(skip(db, input), fields(artisan_id = %input.artisan_id))]
pub async fn create_booking(
    db: &DatabaseConnection,
    input: ArtisanBookingRequest,
) -> Result<(), ServiceError> {
    artisan::Entity::find_by_id(input.artisan_id)
        .one(db)
        .await
        .map_err(ServiceError::from_db)?
        .ok_or_else(|| ServiceError::not_found("Artisan"))?;

    db.transaction::<_, (), ServiceError>(|txn| {
        Box::pin(async move {
            let detail = booking_detail::ActiveModel {
                booking_detail_id: Set(Uuid::new_v4()),
                first_name: Set(input.first_name),
                last_name: Set(input.last_name),
                email: Set(input.email),
                phone: Set(input.phone),
                additional_note: Set(input.additional_note),
            }
            .insert(txn)
            .await
            .map_err(ServiceError::from_db)?;
            artisan_booking::ActiveModel {
                artisan_booking_id: Set(Uuid::new_v4()),
                start_date: Set(input.start_date),
                end_date: Set(input.end_date),
                package_id: Set(input.package_id),
                artisan_id: Set(input.artisan_id),
                booking_detail_id: Set(detail.booking_detail_id),
                status: Set("new".into()),
                created_at: Set(Utc::now().into()),
            }
            .insert(txn)
            .await
            .map_err(ServiceError::from_db)?;
            Ok(())
        })
    })
    .await?;
    Ok(())
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtisanBookingView {
    #[serde(flatten)]
    pub booking: artisan_booking::Model,
    pub booking_detail: Option<booking_detail::Model>,
    pub package: Option<artisan_package::Model>,
    pub artisan: artisan::Model,
}

pub async fn bookings_by_account(
    db: &DatabaseConnection,
    account_id: Uuid,
) -> Result<Vec<ArtisanBookingView>, ServiceError> {
    let Some(owner) = artisan::Entity::find()
        .filter(artisan::Column::AccountId.eq(account_id))
        .one(db)
        .await
        .map_err(ServiceError::from_db)?
    else {
        return Ok(Vec::new());
    };

    let bookings = artisan_booking::Entity::find()
        .filter(artisan_booking::Column::ArtisanId.eq(owner.artisan_id))
        .order_by_desc(artisan_booking::Column::CreatedAt)
        .all(db)
        .await
        .map_err(ServiceError::from_db)?;
    let details = bookings.load_one(booking_detail::Entity, db).await.map_err(ServiceError::from_db)?;
    let packages = bookings.load_one(artisan_package::Entity, db).await.map_err(ServiceError::from_db)?;
    Ok(bookings
        .into_iter()
        .zip(details)
        .zip(packages)
        .map(|((booking, booking_detail), package)| ArtisanBookingView {
            booking,
            booking_detail,
            package,
            artisan: owner.clone(),
        })
        .collect())
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookedDateRange {
    pub start_date: DateTimeWithTimeZone,
    pub end_date: DateTimeWithTimeZone,
}

/// Date ranges blocked for an artisan; cancelled bookings free their slot.
pub async fn booked_dates(
    db: &DatabaseConnection,
    artisan_id: Uuid,
) -> Result<Vec<BookedDateRange>, ServiceError> {
    let bookings = artisan_booking::Entity::find()
        .filter(artisan_booking::Column::ArtisanId.eq(artisan_id))
        .filter(artisan_booking::Column::Status.ne("cancelled"))
        .all(db)
        .await
        .map_err(ServiceError::from_db)?;
    Ok(bookings
        .into_iter()
        .map(|b| BookedDateRange { start_date: b.start_date, end_date: b.end_date })
        .collect())
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationFilter {
    pub country: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
}

pub fn location_condition(location: &LocationFilter) -> Condition {
    let mut cond = Condition::all();
    if let Some(country) = &location.country {
        cond = cond.add(contains_ci(artisan::Column::Address, country));
    }
    if let Some(state) = &location.state {
        cond = cond.add(contains_ci(artisan::Column::Address, state));
    }
    if let Some(city) = &location.city {
        cond = cond.add(contains_ci(artisan::Column::Address, city));
    }
    cond
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CraftSearchCriteria {
    pub craft: String,
    pub sub_craft: String,
    pub check_in: Option<DateTimeWithTimeZone>,
    pub check_out: Option<DateTimeWithTimeZone>,
    pub experience_goals: Option<String>,
    pub travel_type: Option<String>,
}

async fn craft_by_name(
    db: &DatabaseConnection,
    name: &str,
) -> Result<Option<craft::Model>, ServiceError> {
    craft::Entity::find()
        .filter(crate::query::eq_ci(craft::Column::CraftName, name))
        .one(db)
        .await
        .map_err(ServiceError::from_db)
}

pub async fn find_by_craft(
    db: &DatabaseConnection,
    criteria: CraftSearchCriteria,
) -> Result<Vec<ArtisanDetail>, ServiceError> {
    let craft_row = craft_by_name(db, &criteria.craft)
        .await?
        .ok_or_else(|| ServiceError::NotFound(NO_CRAFT_MATCH.into()))?;
    let sub_row = sub_craft::Entity::find()
        .filter(crate::query::eq_ci(sub_craft::Column::SubCraftName, &criteria.sub_craft))
        .filter(sub_craft::Column::CraftId.eq(craft_row.craft_id))
        .one(db)
        .await
        .map_err(ServiceError::from_db)?
        .ok_or_else(|| ServiceError::NotFound(NO_CRAFT_MATCH.into()))?;

    let artisans = artisan::Entity::find()
        .filter(artisan::Column::CraftId.eq(craft_row.craft_id))
        .filter(artisan::Column::SubCraftId.eq(sub_row.sub_craft_id))
        .all(db)
        .await
        .map_err(ServiceError::from_db)?;
    if artisans.is_empty() {
        return Err(ServiceError::NotFound(NO_CRAFT_MATCH.into()));
    }
    with_taxonomy(db, artisans).await
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NearbySearchCriteria {
    pub craft: String,
    #[serde(default)]
    pub location: LocationFilter,
    pub visit_date: Option<DateTimeWithTimeZone>,
}

pub async fn find_nearby(
    db: &DatabaseConnection,
    criteria: NearbySearchCriteria,
) -> Result<Vec<ArtisanDetail>, ServiceError> {
    let craft_row = craft_by_name(db, &criteria.craft)
        .await?
        .ok_or_else(|| ServiceError::NotFound(NO_CRAFT_MATCH.into()))?;

    let artisans = artisan::Entity::find()
        .filter(artisan::Column::CraftId.eq(craft_row.craft_id))
        .filter(location_condition(&criteria.location))
        .all(db)
        .await
        .map_err(ServiceError::from_db)?;
    if artisans.is_empty() {
        return Err(ServiceError::NotFound(NO_CRAFT_MATCH.into()));
    }
    with_taxonomy(db, artisans).await
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraditionalTourCriteria {
    pub destination: Option<String>,
    pub tour_package: Option<String>,
    pub budget_per_person: Option<f64>,
    pub check_in: Option<DateTimeWithTimeZone>,
    pub check_out: Option<DateTimeWithTimeZone>,
    pub adults: Option<i32>,
    pub children: Option<i32>,
    pub tour_preferences: Option<Vec<String>>,
}

// Only the address has a storage counterpart for this criteria set; the
// remaining fields are accepted but impose no constraint.
pub fn traditional_tour_condition(criteria: &TraditionalTourCriteria) -> Condition {
    let mut cond = Condition::all();
    if let Some(destination) = &criteria.destination {
        cond = cond.add(contains_ci(artisan::Column::Address, destination));
    }
    cond
}

pub async fn find_traditional_tour(
    db: &DatabaseConnection,
    criteria: TraditionalTourCriteria,
) -> Result<Vec<ArtisanDetail>, ServiceError> {
    let artisans = artisan::Entity::find()
        .filter(traditional_tour_condition(&criteria))
        .all(db)
        .await
        .map_err(ServiceError::from_db)?;
    if artisans.is_empty() {
        return Err(ServiceError::NotFound("No Traditional tour found".into()));
    }
    with_taxonomy(db, artisans).await
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SustainableTourCriteria {
    pub accommodation_type: Option<String>,
    pub check_in: Option<DateTimeWithTimeZone>,
    pub check_out: Option<DateTimeWithTimeZone>,
    pub adults: Option<i32>,
    pub children: Option<i32>,
    pub experience_filters: Option<Vec<String>>,
    pub budget_tier: Option<f64>,
}

pub fn sustainable_tour_condition(criteria: &SustainableTourCriteria) -> Condition {
    let mut cond = Condition::all();
    if let Some(accommodation) = &criteria.accommodation_type {
        cond = cond.add(contains_ci(artisan::Column::Address, accommodation));
    }
    cond
}

pub async fn find_sustainable_living_tour(
    db: &DatabaseConnection,
    criteria: SustainableTourCriteria,
) -> Result<Vec<ArtisanDetail>, ServiceError> {
    let artisans = artisan::Entity::find()
        .filter(sustainable_tour_condition(&criteria))
        .all(db)
        .await
        .map_err(ServiceError::from_db)?;
    if artisans.is_empty() {
        return Err(ServiceError::NotFound("No sustainable living tour found".into()));
    }
    with_taxonomy(db, artisans).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, DbBackend, DbErr, MockDatabase, QueryTrait};

    #[test]
    fn location_condition_conjuncts_present_fields_only() {
        let location = LocationFilter {
            country: Some("India".into()),
            state: None,
            city: Some("Srinagar".into()),
        };
        let sql = artisan::Entity::find()
            .filter(location_condition(&location))
            .build(DbBackend::Postgres)
            .to_string();
        assert!(sql.contains(r#"LOWER("address") LIKE '%india%'"#), "{sql}");
        assert!(sql.contains(r#"LOWER("address") LIKE '%srinagar%'"#), "{sql}");
    }

    #[test]
    fn empty_location_imposes_no_constraint() {
        let sql = artisan::Entity::find()
            .filter(location_condition(&LocationFilter::default()))
            .build(DbBackend::Postgres)
            .to_string();
        assert!(!sql.contains("WHERE"), "{sql}");
    }

    #[test]
    fn traditional_tour_condition_uses_destination_only() {
        let criteria = TraditionalTourCriteria {
            destination: Some("Pahalgam".into()),
            tour_package: Some("ignored".into()),
            budget_per_person: Some(500.0),
            ..Default::default()
        };
        let sql = artisan::Entity::find()
            .filter(traditional_tour_condition(&criteria))
            .build(DbBackend::Postgres)
            .to_string();
        assert!(sql.contains(r#"LOWER("address") LIKE '%pahalgam%'"#), "{sql}");
        assert!(!sql.contains("ignored"), "{sql}");
    }

    #[tokio::test]
    async fn application_status_tolerates_missing_table() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom(
                r#"relation "artisan" does not exist"#.into(),
            )])
            .into_connection();
        let status = application_status(&db, Uuid::new_v4()).await.unwrap();
        assert!(status.is_none());
    }

    #[tokio::test]
    async fn toggle_status_on_unknown_artisan_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<artisan::Model>::new()])
            .into_connection();
        let err = toggle_status(&db, Uuid::new_v4(), false).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn search_with_no_matches_is_an_error_not_an_empty_list() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<artisan::Model>::new()])
            .into_connection();
        let err = find_traditional_tour(&db, TraditionalTourCriteria::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    fn artisan_fixture() -> artisan::Model {
        artisan::Model {
            artisan_id: Uuid::new_v4(),
            first_name: "Amin".into(),
            last_name: "Dar".into(),
            address: "Srinagar".into(),
            description: "walnut wood carver".into(),
            dp: "/dp.png".into(),
            experience: "10".into(),
            education: "none".into(),
            certificate: "none".into(),
            training: "none".into(),
            recognition: "none".into(),
            craft_id: Uuid::new_v4(),
            sub_craft_id: Uuid::new_v4(),
            is_active: true,
            account_id: Uuid::new_v4(),
            created_at: "2026-01-01T00:00:00Z".parse().unwrap(),
        }
    }

    #[tokio::test]
    async fn toggle_only_touches_the_visibility_flag() {
        let existing = artisan_fixture();
        let artisan_id = existing.artisan_id;
        let mut updated = existing.clone();
        updated.is_active = false;

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![existing]])
            .append_query_results([vec![updated]])
            .into_connection();
        toggle_status(&db, artisan_id, false).await.unwrap();

        let log = db.into_transaction_log();
        let update_stmt = format!("{:?}", log[1]);
        assert!(update_stmt.contains("is_active"), "{update_stmt}");
        // Every other column stays out of the UPDATE statement.
        assert!(!update_stmt.contains("first_name"), "{update_stmt}");
        assert!(!update_stmt.contains("craft_id"), "{update_stmt}");
    }
}
