//! Eco-transit domain: options, bookings with a server-computed total,
//! filter facets and the adventure search.

use std::collections::BTreeSet;

use chrono::Utc;
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, LoaderTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use models::{account, booking_detail, eco_transit, eco_transit_booking, eco_transit_option};

use crate::errors::{none_if_unmigrated, ServiceError};
use crate::query::{contains_ci, eq_ci};

/// Booking total: distance × option base fee × passenger count.
pub fn booking_total(distance: f64, base_fee: f64, number_of_passengers: i32) -> f64 {
    distance * base_fee * f64::from(number_of_passengers)
}

pub async fn application_status(
    db: &DatabaseConnection,
    account_id: Uuid,
) -> Result<Option<eco_transit::Model>, ServiceError> {
    match eco_transit::Entity::find()
        .filter(eco_transit::Column::AccountId.eq(account_id))
        .one(db)
        .await
    {
        Ok(found) => Ok(found),
        Err(err) => none_if_unmigrated(err),
    }
}

/// Transit profile with its transport options.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EcoTransitDetail {
    #[serde(flatten)]
    pub transit: eco_transit::Model,
    pub eco_transit_option: Vec<eco_transit_option::Model>,
}

pub async fn detail(
    db: &DatabaseConnection,
    transit_id: Uuid,
) -> Result<Option<EcoTransitDetail>, ServiceError> {
    let Some(transit) = eco_transit::Entity::find_by_id(transit_id)
        .one(db)
        .await
        .map_err(ServiceError::from_db)?
    else {
        return Ok(None);
    };
    let options = eco_transit_option::Entity::find()
        .filter(eco_transit_option::Column::TransitId.eq(transit.transit_id))
        .all(db)
        .await
        .map_err(ServiceError::from_db)?;
    Ok(Some(EcoTransitDetail { transit, eco_transit_option: options }))
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OptionCreation {
    pub transit_id: Uuid,
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(range(min = 0.0))]
    pub base_fee: f64,
}

pub async fn create_option(
    db: &DatabaseConnection,
    input: OptionCreation,
) -> Result<eco_transit_option::Model, ServiceError> {
    eco_transit::Entity::find_by_id(input.transit_id)
        .one(db)
        .await
        .map_err(ServiceError::from_db)?
        .ok_or_else(|| ServiceError::not_found("Eco transit"))?;
    eco_transit_option::ActiveModel {
        option_id: Set(Uuid::new_v4()),
        transit_id: Set(input.transit_id),
        title: Set(input.title),
        base_fee: Set(input.base_fee),
    }
    .insert(db)
    .await
    .map_err(ServiceError::from_db)
}

pub async fn options_by_transit(
    db: &DatabaseConnection,
    transit_id: Uuid,
) -> Result<Vec<eco_transit_option::Model>, ServiceError> {
    eco_transit_option::Entity::find()
        .filter(eco_transit_option::Column::TransitId.eq(transit_id))
        .all(db)
        .await
        .map_err(ServiceError::from_db)
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EcoTransitBookingRequest {
    pub first_name: String,
    pub last_name: String,
    #[validate(email)]
    pub email: String,
    pub phone: String,
    pub additional_note: Option<String>,
    pub option_id: Uuid,
    pub transit_id: Uuid,
    pub travel_date: DateTimeWithTimeZone,
    #[validate(range(min = 1))]
    pub number_of_passengers: i32,
    #[validate(range(min = 0.0))]
    pub distance: f64,
}

/// Create a booking. The option lookup is mandatory: without a resolvable
/// fee basis no rows are written.
#[instrument(skip(db, input), fields(option_id = %input.option_id))]
pub async fn create_booking(
    db: &DatabaseConnection,
    input: EcoTransitBookingRequest,
) -> Result<eco_transit_booking::Model, ServiceError> {
    let option = eco_transit_option::Entity::find_by_id(input.option_id)
        .one(db)
        .await
        .map_err(ServiceError::from_db)?
        .ok_or_else(|| ServiceError::NotFound("Eco transit option not found".into()))?;

    let total_amount = booking_total(input.distance, option.base_fee, input.number_of_passengers);
    let booking = db
        .transaction::<_, eco_transit_booking::Model, ServiceError>(|txn| {
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
                eco_transit_booking::ActiveModel {
                    eco_transit_booking_id: Set(Uuid::new_v4()),
                    option_id: Set(input.option_id),
                    transit_id: Set(input.transit_id),
                    booking_detail_id: Set(detail.booking_detail_id),
                    travel_date: Set(input.travel_date),
                    number_of_passengers: Set(input.number_of_passengers),
                    distance: Set(input.distance),
                    total_amount: Set(total_amount),
                    status: Set("new".into()),
                    created_at: Set(Utc::now().into()),
                }
                .insert(txn)
                .await
                .map_err(ServiceError::from_db)
            })
        })
        .await?;
    Ok(booking)
}

pub async fn bookings_by_transit(
    db: &DatabaseConnection,
    transit_id: Uuid,
) -> Result<Vec<eco_transit_booking::Model>, ServiceError> {
    eco_transit_booking::Entity::find()
        .filter(eco_transit_booking::Column::TransitId.eq(transit_id))
        .all(db)
        .await
        .map_err(ServiceError::from_db)
}

/// Account identifiers exposed alongside a transit listing.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSummary {
    pub account_id: Uuid,
    pub email: String,
    pub account_type: account::AccountType,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EcoTransitListItem {
    #[serde(flatten)]
    pub transit: eco_transit::Model,
    pub account: Option<AccountSummary>,
    pub eco_transit_option: Vec<eco_transit_option::Model>,
}

pub async fn list_all(db: &DatabaseConnection) -> Result<Vec<EcoTransitListItem>, ServiceError> {
    let transits = eco_transit::Entity::find()
        .order_by_desc(eco_transit::Column::CreatedAt)
        .all(db)
        .await
        .map_err(ServiceError::from_db)?;
    let accounts = transits.load_one(account::Entity, db).await.map_err(ServiceError::from_db)?;
    let options = transits
        .load_many(eco_transit_option::Entity, db)
        .await
        .map_err(ServiceError::from_db)?;
    Ok(transits
        .into_iter()
        .zip(accounts)
        .zip(options)
        .map(|((transit, owner), options)| EcoTransitListItem {
            transit,
            account: owner.map(|a| AccountSummary {
                account_id: a.account_id,
                email: a.email,
                account_type: a.account_type,
            }),
            eco_transit_option: options,
        })
        .collect())
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EcoTransitFilters {
    pub locations: Vec<String>,
    pub vehicle_types: Vec<String>,
    pub price_ranges: Vec<String>,
}

/// Bucket base fees into the advertised price bands.
pub(crate) fn fee_price_ranges(fees: &[f64]) -> Vec<String> {
    let positive: Vec<f64> = fees.iter().copied().filter(|fee| *fee > 0.0).collect();
    let mut ranges = Vec::new();
    if positive.is_empty() {
        return ranges;
    }
    let min = positive.iter().copied().fold(f64::INFINITY, f64::min);
    let max = positive.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if min < 50.0 {
        ranges.push("Under $50".to_string());
    }
    if positive.iter().any(|fee| (50.0..100.0).contains(fee)) {
        ranges.push("$50-$100".to_string());
    }
    if positive.iter().any(|fee| (100.0..200.0).contains(fee)) {
        ranges.push("$100-$200".to_string());
    }
    if max >= 200.0 {
        ranges.push("$200+".to_string());
    }
    ranges
}

/// Facets for the consumer-side filter panel, derived from active transits.
pub async fn filters(db: &DatabaseConnection) -> Result<EcoTransitFilters, ServiceError> {
    let transits = eco_transit::Entity::find()
        .filter(eco_transit::Column::IsActive.eq(true))
        .all(db)
        .await
        .map_err(ServiceError::from_db)?;
    let options = transits
        .load_many(eco_transit_option::Entity, db)
        .await
        .map_err(ServiceError::from_db)?;

    let locations: BTreeSet<String> = transits
        .iter()
        .map(|t| t.address.clone())
        .filter(|addr| !addr.is_empty() && addr != "none")
        .collect();
    let vehicle_types: BTreeSet<String> = options
        .iter()
        .flatten()
        .map(|o| o.title.clone())
        .filter(|title| !title.is_empty() && title != "none")
        .collect();
    let fees: Vec<f64> = options.iter().flatten().map(|o| o.base_fee).collect();

    Ok(EcoTransitFilters {
        locations: locations.into_iter().collect(),
        vehicle_types: vehicle_types.into_iter().collect(),
        price_ranges: fee_price_ranges(&fees),
    })
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdventureSearchCriteria {
    pub pickup: Option<String>,
    pub destination: Option<String>,
    pub travel_date: Option<DateTimeWithTimeZone>,
    pub number_of_guests: Option<i32>,
    pub vehicle_type: Option<String>,
    pub accessibility_needs: Option<Vec<String>>,
    pub sustainability_preferences: Option<Vec<String>>,
    pub package_option: Option<f64>,
    pub occasion: Option<String>,
    pub add_on_services: Option<Vec<String>>,
}

/// Filter over options joined with their owning transit.
pub fn adventure_condition(criteria: &AdventureSearchCriteria) -> Condition {
    let mut cond = Condition::all();
    if let Some(vehicle_type) = &criteria.vehicle_type {
        cond = cond.add(eq_ci(eco_transit_option::Column::Title, vehicle_type));
    }
    if let Some(ceiling) = criteria.package_option {
        cond = cond.add(eco_transit_option::Column::BaseFee.lte(ceiling));
    }
    if let Some(pickup) = &criteria.pickup {
        cond = cond.add(contains_ci(
            (eco_transit::Entity, eco_transit::Column::Address),
            pickup,
        ));
    }
    if let Some(destination) = &criteria.destination {
        cond = cond.add(contains_ci(
            (eco_transit::Entity, eco_transit::Column::Address),
            destination,
        ));
    }
    cond
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdventureMatch {
    #[serde(flatten)]
    pub option: eco_transit_option::Model,
    pub transit: Option<eco_transit::Model>,
}

pub async fn find_adventure(
    db: &DatabaseConnection,
    criteria: AdventureSearchCriteria,
) -> Result<Vec<AdventureMatch>, ServiceError> {
    let matches = eco_transit_option::Entity::find()
        .find_also_related(eco_transit::Entity)
        .filter(adventure_condition(&criteria))
        .all(db)
        .await
        .map_err(ServiceError::from_db)?;
    if matches.is_empty() {
        return Err(ServiceError::NotFound("No Eco transit adventure found".into()));
    }
    Ok(matches
        .into_iter()
        .map(|(option, transit)| AdventureMatch { option, transit })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, DbBackend, DbErr, EntityTrait, MockDatabase, QueryTrait};

    #[test]
    fn booking_total_is_deterministic() {
        assert_eq!(booking_total(10.0, 5.0, 2), 100.0);
        assert_eq!(booking_total(0.0, 5.0, 2), 0.0);
        assert_eq!(booking_total(3.5, 2.0, 3), 21.0);
    }

    #[test]
    fn price_ranges_cover_all_bands() {
        let ranges = fee_price_ranges(&[10.0, 75.0, 150.0, 250.0]);
        assert_eq!(ranges, vec!["Under $50", "$50-$100", "$100-$200", "$200+"]);
    }

    #[test]
    fn price_ranges_skip_empty_bands_and_zero_fees() {
        assert_eq!(fee_price_ranges(&[0.0]), Vec::<String>::new());
        assert_eq!(fee_price_ranges(&[60.0]), vec!["$50-$100"]);
    }

    #[test]
    fn adventure_condition_spans_option_and_transit_columns() {
        let criteria = AdventureSearchCriteria {
            vehicle_type: Some("Shikara".into()),
            package_option: Some(120.0),
            pickup: Some("Dal Lake".into()),
            ..Default::default()
        };
        let sql = eco_transit_option::Entity::find()
            .find_also_related(eco_transit::Entity)
            .filter(adventure_condition(&criteria))
            .build(DbBackend::Postgres)
            .to_string();
        assert!(sql.contains(r#"LOWER("title") = 'shikara'"#), "{sql}");
        assert!(sql.contains(r#""base_fee" <= 120"#), "{sql}");
        assert!(
            sql.contains(r#"LOWER("eco_transit"."address") LIKE '%dal lake%'"#),
            "{sql}"
        );
    }

    #[tokio::test]
    async fn application_status_tolerates_missing_table() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom(
                r#"relation "eco_transit" does not exist"#.into(),
            )])
            .into_connection();
        let status = application_status(&db, Uuid::new_v4()).await.unwrap();
        assert!(status.is_none());
    }

    #[tokio::test]
    async fn booking_without_option_never_writes() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<eco_transit_option::Model>::new()])
            .into_connection();
        let request = EcoTransitBookingRequest {
            first_name: "Amina".into(),
            last_name: "Shah".into(),
            email: "amina@example.com".into(),
            phone: "+91-600000000".into(),
            additional_note: None,
            option_id: Uuid::new_v4(),
            transit_id: Uuid::new_v4(),
            travel_date: "2026-05-01T09:00:00Z".parse().unwrap(),
            number_of_passengers: 2,
            distance: 10.0,
        };
        let err = create_booking(&db, request).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        // Only the option lookup reached the database; no writes followed.
        assert_eq!(db.into_transaction_log().len(), 1);
    }
}
