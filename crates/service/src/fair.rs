//! Fair domain: profile reads, event upkeep, bookings and criteria search.

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

use models::{booking_detail, fair, fair_booking, fair_event};

use crate::errors::{none_if_unmigrated, ServiceError};
use crate::pagination::{Page, PageQuery};

pub async fn application_status(
    db: &DatabaseConnection,
    account_id: Uuid,
) -> Result<Option<fair::Model>, ServiceError> {
    match fair::Entity::find()
        .filter(fair::Column::AccountId.eq(account_id))
        .one(db)
        .await
    {
        Ok(found) => Ok(found),
        Err(err) => none_if_unmigrated(err),
    }
}

pub async fn profile_by_account_id(
    db: &DatabaseConnection,
    account_id: Uuid,
) -> Result<Option<fair::Model>, ServiceError> {
    fair::Entity::find()
        .filter(fair::Column::AccountId.eq(account_id))
        .one(db)
        .await
        .map_err(ServiceError::from_db)
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FairEventCreation {
    pub account_id: Uuid,
    #[validate(length(min = 1))]
    pub title: String,
    pub start_date: DateTimeWithTimeZone,
    pub end_date: DateTimeWithTimeZone,
    pub fair_type: String,
    pub location: String,
    pub longitude: f64,
    pub latitude: f64,
    pub description: String,
    pub vanue: String,
    pub organizer: String,
}

/// Create an event under the fair owned by `account_id`. Enum-like values
/// are stored uppercase.
#[instrument(skip(db, input), fields(account_id = %input.account_id))]
pub async fn create_event(
    db: &DatabaseConnection,
    input: FairEventCreation,
) -> Result<(), ServiceError> {
    let owner = fair::Entity::find()
        .filter(fair::Column::AccountId.eq(input.account_id))
        .one(db)
        .await
        .map_err(ServiceError::from_db)?
        .ok_or_else(|| ServiceError::NotFound("Fair seller not found".into()))?;

    fair_event::ActiveModel {
        event_id: Set(Uuid::new_v4()),
        fair_id: Set(owner.fair_id),
        title: Set(input.title),
        start_date: Set(input.start_date),
        end_date: Set(input.end_date),
        fair_type: Set(input.fair_type.to_uppercase()),
        location: Set(input.location.to_uppercase()),
        longitude: Set(input.longitude),
        latitude: Set(input.latitude),
        description: Set(input.description),
        vanue: Set(input.vanue),
        organizer: Set(input.organizer),
    }
    .insert(db)
    .await
    .map_err(ServiceError::from_db)?;
    Ok(())
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FairEventUpdate {
    pub event_id: Uuid,
    #[validate(length(min = 1))]
    pub title: String,
    pub start_date: DateTimeWithTimeZone,
    pub end_date: DateTimeWithTimeZone,
    pub fair_type: String,
    pub location: String,
    pub longitude: f64,
    pub latitude: f64,
    pub description: String,
    pub vanue: String,
    pub organizer: String,
}

pub async fn update_event(
    db: &DatabaseConnection,
    input: FairEventUpdate,
) -> Result<(), ServiceError> {
    let mut am: fair_event::ActiveModel = fair_event::Entity::find_by_id(input.event_id)
        .one(db)
        .await
        .map_err(ServiceError::from_db)?
        .ok_or_else(|| ServiceError::not_found("Fair event"))?
        .into();
    am.title = Set(input.title);
    am.start_date = Set(input.start_date);
    am.end_date = Set(input.end_date);
    am.fair_type = Set(input.fair_type.to_uppercase());
    am.location = Set(input.location.to_uppercase());
    am.longitude = Set(input.longitude);
    am.latitude = Set(input.latitude);
    am.description = Set(input.description);
    am.vanue = Set(input.vanue);
    am.organizer = Set(input.organizer);
    am.update(db).await.map_err(ServiceError::from_db)?;
    Ok(())
}

pub async fn events_by_account(
    db: &DatabaseConnection,
    account_id: Uuid,
) -> Result<Vec<fair_event::Model>, ServiceError> {
    let Some(owner) = fair::Entity::find()
        .filter(fair::Column::AccountId.eq(account_id))
        .one(db)
        .await
        .map_err(ServiceError::from_db)?
    else {
        return Ok(Vec::new());
    };
    fair_event::Entity::find()
        .filter(fair_event::Column::FairId.eq(owner.fair_id))
        .all(db)
        .await
        .map_err(ServiceError::from_db)
}

pub async fn event_by_id(
    db: &DatabaseConnection,
    event_id: Uuid,
) -> Result<fair_event::Model, ServiceError> {
    fair_event::Entity::find_by_id(event_id)
        .one(db)
        .await
        .map_err(ServiceError::from_db)?
        .ok_or_else(|| ServiceError::not_found("Fair event"))
}

pub async fn list_all(db: &DatabaseConnection) -> Result<Vec<fair::Model>, ServiceError> {
    fair::Entity::find()
        .order_by_desc(fair::Column::CreatedAt)
        .all(db)
        .await
        .map_err(ServiceError::from_db)
}

pub async fn paginate(
    db: &DatabaseConnection,
    page: PageQuery,
) -> Result<Page<fair::Model>, ServiceError> {
    let total = fair::Entity::find().count(db).await.map_err(ServiceError::from_db)?;
    let fairs = fair::Entity::find()
        .order_by_desc(fair::Column::CreatedAt)
        .offset(page.skip())
        .limit(page.take())
        .all(db)
        .await
        .map_err(ServiceError::from_db)?;
    Ok(Page { items: fairs, metadata: page.meta(total) })
}

pub async fn toggle_status(
    db: &DatabaseConnection,
    fair_id: Uuid,
    status: bool,
) -> Result<(), ServiceError> {
    let mut am: fair::ActiveModel = fair::Entity::find_by_id(fair_id)
        .one(db)
        .await
        .map_err(ServiceError::from_db)?
        .ok_or_else(|| ServiceError::not_found("Fair"))?
        .into();
    am.is_active = Set(status);
    am.update(db).await.map_err(ServiceError::from_db)?;
    Ok(())
}

/// Fair profile with its events.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FairDetail {
    #[serde(flatten)]
    pub fair: fair::Model,
    pub fair_event: Vec<fair_event::Model>,
}

pub async fn detail_by_id(
    db: &DatabaseConnection,
    fair_id: Uuid,
) -> Result<Option<FairDetail>, ServiceError> {
    let Some(found) = fair::Entity::find_by_id(fair_id)
        .one(db)
        .await
        .map_err(ServiceError::from_db)?
    else {
        return Ok(None);
    };
    let events = fair_event::Entity::find()
        .filter(fair_event::Column::FairId.eq(found.fair_id))
        .all(db)
        .await
        .map_err(ServiceError::from_db)?;
    Ok(Some(FairDetail { fair: found, fair_event: events }))
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FairBookingRequest {
    pub first_name: String,
    pub last_name: String,
    #[validate(email)]
    pub email: String,
    pub phone: String,
    pub additional_note: Option<String>,
    pub event_date: DateTimeWithTimeZone,
    #[validate(range(min = 1))]
    pub number_of_tickets: i32,
    pub ticket_type: String,
    pub total_amount: f64,
    pub event_id: Uuid,
    pub fair_id: Uuid,
}

/// Identifiers of the created booking pair.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FairBookingSummary {
    pub booking_id: Uuid,
    pub booking_detail_id: Uuid,
}

#[instrument(skip(db, input), fields(fair_id = %input.fair_id, event_id = %input.event_id))]
pub async fn create_booking(
    db: &DatabaseConnection,
    input: FairBookingRequest,
) -> Result<FairBookingSummary, ServiceError> {
    fair::Entity::find_by_id(input.fair_id)
        .one(db)
        .await
        .map_err(ServiceError::from_db)?
        .ok_or_else(|| ServiceError::not_found("Fair"))?;

    let summary = db
        .transaction::<_, FairBookingSummary, ServiceError>(|txn| {
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
                let booking = fair_booking::ActiveModel {
                    fair_booking_id: Set(Uuid::new_v4()),
                    event_date: Set(input.event_date),
                    number_of_tickets: Set(input.number_of_tickets),
                    ticket_type: Set(input.ticket_type),
                    total_amount: Set(input.total_amount),
                    event_id: Set(input.event_id),
                    fair_id: Set(input.fair_id),
                    booking_detail_id: Set(detail.booking_detail_id),
                    status: Set("new".into()),
                    created_at: Set(Utc::now().into()),
                }
                .insert(txn)
                .await
                .map_err(ServiceError::from_db)?;
                Ok(FairBookingSummary {
                    booking_id: booking.fair_booking_id,
                    booking_detail_id: detail.booking_detail_id,
                })
            })
        })
        .await?;
    Ok(summary)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FairBookingView {
    #[serde(flatten)]
    pub booking: fair_booking::Model,
    pub booking_detail: Option<booking_detail::Model>,
    pub event: Option<fair_event::Model>,
    pub fair: fair::Model,
}

pub async fn bookings_by_account(
    db: &DatabaseConnection,
    account_id: Uuid,
) -> Result<Vec<FairBookingView>, ServiceError> {
    let Some(owner) = fair::Entity::find()
        .filter(fair::Column::AccountId.eq(account_id))
        .one(db)
        .await
        .map_err(ServiceError::from_db)?
    else {
        return Ok(Vec::new());
    };

    let bookings = fair_booking::Entity::find()
        .filter(fair_booking::Column::FairId.eq(owner.fair_id))
        .order_by_desc(fair_booking::Column::CreatedAt)
        .all(db)
        .await
        .map_err(ServiceError::from_db)?;
    let details = bookings.load_one(booking_detail::Entity, db).await.map_err(ServiceError::from_db)?;
    let events = bookings.load_one(fair_event::Entity, db).await.map_err(ServiceError::from_db)?;
    Ok(bookings
        .into_iter()
        .zip(details)
        .zip(events)
        .map(|((booking, booking_detail), event)| FairBookingView {
            booking,
            booking_detail,
            event,
            fair: owner.clone(),
        })
        .collect())
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FairSearchCriteria {
    pub event_location: Option<String>,
    pub event_type: Option<String>,
    pub start_date: Option<DateTimeWithTimeZone>,
    pub end_date: Option<DateTimeWithTimeZone>,
}

/// Conjunctive event filter: enum-like values compare uppercased, the date
/// window keeps events overlapping the requested range.
pub fn event_condition(criteria: &FairSearchCriteria) -> Condition {
    let mut cond = Condition::all();
    if let Some(location) = &criteria.event_location {
        cond = cond.add(fair_event::Column::Location.eq(location.to_uppercase()));
    }
    if let Some(event_type) = &criteria.event_type {
        cond = cond.add(fair_event::Column::FairType.eq(event_type.to_uppercase()));
    }
    if let Some(from) = criteria.start_date {
        cond = cond.add(fair_event::Column::EndDate.gte(from));
    }
    if let Some(to) = criteria.end_date {
        cond = cond.add(fair_event::Column::StartDate.lte(to));
    }
    cond
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FairEventMatch {
    #[serde(flatten)]
    pub event: fair_event::Model,
    pub fair: Option<fair::Model>,
}

pub async fn find_by_criteria(
    db: &DatabaseConnection,
    criteria: FairSearchCriteria,
) -> Result<Vec<FairEventMatch>, ServiceError> {
    let events = fair_event::Entity::find()
        .filter(event_condition(&criteria))
        .order_by_asc(fair_event::Column::StartDate)
        .all(db)
        .await
        .map_err(ServiceError::from_db)?;
    if events.is_empty() {
        return Err(ServiceError::NotFound("No fair found".into()));
    }
    let fairs = events.load_one(fair::Entity, db).await.map_err(ServiceError::from_db)?;
    Ok(events
        .into_iter()
        .zip(fairs)
        .map(|(event, fair)| FairEventMatch { event, fair })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DbBackend, EntityTrait, QueryTrait};

    #[test]
    fn event_condition_uppercases_enum_values() {
        let criteria = FairSearchCriteria {
            event_location: Some("srinagar".into()),
            event_type: Some("trade".into()),
            ..Default::default()
        };
        let sql = fair_event::Entity::find()
            .filter(event_condition(&criteria))
            .build(DbBackend::Postgres)
            .to_string();
        assert!(sql.contains(r#""location" = 'SRINAGAR'"#), "{sql}");
        assert!(sql.contains(r#""fair_type" = 'TRADE'"#), "{sql}");
    }

    #[test]
    fn event_condition_builds_overlap_window() {
        let from: DateTimeWithTimeZone = "2026-06-01T00:00:00Z".parse().unwrap();
        let to: DateTimeWithTimeZone = "2026-06-30T00:00:00Z".parse().unwrap();
        let criteria = FairSearchCriteria {
            start_date: Some(from),
            end_date: Some(to),
            ..Default::default()
        };
        let sql = fair_event::Entity::find()
            .filter(event_condition(&criteria))
            .build(DbBackend::Postgres)
            .to_string();
        assert!(sql.contains(r#""end_date" >="#), "{sql}");
        assert!(sql.contains(r#""start_date" <="#), "{sql}");
    }

    #[test]
    fn absent_criteria_impose_no_constraint() {
        let sql = fair_event::Entity::find()
            .filter(event_condition(&FairSearchCriteria::default()))
            .build(DbBackend::Postgres)
            .to_string();
        assert!(!sql.contains("WHERE"), "{sql}");
    }
}
