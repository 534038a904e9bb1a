//! Language-service domain: listing, filters, status lifecycle, bookings
//! with an hourly-rate total and the exploration search.

use std::collections::BTreeSet;

use chrono::Utc;
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use models::{booking_detail, language_booking, language_service};

use crate::eco_transit::fee_price_ranges;
use crate::errors::{none_if_unmigrated, ServiceError};
use crate::query::{contains_ci, eq_ci};

pub async fn application_status(
    db: &DatabaseConnection,
    account_id: Uuid,
) -> Result<Option<language_service::Model>, ServiceError> {
    match language_service::Entity::find()
        .filter(language_service::Column::AccountId.eq(account_id))
        .one(db)
        .await
    {
        Ok(found) => Ok(found),
        Err(err) => none_if_unmigrated(err),
    }
}

pub async fn list_all(
    db: &DatabaseConnection,
) -> Result<Vec<language_service::Model>, ServiceError> {
    language_service::Entity::find()
        .order_by_desc(language_service::Column::CreatedAt)
        .all(db)
        .await
        .map_err(ServiceError::from_db)
}

pub async fn by_id(
    db: &DatabaseConnection,
    language_service_id: Uuid,
) -> Result<Option<language_service::Model>, ServiceError> {
    language_service::Entity::find_by_id(language_service_id)
        .one(db)
        .await
        .map_err(ServiceError::from_db)
}

pub async fn toggle_status(
    db: &DatabaseConnection,
    language_service_id: Uuid,
    status: bool,
) -> Result<(), ServiceError> {
    let mut am: language_service::ActiveModel =
        language_service::Entity::find_by_id(language_service_id)
            .one(db)
            .await
            .map_err(ServiceError::from_db)?
            .ok_or_else(|| ServiceError::not_found("Language service"))?
            .into();
    am.is_active = Set(status);
    am.update(db).await.map_err(ServiceError::from_db)?;
    Ok(())
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageServiceUpdate {
    // Overridden from the route path; absent from the request body.
    #[serde(default)]
    pub language_service_id: Uuid,
    pub profile_name: Option<String>,
    pub description: Option<String>,
    pub experience: Option<String>,
    pub languages: Option<Vec<String>>,
    pub specialization: Option<Vec<String>>,
    pub hourly_rate: Option<f64>,
    pub min_booking_hours: Option<i32>,
    pub max_booking_hours: Option<i32>,
    pub availability: Option<Vec<String>>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub location: Option<String>,
    pub service_mode: Option<String>,
    pub certification: Option<String>,
    pub qualification: Option<String>,
    pub profile_image: Option<String>,
    pub portfolio: Option<Vec<String>>,
}

/// Patch the provided fields; everything else is untouched.
pub async fn update(
    db: &DatabaseConnection,
    input: LanguageServiceUpdate,
) -> Result<language_service::Model, ServiceError> {
    let mut am: language_service::ActiveModel =
        language_service::Entity::find_by_id(input.language_service_id)
            .one(db)
            .await
            .map_err(ServiceError::from_db)?
            .ok_or_else(|| ServiceError::not_found("Language service"))?
            .into();
    if let Some(profile_name) = input.profile_name {
        am.profile_name = Set(profile_name);
    }
    if let Some(description) = input.description {
        am.description = Set(description);
    }
    if let Some(experience) = input.experience {
        am.experience = Set(experience);
    }
    if let Some(languages) = input.languages {
        am.languages = Set(languages.into());
    }
    if let Some(specialization) = input.specialization {
        am.specialization = Set(specialization.into());
    }
    if let Some(hourly_rate) = input.hourly_rate {
        am.hourly_rate = Set(hourly_rate);
    }
    if let Some(min_booking_hours) = input.min_booking_hours {
        am.min_booking_hours = Set(min_booking_hours);
    }
    if let Some(max_booking_hours) = input.max_booking_hours {
        am.max_booking_hours = Set(max_booking_hours);
    }
    if let Some(availability) = input.availability {
        am.availability = Set(availability.into());
    }
    if let Some(start_time) = input.start_time {
        am.start_time = Set(start_time);
    }
    if let Some(end_time) = input.end_time {
        am.end_time = Set(end_time);
    }
    if let Some(location) = input.location {
        am.location = Set(location);
    }
    if let Some(service_mode) = input.service_mode {
        am.service_mode = Set(service_mode);
    }
    if let Some(certification) = input.certification {
        am.certification = Set(Some(certification));
    }
    if let Some(qualification) = input.qualification {
        am.qualification = Set(qualification);
    }
    if let Some(profile_image) = input.profile_image {
        am.profile_image = Set(profile_image);
    }
    if let Some(portfolio) = input.portfolio {
        am.portfolio = Set(portfolio.into());
    }
    am.update(db).await.map_err(ServiceError::from_db)
}

pub async fn delete(
    db: &DatabaseConnection,
    language_service_id: Uuid,
) -> Result<(), ServiceError> {
    let found = language_service::Entity::find_by_id(language_service_id)
        .one(db)
        .await
        .map_err(ServiceError::from_db)?
        .ok_or_else(|| ServiceError::not_found("Language service"))?;
    language_service::Entity::delete_by_id(found.language_service_id)
        .exec(db)
        .await
        .map_err(ServiceError::from_db)?;
    Ok(())
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageServiceFilters {
    pub locations: Vec<String>,
    pub languages: Vec<String>,
    pub price_ranges: Vec<String>,
}

pub async fn filters(db: &DatabaseConnection) -> Result<LanguageServiceFilters, ServiceError> {
    let services = language_service::Entity::find()
        .filter(language_service::Column::IsActive.eq(true))
        .all(db)
        .await
        .map_err(ServiceError::from_db)?;

    let locations: BTreeSet<String> = services
        .iter()
        .map(|s| s.location.clone())
        .filter(|location| !location.is_empty())
        .collect();
    let languages: BTreeSet<String> = services
        .iter()
        .filter_map(|s| s.languages.as_array())
        .flatten()
        .filter_map(|value| value.as_str().map(str::to_string))
        .collect();
    let rates: Vec<f64> = services.iter().map(|s| s.hourly_rate).collect();

    Ok(LanguageServiceFilters {
        locations: locations.into_iter().collect(),
        languages: languages.into_iter().collect(),
        price_ranges: fee_price_ranges(&rates),
    })
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LanguageBookingRequest {
    pub first_name: String,
    pub last_name: String,
    #[validate(email)]
    pub email: String,
    pub phone: String,
    pub additional_note: Option<String>,
    pub language_service_id: Uuid,
    pub booking_date: DateTimeWithTimeZone,
    #[validate(range(min = 1))]
    pub hours: i32,
}

/// Create a booking priced at the provider's hourly rate. Hours must fall
/// inside the provider's min/max window.
#[instrument(skip(db, input), fields(language_service_id = %input.language_service_id))]
pub async fn create_booking(
    db: &DatabaseConnection,
    input: LanguageBookingRequest,
) -> Result<language_booking::Model, ServiceError> {
    let provider = language_service::Entity::find_by_id(input.language_service_id)
        .one(db)
        .await
        .map_err(ServiceError::from_db)?
        .ok_or_else(|| ServiceError::not_found("Language service"))?;
    if input.hours < provider.min_booking_hours || input.hours > provider.max_booking_hours {
        return Err(ServiceError::Validation(format!(
            "hours must be between {} and {}",
            provider.min_booking_hours, provider.max_booking_hours
        )));
    }

    let total_amount = provider.hourly_rate * f64::from(input.hours);
    let booking = db
        .transaction::<_, language_booking::Model, ServiceError>(|txn| {
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
                language_booking::ActiveModel {
                    language_booking_id: Set(Uuid::new_v4()),
                    language_service_id: Set(input.language_service_id),
                    booking_detail_id: Set(detail.booking_detail_id),
                    booking_date: Set(input.booking_date),
                    hours: Set(input.hours),
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

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplorationCriteria {
    pub language: Option<String>,
    pub location: Option<String>,
    pub service_mode: Option<String>,
    pub budget: Option<f64>,
}

pub fn exploration_condition(criteria: &ExplorationCriteria) -> Condition {
    let mut cond = Condition::all().add(language_service::Column::IsActive.eq(true));
    if let Some(language) = &criteria.language {
        // The languages column is a JSON array; match on its text form.
        cond = cond.add(Expr::cust_with_values(
            r#"CAST("languages" AS TEXT) ILIKE ?"#,
            [format!("%{}%", language)],
        ));
    }
    if let Some(location) = &criteria.location {
        cond = cond.add(contains_ci(language_service::Column::Location, location));
    }
    if let Some(service_mode) = &criteria.service_mode {
        cond = cond.add(eq_ci(language_service::Column::ServiceMode, service_mode));
    }
    if let Some(budget) = criteria.budget {
        cond = cond.add(language_service::Column::HourlyRate.lte(budget));
    }
    cond
}

pub async fn find_exploration(
    db: &DatabaseConnection,
    criteria: ExplorationCriteria,
) -> Result<Vec<language_service::Model>, ServiceError> {
    let services = language_service::Entity::find()
        .filter(exploration_condition(&criteria))
        .all(db)
        .await
        .map_err(ServiceError::from_db)?;
    if services.is_empty() {
        return Err(ServiceError::NotFound("No language exploration found".into()));
    }
    Ok(services)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DbBackend, EntityTrait, QueryTrait};

    #[test]
    fn exploration_condition_composes_optional_predicates() {
        let criteria = ExplorationCriteria {
            language: Some("Kashmiri".into()),
            location: Some("Srinagar".into()),
            service_mode: Some("Online".into()),
            budget: Some(40.0),
        };
        let sql = language_service::Entity::find()
            .filter(exploration_condition(&criteria))
            .build(DbBackend::Postgres)
            .to_string();
        assert!(sql.contains(r#"CAST("languages" AS TEXT) ILIKE '%Kashmiri%'"#), "{sql}");
        assert!(sql.contains(r#"LOWER("location") LIKE '%srinagar%'"#), "{sql}");
        assert!(sql.contains(r#"LOWER("service_mode") = 'online'"#), "{sql}");
        assert!(sql.contains(r#""hourly_rate" <= 40"#), "{sql}");
    }

    #[test]
    fn exploration_defaults_only_require_active_rows() {
        let sql = language_service::Entity::find()
            .filter(exploration_condition(&ExplorationCriteria::default()))
            .build(DbBackend::Postgres)
            .to_string();
        assert!(sql.contains(r#""is_active" = TRUE"#), "{sql}");
    }
}
