//! Identity record: one row per registered party, typed by role.
//! Each account owns exactly one profile entity of the matching type.

use sea_orm::{entity::prelude::*, DatabaseConnection};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[sea_orm(table_name = "account")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub account_id: Uuid,
    #[sea_orm(unique)]
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub account_type: AccountType,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
pub enum AccountType {
    #[sea_orm(string_value = "ARTISAN")]
    Artisan,
    #[sea_orm(string_value = "FAIRS")]
    Fairs,
    #[sea_orm(string_value = "SAFARI")]
    Safari,
    #[sea_orm(string_value = "ECO_TRANSIT")]
    EcoTransit,
    #[sea_orm(string_value = "LANGUAGE")]
    Language,
    #[sea_orm(string_value = "HOTEL")]
    Hotel,
    #[sea_orm(string_value = "RESTAURANT")]
    Restaurant,
    #[sea_orm(string_value = "TRAVEL_PLANER")]
    TravelPlaner,
    #[sea_orm(string_value = "BUSINESS")]
    Business,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_email(email: &str) -> Result<(), ModelError> {
    if !email.contains('@') {
        return Err(ModelError::Validation("invalid email".into()));
    }
    Ok(())
}

pub async fn find_by_email(
    db: &DatabaseConnection,
    email: &str,
) -> Result<Option<Model>, ModelError> {
    Entity::find()
        .filter(Column::Email.eq(email))
        .one(db)
        .await
        .map_err(ModelError::from_db)
}
