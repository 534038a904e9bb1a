//! Language-service provider profile. List-shaped attributes (languages,
//! specialization, availability, portfolio) are stored as JSON arrays.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::account;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[sea_orm(table_name = "language_service")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub language_service_id: Uuid,
    pub profile_name: String,
    pub first_name: String,
    pub last_name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub experience: String,
    pub languages: Json,
    pub specialization: Json,
    pub hourly_rate: f64,
    pub min_booking_hours: i32,
    pub max_booking_hours: i32,
    pub availability: Json,
    pub start_time: String,
    pub end_time: String,
    pub location: String,
    pub service_mode: String,
    pub certification: Option<String>,
    pub qualification: String,
    pub profile_image: String,
    pub portfolio: Json,
    pub is_active: bool,
    #[sea_orm(unique)]
    pub account_id: Uuid,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Account,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Account => Entity::belongs_to(account::Entity)
                .from(Column::AccountId)
                .to(account::Column::AccountId)
                .into(),
        }
    }
}

impl Related<account::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Account.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
