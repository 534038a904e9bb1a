//! Event owned by a fair profile. `fair_type` and `location` are stored
//! uppercase; the service layer normalizes inbound values.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::fair;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[sea_orm(table_name = "fair_event")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub event_id: Uuid,
    pub fair_id: Uuid,
    pub title: String,
    pub start_date: DateTimeWithTimeZone,
    pub end_date: DateTimeWithTimeZone,
    pub fair_type: String,
    pub location: String,
    pub longitude: f64,
    pub latitude: f64,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub vanue: String,
    pub organizer: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Fair,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Fair => Entity::belongs_to(fair::Entity)
                .from(Column::FairId)
                .to(fair::Column::FairId)
                .into(),
        }
    }
}

impl Related<fair::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Fair.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
