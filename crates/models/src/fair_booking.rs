use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{booking_detail, fair, fair_event};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[sea_orm(table_name = "fair_booking")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub fair_booking_id: Uuid,
    pub event_date: DateTimeWithTimeZone,
    pub number_of_tickets: i32,
    pub ticket_type: String,
    pub total_amount: f64,
    pub event_id: Uuid,
    pub fair_id: Uuid,
    pub booking_detail_id: Uuid,
    pub status: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Fair,
    Event,
    BookingDetail,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Fair => Entity::belongs_to(fair::Entity)
                .from(Column::FairId)
                .to(fair::Column::FairId)
                .into(),
            Relation::Event => Entity::belongs_to(fair_event::Entity)
                .from(Column::EventId)
                .to(fair_event::Column::EventId)
                .into(),
            Relation::BookingDetail => Entity::belongs_to(booking_detail::Entity)
                .from(Column::BookingDetailId)
                .to(booking_detail::Column::BookingDetailId)
                .into(),
        }
    }
}

impl Related<fair::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Fair.def()
    }
}

impl Related<fair_event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Event.def()
    }
}

impl Related<booking_detail::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BookingDetail.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
