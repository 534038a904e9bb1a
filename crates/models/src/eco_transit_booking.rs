//! `total_amount` is computed server-side from distance, option base fee and
//! passenger count; a booking never exists without a resolvable fee basis.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{booking_detail, eco_transit, eco_transit_option};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[sea_orm(table_name = "eco_transit_booking")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub eco_transit_booking_id: Uuid,
    pub option_id: Uuid,
    pub transit_id: Uuid,
    pub booking_detail_id: Uuid,
    pub travel_date: DateTimeWithTimeZone,
    pub number_of_passengers: i32,
    pub distance: f64,
    pub total_amount: f64,
    pub status: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Transit,
    Option,
    BookingDetail,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Transit => Entity::belongs_to(eco_transit::Entity)
                .from(Column::TransitId)
                .to(eco_transit::Column::TransitId)
                .into(),
            Relation::Option => Entity::belongs_to(eco_transit_option::Entity)
                .from(Column::OptionId)
                .to(eco_transit_option::Column::OptionId)
                .into(),
            Relation::BookingDetail => Entity::belongs_to(booking_detail::Entity)
                .from(Column::BookingDetailId)
                .to(booking_detail::Column::BookingDetailId)
                .into(),
        }
    }
}

impl Related<eco_transit::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Transit.def()
    }
}

impl Related<eco_transit_option::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Option.def()
    }
}

impl Related<booking_detail::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BookingDetail.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
