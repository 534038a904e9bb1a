use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{artisan, artisan_package, booking_detail};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[sea_orm(table_name = "artisan_booking")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub artisan_booking_id: Uuid,
    pub start_date: DateTimeWithTimeZone,
    pub end_date: DateTimeWithTimeZone,
    pub package_id: Uuid,
    pub artisan_id: Uuid,
    pub booking_detail_id: Uuid,
    pub status: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Artisan,
    Package,
    BookingDetail,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Artisan => Entity::belongs_to(artisan::Entity)
                .from(Column::ArtisanId)
                .to(artisan::Column::ArtisanId)
                .into(),
            Relation::Package => Entity::belongs_to(artisan_package::Entity)
                .from(Column::PackageId)
                .to(artisan_package::Column::PackageId)
                .into(),
            Relation::BookingDetail => Entity::belongs_to(booking_detail::Entity)
                .from(Column::BookingDetailId)
                .to(booking_detail::Column::BookingDetailId)
                .into(),
        }
    }
}

impl Related<artisan::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Artisan.def()
    }
}

impl Related<artisan_package::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Package.def()
    }
}

impl Related<booking_detail::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BookingDetail.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
