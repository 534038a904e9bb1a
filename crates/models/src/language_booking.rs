use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{booking_detail, language_service};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[sea_orm(table_name = "language_booking")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub language_booking_id: Uuid,
    pub language_service_id: Uuid,
    pub booking_detail_id: Uuid,
    pub booking_date: DateTimeWithTimeZone,
    pub hours: i32,
    pub total_amount: f64,
    pub status: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    LanguageService,
    BookingDetail,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::LanguageService => Entity::belongs_to(language_service::Entity)
                .from(Column::LanguageServiceId)
                .to(language_service::Column::LanguageServiceId)
                .into(),
            Relation::BookingDetail => Entity::belongs_to(booking_detail::Entity)
                .from(Column::BookingDetailId)
                .to(booking_detail::Column::BookingDetailId)
                .into(),
        }
    }
}

impl Related<language_service::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LanguageService.def()
    }
}

impl Related<booking_detail::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BookingDetail.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
