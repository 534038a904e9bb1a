//! 1:1 with artisan; `images` is replaced wholesale on every update.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::artisan;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[sea_orm(table_name = "portfolio")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub portfolio_id: Uuid,
    #[sea_orm(unique)]
    pub artisan_id: Uuid,
    pub images: Json,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Artisan,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Artisan => Entity::belongs_to(artisan::Entity)
                .from(Column::ArtisanId)
                .to(artisan::Column::ArtisanId)
                .into(),
        }
    }
}

impl Related<artisan::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Artisan.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
