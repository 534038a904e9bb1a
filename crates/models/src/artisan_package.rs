use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::artisan;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[sea_orm(table_name = "artisan_package")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub package_id: Uuid,
    pub artisan_id: Uuid,
    pub title: String,
    pub price: f64,
    pub duration: String,
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
