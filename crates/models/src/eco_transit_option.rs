use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::eco_transit;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[sea_orm(table_name = "eco_transit_option")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub option_id: Uuid,
    pub transit_id: Uuid,
    pub title: String,
    pub base_fee: f64,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Transit,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Transit => Entity::belongs_to(eco_transit::Entity)
                .from(Column::TransitId)
                .to(eco_transit::Column::TransitId)
                .into(),
        }
    }
}

impl Related<eco_transit::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Transit.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
