//! Top level of the two-level craft taxonomy. Slugs are unique and derived
//! deterministically from display names by the catalog sync job.

use sea_orm::{entity::prelude::*, DatabaseConnection};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::sub_craft;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[sea_orm(table_name = "craft")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub craft_id: Uuid,
    pub craft_name: String,
    #[sea_orm(unique)]
    pub craft_slug: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    SubCraft,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::SubCraft => Entity::has_many(sub_craft::Entity).into(),
        }
    }
}

impl Related<sub_craft::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SubCraft.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn find_by_slug(
    db: &DatabaseConnection,
    slug: &str,
) -> Result<Option<Model>, ModelError> {
    Entity::find()
        .filter(Column::CraftSlug.eq(slug))
        .one(db)
        .await
        .map_err(ModelError::from_db)
}
