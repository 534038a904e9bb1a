use sea_orm::{entity::prelude::*, DatabaseConnection};
use serde::{Deserialize, Serialize};

use crate::craft;
use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[sea_orm(table_name = "sub_craft")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub sub_craft_id: Uuid,
    pub sub_craft_name: String,
    #[sea_orm(unique)]
    pub sub_craft_slug: String,
    pub craft_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Craft,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Craft => Entity::belongs_to(craft::Entity)
                .from(Column::CraftId)
                .to(craft::Column::CraftId)
                .into(),
        }
    }
}

impl Related<craft::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Craft.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn find_by_slug(
    db: &DatabaseConnection,
    slug: &str,
) -> Result<Option<Model>, ModelError> {
    Entity::find()
        .filter(Column::SubCraftSlug.eq(slug))
        .one(db)
        .await
        .map_err(ModelError::from_db)
}
