//! Artisan profile: craft practitioner with a two-level taxonomy assignment.
//! `is_active` is a visibility flag; deactivation never removes the row.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{account, craft, sub_craft};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[sea_orm(table_name = "artisan")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub artisan_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub dp: String,
    pub experience: String,
    pub education: String,
    pub certificate: String,
    pub training: String,
    pub recognition: String,
    pub craft_id: Uuid,
    pub sub_craft_id: Uuid,
    pub is_active: bool,
    #[sea_orm(unique)]
    pub account_id: Uuid,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Account,
    Craft,
    SubCraft,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Account => Entity::belongs_to(account::Entity)
                .from(Column::AccountId)
                .to(account::Column::AccountId)
                .into(),
            Relation::Craft => Entity::belongs_to(craft::Entity)
                .from(Column::CraftId)
                .to(craft::Column::CraftId)
                .into(),
            Relation::SubCraft => Entity::belongs_to(sub_craft::Entity)
                .from(Column::SubCraftId)
                .to(sub_craft::Column::SubCraftId)
                .into(),
        }
    }
}

impl Related<account::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Account.def()
    }
}

impl Related<craft::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Craft.def()
    }
}

impl Related<sub_craft::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SubCraft.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
