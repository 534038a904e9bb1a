//! Eco-transit operator profile; owns transport options carrying the base
//! fee used in booking total computation.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{account, eco_transit_option};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[sea_orm(table_name = "eco_transit")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub transit_id: Uuid,
    pub name: String,
    pub address: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub dp: String,
    pub is_active: bool,
    #[sea_orm(unique)]
    pub account_id: Uuid,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Account,
    Option,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Account => Entity::belongs_to(account::Entity)
                .from(Column::AccountId)
                .to(account::Column::AccountId)
                .into(),
            Relation::Option => Entity::has_many(eco_transit_option::Entity).into(),
        }
    }
}

impl Related<account::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Account.def()
    }
}

impl Related<eco_transit_option::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Option.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
