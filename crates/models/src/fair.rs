//! Fair organizer profile; owns zero-or-more fair events.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{account, fair_event};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[sea_orm(table_name = "fair")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub fair_id: Uuid,
    pub first_name: String,
    pub last_name: String,
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
    FairEvent,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Account => Entity::belongs_to(account::Entity)
                .from(Column::AccountId)
                .to(account::Column::AccountId)
                .into(),
            Relation::FairEvent => Entity::has_many(fair_event::Entity).into(),
        }
    }
}

impl Related<account::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Account.def()
    }
}

impl Related<fair_event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FairEvent.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
