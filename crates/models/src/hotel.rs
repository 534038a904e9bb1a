use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::account;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[sea_orm(table_name = "hotel")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub hotel_id: Uuid,
    pub name: String,
    pub address: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub longitude: f64,
    pub latitude: f64,
    pub check_in: String,
    pub check_out: String,
    pub is_active: bool,
    #[sea_orm(unique)]
    pub account_id: Uuid,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Account,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Account => Entity::belongs_to(account::Entity)
                .from(Column::AccountId)
                .to(account::Column::AccountId)
                .into(),
        }
    }
}

impl Related<account::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Account.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
