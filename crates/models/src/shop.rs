//! Shop profile for BUSINESS accounts. The widest profile entity; list-shaped
//! attributes are stored as JSON arrays.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::account;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[sea_orm(table_name = "shop")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub shop_id: Uuid,
    pub business_name: String,
    pub shop_name: String,
    pub vendor_type: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub zip_code: String,
    pub owner_name: String,
    pub phone_number: String,
    pub email: String,
    pub website: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub product_categories: Json,
    pub is_gi_certified: bool,
    pub is_handmade: String,
    pub pickup_options: Json,
    pub delivery_time: String,
    pub delivery_fee: String,
    pub pricing_structure: String,
    pub order_processing: String,
    pub payment_methods: Json,
    pub return_policy: String,
    pub stock_availability: String,
    pub offers_customization: bool,
    pub packaging_type: String,
    pub shop_timing: String,
    pub working_days: Json,
    pub agreed_to_terms: bool,
    pub agreed_to_blacklist: bool,
    pub dp: String,
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
