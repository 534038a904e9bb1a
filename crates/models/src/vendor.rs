//! Standalone vendor identity with its own login flow; unlike profile
//! entities it does not hang off an account row.

use sea_orm::{entity::prelude::*, DatabaseConnection};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[sea_orm(table_name = "vendor")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub vendor_id: Uuid,
    pub business_name: String,
    pub contact_person: String,
    #[sea_orm(unique)]
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub phone_number: String,
    pub business_type: String,
    pub location: String,
    pub years_of_experience: Option<i32>,
    #[sea_orm(column_type = "Text")]
    pub business_description: String,
    pub id_card: String,
    pub gi_certificate: Option<String>,
    pub sample_product_photo: String,
    pub business_registration: Option<String>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub async fn find_by_email(
    db: &DatabaseConnection,
    email: &str,
) -> Result<Option<Model>, ModelError> {
    Entity::find()
        .filter(Column::Email.eq(email))
        .one(db)
        .await
        .map_err(ModelError::from_db)
}
