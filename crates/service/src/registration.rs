//! Provider registration and profile upkeep.
//!
//! Every `create_*` writes the account row and its profile row in a single
//! transaction; a failure on either side leaves nothing behind. Every
//! `update_*` keyed by account has upsert semantics so profile details can be
//! submitted after the initial registration step.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
    TransactionTrait,
};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

use models::account::{self, AccountType};
use models::{
    artisan, eco_transit, fair, hotel, language_service, restaurant, safari, shop, travel_planer,
};

use crate::errors::ServiceError;
use crate::password;

const DEFAULT_DP: &str = "/placeholder.png";

async fn ensure_email_available(db: &DatabaseConnection, email: &str) -> Result<(), ServiceError> {
    account::validate_email(email)?;
    if account::find_by_email(db, email).await?.is_some() {
        return Err(ServiceError::Conflict(
            "An account with this email already exists. Please use a different email or log in \
             with your existing account."
                .into(),
        ));
    }
    Ok(())
}

fn new_account(email: &str, password_hash: String, kind: AccountType) -> account::ActiveModel {
    account::ActiveModel {
        account_id: Set(Uuid::new_v4()),
        email: Set(email.to_string()),
        password: Set(password_hash),
        account_type: Set(kind),
        created_at: Set(Utc::now().into()),
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ArtisanRegistration {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8))]
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub description: String,
    pub dp: String,
    pub experience: String,
    pub education: String,
    pub certificate: String,
    pub training: String,
    pub recognition: String,
    pub craft_id: Uuid,
    pub sub_craft_id: Uuid,
}

#[instrument(skip(db, input), fields(email = %input.email))]
pub async fn create_artisan(
    db: &DatabaseConnection,
    input: ArtisanRegistration,
) -> Result<(), ServiceError> {
    ensure_email_available(db, &input.email).await?;
    let password_hash = password::hash_password(&input.password)?;
    db.transaction::<_, (), ServiceError>(|txn| {
        Box::pin(async move {
            let created = new_account(&input.email, password_hash, AccountType::Artisan)
                .insert(txn)
                .await
                .map_err(ServiceError::from_db)?;
            artisan::ActiveModel {
                artisan_id: Set(Uuid::new_v4()),
                first_name: Set(input.first_name),
                last_name: Set(input.last_name),
                address: Set(input.address),
                description: Set(input.description),
                dp: Set(input.dp),
                experience: Set(input.experience),
                education: Set(input.education),
                certificate: Set(input.certificate),
                training: Set(input.training),
                recognition: Set(input.recognition),
                craft_id: Set(input.craft_id),
                sub_craft_id: Set(input.sub_craft_id),
                is_active: Set(true),
                account_id: Set(created.account_id),
                created_at: Set(Utc::now().into()),
            }
            .insert(txn)
            .await
            .map_err(ServiceError::from_db)?;
            Ok(())
        })
    })
    .await?;
    info!("artisan registered");
    Ok(())
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtisanProfileUpdate {
    pub account_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub description: String,
    pub dp: String,
    pub experience: String,
    pub education: String,
    pub certificate: String,
    pub training: String,
    pub recognition: String,
    pub craft_id: Uuid,
    pub sub_craft_id: Uuid,
}

pub async fn update_artisan(
    db: &DatabaseConnection,
    input: ArtisanProfileUpdate,
) -> Result<(), ServiceError> {
    let existing = artisan::Entity::find()
        .filter(artisan::Column::AccountId.eq(input.account_id))
        .one(db)
        .await
        .map_err(ServiceError::from_db)?;
    match existing {
        Some(found) => {
            let mut am: artisan::ActiveModel = found.into();
            am.first_name = Set(input.first_name);
            am.last_name = Set(input.last_name);
            am.address = Set(input.address);
            am.description = Set(input.description);
            am.dp = Set(input.dp);
            am.experience = Set(input.experience);
            am.education = Set(input.education);
            am.certificate = Set(input.certificate);
            am.training = Set(input.training);
            am.recognition = Set(input.recognition);
            am.craft_id = Set(input.craft_id);
            am.sub_craft_id = Set(input.sub_craft_id);
            am.update(db).await.map_err(ServiceError::from_db)?;
        }
        None => {
            artisan::ActiveModel {
                artisan_id: Set(Uuid::new_v4()),
                first_name: Set(input.first_name),
                last_name: Set(input.last_name),
                address: Set(input.address),
                description: Set(input.description),
                dp: Set(input.dp),
                experience: Set(input.experience),
                education: Set(input.education),
                certificate: Set(input.certificate),
                training: Set(input.training),
                recognition: Set(input.recognition),
                craft_id: Set(input.craft_id),
                sub_craft_id: Set(input.sub_craft_id),
                is_active: Set(true),
                account_id: Set(input.account_id),
                created_at: Set(Utc::now().into()),
            }
            .insert(db)
            .await
            .map_err(ServiceError::from_db)?;
        }
    }
    Ok(())
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SafariRegistration {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8))]
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub description: String,
    pub dp: String,
}

#[instrument(skip(db, input), fields(email = %input.email))]
pub async fn create_safari(
    db: &DatabaseConnection,
    input: SafariRegistration,
) -> Result<(), ServiceError> {
    ensure_email_available(db, &input.email).await?;
    let password_hash = password::hash_password(&input.password)?;
    db.transaction::<_, (), ServiceError>(|txn| {
        Box::pin(async move {
            let created = new_account(&input.email, password_hash, AccountType::Safari)
                .insert(txn)
                .await
                .map_err(ServiceError::from_db)?;
            safari::ActiveModel {
                safari_id: Set(Uuid::new_v4()),
                first_name: Set(input.first_name),
                last_name: Set(input.last_name),
                address: Set(input.address),
                description: Set(input.description),
                dp: Set(input.dp),
                is_active: Set(true),
                account_id: Set(created.account_id),
                created_at: Set(Utc::now().into()),
            }
            .insert(txn)
            .await
            .map_err(ServiceError::from_db)?;
            Ok(())
        })
    })
    .await?;
    info!("safari registered");
    Ok(())
}

/// Safari profile fields; the owning account comes from the verified token.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafariProfileUpdate {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub description: String,
    pub dp: String,
}

pub async fn update_safari(
    db: &DatabaseConnection,
    account_id: Uuid,
    input: SafariProfileUpdate,
) -> Result<(), ServiceError> {
    let existing = safari::Entity::find()
        .filter(safari::Column::AccountId.eq(account_id))
        .one(db)
        .await
        .map_err(ServiceError::from_db)?;
    match existing {
        Some(found) => {
            let mut am: safari::ActiveModel = found.into();
            am.first_name = Set(input.first_name);
            am.last_name = Set(input.last_name);
            am.address = Set(input.address);
            am.description = Set(input.description);
            am.dp = Set(input.dp);
            am.update(db).await.map_err(ServiceError::from_db)?;
        }
        None => {
            safari::ActiveModel {
                safari_id: Set(Uuid::new_v4()),
                first_name: Set(input.first_name),
                last_name: Set(input.last_name),
                address: Set(input.address),
                description: Set(input.description),
                dp: Set(input.dp),
                is_active: Set(true),
                account_id: Set(account_id),
                created_at: Set(Utc::now().into()),
            }
            .insert(db)
            .await
            .map_err(ServiceError::from_db)?;
        }
    }
    Ok(())
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FairRegistration {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8))]
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub description: String,
    pub dp: String,
}

#[instrument(skip(db, input), fields(email = %input.email))]
pub async fn create_fair(
    db: &DatabaseConnection,
    input: FairRegistration,
) -> Result<(), ServiceError> {
    ensure_email_available(db, &input.email).await?;
    let password_hash = password::hash_password(&input.password)?;
    db.transaction::<_, (), ServiceError>(|txn| {
        Box::pin(async move {
            let created = new_account(&input.email, password_hash, AccountType::Fairs)
                .insert(txn)
                .await
                .map_err(ServiceError::from_db)?;
            fair::ActiveModel {
                fair_id: Set(Uuid::new_v4()),
                first_name: Set(input.first_name),
                last_name: Set(input.last_name),
                address: Set(input.address),
                description: Set(input.description),
                dp: Set(input.dp),
                is_active: Set(true),
                account_id: Set(created.account_id),
                created_at: Set(Utc::now().into()),
            }
            .insert(txn)
            .await
            .map_err(ServiceError::from_db)?;
            Ok(())
        })
    })
    .await?;
    info!("fair registered");
    Ok(())
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FairProfileUpdate {
    pub account_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub description: String,
    pub dp: String,
}

pub async fn update_fair(
    db: &DatabaseConnection,
    input: FairProfileUpdate,
) -> Result<(), ServiceError> {
    let existing = fair::Entity::find()
        .filter(fair::Column::AccountId.eq(input.account_id))
        .one(db)
        .await
        .map_err(ServiceError::from_db)?;
    match existing {
        Some(found) => {
            let mut am: fair::ActiveModel = found.into();
            am.first_name = Set(input.first_name);
            am.last_name = Set(input.last_name);
            am.address = Set(input.address);
            am.description = Set(input.description);
            am.dp = Set(input.dp);
            am.update(db).await.map_err(ServiceError::from_db)?;
        }
        None => {
            fair::ActiveModel {
                fair_id: Set(Uuid::new_v4()),
                first_name: Set(input.first_name),
                last_name: Set(input.last_name),
                address: Set(input.address),
                description: Set(input.description),
                dp: Set(input.dp),
                is_active: Set(true),
                account_id: Set(input.account_id),
                created_at: Set(Utc::now().into()),
            }
            .insert(db)
            .await
            .map_err(ServiceError::from_db)?;
        }
    }
    Ok(())
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ShopRegistration {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8))]
    pub password: String,
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
    pub website: Option<String>,
    pub description: String,
    pub product_categories: Vec<String>,
    pub is_gi_certified: bool,
    pub is_handmade: String,
    pub pickup_options: Vec<String>,
    pub delivery_time: String,
    pub delivery_fee: String,
    pub pricing_structure: String,
    pub order_processing: String,
    pub payment_methods: Vec<String>,
    pub return_policy: String,
    pub stock_availability: String,
    pub offers_customization: bool,
    pub packaging_type: String,
    pub shop_timing: String,
    pub working_days: Vec<String>,
    pub agreed_to_terms: bool,
    pub agreed_to_blacklist: bool,
    pub dp: String,
}

/// Identifiers returned to the caller after a successful shop registration.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopRegistrationSummary {
    pub account_id: Uuid,
    pub shop_id: Uuid,
    pub email: String,
}

#[instrument(skip(db, input), fields(email = %input.email))]
pub async fn create_shop(
    db: &DatabaseConnection,
    input: ShopRegistration,
) -> Result<ShopRegistrationSummary, ServiceError> {
    ensure_email_available(db, &input.email).await?;
    let password_hash = password::hash_password(&input.password)?;
    let summary = db
        .transaction::<_, ShopRegistrationSummary, ServiceError>(|txn| {
            Box::pin(async move {
                let created = new_account(&input.email, password_hash, AccountType::Business)
                    .insert(txn)
                    .await
                    .map_err(ServiceError::from_db)?;
                let created_shop = shop::ActiveModel {
                    shop_id: Set(Uuid::new_v4()),
                    business_name: Set(input.business_name),
                    shop_name: Set(input.shop_name),
                    vendor_type: Set(input.vendor_type),
                    address: Set(input.address),
                    city: Set(input.city),
                    state: Set(input.state),
                    country: Set(input.country),
                    zip_code: Set(input.zip_code),
                    owner_name: Set(input.owner_name),
                    phone_number: Set(input.phone_number),
                    email: Set(input.email.clone()),
                    website: Set(input.website),
                    description: Set(input.description),
                    product_categories: Set(input.product_categories.into()),
                    is_gi_certified: Set(input.is_gi_certified),
                    is_handmade: Set(input.is_handmade),
                    pickup_options: Set(input.pickup_options.into()),
                    delivery_time: Set(input.delivery_time),
                    delivery_fee: Set(input.delivery_fee),
                    pricing_structure: Set(input.pricing_structure),
                    order_processing: Set(input.order_processing),
                    payment_methods: Set(input.payment_methods.into()),
                    return_policy: Set(input.return_policy),
                    stock_availability: Set(input.stock_availability),
                    offers_customization: Set(input.offers_customization),
                    packaging_type: Set(input.packaging_type),
                    shop_timing: Set(input.shop_timing),
                    working_days: Set(input.working_days.into()),
                    agreed_to_terms: Set(input.agreed_to_terms),
                    agreed_to_blacklist: Set(input.agreed_to_blacklist),
                    dp: Set(input.dp),
                    is_active: Set(true),
                    account_id: Set(created.account_id),
                    created_at: Set(Utc::now().into()),
                }
                .insert(txn)
                .await
                .map_err(ServiceError::from_db)?;
                Ok(ShopRegistrationSummary {
                    account_id: created.account_id,
                    shop_id: created_shop.shop_id,
                    email: created.email,
                })
            })
        })
        .await?;
    info!("shop registered");
    Ok(summary)
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopProfileUpdate {
    pub account_id: Uuid,
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
    pub website: Option<String>,
    pub description: String,
    pub product_categories: Vec<String>,
    pub is_gi_certified: bool,
    pub is_handmade: String,
    pub pickup_options: Vec<String>,
    pub delivery_time: String,
    pub delivery_fee: String,
    pub pricing_structure: String,
    pub order_processing: String,
    pub payment_methods: Vec<String>,
    pub return_policy: String,
    pub stock_availability: String,
    pub offers_customization: bool,
    pub packaging_type: String,
    pub shop_timing: String,
    pub working_days: Vec<String>,
    pub agreed_to_terms: Option<bool>,
    pub agreed_to_blacklist: Option<bool>,
    pub dp: String,
}

pub async fn update_shop(
    db: &DatabaseConnection,
    input: ShopProfileUpdate,
) -> Result<(), ServiceError> {
    let existing = shop::Entity::find()
        .filter(shop::Column::AccountId.eq(input.account_id))
        .one(db)
        .await
        .map_err(ServiceError::from_db)?;
    match existing {
        Some(found) => {
            let mut am: shop::ActiveModel = found.into();
            am.business_name = Set(input.business_name);
            am.shop_name = Set(input.shop_name);
            am.vendor_type = Set(input.vendor_type);
            am.address = Set(input.address);
            am.city = Set(input.city);
            am.state = Set(input.state);
            am.country = Set(input.country);
            am.zip_code = Set(input.zip_code);
            am.owner_name = Set(input.owner_name);
            am.phone_number = Set(input.phone_number);
            am.website = Set(input.website);
            am.description = Set(input.description);
            am.product_categories = Set(input.product_categories.into());
            am.is_gi_certified = Set(input.is_gi_certified);
            am.is_handmade = Set(input.is_handmade);
            am.pickup_options = Set(input.pickup_options.into());
            am.delivery_time = Set(input.delivery_time);
            am.delivery_fee = Set(input.delivery_fee);
            am.pricing_structure = Set(input.pricing_structure);
            am.order_processing = Set(input.order_processing);
            am.payment_methods = Set(input.payment_methods.into());
            am.return_policy = Set(input.return_policy);
            am.stock_availability = Set(input.stock_availability);
            am.offers_customization = Set(input.offers_customization);
            am.packaging_type = Set(input.packaging_type);
            am.shop_timing = Set(input.shop_timing);
            am.working_days = Set(input.working_days.into());
            if let Some(agreed) = input.agreed_to_terms {
                am.agreed_to_terms = Set(agreed);
            }
            if let Some(agreed) = input.agreed_to_blacklist {
                am.agreed_to_blacklist = Set(agreed);
            }
            am.dp = Set(input.dp);
            am.update(db).await.map_err(ServiceError::from_db)?;
        }
        None => {
            // Progressive completion: the account exists but the shop row was
            // never submitted. The account email is reused for the shop row.
            let owner = account::Entity::find_by_id(input.account_id)
                .one(db)
                .await
                .map_err(ServiceError::from_db)?
                .ok_or_else(|| ServiceError::not_found("account"))?;
            shop::ActiveModel {
                shop_id: Set(Uuid::new_v4()),
                business_name: Set(input.business_name),
                shop_name: Set(input.shop_name),
                vendor_type: Set(input.vendor_type),
                address: Set(input.address),
                city: Set(input.city),
                state: Set(input.state),
                country: Set(input.country),
                zip_code: Set(input.zip_code),
                owner_name: Set(input.owner_name),
                phone_number: Set(input.phone_number),
                email: Set(owner.email),
                website: Set(input.website),
                description: Set(input.description),
                product_categories: Set(input.product_categories.into()),
                is_gi_certified: Set(input.is_gi_certified),
                is_handmade: Set(input.is_handmade),
                pickup_options: Set(input.pickup_options.into()),
                delivery_time: Set(input.delivery_time),
                delivery_fee: Set(input.delivery_fee),
                pricing_structure: Set(input.pricing_structure),
                order_processing: Set(input.order_processing),
                payment_methods: Set(input.payment_methods.into()),
                return_policy: Set(input.return_policy),
                stock_availability: Set(input.stock_availability),
                offers_customization: Set(input.offers_customization),
                packaging_type: Set(input.packaging_type),
                shop_timing: Set(input.shop_timing),
                working_days: Set(input.working_days.into()),
                agreed_to_terms: Set(input.agreed_to_terms.unwrap_or(false)),
                agreed_to_blacklist: Set(input.agreed_to_blacklist.unwrap_or(false)),
                dp: Set(input.dp),
                is_active: Set(true),
                account_id: Set(input.account_id),
                created_at: Set(Utc::now().into()),
            }
            .insert(db)
            .await
            .map_err(ServiceError::from_db)?;
        }
    }
    Ok(())
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantRegistration {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8))]
    pub password: String,
    pub name: String,
    pub description: String,
    pub location: String,
    pub cuisine: String,
    pub price_range: String,
    pub image: String,
}

#[instrument(skip(db, input), fields(email = %input.email))]
pub async fn create_restaurant(
    db: &DatabaseConnection,
    input: RestaurantRegistration,
) -> Result<(), ServiceError> {
    ensure_email_available(db, &input.email).await?;
    let password_hash = password::hash_password(&input.password)?;
    db.transaction::<_, (), ServiceError>(|txn| {
        Box::pin(async move {
            let created = new_account(&input.email, password_hash, AccountType::Restaurant)
                .insert(txn)
                .await
                .map_err(ServiceError::from_db)?;
            restaurant::ActiveModel {
                restaurant_id: Set(Uuid::new_v4()),
                name: Set(input.name),
                description: Set(input.description),
                location: Set(input.location),
                cuisine: Set(input.cuisine),
                price_range: Set(input.price_range),
                image: Set(input.image),
                is_active: Set(true),
                account_id: Set(created.account_id),
                created_at: Set(Utc::now().into()),
            }
            .insert(txn)
            .await
            .map_err(ServiceError::from_db)?;
            Ok(())
        })
    })
    .await?;
    info!("restaurant registered");
    Ok(())
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantUpdate {
    pub restaurant_id: Uuid,
    pub name: String,
    pub description: String,
    pub location: String,
    pub price_range: String,
    pub image: String,
}

pub async fn update_restaurant(
    db: &DatabaseConnection,
    input: RestaurantUpdate,
) -> Result<(), ServiceError> {
    let mut am: restaurant::ActiveModel = restaurant::Entity::find_by_id(input.restaurant_id)
        .one(db)
        .await
        .map_err(ServiceError::from_db)?
        .ok_or_else(|| ServiceError::not_found("restaurant"))?
        .into();
    am.name = Set(input.name);
    am.description = Set(input.description);
    am.location = Set(input.location);
    am.price_range = Set(input.price_range);
    am.image = Set(input.image);
    am.update(db).await.map_err(ServiceError::from_db)?;
    Ok(())
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TravelPlanerRegistration {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8))]
    pub password: String,
    pub name: String,
    pub description: String,
    pub location: String,
    pub price_range: String,
    pub language: String,
    pub speciality: String,
    pub dp: String,
}

#[instrument(skip(db, input), fields(email = %input.email))]
pub async fn create_travel_planer(
    db: &DatabaseConnection,
    input: TravelPlanerRegistration,
) -> Result<(), ServiceError> {
    ensure_email_available(db, &input.email).await?;
    let password_hash = password::hash_password(&input.password)?;
    db.transaction::<_, (), ServiceError>(|txn| {
        Box::pin(async move {
            let created = new_account(&input.email, password_hash, AccountType::TravelPlaner)
                .insert(txn)
                .await
                .map_err(ServiceError::from_db)?;
            travel_planer::ActiveModel {
                travel_planer_id: Set(Uuid::new_v4()),
                name: Set(input.name),
                description: Set(input.description),
                location: Set(input.location),
                price_range: Set(input.price_range),
                language: Set(input.language),
                speciality: Set(input.speciality),
                dp: Set(input.dp),
                is_active: Set(true),
                account_id: Set(created.account_id),
                created_at: Set(Utc::now().into()),
            }
            .insert(txn)
            .await
            .map_err(ServiceError::from_db)?;
            Ok(())
        })
    })
    .await?;
    info!("travel planer registered");
    Ok(())
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelPlanerProfileUpdate {
    pub account_id: Uuid,
    pub name: String,
    pub description: String,
    pub location: String,
    pub price_range: String,
    pub language: String,
    pub speciality: String,
    pub dp: String,
}

pub async fn update_travel_planer(
    db: &DatabaseConnection,
    input: TravelPlanerProfileUpdate,
) -> Result<(), ServiceError> {
    let existing = travel_planer::Entity::find()
        .filter(travel_planer::Column::AccountId.eq(input.account_id))
        .one(db)
        .await
        .map_err(ServiceError::from_db)?;
    match existing {
        Some(found) => {
            let mut am: travel_planer::ActiveModel = found.into();
            am.name = Set(input.name);
            am.description = Set(input.description);
            am.location = Set(input.location);
            am.price_range = Set(input.price_range);
            am.language = Set(input.language);
            am.speciality = Set(input.speciality);
            am.dp = Set(input.dp);
            am.update(db).await.map_err(ServiceError::from_db)?;
        }
        None => {
            travel_planer::ActiveModel {
                travel_planer_id: Set(Uuid::new_v4()),
                name: Set(input.name),
                description: Set(input.description),
                location: Set(input.location),
                price_range: Set(input.price_range),
                language: Set(input.language),
                speciality: Set(input.speciality),
                dp: Set(input.dp),
                is_active: Set(true),
                account_id: Set(input.account_id),
                created_at: Set(Utc::now().into()),
            }
            .insert(db)
            .await
            .map_err(ServiceError::from_db)?;
        }
    }
    Ok(())
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct HotelRegistration {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8))]
    pub password: String,
    pub hotel_name: String,
    pub address: String,
    pub description: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub longitude: f64,
    pub latitude: f64,
    pub check_in: String,
    pub check_out: String,
}

#[instrument(skip(db, input), fields(email = %input.email))]
pub async fn create_hotel(
    db: &DatabaseConnection,
    input: HotelRegistration,
) -> Result<(), ServiceError> {
    ensure_email_available(db, &input.email).await?;
    let password_hash = password::hash_password(&input.password)?;
    db.transaction::<_, (), ServiceError>(|txn| {
        Box::pin(async move {
            let created = new_account(&input.email, password_hash, AccountType::Hotel)
                .insert(txn)
                .await
                .map_err(ServiceError::from_db)?;
            hotel::ActiveModel {
                hotel_id: Set(Uuid::new_v4()),
                name: Set(input.hotel_name),
                address: Set(input.address),
                description: Set(input.description),
                first_name: Set(input.first_name),
                last_name: Set(input.last_name),
                email: Set(created.email.clone()),
                phone: Set(input.phone),
                longitude: Set(input.longitude),
                latitude: Set(input.latitude),
                check_in: Set(input.check_in),
                check_out: Set(input.check_out),
                is_active: Set(true),
                account_id: Set(created.account_id),
                created_at: Set(Utc::now().into()),
            }
            .insert(txn)
            .await
            .map_err(ServiceError::from_db)?;
            Ok(())
        })
    })
    .await?;
    info!("hotel registered");
    Ok(())
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelProfileUpdate {
    pub account_id: Uuid,
    pub hotel_name: String,
    pub address: String,
    pub description: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub longitude: f64,
    pub latitude: f64,
    pub check_in: String,
    pub check_out: String,
}

pub async fn update_hotel(
    db: &DatabaseConnection,
    input: HotelProfileUpdate,
) -> Result<(), ServiceError> {
    let existing = hotel::Entity::find()
        .filter(hotel::Column::AccountId.eq(input.account_id))
        .one(db)
        .await
        .map_err(ServiceError::from_db)?;
    match existing {
        Some(found) => {
            let mut am: hotel::ActiveModel = found.into();
            am.name = Set(input.hotel_name);
            am.address = Set(input.address);
            am.description = Set(input.description);
            am.first_name = Set(input.first_name);
            am.last_name = Set(input.last_name);
            am.phone = Set(input.phone);
            am.longitude = Set(input.longitude);
            am.latitude = Set(input.latitude);
            am.check_in = Set(input.check_in);
            am.check_out = Set(input.check_out);
            am.update(db).await.map_err(ServiceError::from_db)?;
        }
        None => {
            let owner = account::Entity::find_by_id(input.account_id)
                .one(db)
                .await
                .map_err(ServiceError::from_db)?
                .ok_or_else(|| ServiceError::not_found("account"))?;
            hotel::ActiveModel {
                hotel_id: Set(Uuid::new_v4()),
                name: Set(input.hotel_name),
                address: Set(input.address),
                description: Set(input.description),
                first_name: Set(input.first_name),
                last_name: Set(input.last_name),
                email: Set(owner.email),
                phone: Set(input.phone),
                longitude: Set(input.longitude),
                latitude: Set(input.latitude),
                check_in: Set(input.check_in),
                check_out: Set(input.check_out),
                is_active: Set(true),
                account_id: Set(input.account_id),
                created_at: Set(Utc::now().into()),
            }
            .insert(db)
            .await
            .map_err(ServiceError::from_db)?;
        }
    }
    Ok(())
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LanguageServiceRegistration {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8))]
    pub password: String,
    pub profile_name: String,
    pub first_name: String,
    pub last_name: String,
    pub description: String,
    pub experience: String,
    pub languages: Vec<String>,
    pub specialization: Vec<String>,
    pub hourly_rate: f64,
    pub min_booking_hours: i32,
    pub max_booking_hours: i32,
    pub availability: Vec<String>,
    pub start_time: String,
    pub end_time: String,
    pub location: String,
    pub service_mode: String,
    pub certification: Option<String>,
    pub qualification: String,
    pub profile_image: String,
    pub portfolio: Vec<String>,
}

#[instrument(skip(db, input), fields(email = %input.email))]
pub async fn create_language_service(
    db: &DatabaseConnection,
    input: LanguageServiceRegistration,
) -> Result<(), ServiceError> {
    ensure_email_available(db, &input.email).await?;
    let password_hash = password::hash_password(&input.password)?;
    db.transaction::<_, (), ServiceError>(|txn| {
        Box::pin(async move {
            let created = new_account(&input.email, password_hash, AccountType::Language)
                .insert(txn)
                .await
                .map_err(ServiceError::from_db)?;
            language_service::ActiveModel {
                language_service_id: Set(Uuid::new_v4()),
                profile_name: Set(input.profile_name),
                first_name: Set(input.first_name),
                last_name: Set(input.last_name),
                description: Set(input.description),
                experience: Set(input.experience),
                languages: Set(input.languages.into()),
                specialization: Set(input.specialization.into()),
                hourly_rate: Set(input.hourly_rate),
                min_booking_hours: Set(input.min_booking_hours),
                max_booking_hours: Set(input.max_booking_hours),
                availability: Set(input.availability.into()),
                start_time: Set(input.start_time),
                end_time: Set(input.end_time),
                location: Set(input.location),
                service_mode: Set(input.service_mode),
                certification: Set(input.certification),
                qualification: Set(input.qualification),
                profile_image: Set(input.profile_image),
                portfolio: Set(input.portfolio.into()),
                is_active: Set(true),
                account_id: Set(created.account_id),
                created_at: Set(Utc::now().into()),
            }
            .insert(txn)
            .await
            .map_err(ServiceError::from_db)?;
            Ok(())
        })
    })
    .await?;
    info!("language service registered");
    Ok(())
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EcoTransitRegistration {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8))]
    pub password: String,
    pub name: String,
    pub address: String,
    pub description: String,
    #[serde(default)]
    pub dp: Option<String>,
}

#[instrument(skip(db, input), fields(email = %input.email))]
pub async fn create_eco_transit(
    db: &DatabaseConnection,
    input: EcoTransitRegistration,
) -> Result<(), ServiceError> {
    ensure_email_available(db, &input.email).await?;
    let password_hash = password::hash_password(&input.password)?;
    db.transaction::<_, (), ServiceError>(|txn| {
        Box::pin(async move {
            let created = new_account(&input.email, password_hash, AccountType::EcoTransit)
                .insert(txn)
                .await
                .map_err(ServiceError::from_db)?;
            eco_transit::ActiveModel {
                transit_id: Set(Uuid::new_v4()),
                name: Set(input.name),
                address: Set(input.address),
                description: Set(input.description),
                dp: Set(input.dp.unwrap_or_else(|| DEFAULT_DP.to_string())),
                is_active: Set(true),
                account_id: Set(created.account_id),
                created_at: Set(Utc::now().into()),
            }
            .insert(txn)
            .await
            .map_err(ServiceError::from_db)?;
            Ok(())
        })
    })
    .await?;
    info!("eco transit registered");
    Ok(())
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EcoTransitProfileUpdate {
    pub account_id: Uuid,
    pub name: String,
    pub address: String,
    pub description: String,
    pub dp: String,
}

pub async fn update_eco_transit(
    db: &DatabaseConnection,
    input: EcoTransitProfileUpdate,
) -> Result<(), ServiceError> {
    let existing = eco_transit::Entity::find()
        .filter(eco_transit::Column::AccountId.eq(input.account_id))
        .one(db)
        .await
        .map_err(ServiceError::from_db)?;
    match existing {
        Some(found) => {
            let mut am: eco_transit::ActiveModel = found.into();
            am.name = Set(input.name);
            am.address = Set(input.address);
            am.description = Set(input.description);
            am.dp = Set(input.dp);
            am.update(db).await.map_err(ServiceError::from_db)?;
        }
        None => {
            eco_transit::ActiveModel {
                transit_id: Set(Uuid::new_v4()),
                name: Set(input.name),
                address: Set(input.address),
                description: Set(input.description),
                dp: Set(input.dp),
                is_active: Set(true),
                account_id: Set(input.account_id),
                created_at: Set(Utc::now().into()),
            }
            .insert(db)
            .await
            .map_err(ServiceError::from_db)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    // Registration atomicity needs a real database; opt in with RUN_DB_TESTS.
    #[tokio::test]
    async fn artisan_registration_is_atomic() -> Result<(), anyhow::Error> {
        if std::env::var("RUN_DB_TESTS").is_err() {
            return Ok(());
        }
        let db = get_db().await?;

        let email = format!("atomic_{}@example.com", Uuid::new_v4());
        let input = ArtisanRegistration {
            email: email.clone(),
            password: "S3curePass!".into(),
            first_name: "Amin".into(),
            last_name: "Dar".into(),
            address: "Srinagar".into(),
            description: "walnut wood carver".into(),
            dp: "/dp.png".into(),
            experience: "10".into(),
            education: "none".into(),
            certificate: "none".into(),
            training: "none".into(),
            recognition: "none".into(),
            // Dangling taxonomy ids make the profile insert fail its FK check
            craft_id: Uuid::new_v4(),
            sub_craft_id: Uuid::new_v4(),
        };

        let result = create_artisan(&db, input).await;
        assert!(result.is_err());

        // The account insert must have been rolled back with the profile.
        let orphan = account::find_by_email(&db, &email).await?;
        assert!(orphan.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn duplicate_email_is_a_conflict() -> Result<(), anyhow::Error> {
        if std::env::var("RUN_DB_TESTS").is_err() {
            return Ok(());
        }
        let db = get_db().await?;

        let email = format!("dup_{}@example.com", Uuid::new_v4());
        let input = FairRegistration {
            email: email.clone(),
            password: "S3curePass!".into(),
            first_name: "Sara".into(),
            last_name: "Wani".into(),
            address: "Baramulla".into(),
            description: "seasonal fairs".into(),
            dp: "/dp.png".into(),
        };
        create_fair(&db, input.clone()).await?;
        let second = create_fair(&db, input).await;
        assert!(matches!(second, Err(ServiceError::Conflict(_))));
        Ok(())
    }
}
