use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Shop::Table)
                    .if_not_exists()
                    .col(uuid(Shop::ShopId).primary_key())
                    .col(string_len(Shop::BusinessName, 255).not_null())
                    .col(string_len(Shop::ShopName, 255).not_null())
                    .col(string_len(Shop::VendorType, 64).not_null())
                    .col(string_len(Shop::Address, 255).not_null())
                    .col(string_len(Shop::City, 128).not_null())
                    .col(string_len(Shop::State, 128).not_null())
                    .col(string_len(Shop::Country, 128).not_null())
                    .col(string_len(Shop::ZipCode, 32).not_null())
                    .col(string_len(Shop::OwnerName, 128).not_null())
                    .col(string_len(Shop::PhoneNumber, 32).not_null())
                    .col(string_len(Shop::Email, 255).not_null())
                    .col(string_len_null(Shop::Website, 255))
                    .col(text(Shop::Description).not_null())
                    .col(json_binary(Shop::ProductCategories).not_null())
                    .col(boolean(Shop::IsGiCertified).not_null())
                    .col(string_len(Shop::IsHandmade, 32).not_null())
                    .col(json_binary(Shop::PickupOptions).not_null())
                    .col(string_len(Shop::DeliveryTime, 64).not_null())
                    .col(string_len(Shop::DeliveryFee, 64).not_null())
                    .col(string_len(Shop::PricingStructure, 64).not_null())
                    .col(string_len(Shop::OrderProcessing, 64).not_null())
                    .col(json_binary(Shop::PaymentMethods).not_null())
                    .col(string_len(Shop::ReturnPolicy, 255).not_null())
                    .col(string_len(Shop::StockAvailability, 64).not_null())
                    .col(boolean(Shop::OffersCustomization).not_null())
                    .col(string_len(Shop::PackagingType, 64).not_null())
                    .col(string_len(Shop::ShopTiming, 64).not_null())
                    .col(json_binary(Shop::WorkingDays).not_null())
                    .col(boolean(Shop::AgreedToTerms).not_null().default(false))
                    .col(boolean(Shop::AgreedToBlacklist).not_null().default(false))
                    .col(string_len(Shop::Dp, 255).not_null())
                    .col(boolean(Shop::IsActive).not_null().default(true))
                    .col(uuid(Shop::AccountId).unique_key().not_null())
                    .col(timestamp_with_time_zone(Shop::CreatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_shop_account")
                            .from(Shop::Table, Shop::AccountId)
                            .to(Account::Table, Account::AccountId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Shop::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Shop {
    Table,
    ShopId,
    BusinessName,
    ShopName,
    VendorType,
    Address,
    City,
    State,
    Country,
    ZipCode,
    OwnerName,
    PhoneNumber,
    Email,
    Website,
    Description,
    ProductCategories,
    IsGiCertified,
    IsHandmade,
    PickupOptions,
    DeliveryTime,
    DeliveryFee,
    PricingStructure,
    OrderProcessing,
    PaymentMethods,
    ReturnPolicy,
    StockAvailability,
    OffersCustomization,
    PackagingType,
    ShopTiming,
    WorkingDays,
    AgreedToTerms,
    AgreedToBlacklist,
    Dp,
    IsActive,
    AccountId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Account { Table, AccountId }
