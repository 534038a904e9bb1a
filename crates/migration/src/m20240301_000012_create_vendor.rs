//! Create `vendor`: standalone identity with its own credentials, not tied
//! to an account row.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vendor::Table)
                    .if_not_exists()
                    .col(uuid(Vendor::VendorId).primary_key())
                    .col(string_len(Vendor::BusinessName, 255).not_null())
                    .col(string_len(Vendor::ContactPerson, 128).not_null())
                    .col(string_len(Vendor::Email, 255).unique_key().not_null())
                    .col(string_len(Vendor::Password, 255).not_null())
                    .col(string_len(Vendor::PhoneNumber, 32).not_null())
                    .col(string_len(Vendor::BusinessType, 64).not_null())
                    .col(string_len(Vendor::Location, 255).not_null())
                    .col(integer_null(Vendor::YearsOfExperience))
                    .col(text(Vendor::BusinessDescription).not_null())
                    .col(string_len(Vendor::IdCard, 255).not_null())
                    .col(string_len_null(Vendor::GiCertificate, 255))
                    .col(string_len(Vendor::SampleProductPhoto, 255).not_null())
                    .col(string_len_null(Vendor::BusinessRegistration, 255))
                    .col(timestamp_with_time_zone(Vendor::CreatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Vendor::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Vendor {
    Table,
    VendorId,
    BusinessName,
    ContactPerson,
    Email,
    Password,
    PhoneNumber,
    BusinessType,
    Location,
    YearsOfExperience,
    BusinessDescription,
    IdCard,
    GiCertificate,
    SampleProductPhoto,
    BusinessRegistration,
    CreatedAt,
}
