//! Create `booking_detail`: contact record shared by all booking types.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BookingDetail::Table)
                    .if_not_exists()
                    .col(uuid(BookingDetail::BookingDetailId).primary_key())
                    .col(string_len(BookingDetail::FirstName, 128).not_null())
                    .col(string_len(BookingDetail::LastName, 128).not_null())
                    .col(string_len(BookingDetail::Email, 255).not_null())
                    .col(string_len(BookingDetail::Phone, 32).not_null())
                    .col(string_len_null(BookingDetail::AdditionalNote, 1024))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(BookingDetail::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum BookingDetail { Table, BookingDetailId, FirstName, LastName, Email, Phone, AdditionalNote }
