use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Hotel::Table)
                    .if_not_exists()
                    .col(uuid(Hotel::HotelId).primary_key())
                    .col(string_len(Hotel::Name, 128).not_null())
                    .col(string_len(Hotel::Address, 255).not_null())
                    .col(text(Hotel::Description).not_null())
                    .col(string_len(Hotel::FirstName, 128).not_null())
                    .col(string_len(Hotel::LastName, 128).not_null())
                    .col(string_len(Hotel::Email, 255).not_null())
                    .col(string_len(Hotel::Phone, 32).not_null())
                    .col(double(Hotel::Longitude).not_null())
                    .col(double(Hotel::Latitude).not_null())
                    .col(string_len(Hotel::CheckIn, 32).not_null())
                    .col(string_len(Hotel::CheckOut, 32).not_null())
                    .col(boolean(Hotel::IsActive).not_null().default(true))
                    .col(uuid(Hotel::AccountId).unique_key().not_null())
                    .col(timestamp_with_time_zone(Hotel::CreatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_hotel_account")
                            .from(Hotel::Table, Hotel::AccountId)
                            .to(Account::Table, Account::AccountId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Hotel::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Hotel {
    Table,
    HotelId,
    Name,
    Address,
    Description,
    FirstName,
    LastName,
    Email,
    Phone,
    Longitude,
    Latitude,
    CheckIn,
    CheckOut,
    IsActive,
    AccountId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Account { Table, AccountId }
