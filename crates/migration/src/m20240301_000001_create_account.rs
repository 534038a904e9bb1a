//! Create `account` table: one identity row per registered party, typed by
//! role via the `account_type` string enum.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Account::Table)
                    .if_not_exists()
                    .col(uuid(Account::AccountId).primary_key())
                    .col(string_len(Account::Email, 255).unique_key().not_null())
                    .col(string_len(Account::Password, 255).not_null())
                    .col(string_len(Account::AccountType, 32).not_null())
                    .col(timestamp_with_time_zone(Account::CreatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Account::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Account { Table, AccountId, Email, Password, AccountType, CreatedAt }
