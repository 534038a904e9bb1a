use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Safari::Table)
                    .if_not_exists()
                    .col(uuid(Safari::SafariId).primary_key())
                    .col(string_len(Safari::FirstName, 128).not_null())
                    .col(string_len(Safari::LastName, 128).not_null())
                    .col(string_len(Safari::Address, 255).not_null())
                    .col(text(Safari::Description).not_null())
                    .col(string_len(Safari::Dp, 255).not_null())
                    .col(boolean(Safari::IsActive).not_null().default(true))
                    .col(uuid(Safari::AccountId).unique_key().not_null())
                    .col(timestamp_with_time_zone(Safari::CreatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_safari_account")
                            .from(Safari::Table, Safari::AccountId)
                            .to(Account::Table, Account::AccountId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Safari::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Safari { Table, SafariId, FirstName, LastName, Address, Description, Dp, IsActive, AccountId, CreatedAt }

#[derive(DeriveIden)]
enum Account { Table, AccountId }
