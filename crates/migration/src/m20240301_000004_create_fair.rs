//! Create `fair` and its `fair_event` table. Event type/location values are
//! stored uppercase.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Fair::Table)
                    .if_not_exists()
                    .col(uuid(Fair::FairId).primary_key())
                    .col(string_len(Fair::FirstName, 128).not_null())
                    .col(string_len(Fair::LastName, 128).not_null())
                    .col(string_len(Fair::Address, 255).not_null())
                    .col(text(Fair::Description).not_null())
                    .col(string_len(Fair::Dp, 255).not_null())
                    .col(boolean(Fair::IsActive).not_null().default(true))
                    .col(uuid(Fair::AccountId).unique_key().not_null())
                    .col(timestamp_with_time_zone(Fair::CreatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_fair_account")
                            .from(Fair::Table, Fair::AccountId)
                            .to(Account::Table, Account::AccountId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(FairEvent::Table)
                    .if_not_exists()
                    .col(uuid(FairEvent::EventId).primary_key())
                    .col(uuid(FairEvent::FairId).not_null())
                    .col(string_len(FairEvent::Title, 255).not_null())
                    .col(timestamp_with_time_zone(FairEvent::StartDate).not_null())
                    .col(timestamp_with_time_zone(FairEvent::EndDate).not_null())
                    .col(string_len(FairEvent::FairType, 64).not_null())
                    .col(string_len(FairEvent::Location, 64).not_null())
                    .col(double(FairEvent::Longitude).not_null())
                    .col(double(FairEvent::Latitude).not_null())
                    .col(text(FairEvent::Description).not_null())
                    .col(string_len(FairEvent::Vanue, 255).not_null())
                    .col(string_len(FairEvent::Organizer, 128).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_fair_event_fair")
                            .from(FairEvent::Table, FairEvent::FairId)
                            .to(Fair::Table, Fair::FairId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(FairEvent::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Fair::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Fair { Table, FairId, FirstName, LastName, Address, Description, Dp, IsActive, AccountId, CreatedAt }

#[derive(DeriveIden)]
enum FairEvent {
    Table,
    EventId,
    FairId,
    Title,
    StartDate,
    EndDate,
    FairType,
    Location,
    Longitude,
    Latitude,
    Description,
    Vanue,
    Organizer,
}

#[derive(DeriveIden)]
enum Account { Table, AccountId }
