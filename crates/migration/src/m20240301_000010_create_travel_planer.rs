use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TravelPlaner::Table)
                    .if_not_exists()
                    .col(uuid(TravelPlaner::TravelPlanerId).primary_key())
                    .col(string_len(TravelPlaner::Name, 128).not_null())
                    .col(text(TravelPlaner::Description).not_null())
                    .col(string_len(TravelPlaner::Location, 255).not_null())
                    .col(string_len(TravelPlaner::PriceRange, 64).not_null())
                    .col(string_len(TravelPlaner::Language, 128).not_null())
                    .col(string_len(TravelPlaner::Speciality, 128).not_null())
                    .col(string_len(TravelPlaner::Dp, 255).not_null())
                    .col(boolean(TravelPlaner::IsActive).not_null().default(true))
                    .col(uuid(TravelPlaner::AccountId).unique_key().not_null())
                    .col(timestamp_with_time_zone(TravelPlaner::CreatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_travel_planer_account")
                            .from(TravelPlaner::Table, TravelPlaner::AccountId)
                            .to(Account::Table, Account::AccountId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(TravelPlaner::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum TravelPlaner { Table, TravelPlanerId, Name, Description, Location, PriceRange, Language, Speciality, Dp, IsActive, AccountId, CreatedAt }

#[derive(DeriveIden)]
enum Account { Table, AccountId }
