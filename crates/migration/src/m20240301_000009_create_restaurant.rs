use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Restaurant::Table)
                    .if_not_exists()
                    .col(uuid(Restaurant::RestaurantId).primary_key())
                    .col(string_len(Restaurant::Name, 128).not_null())
                    .col(text(Restaurant::Description).not_null())
                    .col(string_len(Restaurant::Location, 255).not_null())
                    .col(string_len(Restaurant::Cuisine, 128).not_null())
                    .col(string_len(Restaurant::PriceRange, 64).not_null())
                    .col(string_len(Restaurant::Image, 255).not_null())
                    .col(boolean(Restaurant::IsActive).not_null().default(true))
                    .col(uuid(Restaurant::AccountId).unique_key().not_null())
                    .col(timestamp_with_time_zone(Restaurant::CreatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_restaurant_account")
                            .from(Restaurant::Table, Restaurant::AccountId)
                            .to(Account::Table, Account::AccountId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Restaurant::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Restaurant { Table, RestaurantId, Name, Description, Location, Cuisine, PriceRange, Image, IsActive, AccountId, CreatedAt }

#[derive(DeriveIden)]
enum Account { Table, AccountId }
