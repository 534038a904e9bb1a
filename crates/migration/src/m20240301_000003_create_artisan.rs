//! Create `artisan` with its dependents `artisan_package` and `portfolio`.
//! Portfolio is 1:1 with artisan; images live in a JSON array column.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Artisan::Table)
                    .if_not_exists()
                    .col(uuid(Artisan::ArtisanId).primary_key())
                    .col(string_len(Artisan::FirstName, 128).not_null())
                    .col(string_len(Artisan::LastName, 128).not_null())
                    .col(string_len(Artisan::Address, 255).not_null())
                    .col(text(Artisan::Description).not_null())
                    .col(string_len(Artisan::Dp, 255).not_null())
                    .col(string_len(Artisan::Experience, 64).not_null())
                    .col(string_len(Artisan::Education, 64).not_null())
                    .col(string_len(Artisan::Certificate, 64).not_null())
                    .col(string_len(Artisan::Training, 64).not_null())
                    .col(string_len(Artisan::Recognition, 64).not_null())
                    .col(uuid(Artisan::CraftId).not_null())
                    .col(uuid(Artisan::SubCraftId).not_null())
                    .col(boolean(Artisan::IsActive).not_null().default(true))
                    .col(uuid(Artisan::AccountId).unique_key().not_null())
                    .col(timestamp_with_time_zone(Artisan::CreatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_artisan_account")
                            .from(Artisan::Table, Artisan::AccountId)
                            .to(Account::Table, Account::AccountId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_artisan_craft")
                            .from(Artisan::Table, Artisan::CraftId)
                            .to(Craft::Table, Craft::CraftId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_artisan_sub_craft")
                            .from(Artisan::Table, Artisan::SubCraftId)
                            .to(SubCraft::Table, SubCraft::SubCraftId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ArtisanPackage::Table)
                    .if_not_exists()
                    .col(uuid(ArtisanPackage::PackageId).primary_key())
                    .col(uuid(ArtisanPackage::ArtisanId).not_null())
                    .col(string_len(ArtisanPackage::Title, 255).not_null())
                    .col(double(ArtisanPackage::Price).not_null())
                    .col(string_len(ArtisanPackage::Duration, 64).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_artisan_package_artisan")
                            .from(ArtisanPackage::Table, ArtisanPackage::ArtisanId)
                            .to(Artisan::Table, Artisan::ArtisanId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Portfolio::Table)
                    .if_not_exists()
                    .col(uuid(Portfolio::PortfolioId).primary_key())
                    .col(uuid(Portfolio::ArtisanId).unique_key().not_null())
                    .col(json_binary(Portfolio::Images).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_portfolio_artisan")
                            .from(Portfolio::Table, Portfolio::ArtisanId)
                            .to(Artisan::Table, Artisan::ArtisanId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Portfolio::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(ArtisanPackage::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Artisan::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Artisan {
    Table,
    ArtisanId,
    FirstName,
    LastName,
    Address,
    Description,
    Dp,
    Experience,
    Education,
    Certificate,
    Training,
    Recognition,
    CraftId,
    SubCraftId,
    IsActive,
    AccountId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum ArtisanPackage { Table, PackageId, ArtisanId, Title, Price, Duration }

#[derive(DeriveIden)]
enum Portfolio { Table, PortfolioId, ArtisanId, Images }

#[derive(DeriveIden)]
enum Account { Table, AccountId }

#[derive(DeriveIden)]
enum Craft { Table, CraftId }

#[derive(DeriveIden)]
enum SubCraft { Table, SubCraftId }
