//! Create `eco_transit` and `eco_transit_option`; option base fees feed the
//! booking total computation.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EcoTransit::Table)
                    .if_not_exists()
                    .col(uuid(EcoTransit::TransitId).primary_key())
                    .col(string_len(EcoTransit::Name, 128).not_null())
                    .col(string_len(EcoTransit::Address, 255).not_null())
                    .col(text(EcoTransit::Description).not_null())
                    .col(string_len(EcoTransit::Dp, 255).not_null())
                    .col(boolean(EcoTransit::IsActive).not_null().default(true))
                    .col(uuid(EcoTransit::AccountId).unique_key().not_null())
                    .col(timestamp_with_time_zone(EcoTransit::CreatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_eco_transit_account")
                            .from(EcoTransit::Table, EcoTransit::AccountId)
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
                    .table(EcoTransitOption::Table)
                    .if_not_exists()
                    .col(uuid(EcoTransitOption::OptionId).primary_key())
                    .col(uuid(EcoTransitOption::TransitId).not_null())
                    .col(string_len(EcoTransitOption::Title, 128).not_null())
                    .col(double(EcoTransitOption::BaseFee).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_eco_transit_option_transit")
                            .from(EcoTransitOption::Table, EcoTransitOption::TransitId)
                            .to(EcoTransit::Table, EcoTransit::TransitId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(EcoTransitOption::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(EcoTransit::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum EcoTransit { Table, TransitId, Name, Address, Description, Dp, IsActive, AccountId, CreatedAt }

#[derive(DeriveIden)]
enum EcoTransitOption { Table, OptionId, TransitId, Title, BaseFee }

#[derive(DeriveIden)]
enum Account { Table, AccountId }
