//! Create the two-level craft taxonomy (`craft`, `sub_craft`), keyed by
//! slugs derived from display names.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Craft::Table)
                    .if_not_exists()
                    .col(uuid(Craft::CraftId).primary_key())
                    .col(string_len(Craft::CraftName, 128).not_null())
                    .col(string_len(Craft::CraftSlug, 160).unique_key().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SubCraft::Table)
                    .if_not_exists()
                    .col(uuid(SubCraft::SubCraftId).primary_key())
                    .col(string_len(SubCraft::SubCraftName, 128).not_null())
                    .col(string_len(SubCraft::SubCraftSlug, 320).unique_key().not_null())
                    .col(uuid(SubCraft::CraftId).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sub_craft_craft")
                            .from(SubCraft::Table, SubCraft::CraftId)
                            .to(Craft::Table, Craft::CraftId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(SubCraft::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Craft::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Craft { Table, CraftId, CraftName, CraftSlug }

#[derive(DeriveIden)]
enum SubCraft { Table, SubCraftId, SubCraftName, SubCraftSlug, CraftId }
