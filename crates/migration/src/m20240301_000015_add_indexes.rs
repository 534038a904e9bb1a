//! Secondary indexes for the hot lookup paths: owner account scans on
//! bookings and events, taxonomy scoping, paginated list ordering.
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_sub_craft_craft_id")
                    .table(SubCraft::Table)
                    .col(SubCraft::CraftId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_artisan_craft_sub_craft")
                    .table(Artisan::Table)
                    .col(Artisan::CraftId)
                    .col(Artisan::SubCraftId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_artisan_created_at")
                    .table(Artisan::Table)
                    .col(Artisan::CreatedAt)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_fair_created_at")
                    .table(Fair::Table)
                    .col(Fair::CreatedAt)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_fair_event_fair_id")
                    .table(FairEvent::Table)
                    .col(FairEvent::FairId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_artisan_booking_artisan_id")
                    .table(ArtisanBooking::Table)
                    .col(ArtisanBooking::ArtisanId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_fair_booking_fair_id")
                    .table(FairBooking::Table)
                    .col(FairBooking::FairId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_eco_transit_booking_transit_id")
                    .table(EcoTransitBooking::Table)
                    .col(EcoTransitBooking::TransitId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_eco_transit_option_transit_id")
                    .table(EcoTransitOption::Table)
                    .col(EcoTransitOption::TransitId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_index(Index::drop().name("idx_eco_transit_option_transit_id").table(EcoTransitOption::Table).to_owned()).await?;
        manager.drop_index(Index::drop().name("idx_eco_transit_booking_transit_id").table(EcoTransitBooking::Table).to_owned()).await?;
        manager.drop_index(Index::drop().name("idx_fair_booking_fair_id").table(FairBooking::Table).to_owned()).await?;
        manager.drop_index(Index::drop().name("idx_artisan_booking_artisan_id").table(ArtisanBooking::Table).to_owned()).await?;
        manager.drop_index(Index::drop().name("idx_fair_event_fair_id").table(FairEvent::Table).to_owned()).await?;
        manager.drop_index(Index::drop().name("idx_fair_created_at").table(Fair::Table).to_owned()).await?;
        manager.drop_index(Index::drop().name("idx_artisan_created_at").table(Artisan::Table).to_owned()).await?;
        manager.drop_index(Index::drop().name("idx_artisan_craft_sub_craft").table(Artisan::Table).to_owned()).await?;
        manager.drop_index(Index::drop().name("idx_sub_craft_craft_id").table(SubCraft::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum SubCraft { Table, CraftId }

#[derive(DeriveIden)]
enum Artisan { Table, CraftId, SubCraftId, CreatedAt }

#[derive(DeriveIden)]
enum Fair { Table, CreatedAt }

#[derive(DeriveIden)]
enum FairEvent { Table, FairId }

#[derive(DeriveIden)]
enum ArtisanBooking { Table, ArtisanId }

#[derive(DeriveIden)]
enum FairBooking { Table, FairId }

#[derive(DeriveIden)]
enum EcoTransitBooking { Table, TransitId }

#[derive(DeriveIden)]
enum EcoTransitOption { Table, TransitId }
