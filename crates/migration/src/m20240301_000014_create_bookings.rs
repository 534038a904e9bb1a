//! Create the per-domain booking tables. Every booking references its target
//! profile entity and a `booking_detail` row; status starts at "new".
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ArtisanBooking::Table)
                    .if_not_exists()
                    .col(uuid(ArtisanBooking::ArtisanBookingId).primary_key())
                    .col(timestamp_with_time_zone(ArtisanBooking::StartDate).not_null())
                    .col(timestamp_with_time_zone(ArtisanBooking::EndDate).not_null())
                    .col(uuid(ArtisanBooking::PackageId).not_null())
                    .col(uuid(ArtisanBooking::ArtisanId).not_null())
                    .col(uuid(ArtisanBooking::BookingDetailId).not_null())
                    .col(string_len(ArtisanBooking::Status, 32).not_null().default("new"))
                    .col(timestamp_with_time_zone(ArtisanBooking::CreatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_artisan_booking_artisan")
                            .from(ArtisanBooking::Table, ArtisanBooking::ArtisanId)
                            .to(Artisan::Table, Artisan::ArtisanId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_artisan_booking_package")
                            .from(ArtisanBooking::Table, ArtisanBooking::PackageId)
                            .to(ArtisanPackage::Table, ArtisanPackage::PackageId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_artisan_booking_detail")
                            .from(ArtisanBooking::Table, ArtisanBooking::BookingDetailId)
                            .to(BookingDetail::Table, BookingDetail::BookingDetailId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(FairBooking::Table)
                    .if_not_exists()
                    .col(uuid(FairBooking::FairBookingId).primary_key())
                    .col(timestamp_with_time_zone(FairBooking::EventDate).not_null())
                    .col(integer(FairBooking::NumberOfTickets).not_null())
                    .col(string_len(FairBooking::TicketType, 64).not_null())
                    .col(double(FairBooking::TotalAmount).not_null())
                    .col(uuid(FairBooking::EventId).not_null())
                    .col(uuid(FairBooking::FairId).not_null())
                    .col(uuid(FairBooking::BookingDetailId).not_null())
                    .col(string_len(FairBooking::Status, 32).not_null().default("new"))
                    .col(timestamp_with_time_zone(FairBooking::CreatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_fair_booking_fair")
                            .from(FairBooking::Table, FairBooking::FairId)
                            .to(Fair::Table, Fair::FairId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_fair_booking_event")
                            .from(FairBooking::Table, FairBooking::EventId)
                            .to(FairEvent::Table, FairEvent::EventId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_fair_booking_detail")
                            .from(FairBooking::Table, FairBooking::BookingDetailId)
                            .to(BookingDetail::Table, BookingDetail::BookingDetailId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(EcoTransitBooking::Table)
                    .if_not_exists()
                    .col(uuid(EcoTransitBooking::EcoTransitBookingId).primary_key())
                    .col(uuid(EcoTransitBooking::OptionId).not_null())
                    .col(uuid(EcoTransitBooking::TransitId).not_null())
                    .col(uuid(EcoTransitBooking::BookingDetailId).not_null())
                    .col(timestamp_with_time_zone(EcoTransitBooking::TravelDate).not_null())
                    .col(integer(EcoTransitBooking::NumberOfPassengers).not_null())
                    .col(double(EcoTransitBooking::Distance).not_null())
                    .col(double(EcoTransitBooking::TotalAmount).not_null())
                    .col(string_len(EcoTransitBooking::Status, 32).not_null().default("new"))
                    .col(timestamp_with_time_zone(EcoTransitBooking::CreatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_eco_transit_booking_transit")
                            .from(EcoTransitBooking::Table, EcoTransitBooking::TransitId)
                            .to(EcoTransit::Table, EcoTransit::TransitId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_eco_transit_booking_option")
                            .from(EcoTransitBooking::Table, EcoTransitBooking::OptionId)
                            .to(EcoTransitOption::Table, EcoTransitOption::OptionId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_eco_transit_booking_detail")
                            .from(EcoTransitBooking::Table, EcoTransitBooking::BookingDetailId)
                            .to(BookingDetail::Table, BookingDetail::BookingDetailId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(LanguageBooking::Table)
                    .if_not_exists()
                    .col(uuid(LanguageBooking::LanguageBookingId).primary_key())
                    .col(uuid(LanguageBooking::LanguageServiceId).not_null())
                    .col(uuid(LanguageBooking::BookingDetailId).not_null())
                    .col(timestamp_with_time_zone(LanguageBooking::BookingDate).not_null())
                    .col(integer(LanguageBooking::Hours).not_null())
                    .col(double(LanguageBooking::TotalAmount).not_null())
                    .col(string_len(LanguageBooking::Status, 32).not_null().default("new"))
                    .col(timestamp_with_time_zone(LanguageBooking::CreatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_language_booking_service")
                            .from(LanguageBooking::Table, LanguageBooking::LanguageServiceId)
                            .to(LanguageService::Table, LanguageService::LanguageServiceId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_language_booking_detail")
                            .from(LanguageBooking::Table, LanguageBooking::BookingDetailId)
                            .to(BookingDetail::Table, BookingDetail::BookingDetailId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(LanguageBooking::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(EcoTransitBooking::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(FairBooking::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(ArtisanBooking::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum ArtisanBooking {
    Table,
    ArtisanBookingId,
    StartDate,
    EndDate,
    PackageId,
    ArtisanId,
    BookingDetailId,
    Status,
    CreatedAt,
}

#[derive(DeriveIden)]
enum FairBooking {
    Table,
    FairBookingId,
    EventDate,
    NumberOfTickets,
    TicketType,
    TotalAmount,
    EventId,
    FairId,
    BookingDetailId,
    Status,
    CreatedAt,
}

#[derive(DeriveIden)]
enum EcoTransitBooking {
    Table,
    EcoTransitBookingId,
    OptionId,
    TransitId,
    BookingDetailId,
    TravelDate,
    NumberOfPassengers,
    Distance,
    TotalAmount,
    Status,
    CreatedAt,
}

#[derive(DeriveIden)]
enum LanguageBooking {
    Table,
    LanguageBookingId,
    LanguageServiceId,
    BookingDetailId,
    BookingDate,
    Hours,
    TotalAmount,
    Status,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Artisan { Table, ArtisanId }

#[derive(DeriveIden)]
enum ArtisanPackage { Table, PackageId }

#[derive(DeriveIden)]
enum Fair { Table, FairId }

#[derive(DeriveIden)]
enum FairEvent { Table, EventId }

#[derive(DeriveIden)]
enum EcoTransit { Table, TransitId }

#[derive(DeriveIden)]
enum EcoTransitOption { Table, OptionId }

#[derive(DeriveIden)]
enum LanguageService { Table, LanguageServiceId }

#[derive(DeriveIden)]
enum BookingDetail { Table, BookingDetailId }
