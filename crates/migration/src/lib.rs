//! Migrator registering entity-specific migrations in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240301_000001_create_account;
mod m20240301_000002_create_craft_taxonomy;
mod m20240301_000003_create_artisan;
mod m20240301_000004_create_fair;
mod m20240301_000005_create_safari;
mod m20240301_000006_create_eco_transit;
mod m20240301_000007_create_language_service;
mod m20240301_000008_create_shop;
mod m20240301_000009_create_restaurant;
mod m20240301_000010_create_travel_planer;
mod m20240301_000011_create_hotel;
mod m20240301_000012_create_vendor;
mod m20240301_000013_create_booking_detail;
mod m20240301_000014_create_bookings;
mod m20240301_000015_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240301_000001_create_account::Migration),
            Box::new(m20240301_000002_create_craft_taxonomy::Migration),
            Box::new(m20240301_000003_create_artisan::Migration),
            Box::new(m20240301_000004_create_fair::Migration),
            Box::new(m20240301_000005_create_safari::Migration),
            Box::new(m20240301_000006_create_eco_transit::Migration),
            Box::new(m20240301_000007_create_language_service::Migration),
            Box::new(m20240301_000008_create_shop::Migration),
            Box::new(m20240301_000009_create_restaurant::Migration),
            Box::new(m20240301_000010_create_travel_planer::Migration),
            Box::new(m20240301_000011_create_hotel::Migration),
            Box::new(m20240301_000012_create_vendor::Migration),
            Box::new(m20240301_000013_create_booking_detail::Migration),
            Box::new(m20240301_000014_create_bookings::Migration),
            // Indexes should always be applied last
            Box::new(m20240301_000015_add_indexes::Migration),
        ]
    }
}
