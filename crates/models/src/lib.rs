pub mod db;
pub mod errors;

pub mod account;
pub mod artisan;
pub mod artisan_booking;
pub mod artisan_package;
pub mod booking_detail;
pub mod craft;
pub mod eco_transit;
pub mod eco_transit_booking;
pub mod eco_transit_option;
pub mod fair;
pub mod fair_booking;
pub mod fair_event;
pub mod hotel;
pub mod language_booking;
pub mod language_service;
pub mod portfolio;
pub mod restaurant;
pub mod safari;
pub mod shop;
pub mod sub_craft;
pub mod travel_planer;
pub mod vendor;
