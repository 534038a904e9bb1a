use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LanguageService::Table)
                    .if_not_exists()
                    .col(uuid(LanguageService::LanguageServiceId).primary_key())
                    .col(string_len(LanguageService::ProfileName, 128).not_null())
                    .col(string_len(LanguageService::FirstName, 128).not_null())
                    .col(string_len(LanguageService::LastName, 128).not_null())
                    .col(text(LanguageService::Description).not_null())
                    .col(string_len(LanguageService::Experience, 64).not_null())
                    .col(json_binary(LanguageService::Languages).not_null())
                    .col(json_binary(LanguageService::Specialization).not_null())
                    .col(double(LanguageService::HourlyRate).not_null())
                    .col(integer(LanguageService::MinBookingHours).not_null())
                    .col(integer(LanguageService::MaxBookingHours).not_null())
                    .col(json_binary(LanguageService::Availability).not_null())
                    .col(string_len(LanguageService::StartTime, 32).not_null())
                    .col(string_len(LanguageService::EndTime, 32).not_null())
                    .col(string_len(LanguageService::Location, 255).not_null())
                    .col(string_len(LanguageService::ServiceMode, 64).not_null())
                    .col(string_len_null(LanguageService::Certification, 255))
                    .col(string_len(LanguageService::Qualification, 255).not_null())
                    .col(string_len(LanguageService::ProfileImage, 255).not_null())
                    .col(json_binary(LanguageService::Portfolio).not_null())
                    .col(boolean(LanguageService::IsActive).not_null().default(true))
                    .col(uuid(LanguageService::AccountId).unique_key().not_null())
                    .col(timestamp_with_time_zone(LanguageService::CreatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_language_service_account")
                            .from(LanguageService::Table, LanguageService::AccountId)
                            .to(Account::Table, Account::AccountId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(LanguageService::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum LanguageService {
    Table,
    LanguageServiceId,
    ProfileName,
    FirstName,
    LastName,
    Description,
    Experience,
    Languages,
    Specialization,
    HourlyRate,
    MinBookingHours,
    MaxBookingHours,
    Availability,
    StartTime,
    EndTime,
    Location,
    ServiceMode,
    Certification,
    Qualification,
    ProfileImage,
    Portfolio,
    IsActive,
    AccountId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Account { Table, AccountId }
