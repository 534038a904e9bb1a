use models::errors::ModelError;
use sea_orm::{DbErr, SqlErr, TransactionError};
use thiserror::Error;

/// Business errors for the service layer. One failure-signalling mechanism
/// for every service; controllers translate these to HTTP.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("hashing error: {0}")]
    Hash(String),
    #[error("token error: {0}")]
    Token(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self {
        Self::NotFound(format!("{} not found", entity))
    }

    /// Map a SeaORM error, surfacing constraint violations with their kind.
    pub fn from_db(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => ServiceError::Conflict(msg),
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => ServiceError::Validation(msg),
            _ => ServiceError::Db(err.to_string()),
        }
    }
}

impl From<ModelError> for ServiceError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::Validation(msg) => ServiceError::Validation(msg),
            ModelError::Conflict(msg) => ServiceError::Conflict(msg),
            ModelError::Db(msg) => ServiceError::Db(msg),
        }
    }
}

impl From<TransactionError<ServiceError>> for ServiceError {
    fn from(err: TransactionError<ServiceError>) -> Self {
        match err {
            TransactionError::Connection(db) => ServiceError::from_db(db),
            TransactionError::Transaction(svc) => svc,
        }
    }
}

/// True when the error indicates the backing relation has not been migrated.
pub fn is_missing_relation(err: &DbErr) -> bool {
    let msg = err.to_string();
    msg.contains("does not exist") || msg.contains("no such table")
}

/// Degraded-mode guard for profile reads against a partially provisioned
/// schema: an unmigrated table reads as "no application yet", every other
/// storage failure propagates.
pub fn none_if_unmigrated<T>(err: DbErr) -> Result<Option<T>, ServiceError> {
    if is_missing_relation(&err) {
        Ok(None)
    } else {
        Err(ServiceError::from_db(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmigrated_table_reads_as_none() {
        let err = DbErr::Custom(r#"relation "eco_transit" does not exist"#.into());
        let out: Result<Option<()>, _> = none_if_unmigrated(err);
        assert!(matches!(out, Ok(None)));
    }

    #[test]
    fn other_db_errors_propagate() {
        let err = DbErr::Custom("connection reset".into());
        let out: Result<Option<()>, _> = none_if_unmigrated(err);
        assert!(matches!(out, Err(ServiceError::Db(_))));
    }
}
