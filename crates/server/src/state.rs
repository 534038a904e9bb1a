use sea_orm::DatabaseConnection;

/// Process-wide request state: the connection pool and the token secret.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub jwt_secret: String,
}
