use std::{env, net::SocketAddr};

use axum::Router;
use common::utils::logging::init_logging_default;
use dotenvy::dotenv;
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::routes;
use crate::state::AppState;

/// Initialize logging via shared common utils
fn init_logging() {
    init_logging_default();
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load host/port from configs or env vars, with sensible fallbacks
fn load_bind_addr() -> anyhow::Result<SocketAddr> {
    let (host, port) = match configs::load_default() {
        Ok(cfg) => {
            let server = cfg.server;
            (server.host, server.port)
        }
        Err(_) => {
            let host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
            let port = env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(8081);
            (host, port)
        }
    };
    Ok(format!("{}:{}", host, port).parse()?)
}

fn load_jwt_secret() -> String {
    if let Ok(cfg) = configs::load_default() {
        let mut auth = cfg.auth;
        auth.normalize_from_env();
        if !auth.jwt_secret.trim().is_empty() {
            return auth.jwt_secret;
        }
    }
    env::var("JWT_SECRET").unwrap_or_else(|_| "dev-secret-change-me".to_string())
}

/// One storage-availability probe at process start instead of per-query
/// checks: a missing relation only degrades profile reads to null results,
/// so startup proceeds with a warning.
async fn check_storage(db: &DatabaseConnection) {
    match models::account::Entity::find().count(db).await {
        Ok(accounts) => info!(accounts, "storage ready"),
        Err(err) if service::errors::is_missing_relation(&err) => {
            warn!(error = %err, "schema not fully migrated; profile reads degrade to null until migrations run");
        }
        Err(err) => warn!(error = %err, "storage probe failed"),
    }
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    let db = models::db::connect().await?;
    check_storage(&db).await;

    let state = AppState { db, jwt_secret: load_jwt_secret() };

    let app: Router = routes::build_router(state, build_cors());

    let addr = load_bind_addr()?;
    info!(%addr, "starting marketplace server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
