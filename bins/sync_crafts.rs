//! Out-of-band craft-taxonomy reconciliation. Run after deploying a catalog
//! change; safe to re-run at any time.

use dotenvy::dotenv;
use tracing::{error, info};

fn main() -> std::process::ExitCode {
    dotenv().ok();
    common::utils::logging::init_logging_default();

    let rt = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return std::process::ExitCode::FAILURE;
        }
    };

    rt.block_on(async {
        let db = match models::db::connect().await {
            Ok(db) => db,
            Err(e) => {
                error!(event = "db_connect_failed", error = %e, "cannot reach the database");
                return std::process::ExitCode::FAILURE;
            }
        };
        match service::catalog::sync_crafts(&db).await {
            Ok(summary) => {
                info!(
                    crafts_upserted = summary.crafts_upserted,
                    sub_crafts_upserted = summary.sub_crafts_upserted,
                    sub_crafts_deleted = summary.sub_crafts_deleted,
                    crafts_deleted = summary.crafts_deleted,
                    "craft catalog synced successfully"
                );
                std::process::ExitCode::SUCCESS
            }
            Err(e) => {
                error!(event = "sync_failed", error = %e, "failed to sync craft catalog");
                std::process::ExitCode::FAILURE
            }
        }
    })
}
