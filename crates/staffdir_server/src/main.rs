//! staffdir server binary.
//!
//! Environment:
//! - `STAFFDIR_ADDR`      bind address (default `127.0.0.1:8080`)
//! - `STAFFDIR_DB`        SQLite database path (default `staffdir.db`)
//! - `STAFFDIR_LOG_DIR`   log directory (default `<cwd>/logs`)
//! - `STAFFDIR_LOG_LEVEL` log level (default per build mode)

use anyhow::Context;
use staffdir_core::{core_version, default_log_level, init_logging};
use staffdir_server::{build_app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let log_dir = match std::env::var("STAFFDIR_LOG_DIR") {
        Ok(dir) => dir,
        Err(_) => std::env::current_dir()
            .context("cannot resolve working directory")?
            .join("logs")
            .to_string_lossy()
            .into_owned(),
    };
    let log_level = std::env::var("STAFFDIR_LOG_LEVEL")
        .unwrap_or_else(|_| default_log_level().to_string());
    init_logging(&log_level, &log_dir).map_err(anyhow::Error::msg)?;

    let db_path = std::env::var("STAFFDIR_DB").unwrap_or_else(|_| "staffdir.db".to_string());
    let conn = staffdir_core::db::open_db(&db_path)
        .map_err(|err| anyhow::anyhow!("cannot open database at `{db_path}`: {err}"))?;

    let addr = std::env::var("STAFFDIR_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("cannot bind `{addr}`"))?;

    log::info!(
        "event=server_start module=server status=ok addr={addr} db={db_path} core_version={}",
        core_version()
    );

    axum::serve(listener, build_app(AppState::new(conn))).await?;
    Ok(())
}
