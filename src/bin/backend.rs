//! Minimal quotation backend: establishes the database connection and
//! serves a liveness route. None of the quotation logic lives here.

use axum::routing::get;
use axum::Router;
use paint_quote::utils::{logger, validation};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::net::SocketAddr;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    logger::init_backend_logger();

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(5000);

    // The server starts whether or not the database is reachable.
    let _pool = connect_database().await;

    let app = Router::new().route("/", get(|| async { "Quotation backend is running" }));

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Server is running on port {}", port);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn connect_database() -> Option<PgPool> {
    let database_url = match std::env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            tracing::warn!("DATABASE_URL not set, skipping database connection");
            return None;
        }
    };

    if let Err(e) = validation::validate_url(
        "DATABASE_URL",
        &database_url,
        &["postgres", "postgresql"],
    ) {
        tracing::error!("Invalid DATABASE_URL: {}", e);
        return None;
    }

    match PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
    {
        Ok(pool) => {
            tracing::info!("Database connected");
            Some(pool)
        }
        Err(e) => {
            tracing::error!("Database connection failed: {}", e);
            None
        }
    }
}
