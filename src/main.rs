use std::sync::Arc;

use anyhow::Context;
use tracing::{info, warn};

use activity_directory::{logging, web, ActivityDirectory, AppConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env();
    logging::init();

    let directory = Arc::new(ActivityDirectory::seeded());
    let app = web::router(directory, &config.static_dir);

    let addr = config.bind_addr()?;
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            let fallback = config.fallback_addr()?;
            warn!(%addr, error = %e, %fallback, "bind failed, trying fallback port");
            tokio::net::TcpListener::bind(fallback)
                .await
                .with_context(|| format!("could not bind {} or {}", addr, fallback))?
        }
    };

    let bound_addr = listener.local_addr()?;
    info!(static_dir = %config.static_dir, "activity directory listening on http://{}", bound_addr);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
