use anyhow::Context;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    catalogd_observability::init();

    let snapshot_path =
        std::env::var("CATALOGD_SNAPSHOT_PATH").unwrap_or_else(|_| "products.json".to_string());
    let addr = std::env::var("CATALOGD_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    tracing::info!("snapshot file: {snapshot_path}");

    let app = catalogd_api::app::build_app(&snapshot_path);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("server exited")?;
    Ok(())
}
