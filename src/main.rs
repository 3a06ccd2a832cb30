use std::sync::Arc;

use anyhow::Context;
use bollard::Docker;
use container_manager::{create_router, ContainerManager, DockerRuntime};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();
    log::info!("Starting container manager...");

    // One handle for the process lifetime; bollard synchronizes internally.
    let docker = Docker::connect_with_socket_defaults()
        .context("Failed to connect to Docker daemon")?;
    log::info!("Connected to Docker daemon");

    let manager = ContainerManager::new(Arc::new(DockerRuntime::new(docker)));
    let app = create_router(manager);

    let addr = std::env::var("CONTAINER_MANAGER_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    log::info!("Listening on {}", addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
