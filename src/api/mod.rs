//! Thin HTTP surface over the container manager.

pub mod types;

mod handlers;

use axum::routing::{delete, get, post};
use axum::Router;

use crate::manager::ContainerManager;

/// State shared with every handler.
#[derive(Clone)]
pub struct AppState {
    pub manager: ContainerManager,
}

/// Build the service router.
pub fn create_router(manager: ContainerManager) -> Router {
    let state = AppState { manager };

    Router::new()
        .route("/containers", post(handlers::create_container))
        .route("/containers", get(handlers::list_containers))
        .route("/containers/{name_or_id}", get(handlers::container_status))
        .route("/containers/{name_or_id}", delete(handlers::delete_container))
        .with_state(state)
}
