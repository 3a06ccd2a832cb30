//! Request handlers for the container endpoints.
//!
//! Handlers translate between the wire shapes and the container manager;
//! every failure is rendered as a `{message, details}` body and logged
//! here, at the boundary.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use super::types::{
    ContainerListEntry, ContainerStatusResponse, CreateContainerRequest, CreateContainerResponse,
    ErrorResponse, MessageResponse,
};
use super::AppState;
use crate::error::ContainerError;

/// `POST /containers` — create and start a container.
pub async fn create_container(
    State(state): State<AppState>,
    Json(request): Json<CreateContainerRequest>,
) -> Response {
    match state
        .manager
        .create_and_start(&request.image_name, &request.env_variables)
        .await
    {
        Ok(created) => (
            StatusCode::CREATED,
            Json(CreateContainerResponse {
                message: "Container created and started".to_string(),
                container_name: created.name,
                container_id: created.id,
            }),
        )
            .into_response(),
        Err(e) => failure("Failed to create container", &e),
    }
}

/// `GET /containers` — list managed containers.
pub async fn list_containers(State(state): State<AppState>) -> Response {
    match state.manager.list_managed().await {
        Ok(containers) => Json(
            containers
                .into_iter()
                .map(ContainerListEntry::from)
                .collect::<Vec<_>>(),
        )
        .into_response(),
        Err(e) => failure("Failed to list containers", &e),
    }
}

/// `GET /containers/{nameOrId}` — report a container's state.
pub async fn container_status(
    State(state): State<AppState>,
    Path(target): Path<String>,
) -> Response {
    match state.manager.find(&target).await {
        Ok(Some(container)) => Json(ContainerStatusResponse::from(container)).into_response(),
        Ok(None) => not_found(&target),
        Err(e) => failure("Failed to look up container", &e),
    }
}

/// `DELETE /containers/{nameOrId}` — forcibly remove a container.
pub async fn delete_container(
    State(state): State<AppState>,
    Path(target): Path<String>,
) -> Response {
    match state.manager.remove(&target).await {
        Ok(true) => Json(MessageResponse {
            message: format!("Container '{target}' removed"),
        })
        .into_response(),
        Ok(false) => not_found(&target),
        Err(e) => failure("Failed to remove container", &e),
    }
}

fn not_found(target: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(MessageResponse {
            message: format!("No container found matching '{target}'"),
        }),
    )
        .into_response()
}

fn failure(message: &str, err: &ContainerError) -> Response {
    log::error!("{}: {}", message, err);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            message: message.to_string(),
            details: err.to_string(),
        }),
    )
        .into_response()
}
