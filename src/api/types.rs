//! Wire types for the HTTP surface.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::runtime::ContainerRecord;

/// Body of `POST /containers`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateContainerRequest {
    pub image_name: String,
    /// An absent map is treated the same as an empty one.
    #[serde(default)]
    pub env_variables: HashMap<String, String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateContainerResponse {
    pub message: String,
    pub container_name: String,
    pub container_id: String,
}

/// Body of a successful `GET /containers/{nameOrId}`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerStatusResponse {
    /// All names the runtime reports for the container.
    pub container_name: Vec<String>,
    pub container_id: String,
    pub state: String,
    pub status: String,
    pub image: String,
}

impl From<ContainerRecord> for ContainerStatusResponse {
    fn from(record: ContainerRecord) -> Self {
        Self {
            container_name: record.names,
            container_id: record.id,
            state: record.state,
            status: record.status,
            image: record.image,
        }
    }
}

/// One entry of `GET /containers`.
#[derive(Debug, Serialize)]
pub struct ContainerListEntry {
    pub id: String,
    pub image: String,
    pub names: Vec<String>,
    pub state: String,
    pub status: String,
}

impl From<ContainerRecord> for ContainerListEntry {
    fn from(record: ContainerRecord) -> Self {
        Self {
            id: record.id,
            image: record.image,
            names: record.names,
            state: record.state,
            status: record.status,
        }
    }
}

/// Plain confirmation or not-found body.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Failure body: a short message plus the underlying error text.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
    pub details: String,
}
