//! Container lifecycle orchestration.
//!
//! [`ContainerManager`] composes the image resolver, the name generator
//! and the runtime client into the four operations the service exposes:
//! create-and-start, status lookup, managed listing and forced removal.
//! The runtime client is injected at construction so tests can swap in a
//! fake.

mod image;
mod naming;

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::ContainerError;
use crate::runtime::{ContainerRecord, ContainerRuntime, ContainerSpec};

pub use image::normalize_reference;
pub use naming::{generate_name, NAME_PREFIX};

/// Name and runtime identifier of a freshly started container.
///
/// The identifier is the canonical handle for subsequent status and
/// delete calls.
#[derive(Debug, Clone)]
pub struct CreatedContainer {
    pub id: String,
    pub name: String,
}

/// Orchestrates container lifecycle operations against an injected
/// runtime client.
///
/// Holds no state of its own beyond the shared runtime handle, so a clone
/// per request is free and requests never contend with each other.
#[derive(Clone)]
pub struct ContainerManager {
    runtime: Arc<dyn ContainerRuntime>,
}

impl ContainerManager {
    pub fn new(runtime: Arc<dyn ContainerRuntime>) -> Self {
        Self { runtime }
    }

    /// Resolve the image, then create and start a container for it.
    ///
    /// The environment map is flattened to `KEY=VALUE` entries in map
    /// iteration order; an absent map is the same as an empty one. The
    /// container is created with auto-remove disabled, so deletion is
    /// always explicit via [`remove`](Self::remove). No step is retried,
    /// and a failed start leaves the created container behind for the
    /// caller to inspect or delete.
    pub async fn create_and_start(
        &self,
        image: &str,
        env: &HashMap<String, String>,
    ) -> Result<CreatedContainer, ContainerError> {
        let resolved = image::ensure_image_available(self.runtime.as_ref(), image).await?;
        let name = naming::generate_name(&resolved);

        let spec = ContainerSpec {
            image: resolved,
            name: name.clone(),
            env: env.iter().map(|(key, value)| format!("{key}={value}")).collect(),
            auto_remove: false,
        };

        let id = self
            .runtime
            .create_container(&spec)
            .await
            .map_err(|e| ContainerError::wrap("create container", &name, e))?;
        log::info!("created container {} ({})", name, id);

        self.runtime
            .start_container(&id)
            .await
            .map_err(|e| ContainerError::wrap("start container", &id, e))?;
        log::info!("started container {}", name);

        Ok(CreatedContainer { id, name })
    }

    /// Find a container by runtime identifier or by name.
    ///
    /// Candidates are matched on their exact identifier or on any of
    /// their names equalling `/<target>`, the runtime's naming
    /// convention. A miss is a normal outcome and returns `None`.
    pub async fn find(&self, target: &str) -> Result<Option<ContainerRecord>, ContainerError> {
        let slashed = format!("/{target}");
        let containers = self
            .runtime
            .list_containers(true)
            .await
            .map_err(|e| ContainerError::wrap("list containers", target, e))?;

        Ok(containers
            .into_iter()
            .find(|c| c.id == target || c.names.iter().any(|name| name == &slashed)))
    }

    /// All containers whose name carries the reserved prefix, in the
    /// runtime's listing order. Computed fresh on every call.
    pub async fn list_managed(&self) -> Result<Vec<ContainerRecord>, ContainerError> {
        let prefix = format!("/{NAME_PREFIX}");
        let containers = self
            .runtime
            .list_containers(true)
            .await
            .map_err(|e| ContainerError::wrap("list containers", NAME_PREFIX, e))?;

        Ok(containers
            .into_iter()
            .filter(|c| c.names.iter().any(|name| name.starts_with(&prefix)))
            .collect())
    }

    /// Forcibly remove a container addressed by identifier or name.
    ///
    /// Forced removal stops a running container before deleting it.
    /// Returns `false` without issuing a removal call when nothing
    /// matches.
    pub async fn remove(&self, target: &str) -> Result<bool, ContainerError> {
        let Some(container) = self.find(target).await? else {
            return Ok(false);
        };

        self.runtime
            .remove_container(&container.id, true)
            .await
            .map_err(|e| ContainerError::wrap("remove container", target, e))?;
        log::info!("removed container {}", container.id);

        Ok(true)
    }
}
