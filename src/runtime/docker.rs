//! Docker Engine implementation of the runtime client boundary.

use std::collections::HashMap;

use bollard::models::{ContainerCreateBody, HostConfig};
use bollard::query_parameters::{
    CreateContainerOptions, CreateImageOptions, ListContainersOptions, ListImagesOptions,
    RemoveContainerOptions, StartContainerOptions,
};
use bollard::Docker;
use futures_util::StreamExt;

use super::{ContainerRecord, ContainerRuntime, ContainerSpec, ImageRecord, RuntimeError};

/// [`ContainerRuntime`] backed by the Docker daemon via bollard.
///
/// `bollard::Docker` is internally synchronized and cheap to clone, so a
/// single handle serves all concurrent requests.
#[derive(Clone)]
pub struct DockerRuntime {
    docker: Docker,
}

impl DockerRuntime {
    pub fn new(docker: Docker) -> Self {
        Self { docker }
    }
}

/// A response from the daemon means the call was rejected; anything else
/// (socket, protocol, serialization) means the daemon is unreachable.
fn classify(err: bollard::errors::Error) -> RuntimeError {
    match err {
        bollard::errors::Error::DockerResponseServerError {
            status_code,
            message,
        } => RuntimeError::Rejected(format!("{message} (status {status_code})")),
        other => RuntimeError::Unavailable(other.to_string()),
    }
}

#[async_trait::async_trait]
impl ContainerRuntime for DockerRuntime {
    async fn list_images(&self, reference: &str) -> Result<Vec<ImageRecord>, RuntimeError> {
        let options = ListImagesOptions {
            filters: Some(HashMap::from([(
                "reference".to_string(),
                vec![reference.to_string()],
            )])),
            ..Default::default()
        };

        let images = self
            .docker
            .list_images(Some(options))
            .await
            .map_err(classify)?;

        Ok(images
            .into_iter()
            .map(|image| ImageRecord {
                id: image.id,
                tags: image.repo_tags,
            })
            .collect())
    }

    async fn pull_image(&self, reference: &str) -> Result<(), RuntimeError> {
        let options = CreateImageOptions {
            from_image: Some(reference.to_string()),
            ..Default::default()
        };

        let mut pull_stream = self.docker.create_image(Some(options), None, None);
        while let Some(progress) = pull_stream.next().await {
            let info = progress.map_err(classify)?;
            if let Some(status) = &info.status {
                log::debug!("pull {}: {}", reference, status);
            }
        }

        Ok(())
    }

    async fn create_container(&self, spec: &ContainerSpec) -> Result<String, RuntimeError> {
        let options = CreateContainerOptions {
            name: Some(spec.name.clone()),
            ..Default::default()
        };

        let body = ContainerCreateBody {
            image: Some(spec.image.clone()),
            env: Some(spec.env.clone()),
            host_config: Some(HostConfig {
                auto_remove: Some(spec.auto_remove),
                ..Default::default()
            }),
            ..Default::default()
        };

        let created = self
            .docker
            .create_container(Some(options), body)
            .await
            .map_err(classify)?;

        for warning in &created.warnings {
            log::warn!("create {}: {}", spec.name, warning);
        }

        Ok(created.id)
    }

    async fn start_container(&self, id: &str) -> Result<(), RuntimeError> {
        self.docker
            .start_container(id, None::<StartContainerOptions>)
            .await
            .map_err(classify)
    }

    async fn list_containers(
        &self,
        include_stopped: bool,
    ) -> Result<Vec<ContainerRecord>, RuntimeError> {
        let options = ListContainersOptions {
            all: include_stopped,
            ..Default::default()
        };

        let containers = self
            .docker
            .list_containers(Some(options))
            .await
            .map_err(classify)?;

        Ok(containers
            .into_iter()
            .map(|container| ContainerRecord {
                id: container.id.unwrap_or_default(),
                names: container.names.unwrap_or_default(),
                image: container.image.unwrap_or_default(),
                state: container
                    .state
                    .map(|state| state.to_string())
                    .unwrap_or_default(),
                status: container.status.unwrap_or_default(),
            })
            .collect())
    }

    async fn remove_container(&self, id: &str, force: bool) -> Result<(), RuntimeError> {
        let options = RemoveContainerOptions {
            force,
            ..Default::default()
        };

        self.docker
            .remove_container(id, Some(options))
            .await
            .map_err(classify)
    }
}
