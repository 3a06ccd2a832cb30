//! The runtime client boundary.
//!
//! [`ContainerRuntime`] is the capability set the lifecycle logic needs
//! from a container runtime. The production implementation talks to the
//! Docker daemon (see [`DockerRuntime`]); tests substitute an in-memory
//! fake.

use async_trait::async_trait;
use thiserror::Error;

mod docker;

pub use docker::DockerRuntime;

/// Desired configuration for a container about to be created.
#[derive(Debug, Clone)]
pub struct ContainerSpec {
    /// Resolved image reference the container is bound to.
    pub image: String,
    /// Generated container name.
    pub name: String,
    /// `KEY=VALUE` entries, passed through to the runtime untouched.
    pub env: Vec<String>,
    /// Whether the runtime deletes the container when it stops.
    pub auto_remove: bool,
}

/// A locally available image as reported by the runtime.
#[derive(Debug, Clone)]
pub struct ImageRecord {
    pub id: String,
    pub tags: Vec<String>,
}

/// The runtime's own record of a container.
#[derive(Debug, Clone)]
pub struct ContainerRecord {
    pub id: String,
    /// Names as reported by the runtime, each carrying its leading slash.
    pub names: Vec<String>,
    pub image: String,
    pub state: String,
    pub status: String,
}

/// Failure of a single runtime call.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// The daemon could not be reached or the transport failed mid-call.
    #[error("{0}")]
    Unavailable(String),

    /// The daemon answered the call with an error.
    #[error("{0}")]
    Rejected(String),
}

/// Capability set required from a container runtime.
///
/// Implementations must be safe for concurrent use by multiple in-flight
/// requests; the handle is shared for the process lifetime.
#[async_trait]
pub trait ContainerRuntime: Send + Sync {
    /// Locally present images whose reference matches `reference` exactly.
    async fn list_images(&self, reference: &str) -> Result<Vec<ImageRecord>, RuntimeError>;

    /// Pull `reference`, blocking until the pull stream completes.
    async fn pull_image(&self, reference: &str) -> Result<(), RuntimeError>;

    /// Create a container, returning the runtime-assigned identifier.
    async fn create_container(&self, spec: &ContainerSpec) -> Result<String, RuntimeError>;

    async fn start_container(&self, id: &str) -> Result<(), RuntimeError>;

    /// All containers known to the runtime, optionally including stopped
    /// ones.
    async fn list_containers(&self, include_stopped: bool)
        -> Result<Vec<ContainerRecord>, RuntimeError>;

    async fn remove_container(&self, id: &str, force: bool) -> Result<(), RuntimeError>;
}
