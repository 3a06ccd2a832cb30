use crate::error::ContainerError;
use crate::runtime::{ContainerRuntime, RuntimeError};

/// Tag assumed when a reference names no tag of its own.
const DEFAULT_TAG: &str = "latest";

/// Append `:latest` to references that carry no tag.
pub fn normalize_reference(reference: &str) -> String {
    if reference.contains(':') {
        reference.to_string()
    } else {
        format!("{reference}:{DEFAULT_TAG}")
    }
}

/// Make sure `reference` is available locally, pulling it when absent.
///
/// Returns the normalized reference the container will be created from.
/// Concurrent calls for the same missing image may both pull; the pull is
/// idempotent on the runtime side, so neither call is turned away.
pub async fn ensure_image_available(
    runtime: &dyn ContainerRuntime,
    reference: &str,
) -> Result<String, ContainerError> {
    if reference.is_empty() {
        return Err(ContainerError::ResolutionFailed {
            reference: String::new(),
            details: "image reference must not be empty".to_string(),
        });
    }

    let resolved = normalize_reference(reference);

    let local = runtime
        .list_images(&resolved)
        .await
        .map_err(|e| resolution_error(&resolved, e))?;

    if local.is_empty() {
        log::info!("image {} not present locally, pulling", resolved);
        runtime
            .pull_image(&resolved)
            .await
            .map_err(|e| resolution_error(&resolved, e))?;
        log::info!("pulled image {}", resolved);
    }

    Ok(resolved)
}

fn resolution_error(reference: &str, err: RuntimeError) -> ContainerError {
    match err {
        RuntimeError::Unavailable(details) => ContainerError::RuntimeUnavailable(details),
        RuntimeError::Rejected(details) => ContainerError::ResolutionFailed {
            reference: reference.to_string(),
            details,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untagged_reference_gets_latest() {
        assert_eq!(normalize_reference("alpine"), "alpine:latest");
    }

    #[test]
    fn tagged_reference_is_untouched() {
        assert_eq!(normalize_reference("alpine:3.18"), "alpine:3.18");
        assert_eq!(normalize_reference("alpine:latest"), "alpine:latest");
    }
}
