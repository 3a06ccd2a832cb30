use thiserror::Error;

use crate::runtime::RuntimeError;

/// Failures surfaced by container lifecycle operations.
///
/// A lookup that matches nothing is a normal outcome, not an error; those
/// paths return `Option` / `bool` instead of a variant here.
#[derive(Debug, Error)]
pub enum ContainerError {
    /// The requested image could not be resolved or pulled.
    #[error("failed to resolve image '{reference}': {details}")]
    ResolutionFailed { reference: String, details: String },

    /// The runtime rejected or failed a create/start/remove call.
    #[error("{operation} failed for '{target}': {details}")]
    OperationFailed {
        operation: &'static str,
        target: String,
        details: String,
    },

    /// The runtime connection itself failed.
    #[error("container runtime unavailable: {0}")]
    RuntimeUnavailable(String),
}

impl ContainerError {
    /// Attach the failed operation and its target to a runtime error.
    pub(crate) fn wrap(operation: &'static str, target: &str, err: RuntimeError) -> Self {
        match err {
            RuntimeError::Unavailable(details) => Self::RuntimeUnavailable(details),
            RuntimeError::Rejected(details) => Self::OperationFailed {
                operation,
                target: target.to_string(),
                details,
            },
        }
    }
}
