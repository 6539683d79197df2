use thiserror::Error;

/// Errors surfaced by the exploration workflow.
///
/// The three kinds are deliberately distinguishable so callers can pick
/// messaging without inspecting response bodies: `Validation` is caught
/// before any remote call, `Network` means no response was received, and
/// `Service` means the collaborator answered with a non-success status.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("{operation} failed: service returned status {status}")]
    Service { operation: &'static str, status: u16 },
}

impl CoreError {
    pub fn is_validation(&self) -> bool {
        matches!(self, CoreError::Validation(_))
    }
}
