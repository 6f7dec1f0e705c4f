use thiserror::Error;

/// Reasons the overlay surface could not be brought up. None of these are
/// fatal: the controller logs them and keeps running without a surface.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("document has neither body nor root element")]
    NoParent,
    #[error("2d context unavailable")]
    ContextUnavailable,
    #[error("dom error: {0}")]
    Dom(String),
}
