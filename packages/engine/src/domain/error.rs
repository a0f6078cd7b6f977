use std::fmt;

/// Errors raised while mounting or configuring the stage.
///
/// None of these ever reach the page: the facade turns mount failures into an
/// inert stage and only config parsing reports back to JS.
#[derive(Debug, Clone, PartialEq)]
pub enum StageError {
    /// No element to attach the canvas to
    MissingMountPoint(String),
    /// The canvas or its 2D context could not be created
    SurfaceUnavailable(String),
    InvalidConfig(String),
}

impl fmt::Display for StageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StageError::MissingMountPoint(what) => write!(f, "no mount point: {what}"),
            StageError::SurfaceUnavailable(why) => write!(f, "render surface unavailable: {why}"),
            StageError::InvalidConfig(why) => write!(f, "invalid stage config: {why}"),
        }
    }
}

impl std::error::Error for StageError {}

impl From<serde_json::Error> for StageError {
    fn from(e: serde_json::Error) -> Self {
        StageError::InvalidConfig(e.to_string())
    }
}
