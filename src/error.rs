//! Error types
//!
//! The stepper never fails; these cover optional input validation and
//! settings persistence.

/// Axis a validation error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Width,
    Height,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Width => write!(f, "width"),
            Axis::Height => write!(f, "height"),
        }
    }
}

/// Errors from validation and settings persistence
#[derive(Debug)]
pub enum BallError {
    /// Extent is negative or not finite
    InvalidExtent { axis: Axis, value: f32 },
    /// Arena bound is negative or not finite
    InvalidBound { axis: Axis, value: f32 },
    /// Loop rate must be at least 1 Hz
    InvalidRate(u32),
    /// Settings file could not be read or written
    Io(std::io::Error),
    /// Settings file is not valid JSON for [`crate::Settings`]
    Json(serde_json::Error),
}

impl std::fmt::Display for BallError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BallError::InvalidExtent { axis, value } => {
                write!(f, "invalid ball {}: {} (must be finite and >= 0)", axis, value)
            }
            BallError::InvalidBound { axis, value } => {
                write!(f, "invalid arena {} bound: {} (must be finite and >= 0)", axis, value)
            }
            BallError::InvalidRate(rate) => write!(f, "invalid loop rate: {} Hz", rate),
            BallError::Io(e) => write!(f, "settings I/O error: {}", e),
            BallError::Json(e) => write!(f, "settings JSON error: {}", e),
        }
    }
}

impl std::error::Error for BallError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BallError::Io(e) => Some(e),
            BallError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for BallError {
    fn from(e: std::io::Error) -> Self {
        BallError::Io(e)
    }
}

impl From<serde_json::Error> for BallError {
    fn from(e: serde_json::Error) -> Self {
        BallError::Json(e)
    }
}
