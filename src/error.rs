//! Crate error type

/// Errors surfaced by level setup and persistence.
#[derive(Debug)]
pub enum LanderError {
    /// Difficulty level outside 1..=2. A caller bug, not user-recoverable.
    InvalidDifficulty(u32),
    /// Safe zone placement did not converge within the attempt cap.
    SafeZonePlacement { attempts: u32 },
    /// No platform data directory could be determined.
    NoDataDir,
    /// Standard I/O error.
    Io(std::io::Error),
    /// JSON serialization/deserialization error.
    Json(serde_json::Error),
}

impl std::fmt::Display for LanderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LanderError::InvalidDifficulty(level) => {
                write!(f, "unsupported difficulty level: {level} (expected 1 or 2)")
            }
            LanderError::SafeZonePlacement { attempts } => {
                write!(f, "could not place safe zones after {attempts} attempts")
            }
            LanderError::NoDataDir => write!(f, "could not determine data directory"),
            LanderError::Io(e) => write!(f, "IO error: {e}"),
            LanderError::Json(e) => write!(f, "JSON error: {e}"),
        }
    }
}

impl std::error::Error for LanderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LanderError::Io(e) => Some(e),
            LanderError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LanderError {
    fn from(e: std::io::Error) -> Self {
        LanderError::Io(e)
    }
}

impl From<serde_json::Error> for LanderError {
    fn from(e: serde_json::Error) -> Self {
        LanderError::Json(e)
    }
}
