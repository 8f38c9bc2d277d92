use std::error::Error;
use std::fmt;
use std::io;

/// Custom error type for classifier artifact loading failures.
///
/// Every variant is fatal at startup: without a readable artifact there is
/// no model to serve.
#[derive(Debug)]
pub enum ArtifactError {
    Io(io::Error),
    Malformed(serde_json::Error),
    UnknownModelType(String),
    FeatureCountMismatch { expected: usize, found: usize },
    NonPositiveScale(usize), // Index of the offending scaler entry
}

impl fmt::Display for ArtifactError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ArtifactError::Io(err) => write!(f, "Failed to read artifact: {}", err),
            ArtifactError::Malformed(err) => write!(f, "Artifact is not valid JSON: {}", err),
            ArtifactError::UnknownModelType(name) => {
                write!(f, "Unknown model type in artifact: {}", name)
            }
            ArtifactError::FeatureCountMismatch { expected, found } => write!(
                f,
                "Artifact declares {} feature names but carries {} weights",
                expected, found
            ),
            ArtifactError::NonPositiveScale(index) => write!(
                f,
                "Artifact scaler has a non-positive scale for feature {}",
                index
            ),
        }
    }
}

impl Error for ArtifactError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ArtifactError::Io(err) => Some(err),
            ArtifactError::Malformed(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for ArtifactError {
    fn from(err: io::Error) -> Self {
        ArtifactError::Io(err)
    }
}

impl From<serde_json::Error> for ArtifactError {
    fn from(err: serde_json::Error) -> Self {
        ArtifactError::Malformed(err)
    }
}
