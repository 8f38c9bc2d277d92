use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::config::{ModelArtifact, ModelKind, ARTIFACT_VERSION};
use crate::error::ArtifactError;
use crate::models::classifier_trait::AttritionModel;
use crate::models::logistic::LogisticModel;

/// Restore a boxed classifier from an artifact on disk.
/// Currently this is a thin factory implemented as a single function.
pub fn load_model(path: &Path) -> Result<Box<dyn AttritionModel + Send + Sync>, ArtifactError> {
    let raw = fs::read_to_string(path)?;
    let artifact: ModelArtifact = serde_json::from_str(&raw)?;

    if artifact.version != ARTIFACT_VERSION {
        log::warn!(
            "Artifact declares schema version {}, this build expects {}",
            artifact.version,
            ARTIFACT_VERSION
        );
    }

    let kind = ModelKind::from_str(&artifact.model_type)
        .map_err(|_| ArtifactError::UnknownModelType(artifact.model_type.clone()))?;

    let model: Box<dyn AttritionModel + Send + Sync> = match kind {
        ModelKind::Logistic => Box::new(LogisticModel::from_artifact(artifact)?),
    };

    log::info!(
        "Loaded {} model with {} features from {:?}",
        model.name(),
        model.n_features(),
        path
    );
    Ok(model)
}
