use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Artifact schema version this crate understands.
pub const ARTIFACT_VERSION: u32 = 1;

/// On-disk schema of a classifier artifact.
///
/// Artifacts are produced by an external training pipeline and loaded once
/// at startup. The `model_type` tag is kept as a plain string so the factory
/// can report unsupported types instead of failing deserialization.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ModelArtifact {
    pub version: u32,
    pub model_type: String,
    pub feature_names: Vec<String>,
    pub weights: Vec<f32>,
    pub intercept: f32,
    #[serde(default)]
    pub scaler: Option<Scaler>,
}

/// Per-feature standardization fitted by the training pipeline, applied
/// before the linear term.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Scaler {
    pub mean: Vec<f32>,
    pub scale: Vec<f32>,
}

/// Model types the factory can restore.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelKind {
    Logistic,
}

impl FromStr for ModelKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "logistic" | "logistic_regression" => Ok(ModelKind::Logistic),
            _ => Err(format!("Unknown model type: {}", s)),
        }
    }
}
