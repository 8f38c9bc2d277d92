use ndarray::{Array1, Array2, ArrayView1};

use crate::config::{ModelArtifact, Scaler};
use crate::error::ArtifactError;
use crate::models::classifier_trait::AttritionModel;

/// Logistic regression classifier restored from a serialized artifact.
///
/// Inference only: the weights, intercept and optional scaler were fitted by
/// an external pipeline. `predict_proba` reports `[p_leave, p_stay]` and
/// `predict` thresholds the stay probability at 0.5.
#[derive(Debug)]
pub struct LogisticModel {
    feature_names: Vec<String>,
    weights: Array1<f32>,
    intercept: f32,
    scaler: Option<Scaler>,
}

impl LogisticModel {
    pub fn from_artifact(artifact: ModelArtifact) -> Result<Self, ArtifactError> {
        if artifact.weights.len() != artifact.feature_names.len() {
            return Err(ArtifactError::FeatureCountMismatch {
                expected: artifact.feature_names.len(),
                found: artifact.weights.len(),
            });
        }
        if let Some(scaler) = &artifact.scaler {
            if scaler.mean.len() != artifact.weights.len()
                || scaler.scale.len() != artifact.weights.len()
            {
                return Err(ArtifactError::FeatureCountMismatch {
                    expected: artifact.weights.len(),
                    found: scaler.mean.len().min(scaler.scale.len()),
                });
            }
            // A zero scale would divide by zero and saturate the sigmoid.
            if let Some(index) = scaler.scale.iter().position(|s| !(*s > 0.0)) {
                return Err(ArtifactError::NonPositiveScale(index));
            }
        }

        Ok(LogisticModel {
            feature_names: artifact.feature_names,
            weights: Array1::from_vec(artifact.weights),
            intercept: artifact.intercept,
            scaler: artifact.scaler,
        })
    }

    /// Build a model directly from its parts, bypassing the artifact schema.
    pub fn from_parts(
        feature_names: Vec<String>,
        weights: Vec<f32>,
        intercept: f32,
        scaler: Option<Scaler>,
    ) -> Result<Self, ArtifactError> {
        Self::from_artifact(ModelArtifact {
            version: crate::config::ARTIFACT_VERSION,
            model_type: "logistic".to_string(),
            feature_names,
            weights,
            intercept,
            scaler,
        })
    }

    /// Feature names in the order the model expects its input columns.
    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    fn decision_function(&self, row: ArrayView1<'_, f32>) -> f32 {
        let mut z = self.intercept;
        for (i, (&x, &w)) in row.iter().zip(self.weights.iter()).enumerate() {
            let x = match &self.scaler {
                Some(scaler) => (x - scaler.mean[i]) / scaler.scale[i],
                None => x,
            };
            z += w * x;
        }
        z
    }
}

fn sigmoid(z: f32) -> f32 {
    1.0 / (1.0 + (-z).exp())
}

impl AttritionModel for LogisticModel {
    fn predict(&self, x: &Array2<f32>) -> Vec<u8> {
        self.predict_proba(x)
            .iter()
            .map(|proba| u8::from(proba[1] >= 0.5))
            .collect()
    }

    fn predict_proba(&self, x: &Array2<f32>) -> Vec<[f32; 2]> {
        x.rows()
            .into_iter()
            .map(|row| {
                let p_stay = sigmoid(self.decision_function(row));
                [1.0 - p_stay, p_stay]
            })
            .collect()
    }

    fn n_features(&self) -> usize {
        self.weights.len()
    }

    fn name(&self) -> &str {
        "logistic regression"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::arr2;

    fn names(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("f{}", i)).collect()
    }

    #[test]
    fn sigmoid_midpoint() {
        assert!((sigmoid(0.0) - 0.5).abs() < 1e-6);
        assert!(sigmoid(10.0) > 0.999);
        assert!(sigmoid(-10.0) < 0.001);
    }

    #[test]
    fn scaler_standardizes_before_dot_product() {
        let scaler = Scaler {
            mean: vec![10.0, 100.0],
            scale: vec![5.0, 50.0],
        };
        let model =
            LogisticModel::from_parts(names(2), vec![1.0, 1.0], 0.0, Some(scaler)).unwrap();

        // (15 - 10) / 5 + (150 - 100) / 50 = 2.0
        let z = model.decision_function(arr2(&[[15.0, 150.0]]).row(0));
        assert!((z - 2.0).abs() < 1e-6);
    }

    #[test]
    fn label_is_argmax_of_probabilities() {
        let model = LogisticModel::from_parts(names(1), vec![1.0], 0.0, None).unwrap();
        let x = arr2(&[[3.0], [-3.0]]);
        let labels = model.predict(&x);
        let probas = model.predict_proba(&x);
        assert_eq!(labels, vec![1, 0]);
        assert!(probas[0][1] > probas[0][0]);
        assert!(probas[1][0] > probas[1][1]);
    }

    #[test]
    fn zero_or_negative_scale_is_rejected() {
        let scaler = Scaler {
            mean: vec![0.0, 0.0],
            scale: vec![1.0, 0.0],
        };
        let err = LogisticModel::from_parts(names(2), vec![1.0, 1.0], 0.0, Some(scaler))
            .expect_err("zero scale must fail");
        assert!(matches!(err, ArtifactError::NonPositiveScale(1)));

        let scaler = Scaler {
            mean: vec![0.0],
            scale: vec![-2.0],
        };
        let err = LogisticModel::from_parts(names(1), vec![1.0], 0.0, Some(scaler))
            .expect_err("negative scale must fail");
        assert!(matches!(err, ArtifactError::NonPositiveScale(0)));
    }

    #[test]
    fn mismatched_scaler_is_rejected() {
        let scaler = Scaler {
            mean: vec![0.0],
            scale: vec![1.0],
        };
        let err = LogisticModel::from_parts(names(2), vec![1.0, 1.0], 0.0, Some(scaler))
            .expect_err("scaler width must match weights");
        assert!(matches!(
            err,
            ArtifactError::FeatureCountMismatch { expected: 2, found: 1 }
        ));
    }
}
