use attrition_classifiers::models::classifier_trait::AttritionModel;

use crate::form::PredictionRequest;

/// Outcome of one inference call, exactly as the classifier reported it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    /// 1 for likely to stay, 0 for likely to leave.
    pub label: u8,
    /// `[p_leave, p_stay]`.
    pub proba: [f32; 2],
}

/// Score one submitted record. A local, synchronous call with no I/O
/// failure mode; no retries, no timeouts.
pub fn score(model: &dyn AttritionModel, request: &PredictionRequest) -> Prediction {
    let features = request.features();
    let label = model.predict(&features)[0];
    let proba = model.predict_proba(&features)[0];
    Prediction { label, proba }
}
