use ndarray::Array2;

/// A small trait abstraction for the injected classifier. The form handler
/// only ever sees this contract; concrete models live next to it in the
/// `models` module and are constructed by the factory from an on-disk
/// artifact.
pub trait AttritionModel: std::fmt::Debug {
    /// Predicted label per row: 1 for likely to stay, 0 for likely to leave.
    fn predict(&self, x: &Array2<f32>) -> Vec<u8>;

    /// Class probabilities `[p0, p1]` per row. Pairs sum to 1 within
    /// floating-point tolerance.
    fn predict_proba(&self, x: &Array2<f32>) -> Vec<[f32; 2]>;

    /// Width of the feature matrix the model was trained on.
    fn n_features(&self) -> usize;

    /// Optional human readable name for the model
    fn name(&self) -> &str {
        "classifier"
    }
}
