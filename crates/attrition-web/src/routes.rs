use std::sync::Arc;

use axum::extract::State;
use axum::http::header;
use axum::response::{Html, IntoResponse};
use axum::routing::{get, post};
use axum::{Form, Json, Router};

use attrition_classifiers::models::classifier_trait::AttritionModel;

use crate::form::PredictionRequest;
use crate::handler;
use crate::render;

/// Shared handler state: the one classifier loaded at startup, read-only for
/// the lifetime of the process.
#[derive(Clone)]
pub struct AppState {
    pub model: Arc<dyn AttritionModel + Send + Sync>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/predict", post(predict))
        .route("/health", get(health))
        .with_state(state)
}

async fn index(State(state): State<AppState>) -> Html<String> {
    Html(render::page(state.model.name(), &PredictionRequest::default(), None).into_string())
}

async fn predict(
    State(state): State<AppState>,
    Form(request): Form<PredictionRequest>,
) -> Html<String> {
    let prediction = handler::score(state.model.as_ref(), &request);
    log::debug!(
        "scored {:?} -> label {} proba {:?}",
        request,
        prediction.label,
        prediction.proba
    );
    Html(render::page(state.model.name(), &request, Some(&prediction)).into_string())
}

async fn health() -> impl IntoResponse {
    (
        [(header::CACHE_CONTROL, "no-store, no-cache, must-revalidate")],
        Json(serde_json::json!({
            "status": "up",
            "version": env!("CARGO_PKG_VERSION"),
        })),
    )
}
