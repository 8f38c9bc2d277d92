//! In-process route tests: the rendered form, the prediction flow, boundary
//! submissions and the health probe.

use std::sync::Arc;

use attrition_classifiers::models::logistic::LogisticModel;
use attrition_web::form::PredictionRequest;
use attrition_web::routes::{router, AppState};
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

/// Stub model with hand-computable output: only JobSatisfaction contributes,
/// z = satisfaction - 1.
fn test_app() -> Router {
    let model = LogisticModel::from_parts(
        PredictionRequest::FEATURE_ORDER
            .iter()
            .map(|s| s.to_string())
            .collect(),
        vec![0.0, 0.0, 0.0, 1.0, 0.0],
        -1.0,
        None,
    )
    .expect("well-formed parts");
    router(AppState {
        model: Arc::new(model),
    })
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to collect body");
    String::from_utf8(bytes.to_vec()).expect("body is not utf-8")
}

async fn submit(app: Router, form_body: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method("POST")
        .uri("/predict")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form_body.to_string()))
        .expect("request builds");
    let response = app.oneshot(request).await.expect("router never errors");
    let status = response.status();
    (status, body_string(response).await)
}

#[tokio::test]
async fn index_renders_form_with_defaults_and_ranges() {
    let response = test_app()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .expect("router never errors");
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_string(response).await;
    assert!(html.contains(r#"name="age""#));
    assert!(html.contains(r#"min="18""#));
    assert!(html.contains(r#"max="70""#));
    assert!(html.contains(r#"value="30""#));
    assert!(html.contains(r#"name="monthly_income""#));
    assert!(html.contains(r#"min="1000""#));
    assert!(html.contains(r#"max="200000""#));
    for level in 0..=3 {
        assert!(html.contains(&format!(r#"option value="{level}""#)));
    }
    // No result panel before a submission.
    assert!(!html.contains("Prediction Result"));
}

#[tokio::test]
async fn predict_renders_label_and_probabilities() {
    // z = 2 - 1 = 1, p_stay = sigmoid(1) ~ 0.73
    let (status, html) = submit(
        test_app(),
        "age=30&years_at_company=5&monthly_income=5000&job_satisfaction=2&distance_from_home=10",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Prediction Result"));
    assert!(html.contains("likely to stay"));
    assert!(html.contains("0.73"));
    assert!(html.contains("0.27"));
    // Submitted values persist in the re-rendered form.
    assert!(html.contains(r#"option value="2" selected"#));
}

#[tokio::test]
async fn low_satisfaction_predicts_leaving() {
    // z = 0 - 1 = -1, p_stay = sigmoid(-1) ~ 0.27 -> label 0
    let (status, html) = submit(
        test_app(),
        "age=30&years_at_company=5&monthly_income=5000&job_satisfaction=0&distance_from_home=10",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("likely to leave"));
    assert!(html.contains("panel-error"));
}

#[tokio::test]
async fn boundary_inputs_are_accepted() {
    let bodies = [
        "age=18&years_at_company=0&monthly_income=1000&job_satisfaction=0&distance_from_home=0",
        "age=70&years_at_company=50&monthly_income=200000&job_satisfaction=3&distance_from_home=100",
        "age=18&years_at_company=50&monthly_income=1000&job_satisfaction=1&distance_from_home=100",
        "age=70&years_at_company=0&monthly_income=200000&job_satisfaction=2&distance_from_home=0",
    ];
    for body in bodies {
        let (status, html) = submit(test_app(), body).await;
        assert_eq!(status, StatusCode::OK, "boundary submission rejected: {body}");
        assert!(html.contains("Prediction Result"));
    }
}

#[tokio::test]
async fn identical_resubmission_yields_identical_output() {
    let body = "age=45&years_at_company=20&monthly_income=9000&job_satisfaction=1&distance_from_home=3";
    let (_, first) = submit(test_app(), body).await;
    let (_, second) = submit(test_app(), body).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn health_reports_status_and_version() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .expect("router never errors");
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains(r#""status":"up""#));
    assert!(body.contains(env!("CARGO_PKG_VERSION")));
}
