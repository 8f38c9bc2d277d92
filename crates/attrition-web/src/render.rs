use maud::{html, Markup, DOCTYPE};

use crate::form::{self, FieldSpec, PredictionRequest};
use crate::handler::Prediction;

const STYLE: &str = "\
body { font-family: sans-serif; margin: 0; display: flex; }
aside { width: 16rem; background: #f5f5f5; padding: 1rem; min-height: 100vh; }
main { padding: 1rem 2rem; max-width: 40rem; }
h1 { text-align: center; color: #2E86C1; }
.columns { display: flex; gap: 2rem; }
.columns label { display: block; margin-top: 0.8rem; }
.panel { padding: 0.8rem; border-radius: 5px; margin: 0.8rem 0; }
.panel-success { background: #d4edda; color: #155724; }
.panel-error { background: #f8d7da; color: #721c24; }
progress { width: 100%; }
button { margin-top: 1rem; }
";

/// Full page: info panel, the input form and, after a submission, the result
/// panel. `request` carries the values the widgets should show so submitted
/// values persist across the re-render.
pub fn page(model_name: &str, request: &PredictionRequest, result: Option<&Prediction>) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { "Employee Attrition Predictor" }
                style { (STYLE) }
            }
            body {
                (info_panel(model_name))
                main {
                    h1 { "Employee Attrition Predictor" }
                    hr;
                    p { "Enter employee details below:" }
                    (input_form(request))
                    @if let Some(prediction) = result {
                        (result_panel(prediction))
                    }
                }
            }
        }
    }
}

fn info_panel(model_name: &str) -> Markup {
    html! {
        aside {
            h2 { "Employee Attrition Project" }
            p { b { "Predict if an employee will leave or stay!" } }
            p { "Model: " (model_name) }
            p { "Features:" }
            ul {
                @for name in PredictionRequest::FEATURE_ORDER {
                    li { (name) }
                }
            }
        }
    }
}

fn number_input(spec: &FieldSpec, value: i64) -> Markup {
    html! {
        label for=(spec.name) { (spec.label) }
        input type="number" id=(spec.name) name=(spec.name)
            min=(spec.min) max=(spec.max) step=(spec.step) value=(value) required;
    }
}

fn input_form(request: &PredictionRequest) -> Markup {
    html! {
        form method="post" action="/predict" {
            div class="columns" {
                div {
                    (number_input(&form::AGE, request.age as i64))
                    (number_input(&form::YEARS_AT_COMPANY, request.years_at_company as i64))
                    (number_input(&form::MONTHLY_INCOME, request.monthly_income as i64))
                }
                div {
                    label for="job_satisfaction" { "Job Satisfaction" }
                    select id="job_satisfaction" name="job_satisfaction" {
                        @for level in form::JOB_SATISFACTION_LEVELS {
                            option value=(level) selected[level == request.job_satisfaction] {
                                (level)
                            }
                        }
                    }
                    (number_input(&form::DISTANCE_FROM_HOME, request.distance_from_home as i64))
                }
            }
            button type="submit" { "Predict Attrition" }
        }
    }
}

fn result_panel(prediction: &Prediction) -> Markup {
    let [p_leave, p_stay] = prediction.proba;
    // The bar shows the probability of whichever class was predicted.
    let bar = if prediction.label == 1 { p_stay } else { p_leave };

    html! {
        hr;
        section id="result" {
            h2 { "Prediction Result" }
            @if prediction.label == 1 {
                div class="panel panel-success" {
                    (format!("Low risk: employee likely to stay. (Probability of staying: {p_stay:.2})"))
                }
            } @else {
                div class="panel panel-error" {
                    (format!("High risk: employee likely to leave. (Probability of leaving: {p_leave:.2})"))
                }
            }
            h3 { "Probability Breakdown" }
            progress max="1" value=(bar) {}
            ul {
                li { "Probability of staying: " code { (format!("{p_stay:.2}")) } }
                li { "Probability of leaving: " code { (format!("{p_leave:.2}")) } }
            }
        }
    }
}
