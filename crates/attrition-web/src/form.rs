use ndarray::{arr2, Array2};
use serde::{Deserialize, Serialize};

/// Rendering spec for one numeric form widget. The `min`/`max`/`step`
/// attributes are the only range enforcement in the system; nothing
/// re-validates downstream.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub min: i64,
    pub max: i64,
    pub default: i64,
    pub step: i64,
}

pub const AGE: FieldSpec = FieldSpec {
    name: "age",
    label: "Age",
    min: 18,
    max: 70,
    default: 30,
    step: 1,
};

pub const YEARS_AT_COMPANY: FieldSpec = FieldSpec {
    name: "years_at_company",
    label: "Years at Company",
    min: 0,
    max: 50,
    default: 5,
    step: 1,
};

pub const MONTHLY_INCOME: FieldSpec = FieldSpec {
    name: "monthly_income",
    label: "Monthly Income",
    min: 1000,
    max: 200000,
    default: 5000,
    step: 500,
};

pub const DISTANCE_FROM_HOME: FieldSpec = FieldSpec {
    name: "distance_from_home",
    label: "Distance From Home (km)",
    min: 0,
    max: 100,
    default: 10,
    step: 1,
};

/// Ordinal satisfaction levels offered by the select widget.
pub const JOB_SATISFACTION_LEVELS: [u8; 4] = [0, 1, 2, 3];

/// One form submission. Assembled fresh per request, never persisted,
/// discarded once the response is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub age: u32,
    pub years_at_company: u32,
    pub monthly_income: u32,
    pub job_satisfaction: u8,
    pub distance_from_home: u32,
}

impl Default for PredictionRequest {
    fn default() -> Self {
        PredictionRequest {
            age: AGE.default as u32,
            years_at_company: YEARS_AT_COMPANY.default as u32,
            monthly_income: MONTHLY_INCOME.default as u32,
            job_satisfaction: JOB_SATISFACTION_LEVELS[0],
            distance_from_home: DISTANCE_FROM_HOME.default as u32,
        }
    }
}

impl PredictionRequest {
    /// Column order the classifier was trained on.
    pub const FEATURE_ORDER: [&'static str; 5] = [
        "Age",
        "YearsAtCompany",
        "MonthlyIncome",
        "JobSatisfaction",
        "DistanceFromHome",
    ];

    /// One-row feature matrix in [`Self::FEATURE_ORDER`] column order.
    pub fn features(&self) -> Array2<f32> {
        arr2(&[[
            self.age as f32,
            self.years_at_company as f32,
            self.monthly_income as f32,
            self.job_satisfaction as f32,
            self.distance_from_home as f32,
        ]])
    }
}
