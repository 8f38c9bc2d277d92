//! attrition-web: the single-page form server in front of the attrition
//! classifier.
//!
//! One GET renders the form with its documented defaults and ranges, one
//! POST assembles the submitted record, runs a single synchronous inference
//! call and re-renders the page with the predicted label and class
//! probabilities. The classifier is loaded once at startup and shared
//! read-only across requests.
pub mod config;
pub mod form;
pub mod handler;
pub mod render;
pub mod routes;
