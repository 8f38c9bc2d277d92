//! attrition-classifiers: inference-side model wrappers for the employee
//! attrition predictor.
//!
//! This crate provides the classifier abstraction consumed by the form
//! handler, the logistic-regression implementation behind it, and the
//! artifact loading used to restore a pre-trained model from disk. There is
//! no training code here; artifacts come from an external pipeline.
pub mod config;
pub mod error;
pub mod models;
