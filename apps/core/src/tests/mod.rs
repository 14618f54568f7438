//! Test Module
//!
//! Cross-component test suite for the analytics engine.
//!
//! ## Test Categories
//! - `analytics_tests`: component contracts and numeric bounds
//! - `integration_tests`: full pipeline scenarios and JSON output shape
//! - `config_tests`: environment-driven configuration and validation

pub mod analytics_tests;
