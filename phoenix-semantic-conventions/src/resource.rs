//! # Resource Semantic Conventions
//!
//! Attributes describing the entity that produces telemetry, to be used in
//! `Resource`s rather than on individual spans.
//!
//! ## Usage
//!
//! ```rust
//! use opentelemetry::KeyValue;
//! use phoenix_semantic_conventions as semconv;
//!
//! let kv = KeyValue::new(semconv::resource::DEPLOYMENT_ENVIRONMENT, "production");
//! assert_eq!(kv.key.as_str(), "deployment.environment");
//! ```

pub use crate::attribute::DEPLOYMENT_ENVIRONMENT;
