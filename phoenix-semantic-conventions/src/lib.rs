//! # Phoenix Semantic Conventions
//!
//! Semantic conventions are agreed standardized names for the attributes
//! attached to spans of LLM and retrieval applications, e.g.
//! `llm.model_name`, `embedding.vector` or `document.score`. This crate is
//! the centralized place to interact with these conventions:
//!
//! - [`attribute`] holds every attribute name, re-exported by [`trace`] and
//!   [`resource`] according to where the attribute is recorded.
//! - [`registry`] maps attribute names to their descriptors (brief and value
//!   type), organized into groups.
//! - [`catalog`] describes the standard groups.
//! - [`mime`] resolves the `input.mime_type`/`output.mime_type` hints.
//!
//! ## Usage
//!
//! ```rust
//! use opentelemetry::Value;
//! use phoenix_semantic_conventions::{mime::MimeType, registry::AttributeRegistry, trace};
//! use std::sync::Arc;
//!
//! // Populate once at startup, then share read-only.
//! let registry = Arc::new(AttributeRegistry::with_standard_groups().unwrap());
//!
//! let kv = registry
//!     .get_descriptor(trace::INPUT_MIME_TYPE)
//!     .unwrap()
//!     .key_value(MimeType::Json);
//! assert_eq!(registry.resolve_mime_type(Some(&kv.value)).unwrap(), MimeType::Json);
//! assert_eq!(registry.resolve_mime_type(Some(&Value::from(""))).unwrap(), MimeType::Text);
//! ```
//!
//! ## Crate Feature Flags
//!
//! * `internal-logs`: Emits internal diagnostics through `tracing` (on by default).
//! * `jsonl`: Enables the JSON-lines [`export`] of the catalog.
#![deny(missing_docs, unreachable_pub, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod attribute;
pub mod catalog;
pub mod config;
#[cfg(feature = "jsonl")]
#[cfg_attr(docsrs, doc(cfg(feature = "jsonl")))]
pub mod export;
pub mod mime;
pub mod registry;
pub mod resource;
pub mod trace;
