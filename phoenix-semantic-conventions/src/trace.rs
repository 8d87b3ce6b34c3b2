//! # Trace Semantic Conventions
//!
//! The trace semantic conventions define a set of standardized attributes to
//! be used in `Span`s of LLM and retrieval applications.
//!
//! ## Usage
//!
//! ```rust
//! use opentelemetry::KeyValue;
//! use phoenix_semantic_conventions as semconv;
//!
//! let attributes = vec![
//!     KeyValue::new(semconv::trace::LLM_MODEL_NAME, "gpt-4"),
//!     KeyValue::new(semconv::trace::LLM_TOKEN_COUNT_TOTAL, 42_i64),
//! ];
//! assert_eq!(attributes[0].key.as_str(), "llm.model_name");
//! ```

pub use crate::attribute::EXCEPTION_ESCAPED;

pub use crate::attribute::EXCEPTION_MESSAGE;

pub use crate::attribute::EXCEPTION_STACKTRACE;

pub use crate::attribute::EXCEPTION_TYPE;

pub use crate::attribute::INPUT_MIME_TYPE;

pub use crate::attribute::INPUT_VALUE;

pub use crate::attribute::OUTPUT_MIME_TYPE;

pub use crate::attribute::OUTPUT_VALUE;

pub use crate::attribute::EMBEDDING_EMBEDDINGS;

pub use crate::attribute::EMBEDDING_MODEL_NAME;

pub use crate::attribute::EMBEDDING_TEXT;

pub use crate::attribute::EMBEDDING_VECTOR;

pub use crate::attribute::LLM_FUNCTION_CALL;

pub use crate::attribute::LLM_INVOCATION_PARAMETERS;

pub use crate::attribute::LLM_MESSAGES;

pub use crate::attribute::LLM_MODEL_NAME;

pub use crate::attribute::LLM_PROMPT_TEMPLATE;

pub use crate::attribute::LLM_PROMPT_TEMPLATE_VARIABLES;

pub use crate::attribute::LLM_PROMPT_TEMPLATE_VERSION;

pub use crate::attribute::LLM_TOKEN_COUNT_COMPLETION;

pub use crate::attribute::LLM_TOKEN_COUNT_PROMPT;

pub use crate::attribute::LLM_TOKEN_COUNT_TOTAL;

pub use crate::attribute::MESSAGE_CONTENT;

pub use crate::attribute::MESSAGE_ROLE;

pub use crate::attribute::TOOL_DESCRIPTION;

pub use crate::attribute::TOOL_NAME;

pub use crate::attribute::RETRIEVAL_DOCUMENTS;

pub use crate::attribute::DOCUMENT_CONTENT;

pub use crate::attribute::DOCUMENT_ID;

pub use crate::attribute::DOCUMENT_METADATA;

pub use crate::attribute::DOCUMENT_SCORE;
