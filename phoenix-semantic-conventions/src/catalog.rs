//! # Standard Catalog
//!
//! Descriptors for every attribute in [`attribute`](crate::attribute), grouped
//! by namespace.
//!
//! ```
//! use phoenix_semantic_conventions::registry::AttributeRegistry;
//! use phoenix_semantic_conventions::trace::LLM_MODEL_NAME;
//!
//! let registry = AttributeRegistry::with_standard_groups().unwrap();
//! let descriptor = registry.get_descriptor(LLM_MODEL_NAME).unwrap();
//! assert_eq!(descriptor.brief(), "The name of the model being used.");
//! ```
use crate::attribute::*;
use crate::config::RegistryConfig;
use crate::registry::{
    AttributeDescriptor, AttributeGroup, AttributeRegistry, RegistryResult, ValueType,
};

macro_rules! group {
    ($id:literal { $($key:literal => ($attr:expr, $brief:literal, $ty:expr)),+ $(,)? }) => {
        AttributeGroup::builder($id)
            .with_prefix($id)
            $(
                .with_attribute($key, AttributeDescriptor::from_static($attr, $brief, $ty))
            )+
            .build()
    };
}

/// The standard attribute groups, in registration order.
pub fn standard_groups() -> Vec<AttributeGroup> {
    vec![
        group!("deployment" {
            "environment" => (DEPLOYMENT_ENVIRONMENT, "The environment where the service is deployed", ValueType::STRING),
        }),
        group!("exception" {
            "type" => (EXCEPTION_TYPE, "The type of the exception.", ValueType::STRING),
            "message" => (EXCEPTION_MESSAGE, "The exception message.", ValueType::STRING),
            "escaped" => (EXCEPTION_ESCAPED, "Whether the exception escaped the scope of the span.", ValueType::BOOLEAN),
            "stacktrace" => (EXCEPTION_STACKTRACE, "A stacktrace as a string in the natural representation for the language runtime.", ValueType::STRING),
        }),
        group!("input" {
            "value" => (INPUT_VALUE, "The input of the operation recorded by the span.", ValueType::STRING),
            "mime_type" => (INPUT_MIME_TYPE, "The type of input.value. If unspecified, the type is plain text by default.", ValueType::STRING),
        }),
        group!("output" {
            "value" => (OUTPUT_VALUE, "The output of the operation recorded by the span.", ValueType::STRING),
            "mime_type" => (OUTPUT_MIME_TYPE, "The type of output.value. If unspecified, the type is plain text by default.", ValueType::STRING),
        }),
        group!("embedding" {
            "embeddings" => (EMBEDDING_EMBEDDINGS, "A list of objects containing embedding data, including the vector and represented piece of text.", ValueType::OBJECT_ARRAY),
            "model_name" => (EMBEDDING_MODEL_NAME, "The name of the embedding model.", ValueType::STRING),
            "text" => (EMBEDDING_TEXT, "The text represented by the embedding.", ValueType::STRING),
            "vector" => (EMBEDDING_VECTOR, "The embedding vector.", ValueType::DOUBLE_ARRAY),
        }),
        group!("llm" {
            "function_call" => (LLM_FUNCTION_CALL, "For models and APIs that support function calling. Records attributes such as the function name and arguments to the called function.", ValueType::STRING),
            "invocation_parameters" => (LLM_INVOCATION_PARAMETERS, "Invocation parameters passed to the LLM or API, such as the model name, temperature, etc.", ValueType::STRING),
            "messages" => (LLM_MESSAGES, "Messages provided to a chat API.", ValueType::OBJECT_ARRAY),
            "model_name" => (LLM_MODEL_NAME, "The name of the model being used.", ValueType::STRING),
            "prompt_template.template" => (LLM_PROMPT_TEMPLATE, "The prompt template as a format string.", ValueType::STRING),
            "prompt_template.variables" => (LLM_PROMPT_TEMPLATE_VARIABLES, "A list of input variables to the prompt template.", ValueType::STRING_ARRAY),
            "prompt_template.version" => (LLM_PROMPT_TEMPLATE_VERSION, "The version of the prompt template being used.", ValueType::STRING),
            "token_count.prompt" => (LLM_TOKEN_COUNT_PROMPT, "Number of tokens in the prompt.", ValueType::INT),
            "token_count.completion" => (LLM_TOKEN_COUNT_COMPLETION, "Number of tokens in the completion.", ValueType::INT),
            "token_count.total" => (LLM_TOKEN_COUNT_TOTAL, "Total number of tokens, including both prompt and completion.", ValueType::INT),
        }),
        group!("message" {
            "role" => (MESSAGE_ROLE, "The role of the message, such as \"user\" or \"system\".", ValueType::STRING),
            "content" => (MESSAGE_CONTENT, "The content of the message to the LLM.", ValueType::STRING),
        }),
        group!("tool" {
            "name" => (TOOL_NAME, "Name of the tool being used.", ValueType::STRING),
            "description" => (TOOL_DESCRIPTION, "Description of the tool's purpose, typically used to select the tool.", ValueType::STRING),
        }),
        group!("retrieval" {
            "documents" => (RETRIEVAL_DOCUMENTS, "The documents returned by a retrieval step.", ValueType::OBJECT_ARRAY),
        }),
        group!("document" {
            "id" => (DOCUMENT_ID, "The id of a retrieved document.", ValueType::STRING),
            "score" => (DOCUMENT_SCORE, "The relevance score of a retrieved document.", ValueType::DOUBLE),
            "content" => (DOCUMENT_CONTENT, "The content of a retrieved document.", ValueType::STRING),
            "metadata" => (DOCUMENT_METADATA, "Document metadata as a string representing a JSON object.", ValueType::STRING),
        }),
    ]
}

impl AttributeRegistry {
    /// Create a registry holding the [standard groups](standard_groups), with
    /// the default [`RegistryConfig`].
    pub fn with_standard_groups() -> RegistryResult<Self> {
        Self::with_standard_groups_and_config(RegistryConfig::default())
    }

    /// Create a registry holding the [standard groups](standard_groups).
    pub fn with_standard_groups_and_config(config: RegistryConfig) -> RegistryResult<Self> {
        let mut registry = AttributeRegistry::with_config(config);
        for group in standard_groups() {
            registry.register_group(group)?;
        }
        Ok(registry)
    }
}
