//! # Semantic Attributes
//!
//! The entire set of semantic attributes defined for LLM and retrieval
//! spans. The [`trace`](crate::trace) and [`resource`](crate::resource)
//! modules reference these attributes, and the [`catalog`](crate::catalog)
//! describes each of them with a brief and a value type.

/// The environment where the service is deployed.
///
/// # Examples
///
/// - `"staging"`
/// - `"production"`
pub const DEPLOYMENT_ENVIRONMENT: &str = "deployment.environment";

/// The type of the exception (its fully-qualified class name, if applicable).
///
/// # Examples
///
/// - `"java.net.ConnectException"`
/// - `"OSError"`
pub const EXCEPTION_TYPE: &str = "exception.type";

/// The exception message.
///
/// # Examples
///
/// - `"Division by zero"`
pub const EXCEPTION_MESSAGE: &str = "exception.message";

/// Whether the exception escaped the scope of the span.
pub const EXCEPTION_ESCAPED: &str = "exception.escaped";

/// A stacktrace as a string in the natural representation for the language runtime.
pub const EXCEPTION_STACKTRACE: &str = "exception.stacktrace";

/// The output of the operation recorded by the span.
pub const OUTPUT_VALUE: &str = "output.value";

/// The type of `output.value`.
///
/// ## Notes
///
/// If unspecified, the type is plain text by default. If the type is JSON,
/// the value is a string representing a JSON object. See
/// [`MimeType`](crate::mime::MimeType).
pub const OUTPUT_MIME_TYPE: &str = "output.mime_type";

/// The input of the operation recorded by the span.
pub const INPUT_VALUE: &str = "input.value";

/// The type of `input.value`.
///
/// ## Notes
///
/// If unspecified, the type is plain text by default. If the type is JSON,
/// the value is a string representing a JSON object. See
/// [`MimeType`](crate::mime::MimeType).
pub const INPUT_MIME_TYPE: &str = "input.mime_type";

/// A list of objects containing embedding data, including the vector and represented piece of text.
pub const EMBEDDING_EMBEDDINGS: &str = "embedding.embeddings";

/// The name of the embedding model.
///
/// # Examples
///
/// - `"text-embedding-ada-002"`
pub const EMBEDDING_MODEL_NAME: &str = "embedding.model_name";

/// The text represented by the embedding.
pub const EMBEDDING_TEXT: &str = "embedding.text";

/// The embedding vector.
pub const EMBEDDING_VECTOR: &str = "embedding.vector";

/// For models and APIs that support function calling. Records attributes such as the function name and
/// arguments to the called function.
pub const LLM_FUNCTION_CALL: &str = "llm.function_call";

/// Invocation parameters passed to the LLM or API, such as the model name, temperature, etc.
///
/// # Examples
///
/// - `"{\"temperature\": 0.2}"`
pub const LLM_INVOCATION_PARAMETERS: &str = "llm.invocation_parameters";

/// Messages provided to a chat API.
pub const LLM_MESSAGES: &str = "llm.messages";

/// The role of the message, such as "user" or "system".
///
/// # Examples
///
/// - `"user"`
/// - `"system"`
/// - `"assistant"`
pub const MESSAGE_ROLE: &str = "message.role";

/// The content of the message to the LLM.
pub const MESSAGE_CONTENT: &str = "message.content";

/// The name of the model being used.
///
/// # Examples
///
/// - `"gpt-4"`
pub const LLM_MODEL_NAME: &str = "llm.model_name";

/// The prompt template as a format string.
///
/// # Examples
///
/// - `"Answer the question: {question}"`
pub const LLM_PROMPT_TEMPLATE: &str = "llm.prompt_template.template";

/// A list of input variables to the prompt template.
pub const LLM_PROMPT_TEMPLATE_VARIABLES: &str = "llm.prompt_template.variables";

/// The version of the prompt template being used.
pub const LLM_PROMPT_TEMPLATE_VERSION: &str = "llm.prompt_template.version";

/// Number of tokens in the prompt.
pub const LLM_TOKEN_COUNT_PROMPT: &str = "llm.token_count.prompt";

/// Number of tokens in the completion.
pub const LLM_TOKEN_COUNT_COMPLETION: &str = "llm.token_count.completion";

/// Total number of tokens, including both prompt and completion.
pub const LLM_TOKEN_COUNT_TOTAL: &str = "llm.token_count.total";

/// Name of the tool being used.
pub const TOOL_NAME: &str = "tool.name";

/// Description of the tool's purpose, typically used to select the tool.
pub const TOOL_DESCRIPTION: &str = "tool.description";

/// The documents returned by a retrieval step.
pub const RETRIEVAL_DOCUMENTS: &str = "retrieval.documents";

/// The id of a retrieved document.
pub const DOCUMENT_ID: &str = "document.id";

/// The relevance score of a retrieved document.
pub const DOCUMENT_SCORE: &str = "document.score";

/// The content of a retrieved document.
pub const DOCUMENT_CONTENT: &str = "document.content";

/// Document metadata as a string representing a JSON object.
pub const DOCUMENT_METADATA: &str = "document.metadata";
