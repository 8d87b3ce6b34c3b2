use opentelemetry::{Key, KeyValue, Value};
use std::borrow::Cow;
use std::fmt;

/// The declared value type of an attribute.
///
/// The set of tags is open: the associated constants document the tags the
/// standard catalog uses, and any other tag can be created with
/// [`ValueType::new`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ValueType(Cow<'static, str>);

impl ValueType {
    /// A UTF-8 string.
    pub const STRING: ValueType = ValueType::from_static("string");
    /// A signed 64 bit integer.
    pub const INT: ValueType = ValueType::from_static("int");
    /// A double precision float.
    pub const DOUBLE: ValueType = ValueType::from_static("double");
    /// A boolean.
    pub const BOOLEAN: ValueType = ValueType::from_static("boolean");
    /// A homogeneous array of strings.
    pub const STRING_ARRAY: ValueType = ValueType::from_static("string[]");
    /// A homogeneous array of integers.
    pub const INT_ARRAY: ValueType = ValueType::from_static("int[]");
    /// A homogeneous array of doubles.
    pub const DOUBLE_ARRAY: ValueType = ValueType::from_static("double[]");
    /// A homogeneous array of booleans.
    pub const BOOLEAN_ARRAY: ValueType = ValueType::from_static("boolean[]");
    /// A list of structured objects, flattened into nested attributes when
    /// recorded on a span.
    pub const OBJECT_ARRAY: ValueType = ValueType::from_static("object[]");

    /// Create a new `ValueType` from any tag.
    pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
        ValueType(tag.into())
    }

    /// Create a new const `ValueType`.
    pub const fn from_static(tag: &'static str) -> Self {
        ValueType(Cow::Borrowed(tag))
    }

    /// Returns the tag of this type.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Metadata describing a single semantic attribute.
///
/// Descriptors are immutable once constructed.
///
/// # Examples
///
/// ```
/// use phoenix_semantic_conventions::registry::{AttributeDescriptor, ValueType};
///
/// const ENVIRONMENT: AttributeDescriptor = AttributeDescriptor::from_static(
///     "deployment.environment",
///     "The environment where the service is deployed",
///     ValueType::STRING,
/// );
///
/// let kv = ENVIRONMENT.key_value("production");
/// assert_eq!(kv.key.as_str(), "deployment.environment");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AttributeDescriptor {
    id: Cow<'static, str>,
    brief: Cow<'static, str>,
    value_type: ValueType,
}

impl AttributeDescriptor {
    /// Create a new descriptor from owned or borrowed strings.
    pub fn new(
        id: impl Into<Cow<'static, str>>,
        brief: impl Into<Cow<'static, str>>,
        value_type: ValueType,
    ) -> Self {
        AttributeDescriptor {
            id: id.into(),
            brief: brief.into(),
            value_type,
        }
    }

    /// Create a new const descriptor.
    pub const fn from_static(id: &'static str, brief: &'static str, value_type: ValueType) -> Self {
        AttributeDescriptor {
            id: Cow::Borrowed(id),
            brief: Cow::Borrowed(brief),
            value_type,
        }
    }

    /// The fully-qualified dotted attribute name.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Human-readable description of the attribute.
    pub fn brief(&self) -> &str {
        &self.brief
    }

    /// The declared value type.
    pub fn value_type(&self) -> &ValueType {
        &self.value_type
    }

    /// The attribute name as an OpenTelemetry [`Key`].
    pub fn key(&self) -> Key {
        Key::from(self.id.clone())
    }

    /// Pair the attribute name with a value.
    pub fn key_value(&self, value: impl Into<Value>) -> KeyValue {
        KeyValue::new(self.key(), value)
    }

    /// Returns the reason this descriptor cannot be registered, if any.
    pub(crate) fn defect(&self) -> Option<&'static str> {
        if self.id.is_empty() {
            Some("attribute id is empty")
        } else if self.brief.trim().is_empty() {
            Some("brief is empty")
        } else if self.value_type.as_str().is_empty() {
            Some("value type is empty")
        } else {
            None
        }
    }
}
