//! # Mime Types
//!
//! The format of the `input.value` and `output.value` attributes is carried by
//! `input.mime_type` and `output.mime_type`. An absent or empty mime type means
//! plain text.
//!
//! ```
//! use opentelemetry::Value;
//! use phoenix_semantic_conventions::config::MimeTypeResolution;
//! use phoenix_semantic_conventions::mime::{resolve_mime_type, MimeType};
//!
//! let hint = Value::from("application/json");
//! assert_eq!(resolve_mime_type(Some(&hint), MimeTypeResolution::Strict), Ok(MimeType::Json));
//! assert_eq!(resolve_mime_type(None, MimeTypeResolution::Strict), Ok(MimeType::Text));
//! ```
use crate::config::MimeTypeResolution;
use crate::registry::{RegistryError, RegistryResult};
use opentelemetry::{Array, Value};
use std::fmt;
use std::str::FromStr;

/// The format of an input or output value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MimeType {
    /// `text/plain`
    #[default]
    Text,
    /// `application/json`; the value is a string representing a JSON object.
    Json,
}

impl MimeType {
    /// Every known mime type.
    pub const ALL: [MimeType; 2] = [MimeType::Text, MimeType::Json];

    /// The canonical mime type string.
    pub const fn as_str(&self) -> &'static str {
        match self {
            MimeType::Text => "text/plain",
            MimeType::Json => "application/json",
        }
    }
}

impl fmt::Display for MimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MimeType {
    type Err = RegistryError;

    /// Exact match against the canonical strings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MimeType::ALL
            .into_iter()
            .find(|mime_type| mime_type.as_str() == s)
            .ok_or_else(|| RegistryError::UnknownMimeType(s.to_owned()))
    }
}

impl From<MimeType> for Value {
    fn from(mime_type: MimeType) -> Self {
        Value::from(mime_type.as_str())
    }
}

/// Resolve an arbitrary attribute value to a [`MimeType`].
///
/// Empty hints resolve to [`MimeType::Text`]: an absent value, an empty
/// string, `false`, `0`, `0.0` and an empty array. Any other value is matched
/// by its string representation against the canonical mime type strings.
/// A value that matches nothing fails with
/// [`RegistryError::UnknownMimeType`] under [`MimeTypeResolution::Strict`] and
/// resolves to [`MimeType::Text`] under [`MimeTypeResolution::Lenient`].
pub fn resolve_mime_type(
    hint: Option<&Value>,
    resolution: MimeTypeResolution,
) -> RegistryResult<MimeType> {
    let hint = match hint {
        Some(value) if !is_empty_hint(value) => value,
        _ => return Ok(MimeType::Text),
    };

    match (hint.as_str().parse::<MimeType>(), resolution) {
        (Ok(mime_type), _) => Ok(mime_type),
        (Err(_), MimeTypeResolution::Lenient) => Ok(MimeType::Text),
        (Err(err), MimeTypeResolution::Strict) => Err(err),
    }
}

fn is_empty_hint(value: &Value) -> bool {
    match value {
        Value::Bool(b) => !*b,
        Value::I64(i) => *i == 0,
        Value::F64(f) => *f == 0.0,
        Value::String(s) => s.as_str().is_empty(),
        Value::Array(array) => match array {
            Array::Bool(v) => v.is_empty(),
            Array::I64(v) => v.is_empty(),
            Array::F64(v) => v.is_empty(),
            Array::String(v) => v.is_empty(),
            _ => false,
        },
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use opentelemetry::StringValue;
    use rstest::rstest;

    #[rstest]
    #[case(None)]
    #[case(Some(Value::from("")))]
    #[case(Some(Value::from(false)))]
    #[case(Some(Value::from(0_i64)))]
    #[case(Some(Value::from(0.0_f64)))]
    #[case(Some(Value::from(-0.0_f64)))]
    #[case(Some(Value::Array(Array::String(Vec::new()))))]
    #[case(Some(Value::Array(Array::Bool(Vec::new()))))]
    #[case(Some(Value::Array(Array::I64(Vec::new()))))]
    #[case(Some(Value::Array(Array::F64(Vec::new()))))]
    fn empty_hints_resolve_to_text(#[case] hint: Option<Value>) {
        for resolution in [MimeTypeResolution::Strict, MimeTypeResolution::Lenient] {
            assert_eq!(
                resolve_mime_type(hint.as_ref(), resolution),
                Ok(MimeType::Text)
            );
        }
    }

    #[rstest]
    #[case("text/plain", MimeType::Text)]
    #[case("application/json", MimeType::Json)]
    fn canonical_strings_resolve(#[case] hint: &'static str, #[case] expected: MimeType) {
        let hint = Value::from(hint);
        assert_eq!(
            resolve_mime_type(Some(&hint), MimeTypeResolution::Strict),
            Ok(expected)
        );
    }

    #[rstest]
    #[case(Value::from("application/xml"))]
    #[case(Value::from("APPLICATION/JSON"))]
    #[case(Value::from(true))]
    #[case(Value::from(7_i64))]
    #[case(Value::from(f64::NAN))]
    #[case(Value::Array(Array::Bool(vec![false])))]
    #[case(Value::Array(Array::String(vec![StringValue::from("application/json")])))]
    fn unknown_hints_fail_when_strict(#[case] hint: Value) {
        assert_eq!(
            resolve_mime_type(Some(&hint), MimeTypeResolution::Strict),
            Err(RegistryError::UnknownMimeType(hint.as_str().into_owned()))
        );
    }

    #[test]
    fn unknown_hints_default_to_text_when_lenient() {
        let hint = Value::from("application/xml");
        assert_eq!(
            resolve_mime_type(Some(&hint), MimeTypeResolution::Lenient),
            Ok(MimeType::Text)
        );
    }

    #[test]
    fn mime_type_converts_to_attribute_value() {
        assert_eq!(Value::from(MimeType::Json), Value::from("application/json"));
        assert_eq!(MimeType::default(), MimeType::Text);
        assert_eq!(MimeType::Json.to_string(), "application/json");
    }
}
