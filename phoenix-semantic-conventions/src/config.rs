//! Registry Configuration
//!
//! Configuration of an [`AttributeRegistry`](crate::registry::AttributeRegistry).
//! The default configuration can be overridden through environment variables.
use opentelemetry::otel_warn;
use std::env;
use std::str::FromStr;

/// Environment variable selecting the [`MimeTypeResolution`] policy.
pub const PHOENIX_MIME_TYPE_RESOLUTION: &str = "PHOENIX_MIME_TYPE_RESOLUTION";

/// How a mime type hint that matches no known mime type is handled.
///
/// Empty hints resolve to [`MimeType::Text`](crate::mime::MimeType::Text)
/// under both policies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MimeTypeResolution {
    /// Unknown, non-empty hints fail with
    /// [`RegistryError::UnknownMimeType`](crate::registry::RegistryError::UnknownMimeType).
    #[default]
    Strict,
    /// Unknown hints resolve to plain text, as older instrumentations expect.
    Lenient,
}

impl FromStr for MimeTypeResolution {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(MimeTypeResolution::Strict),
            "lenient" => Ok(MimeTypeResolution::Lenient),
            other => Err(format!("unsupported mime type resolution `{}`", other)),
        }
    }
}

/// Registry configuration
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub struct RegistryConfig {
    /// Policy applied by
    /// [`AttributeRegistry::resolve_mime_type`](crate::registry::AttributeRegistry::resolve_mime_type).
    pub mime_type_resolution: MimeTypeResolution,
}

impl Default for RegistryConfig {
    /// Create the default configuration, honoring `PHOENIX_MIME_TYPE_RESOLUTION`.
    fn default() -> Self {
        let mut config = RegistryConfig {
            mime_type_resolution: MimeTypeResolution::default(),
        };

        if let Ok(value) = env::var(PHOENIX_MIME_TYPE_RESOLUTION) {
            match value.parse::<MimeTypeResolution>() {
                Ok(resolution) => config.mime_type_resolution = resolution,
                Err(err) => {
                    otel_warn!(
                        name: "AttributeRegistry.Config.InvalidMimeTypeResolution",
                        message = "PHOENIX_MIME_TYPE_RESOLUTION must be 'strict' or 'lenient'. Falling back to 'strict'",
                        error = err.as_str()
                    );
                }
            }
        }

        config
    }
}

impl RegistryConfig {
    /// Override the mime type resolution policy.
    pub fn with_mime_type_resolution(mut self, resolution: MimeTypeResolution) -> Self {
        self.mime_type_resolution = resolution;
        self
    }
}
