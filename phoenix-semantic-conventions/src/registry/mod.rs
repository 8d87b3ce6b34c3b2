//! # Attribute Registry
//!
//! The [`AttributeRegistry`] maps attribute identifiers to their descriptive
//! metadata, organized into [`AttributeGroup`]s.
//!
//! A registry is populated once, during initialization, through
//! [`AttributeRegistry::register_group`], which takes `&mut self`. Once it is
//! shared (behind an `Arc` or a `&'static` reference) no write path is
//! reachable, so concurrent readers need no locking.
//!
//! ## Usage
//!
//! ```
//! use phoenix_semantic_conventions::registry::{
//!     AttributeDescriptor, AttributeGroup, AttributeRegistry, RegistryError, ValueType,
//! };
//!
//! let mut registry = AttributeRegistry::new();
//! registry
//!     .register_group(
//!         AttributeGroup::builder("deployment")
//!             .with_attribute(
//!                 "environment",
//!                 AttributeDescriptor::from_static(
//!                     "deployment.environment",
//!                     "The environment where the service is deployed",
//!                     ValueType::STRING,
//!                 ),
//!             )
//!             .build(),
//!     )
//!     .unwrap();
//!
//! let descriptor = registry.get_descriptor("deployment.environment").unwrap();
//! assert_eq!(descriptor.value_type(), &ValueType::STRING);
//! assert!(matches!(
//!     registry.get_descriptor("deployment.nonexistent"),
//!     Err(RegistryError::NotFound { .. })
//! ));
//! ```
mod descriptor;
mod error;
mod group;

pub use descriptor::{AttributeDescriptor, ValueType};
pub use error::{LookupKind, RegistryError, RegistryResult};
pub use group::{AttributeGroup, AttributeGroupBuilder};

use crate::config::RegistryConfig;
use crate::mime::{self, MimeType};
use opentelemetry::{otel_debug, Value};
use std::collections::{HashMap, HashSet};

/// Holds the attribute groups of the process and indexes every descriptor by
/// its globally unique id.
#[derive(Debug, Default)]
pub struct AttributeRegistry {
    config: RegistryConfig,
    groups: Vec<AttributeGroup>,
    group_index: HashMap<String, usize>,
    // attribute id -> (group position, short key)
    attribute_index: HashMap<String, (usize, String)>,
}

impl AttributeRegistry {
    /// Create an empty registry with the default [`RegistryConfig`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry with the given configuration.
    pub fn with_config(config: RegistryConfig) -> Self {
        AttributeRegistry {
            config,
            ..Default::default()
        }
    }

    /// The configuration of this registry.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Add a group and all its descriptors to the registry.
    ///
    /// Fails with
    /// - [`RegistryError::InvalidGroup`] if the group id or its declared prefix
    ///   is empty, or the group holds no descriptor,
    /// - [`RegistryError::InvalidDescriptor`] if a descriptor has an empty id,
    ///   brief or value type, or lies outside the group prefix,
    /// - [`RegistryError::DuplicateGroup`] if the group id is already registered,
    /// - [`RegistryError::DuplicateAttribute`] if a descriptor id is already
    ///   registered anywhere in the registry, or appears twice in the group.
    ///
    /// On failure the registry is left untouched.
    pub fn register_group(&mut self, group: AttributeGroup) -> RegistryResult<()> {
        if let Err(err) = self.validate(&group) {
            otel_debug!(
                name: "AttributeRegistry.RegisterGroup.Rejected",
                group = group.id().to_owned(),
                error = err.to_string()
            );
            return Err(err);
        }

        let position = self.groups.len();
        for (key, descriptor) in group.iter() {
            self.attribute_index
                .insert(descriptor.id().to_owned(), (position, key.to_owned()));
        }
        self.group_index.insert(group.id().to_owned(), position);

        otel_debug!(
            name: "AttributeRegistry.RegisterGroup.Registered",
            group = group.id().to_owned(),
            attribute_count = group.len()
        );
        self.groups.push(group);

        Ok(())
    }

    fn validate(&self, group: &AttributeGroup) -> RegistryResult<()> {
        if group.id().is_empty() {
            return Err(RegistryError::InvalidGroup {
                group: String::new(),
                reason: "group id is empty",
            });
        }
        if group.is_empty() {
            return Err(RegistryError::InvalidGroup {
                group: group.id().to_owned(),
                reason: "group has no attributes",
            });
        }
        if group.prefix() == Some("") {
            return Err(RegistryError::InvalidGroup {
                group: group.id().to_owned(),
                reason: "group prefix is empty",
            });
        }
        if self.group_index.contains_key(group.id()) {
            return Err(RegistryError::DuplicateGroup(group.id().to_owned()));
        }

        let mut seen: HashSet<&str> = HashSet::with_capacity(group.len());
        for descriptor in group.descriptors() {
            let invalid = |reason| RegistryError::InvalidDescriptor {
                id: descriptor.id().to_owned(),
                group: group.id().to_owned(),
                reason,
            };
            if let Some(reason) = descriptor.defect() {
                return Err(invalid(reason));
            }
            if let Some(prefix) = group.prefix() {
                let in_namespace = descriptor
                    .id()
                    .strip_prefix(prefix)
                    .is_some_and(|rest| rest.len() > 1 && rest.starts_with('.'));
                if !in_namespace {
                    return Err(invalid("attribute id is outside the group prefix"));
                }
            }

            let existing_group = if let Some((position, _)) =
                self.attribute_index.get(descriptor.id())
            {
                Some(self.groups[*position].id().to_owned())
            } else if !seen.insert(descriptor.id()) {
                Some(group.id().to_owned())
            } else {
                None
            };
            if let Some(existing_group) = existing_group {
                return Err(RegistryError::DuplicateAttribute {
                    id: descriptor.id().to_owned(),
                    group: group.id().to_owned(),
                    existing_group,
                });
            }
        }

        Ok(())
    }

    /// Look up a descriptor by its fully-qualified id.
    pub fn get_descriptor(&self, id: &str) -> RegistryResult<&AttributeDescriptor> {
        self.attribute_index
            .get(id)
            .and_then(|(position, key)| self.groups[*position].get(key))
            .ok_or_else(|| RegistryError::attribute_not_found(id))
    }

    /// The descriptors of the named group, in short key order.
    pub fn list_group(&self, group_id: &str) -> RegistryResult<Vec<&AttributeDescriptor>> {
        self.get_group(group_id)
            .map(|group| group.descriptors().collect())
    }

    /// Look up a group by its id.
    pub fn get_group(&self, group_id: &str) -> RegistryResult<&AttributeGroup> {
        self.group_index
            .get(group_id)
            .map(|position| &self.groups[*position])
            .ok_or_else(|| RegistryError::group_not_found(group_id))
    }

    /// The group owning the given attribute id.
    pub fn group_of(&self, id: &str) -> RegistryResult<&AttributeGroup> {
        self.attribute_index
            .get(id)
            .map(|(position, _)| &self.groups[*position])
            .ok_or_else(|| RegistryError::attribute_not_found(id))
    }

    /// Returns `true` if an attribute with this id is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.attribute_index.contains_key(id)
    }

    /// Iterate over the groups in registration order.
    pub fn groups(&self) -> impl Iterator<Item = &AttributeGroup> {
        self.groups.iter()
    }

    /// Iterate over every registered descriptor, group by group.
    pub fn descriptors(&self) -> impl Iterator<Item = &AttributeDescriptor> {
        self.groups.iter().flat_map(|group| group.descriptors())
    }

    /// Number of registered descriptors.
    pub fn len(&self) -> usize {
        self.attribute_index.len()
    }

    /// Returns `true` if no descriptor is registered.
    pub fn is_empty(&self) -> bool {
        self.attribute_index.is_empty()
    }

    /// Resolve a mime type hint, such as the value of `input.mime_type`, with
    /// the policy of this registry's configuration.
    ///
    /// See [`mime::resolve_mime_type`].
    pub fn resolve_mime_type(&self, hint: Option<&Value>) -> RegistryResult<MimeType> {
        mime::resolve_mime_type(hint, self.config.mime_type_resolution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MimeTypeResolution;
    use rstest::rstest;
    use std::sync::Arc;

    fn descriptor(id: &'static str) -> AttributeDescriptor {
        AttributeDescriptor::from_static(id, "test attribute", ValueType::STRING)
    }

    fn deployment() -> AttributeGroup {
        AttributeGroup::builder("deployment")
            .with_attribute(
                "environment",
                AttributeDescriptor::from_static(
                    "deployment.environment",
                    "The environment where the service is deployed",
                    ValueType::STRING,
                ),
            )
            .build()
    }

    fn strict_registry() -> AttributeRegistry {
        AttributeRegistry::with_config(
            RegistryConfig::default().with_mime_type_resolution(MimeTypeResolution::Strict),
        )
    }

    #[test]
    fn deployment_group_lookup() {
        let mut registry = strict_registry();
        registry.register_group(deployment()).unwrap();

        let listed = registry.list_group("deployment").unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id(), "deployment.environment");

        let descriptor = registry.get_descriptor("deployment.environment").unwrap();
        assert_eq!(descriptor, listed[0]);
        assert_eq!(
            registry.get_descriptor("deployment.nonexistent"),
            Err(RegistryError::NotFound {
                kind: LookupKind::Attribute,
                id: "deployment.nonexistent".into(),
            })
        );
        assert_eq!(
            registry.list_group("tool").unwrap_err(),
            RegistryError::NotFound {
                kind: LookupKind::Group,
                id: "tool".into(),
            }
        );
    }

    #[test]
    fn every_descriptor_is_found_by_its_id() {
        let mut registry = strict_registry();
        registry.register_group(deployment()).unwrap();
        registry
            .register_group(
                AttributeGroup::builder("tool")
                    .with_attribute("name", descriptor("tool.name"))
                    .with_attribute("description", descriptor("tool.description"))
                    .build(),
            )
            .unwrap();

        assert_eq!(registry.len(), 3);
        for group in registry.groups() {
            for d in group.descriptors() {
                assert_eq!(registry.get_descriptor(d.id()), Ok(d));
                assert_eq!(registry.group_of(d.id()).map(|g| g.id()), Ok(group.id()));
            }
        }
        let group_ids: Vec<&str> = registry.groups().map(|g| g.id()).collect();
        assert_eq!(group_ids, vec!["deployment", "tool"]);
    }

    #[test]
    fn duplicate_group_is_rejected_without_side_effects() {
        let mut registry = strict_registry();
        registry.register_group(deployment()).unwrap();

        let second = AttributeGroup::builder("deployment")
            .with_attribute("region", descriptor("deployment.region"))
            .build();
        assert_eq!(
            registry.register_group(second),
            Err(RegistryError::DuplicateGroup("deployment".into()))
        );
        assert_eq!(registry.len(), 1);
        assert!(!registry.contains("deployment.region"));
        assert_eq!(registry.list_group("deployment").unwrap().len(), 1);
    }

    #[test]
    fn attribute_ids_are_unique_across_groups() {
        let mut registry = strict_registry();
        registry.register_group(deployment()).unwrap();

        let clashing = AttributeGroup::builder("environment")
            .with_attribute("name", descriptor("environment.name"))
            .with_attribute("deployment", descriptor("deployment.environment"))
            .build();
        assert_eq!(
            registry.register_group(clashing),
            Err(RegistryError::DuplicateAttribute {
                id: "deployment.environment".into(),
                group: "environment".into(),
                existing_group: "deployment".into(),
            })
        );
        assert!(!registry.contains("environment.name"));
        assert!(registry.get_group("environment").is_err());
    }

    #[test]
    fn attribute_ids_are_unique_within_a_group() {
        let mut registry = strict_registry();
        let group = AttributeGroup::builder("tool")
            .with_attribute("name", descriptor("tool.name"))
            .with_attribute("label", descriptor("tool.name"))
            .build();
        assert_eq!(
            registry.register_group(group),
            Err(RegistryError::DuplicateAttribute {
                id: "tool.name".into(),
                group: "tool".into(),
                existing_group: "tool".into(),
            })
        );
        assert!(registry.is_empty());
    }

    #[rstest]
    #[case(AttributeGroup::builder("").with_attribute("a", descriptor("a.b")).build(), "group id is empty")]
    #[case(AttributeGroup::builder("tool").build(), "group has no attributes")]
    #[case(
        AttributeGroup::builder("tool").with_prefix("").with_attribute("name", descriptor("tool.name")).build(),
        "group prefix is empty"
    )]
    fn invalid_groups_are_rejected(#[case] group: AttributeGroup, #[case] expected: &str) {
        let mut registry = strict_registry();
        match registry.register_group(group) {
            Err(RegistryError::InvalidGroup { reason, .. }) => assert_eq!(reason, expected),
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(registry.is_empty());
    }

    #[rstest]
    #[case("tool.name", true)]
    #[case("toolbox.name", false)]
    #[case("tool.", false)]
    #[case("llm.model_name", false)]
    fn prefix_is_enforced(#[case] id: &'static str, #[case] accepted: bool) {
        let mut registry = strict_registry();
        let group = AttributeGroup::builder("tool")
            .with_prefix("tool")
            .with_attribute("attr", descriptor(id))
            .build();
        let result = registry.register_group(group);
        assert_eq!(result.is_ok(), accepted, "{:?}", result);
        if !accepted {
            assert!(matches!(
                result,
                Err(RegistryError::InvalidDescriptor { .. })
            ));
        }
    }

    #[test]
    fn malformed_descriptor_is_rejected() {
        let mut registry = strict_registry();
        let group = AttributeGroup::builder("tool")
            .with_attribute("name", descriptor("tool.name"))
            .with_attribute(
                "description",
                AttributeDescriptor::from_static("tool.description", "", ValueType::STRING),
            )
            .build();
        assert_eq!(
            registry.register_group(group),
            Err(RegistryError::InvalidDescriptor {
                id: "tool.description".into(),
                group: "tool".into(),
                reason: "brief is empty",
            })
        );
        assert!(!registry.contains("tool.name"));
    }

    #[test]
    fn mime_type_resolution_follows_config() {
        let hint = Value::from("application/xml");

        let strict = strict_registry();
        assert_eq!(
            strict.resolve_mime_type(Some(&hint)),
            Err(RegistryError::UnknownMimeType("application/xml".into()))
        );
        assert_eq!(strict.resolve_mime_type(None), Ok(MimeType::Text));
        assert_eq!(
            strict.resolve_mime_type(Some(&Value::from("application/json"))),
            Ok(MimeType::Json)
        );

        let lenient = AttributeRegistry::with_config(
            RegistryConfig::default().with_mime_type_resolution(MimeTypeResolution::Lenient),
        );
        assert_eq!(lenient.resolve_mime_type(Some(&hint)), Ok(MimeType::Text));
    }

    #[test]
    fn shared_registry_is_readable_from_threads() {
        let mut registry = strict_registry();
        registry.register_group(deployment()).unwrap();
        let registry = Arc::new(registry);

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let registry = Arc::clone(&registry);
                std::thread::spawn(move || {
                    registry
                        .get_descriptor("deployment.environment")
                        .map(|d| d.id().to_owned())
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(
                handle.join().unwrap(),
                Ok("deployment.environment".to_owned())
            );
        }
    }
}
