use super::AttributeDescriptor;
use std::borrow::Cow;
use std::collections::BTreeMap;

/// A named collection of semantically related attribute descriptors.
///
/// Descriptors are keyed by a short key that is unique within the group,
/// e.g. `"environment"` for `deployment.environment`. A group owns its
/// descriptors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttributeGroup {
    id: Cow<'static, str>,
    prefix: Option<Cow<'static, str>>,
    attributes: BTreeMap<Cow<'static, str>, AttributeDescriptor>,
}

impl AttributeGroup {
    /// Start building a group with the given id.
    pub fn builder(id: impl Into<Cow<'static, str>>) -> AttributeGroupBuilder {
        AttributeGroupBuilder {
            group: AttributeGroup {
                id: id.into(),
                prefix: None,
                attributes: BTreeMap::new(),
            },
        }
    }

    /// The group identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The namespace every attribute id of this group lives under, if declared.
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    /// Look up a descriptor by its short key.
    pub fn get(&self, key: &str) -> Option<&AttributeDescriptor> {
        self.attributes.get(key)
    }

    /// Iterate over `(short key, descriptor)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttributeDescriptor)> {
        self.attributes.iter().map(|(k, d)| (k.as_ref(), d))
    }

    /// Iterate over the descriptors in key order.
    pub fn descriptors(&self) -> impl Iterator<Item = &AttributeDescriptor> {
        self.attributes.values()
    }

    /// Number of descriptors in the group.
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Returns `true` if the group holds no descriptor.
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

/// Builder to allow easy composition of an [`AttributeGroup`].
#[derive(Debug)]
pub struct AttributeGroupBuilder {
    group: AttributeGroup,
}

impl AttributeGroupBuilder {
    /// Declare the namespace of the group. Registration rejects descriptors
    /// whose id does not start with `"{prefix}."`, and rejects an empty prefix.
    pub fn with_prefix(mut self, prefix: impl Into<Cow<'static, str>>) -> Self {
        self.group.prefix = Some(prefix.into());
        self
    }

    /// Add a descriptor under a short key. A descriptor already stored under
    /// the same key is replaced.
    pub fn with_attribute(
        mut self,
        key: impl Into<Cow<'static, str>>,
        descriptor: AttributeDescriptor,
    ) -> Self {
        self.group.attributes.insert(key.into(), descriptor);
        self
    }

    /// Add multiple `(short key, descriptor)` pairs.
    pub fn with_attributes<K, I>(self, attributes: I) -> Self
    where
        K: Into<Cow<'static, str>>,
        I: IntoIterator<Item = (K, AttributeDescriptor)>,
    {
        attributes
            .into_iter()
            .fold(self, |builder, (key, descriptor)| {
                builder.with_attribute(key, descriptor)
            })
    }

    /// Create the [`AttributeGroup`].
    pub fn build(self) -> AttributeGroup {
        self.group
    }
}
