//! # Catalog Export
//!
//! Writes the registered attributes as JSON lines, one record per attribute,
//! for documentation generation.
//!
//! ```
//! use phoenix_semantic_conventions::registry::AttributeRegistry;
//!
//! let registry = AttributeRegistry::with_standard_groups().unwrap();
//! let mut out = Vec::new();
//! registry.export_jsonl(&mut out).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap().lines().count(), registry.len());
//! ```
use crate::registry::AttributeRegistry;
use serde::{Deserialize, Serialize};
use std::io;
use thiserror::Error;

/// A flattened descriptor, tagged with the group that owns it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeRecord {
    /// Fully-qualified attribute id.
    pub id: String,
    /// Human-readable description.
    pub brief: String,
    /// Declared value type tag.
    #[serde(rename = "type")]
    pub value_type: String,
    /// Id of the owning group.
    pub group: String,
}

/// Errors returned while exporting the catalog.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ExportError {
    /// Writing to the sink failed.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// A record could not be serialized.
    #[error(transparent)]
    Serialize(#[from] serde_json::Error),
}

impl AttributeRegistry {
    /// Flatten the registry into records, groups in registration order and
    /// descriptors in short key order.
    pub fn records(&self) -> impl Iterator<Item = AttributeRecord> + '_ {
        self.groups().flat_map(|group| {
            group.descriptors().map(move |descriptor| AttributeRecord {
                id: descriptor.id().to_owned(),
                brief: descriptor.brief().to_owned(),
                value_type: descriptor.value_type().as_str().to_owned(),
                group: group.id().to_owned(),
            })
        })
    }

    /// Write every record as one JSON object per line.
    pub fn export_jsonl<W: io::Write>(&self, mut writer: W) -> Result<(), ExportError> {
        for record in self.records() {
            serde_json::to_writer(&mut writer, &record)?;
            writer.write_all(b"\n")?;
        }
        writer.flush()?;
        Ok(())
    }
}
