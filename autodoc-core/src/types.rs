//! Domain types for provider schema descriptions.
//!
//! All path fields use `PathBuf`; never `&str` or `String` for filesystem paths.
//! All types are serializable/deserializable via serde + serde_json.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Semantic tag for a schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    #[default]
    String,
    Int,
    Bool,
    List,
    Map,
    /// Nested block carrying its own field list.
    Block,
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::String => write!(f, "string"),
            FieldType::Int => write!(f, "int"),
            FieldType::Bool => write!(f, "bool"),
            FieldType::List => write!(f, "list"),
            FieldType::Map => write!(f, "map"),
            FieldType::Block => write!(f, "block"),
        }
    }
}

/// The category of a documentable schema entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SchemaKind {
    Provider,
    Resource,
    DataSource,
}

impl fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaKind::Provider => write!(f, "provider"),
            SchemaKind::Resource => write!(f, "resource"),
            SchemaKind::DataSource => write!(f, "data-source"),
        }
    }
}

// ---------------------------------------------------------------------------
// Domain structs
// ---------------------------------------------------------------------------

/// A single configurable field within a schema entity.
///
/// Nested blocks carry their children in `fields`; ownership of the
/// `Vec<Field>` keeps the nesting a finite tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(rename = "type", default)]
    pub field_type: FieldType,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub optional: bool,
    #[serde(default)]
    pub computed: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<Field>,
}

/// One documentable entity: the provider itself, a resource, or a data source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaNode {
    pub name: String,
    pub kind: SchemaKind,
    #[serde(default)]
    pub fields: Vec<Field>,
}

/// Root of a provider schema description.
///
/// `BTreeMap` keys keep resource and data-source enumeration stable across
/// runs regardless of the order entries appear in the source document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ProviderSchema {
    /// Provider-level configuration fields.
    #[serde(default)]
    pub provider: Vec<Field>,
    /// Resource name → field list.
    #[serde(default)]
    pub resources: BTreeMap<String, Vec<Field>>,
    /// Data-source name → field list.
    #[serde(default)]
    pub data_sources: BTreeMap<String, Vec<Field>>,
}

impl ProviderSchema {
    /// Number of documents a full run over this schema produces:
    /// config file + index + one per resource + one per data source.
    pub fn document_count(&self) -> usize {
        2 + self.resources.len() + self.data_sources.len()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
