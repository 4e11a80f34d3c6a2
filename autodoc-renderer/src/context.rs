//! Render contexts — serializable payloads handed to the templates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use autodoc_core::types::{Field, SchemaNode};

use crate::error::RenderError;

/// Tool metadata available to every template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetaCtx {
    pub autodoc_version: String,
    pub generated_at: DateTime<Utc>,
}

impl MetaCtx {
    pub fn current() -> Self {
        MetaCtx {
            autodoc_version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: Utc::now(),
        }
    }
}

/// Template-facing view of a [`Field`]; the type tag is stringified so
/// templates can interpolate it directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldCtx {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: String,
    pub description: String,
    pub required: bool,
    pub optional: bool,
    pub computed: bool,
    pub fields: Vec<FieldCtx>,
}

impl FieldCtx {
    fn from_field(field: &Field) -> Self {
        FieldCtx {
            name: field.name.clone(),
            field_type: field.field_type.to_string(),
            description: field.description.clone(),
            required: field.required,
            optional: field.optional,
            computed: field.computed,
            fields: field.fields.iter().map(FieldCtx::from_field).collect(),
        }
    }
}

/// Payload for the index, resource, and data-source documents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaContext {
    pub name: String,
    pub kind: String,
    pub fields: Vec<FieldCtx>,
    pub meta: MetaCtx,
}

impl SchemaContext {
    /// Build a [`SchemaContext`] from a [`SchemaNode`].
    pub fn from_node(node: &SchemaNode) -> Self {
        SchemaContext {
            name: node.name.clone(),
            kind: node.kind.to_string(),
            fields: node.fields.iter().map(FieldCtx::from_field).collect(),
            meta: MetaCtx::current(),
        }
    }

    /// Convert to a [`tera::Context`] for rendering.
    pub fn to_tera_context(&self) -> Result<tera::Context, RenderError> {
        tera::Context::from_serialize(self).map_err(RenderError::Context)
    }
}

/// Payload for the mkdocs configuration document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigContext {
    pub provider_name: String,
    pub docs_dir: String,
    pub meta: MetaCtx,
}

impl ConfigContext {
    pub fn new(provider_name: impl Into<String>, docs_dir: impl Into<String>) -> Self {
        ConfigContext {
            provider_name: provider_name.into(),
            docs_dir: docs_dir.into(),
            meta: MetaCtx::current(),
        }
    }

    /// Convert to a [`tera::Context`] for rendering.
    pub fn to_tera_context(&self) -> Result<tera::Context, RenderError> {
        tera::Context::from_serialize(self).map_err(RenderError::Context)
    }
}
