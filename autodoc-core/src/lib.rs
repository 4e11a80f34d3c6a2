//! Autodoc core library — domain types, schema loading, errors.
//!
//! Public API surface:
//! - [`types`] — schema enums and domain structs
//! - [`error`] — [`SchemaError`]
//! - [`schema`] — schema document loading

pub mod error;
pub mod schema;
pub mod types;

pub use error::SchemaError;
pub use types::{Field, FieldType, ProviderSchema, SchemaKind, SchemaNode};
