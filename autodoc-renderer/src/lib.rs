//! # autodoc-renderer
//!
//! Tera-based template set that renders provider documentation payloads.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use autodoc_core::types::SchemaNode;
//! use autodoc_renderer::{SchemaContext, TemplateSet};
//!
//! fn render_one(node: &SchemaNode) {
//!     if let Ok(set) = TemplateSet::load(Path::new("templates"), ".template") {
//!         let ctx = SchemaContext::from_node(node);
//!         if let Ok(tera_ctx) = ctx.to_tera_context() {
//!             if let Ok(out) = set.render("resource.md", &tera_ctx) {
//!                 println!("{} bytes", out.len());
//!             }
//!         }
//!     }
//! }
//! ```

pub mod context;
pub mod engine;
pub mod error;

pub use context::{ConfigContext, FieldCtx, MetaCtx, SchemaContext};
pub use engine::TemplateSet;
pub use error::{RenderError, TemplateLoadError};
