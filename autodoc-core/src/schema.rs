//! Provider schema document loading.
//!
//! A schema document is a single JSON file:
//!
//! ```json
//! {
//!   "provider": [ {"name": "api_key", "type": "string", "required": true} ],
//!   "resources": { "acme_widget": [ ... ] },
//!   "data_sources": { "acme_lookup": [ ... ] }
//! }
//! ```

use std::path::Path;

use crate::error::SchemaError;
use crate::types::ProviderSchema;

/// Load a provider schema from a JSON document at `path`.
///
/// Returns `SchemaError::SchemaNotFound` if absent,
/// `SchemaError::Parse` (with path + line context) if malformed JSON.
pub fn load_at(path: &Path) -> Result<ProviderSchema, SchemaError> {
    if !path.exists() {
        return Err(SchemaError::SchemaNotFound {
            path: path.to_path_buf(),
        });
    }
    let contents = std::fs::read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|e| SchemaError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn load_missing_file_is_schema_not_found() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("absent.json");
        let err = load_at(&path).expect_err("must fail");
        assert!(matches!(err, SchemaError::SchemaNotFound { .. }));
    }

    #[test]
    fn load_malformed_json_is_parse_error_with_path() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").expect("write");
        let err = load_at(&path).expect_err("must fail");
        match err {
            SchemaError::Parse { path: p, .. } => assert_eq!(p, path),
            other => panic!("expected Parse, got {other:?}"),
        }
    }

    #[test]
    fn load_valid_schema() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("provider.json");
        fs::write(
            &path,
            r#"{
                "provider": [{"name": "token", "type": "string", "required": true}],
                "resources": {"acme_widget": [{"name": "size", "type": "int"}]},
                "data_sources": {}
            }"#,
        )
        .expect("write");

        let schema = load_at(&path).expect("load");
        assert_eq!(schema.provider.len(), 1);
        assert_eq!(schema.provider[0].name, "token");
        assert!(schema.resources.contains_key("acme_widget"));
        assert!(schema.data_sources.is_empty());
    }
}
