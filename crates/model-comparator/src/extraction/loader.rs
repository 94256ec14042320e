//! Load and deserialize model schema files.

use std::collections::HashSet;
use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::model::schema::Schema;

/// Errors that can occur during loading.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("type declared more than once: {0}")]
    DuplicateType(String),
}

/// Load a schema file from disk.
pub fn load_json(path: &Path) -> Result<Schema, LoadError> {
    let content = std::fs::read_to_string(path)?;
    debug!(path = %path.display(), bytes = content.len(), "read model schema");
    parse_json(&content)
}

/// Parse a schema from its JSON text.
pub fn parse_json(content: &str) -> Result<Schema, LoadError> {
    let schema: Schema = serde_json::from_str(content)?;
    {
        let mut seen = HashSet::new();
        for decl in &schema.types {
            if !seen.insert(decl.qualified_name.as_str()) {
                return Err(LoadError::DuplicateType(decl.qualified_name.clone()));
            }
        }
    }
    Ok(schema)
}
