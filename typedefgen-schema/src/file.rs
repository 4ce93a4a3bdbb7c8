use std::path::{Path, PathBuf};

use crate::{Error, Result, Schema, parse_schema};

/// A typedefs.toml file with both raw content and parsed schema.
pub struct SchemaFile {
    path: PathBuf,
    content: String,
    schema: Schema,
}

impl SchemaFile {
    /// Open and parse a typedefs.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let schema = parse_schema(&content, &filename)?;

        Ok(Self {
            path,
            content,
            schema,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed schema.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Consume the file, keeping only the parsed schema.
    pub fn into_schema(self) -> Schema {
        self.schema
    }
}
