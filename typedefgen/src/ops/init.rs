//! Init operation - starter schema creation.

use std::path::{Path, PathBuf};

use eyre::{Context, Result};
use typedefgen_core::{FileRules, GeneratedFile, WriteResult};

use crate::reports::InitReport;

const STARTER_SCHEMA: &str = r#"# Union typedefs for the typedefgen header generator.

[generator]
namespace = "blink"
basename = "v8_typedefs"
path = "bindings/{component}/v8"
class_prefix = "V8Union"

[components]
base = "core"
extended = "modules"

# using BlobOrString = V8UnionBlobOrString;
[typedefs.BlobOrString]
type = ["Blob", "String"]

[typedefs.Name]
type = "String"

# using V8UnionBlobOrName = V8UnionBlobOrString;
[[unions]]
members = ["Blob", "Name"]
"#;

/// The starter `typedefs.toml`, never overwritten.
pub struct StarterSchema;

impl GeneratedFile for StarterSchema {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("typedefs.toml")
    }

    fn rules(&self) -> FileRules {
        FileRules::if_missing()
    }

    fn render(&self) -> String {
        STARTER_SCHEMA.to_string()
    }
}

/// Execute the init operation.
pub fn init(dir: &Path) -> Result<InitReport> {
    let path = StarterSchema.path(dir);
    let result = StarterSchema
        .write(dir)
        .wrap_err_with(|| format!("Failed to write {}", path.display()))?;

    Ok(InitReport {
        path,
        created: result == WriteResult::Written,
    })
}
