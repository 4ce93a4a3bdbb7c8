use std::{
    fs,
    path::{Path, PathBuf},
};

use eyre::{Result, WrapErr};

/// Something that renders into a single file under an output directory.
pub trait GeneratedFile {
    /// Full destination path below `base`.
    fn path(&self, base: &Path) -> PathBuf;

    fn rules(&self) -> FileRules;

    fn render(&self) -> String;

    /// Render and write in one step.
    fn write(&self, base: &Path) -> Result<WriteResult> {
        File::new(self.path(base), self.render())
            .with_rules(self.rules())
            .write()
    }
}

/// What happened to a file on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    Written,
    /// Left alone because it already existed
    Skipped,
    /// Left alone because it already held the same bytes
    Unchanged,
}

/// Rendered content paired with its destination.
#[derive(Debug, Clone)]
pub struct File {
    path: PathBuf,
    content: String,
    rules: FileRules,
}

impl File {
    /// Uses [`FileRules::default`], which only rewrites changed content.
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            rules: FileRules::default(),
        }
    }

    pub fn with_rules(mut self, rules: FileRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Apply the overwrite policy, creating parent directories as needed.
    pub fn write(&self) -> Result<WriteResult> {
        if let Some(kept) = self.rules.overwrite.keeps(&self.path, &self.content) {
            return Ok(kept);
        }

        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .wrap_err_with(|| format!("failed to create '{}'", dir.display()))?;
        }
        fs::write(&self.path, &self.content)
            .wrap_err_with(|| format!("failed to write '{}'", self.path.display()))?;
        Ok(WriteResult::Written)
    }
}

/// Policy for a file that may already be on disk.
#[derive(Debug, Clone, Default)]
pub struct FileRules {
    pub overwrite: Overwrite,
}

impl FileRules {
    pub fn always_overwrite() -> Self {
        Self {
            overwrite: Overwrite::Always,
        }
    }

    /// For user-owned files such as the starter schema.
    pub fn if_missing() -> Self {
        Self {
            overwrite: Overwrite::IfMissing,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overwrite {
    Always,
    IfMissing,
    /// Generated headers; keeps mtimes stable across identical runs.
    #[default]
    IfChanged,
}

impl Overwrite {
    /// The result to report when the existing file must be kept, or `None`
    /// when `content` has to be written.
    fn keeps(self, path: &Path, content: &str) -> Option<WriteResult> {
        match self {
            Overwrite::Always => None,
            Overwrite::IfMissing => path.exists().then_some(WriteResult::Skipped),
            Overwrite::IfChanged => match fs::read_to_string(path) {
                Ok(existing) if existing == content => Some(WriteResult::Unchanged),
                // Missing or unreadable files fall through to the write
                _ => None,
            },
        }
    }
}
