use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use typedefgen_schema::SchemaFile;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ExplainCommand {
    /// Path to typedefs.toml (defaults to ./typedefs.toml)
    #[arg(short, long, default_value = "typedefs.toml")]
    pub config: PathBuf,
}

impl ExplainCommand {
    pub fn run(&self) -> Result<()> {
        let file = SchemaFile::open(&self.config).unwrap_or_exit();

        let report = ops::explain(file.schema(), file.path())?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
