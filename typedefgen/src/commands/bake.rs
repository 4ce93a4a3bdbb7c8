use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use typedefgen_schema::SchemaFile;

use super::UnwrapOrExit;
use crate::{
    ops::{self, BakeOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct BakeCommand {
    /// Path to typedefs.toml (defaults to ./typedefs.toml)
    #[arg(short, long, default_value = "typedefs.toml")]
    pub config: PathBuf,

    /// Output directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Print the headers instead of writing them
    #[arg(long)]
    pub dry_run: bool,

    /// Write per-phase JSON snapshots to <output>/.typedefgen/debug/
    #[arg(long)]
    pub visualize: bool,
}

impl BakeCommand {
    pub fn run(&self) -> Result<()> {
        let file = SchemaFile::open(&self.config).unwrap_or_exit();

        let report = ops::bake(
            file.schema(),
            BakeOptions {
                output_dir: &self.output,
                dry_run: self.dry_run,
                visualize: self.visualize,
            },
        )?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
