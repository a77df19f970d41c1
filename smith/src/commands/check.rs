use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use modelsmith_manifest::ManifestFile;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to modelsmith.toml (defaults to ./modelsmith.toml)
    #[arg(short, long, default_value = "modelsmith.toml")]
    pub config: PathBuf,

    /// Print the assembled backend models as JSON
    #[arg(long)]
    pub ir: bool,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let file = ManifestFile::open(&self.config).unwrap_or_exit();
        let report = ops::check(file.manifest(), file.path(), self.ir)?;

        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
