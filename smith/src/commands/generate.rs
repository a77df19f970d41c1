use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use modelsmith_codegen::GenerateOptions;
use modelsmith_manifest::ManifestFile;

use super::UnwrapOrExit;
use crate::{
    ops::{self, GenerateOpts},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to modelsmith.toml (defaults to ./modelsmith.toml)
    #[arg(short, long, default_value = "modelsmith.toml")]
    pub config: PathBuf,

    /// Output directory (overrides `[output] dir`)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Skip class-based views and routes
    #[arg(long)]
    pub no_class_based: bool,

    /// Skip function-based views and routes
    #[arg(long)]
    pub no_function_based: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let file = ManifestFile::open(&self.config).unwrap_or_exit();
        let output_dir = self.output.clone().unwrap_or_else(|| file.output_dir());

        let report = ops::generate(
            file.manifest(),
            GenerateOpts {
                output_dir: &output_dir,
                dry_run: self.dry_run,
                variants: self.variants(&file),
            },
        );

        report.render(&mut TerminalOutput::new());

        if !report.is_success() {
            std::process::exit(1);
        }
        Ok(())
    }

    fn variants(&self, file: &ManifestFile) -> GenerateOptions {
        let output = &file.manifest().output;
        GenerateOptions {
            class_based: output.class_based && !self.no_class_based,
            function_based: output.function_based && !self.no_function_based,
        }
    }
}
