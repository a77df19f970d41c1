use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use modelsmith_manifest::{FieldDecl, ManifestFile};

use super::UnwrapOrExit;

#[derive(Args)]
pub struct ListCommand {
    /// Path to modelsmith.toml (defaults to ./modelsmith.toml)
    #[arg(short, long, default_value = "modelsmith.toml")]
    pub config: PathBuf,
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let file = ManifestFile::open(&self.config).unwrap_or_exit();
        let manifest = file.manifest();

        if manifest.models.is_empty() {
            println!("No models defined");
            return Ok(());
        }

        println!("Models:");
        for model in &manifest.models {
            let backends: Vec<_> = model.backends.iter().map(|b| b.as_str()).collect();
            if backends.is_empty() {
                println!("  {} (no backends)", model.name);
            } else {
                println!("  {} [{}]", model.name, backends.join(", "));
            }
            for field in &model.fields {
                println!("    {}", field_signature(field));
            }
        }

        Ok(())
    }
}

fn field_signature(field: &FieldDecl) -> String {
    let mut signature = format!("{}: {}", field.name, field.field_type);
    if !field.required {
        signature.push('?');
    }
    if let Some(len) = field.max_length {
        signature.push_str(&format!(" ({})", len));
    }
    signature
}
