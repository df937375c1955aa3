use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use hookwright_codegen::{Registry, generate};
use tracing::info;

use super::{UnwrapOrExit, options::OptionArgs};

#[derive(Args)]
pub struct PrintCommand {
    #[command(flatten)]
    pub options: OptionArgs,

    /// Write the contract to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl PrintCommand {
    /// Run the print command
    pub fn run(&self) -> Result<()> {
        let options = self.options.load().unwrap_or_exit();
        let generated = generate(&options, Registry::builtin()).unwrap_or_exit();

        for diag in generated.diagnostics.iter().filter(|d| d.severity.is_warning()) {
            eprintln!("warning: {}", diag.message);
        }

        match &self.output {
            Some(path) => {
                std::fs::write(path, &generated.source)
                    .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
                info!(path = %path.display(), "wrote contract");
                eprintln!("Generated: {}", path.display());
            }
            None => print!("{}", generated.source),
        }

        Ok(())
    }
}
