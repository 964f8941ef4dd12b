use std::path::{Path, PathBuf};

use clap::Args;
use eyre::Result;
use jsongen_manifest::{Config, parse_model_file};

use super::UnwrapOrExit;
use crate::{
    ops::check,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to the structural model JSON
    pub model: PathBuf,

    /// Path to jsongen.toml (defaults to ./jsongen.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let config = Config::discover(self.config.as_deref(), Path::new(".")).unwrap_or_exit();
        let model = parse_model_file(&self.model).unwrap_or_exit();

        let report = check(&model, &config, &self.model);
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
