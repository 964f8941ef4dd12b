use std::path::{Path, PathBuf};

use chrono::Utc;
use clap::Args;
use eyre::Result;
use jsongen_manifest::{Config, parse_model_file};

use super::UnwrapOrExit;
use crate::{
    ops::{GenerateOptions, generate},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to the structural model JSON
    pub model: PathBuf,

    /// Path to jsongen.toml (defaults to ./jsongen.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write every file into this directory instead of next to its source
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Leave the generation time out of file headers
    #[arg(long)]
    pub no_timestamp: bool,

    /// Keep generated files that already exist instead of replacing them
    #[arg(long)]
    pub keep_existing: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let config = Config::discover(self.config.as_deref(), Path::new(".")).unwrap_or_exit();
        let model = parse_model_file(&self.model).unwrap_or_exit();

        let timestamp = (config.output.timestamp && !self.no_timestamp).then(Utc::now);
        let output_dir = self.output.as_deref().or(config.output.directory.as_deref());

        let report = generate(
            &model,
            &config,
            GenerateOptions {
                output_dir,
                dry_run: self.dry_run,
                timestamp,
                keep_existing: self.keep_existing,
            },
        )?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
