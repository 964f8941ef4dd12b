use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use crate::{
    ops::sources,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct SourcesCommand {
    /// Swift files or directories holding them
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Show outputs as if redirected into this directory
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl SourcesCommand {
    pub fn run(&self) -> Result<()> {
        let report = sources(&self.inputs, self.output.as_deref())?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
