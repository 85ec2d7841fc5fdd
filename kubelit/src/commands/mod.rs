mod generate;

use clap::{Parser, Subcommand};
use eyre::Result;
use generate::GenerateCommand;

#[derive(Parser)]
#[command(name = "kubelit")]
#[command(version)]
#[command(about = "Generate Go source code from Kubernetes YAML")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate Go source code from Kubernetes YAML documents
    Generate(GenerateCommand),
}
