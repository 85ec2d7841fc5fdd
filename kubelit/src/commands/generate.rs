use std::io::{Read, Write};
use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use kubelit_codegen::{GenerateOptions, GoFormatter, generate};
use kubelit_value::SchemeDecoder;

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to input file. Reads from stdin if unset.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Path to output file. Writes to stdout if unset.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Generate a full compilable source file instead of a bare fragment.
    #[arg(long)]
    pub verbose: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let input = self.read_input()?;

        let decoder = SchemeDecoder::with_default_scheme();
        let formatter = GoFormatter::new();
        let options = GenerateOptions {
            verbose: self.verbose,
        };
        let generated = match generate(&input, &decoder, &formatter, options) {
            Ok(source) => source,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(e));
                std::process::exit(1);
            }
        };

        self.write_output(&generated)
    }

    fn read_input(&self) -> Result<String> {
        match &self.input {
            Some(path) => std::fs::read_to_string(path)
                .wrap_err_with(|| format!("failed to read input file {}", path.display())),
            None => {
                let mut buffer = String::new();
                std::io::stdin()
                    .read_to_string(&mut buffer)
                    .wrap_err("failed to read stdin")?;
                Ok(buffer)
            }
        }
    }

    fn write_output(&self, generated: &str) -> Result<()> {
        match &self.output {
            Some(path) => std::fs::write(path, generated)
                .wrap_err_with(|| format!("failed to write output file {}", path.display())),
            None => std::io::stdout()
                .write_all(generated.as_bytes())
                .wrap_err("failed to write to stdout"),
        }
    }
}
