//! Command line surface of the `solid` binary.
use clap::{Parser, Subcommand};
use solid_core::{OutputFormat, Principle, RunConfig, Variant};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "solid")]
#[command(about = "Run legacy and refactored examples of the SOLID principles")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every example
    List,
    /// Run examples and print their transcripts
    Run(RunArgs),
}

#[derive(clap::Args, Debug, Default)]
pub struct RunArgs {
    /// YAML run configuration; flags below override it
    #[arg(long, env = "SOLID_CONFIG")]
    pub config: Option<PathBuf>,

    /// Principle to run (srp, ocp, lsp, isp, dip); repeatable
    #[arg(long = "principle", short = 'p')]
    pub principles: Vec<Principle>,

    /// Example id to run (see `solid list`); repeatable
    #[arg(long = "example", short = 'e')]
    pub examples: Vec<String>,

    /// Variant to run (legacy, refactored); repeatable
    #[arg(long = "variant")]
    pub variants: Vec<Variant>,

    /// Seed for coin-flip examples
    #[arg(long, env = "SOLID_SEED")]
    pub seed: Option<u64>,

    /// Output format (plain, json, markdown)
    #[arg(long, short = 'f')]
    pub format: Option<OutputFormat>,
}

impl RunArgs {
    /// Lays the flags over `base`. Only flags that were given replace values.
    pub fn apply(&self, mut base: RunConfig) -> RunConfig {
        if !self.principles.is_empty() {
            base.principles = self.principles.clone();
        }
        if !self.examples.is_empty() {
            base.examples = self.examples.clone();
        }
        if !self.variants.is_empty() {
            base.variants = self.variants.clone();
        }
        if self.seed.is_some() {
            base.seed = self.seed;
        }
        if let Some(format) = self.format {
            base.format = format;
        }
        base
    }
}
