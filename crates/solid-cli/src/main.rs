//! Binary entrypoint for the SOLID examples.
mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands, RunArgs};
use solid_core::{render, ExampleRunner, ExecutionContext, RunConfig};
use std::io::Write;
use tracing_subscriber::EnvFilter;

/// Matches every `solid_*` crate target.
const DEFAULT_LOG_FILTER: &str = "solid=info";

fn main() -> Result<()> {
    // Logs go to stderr so stdout carries only the transcripts.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let runner = ExampleRunner::new(solid_principles::default_examples());

    match cli.command {
        Commands::List => list(&runner, &mut std::io::stdout().lock()),
        Commands::Run(args) => run(&runner, &args),
    }
}

fn list(runner: &ExampleRunner, out: &mut impl Write) -> Result<()> {
    for principle in runner.principles() {
        writeln!(out, "{} ({})", principle.name(), principle)?;
        for example in solid_principles::examples_for(principle) {
            let marker = if example.deterministic() { "" } else { "  [random]" };
            writeln!(out, "  {:<16} {}{}", example.id(), example.title(), marker)?;
        }
    }
    Ok(())
}

fn run(runner: &ExampleRunner, args: &RunArgs) -> Result<()> {
    let base = match &args.config {
        Some(path) => RunConfig::load(path)
            .with_context(|| format!("loading run config from {}", path.display()))?,
        None => RunConfig::default(),
    };
    let config = args.apply(base);
    let ctx = ExecutionContext::new().with_seed(config.seed);
    tracing::info!(trace_id = %ctx.trace_id, seed = ?config.seed, format = %config.format, "running examples");

    let reports = runner.run(&config, &ctx).context("selecting examples")?;
    let rendered = render(&reports, config.format).context("rendering reports")?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    if !rendered.ends_with('\n') {
        writeln!(stdout)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use solid_core::Principle;

    #[test]
    fn test_default_filter_enables_runner_info() {
        assert!(EnvFilter::try_new(DEFAULT_LOG_FILTER).is_ok());
        for target in ["solid_cli", "solid_core", "solid_principles"] {
            assert!(target.starts_with(DEFAULT_LOG_FILTER.trim_end_matches("=info")));
        }
    }

    #[test]
    fn test_list_groups_examples_by_principle() {
        let runner = ExampleRunner::new(solid_principles::default_examples());
        let mut out = Vec::new();
        list(&runner, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), Principle::ALL.len() * 3);
        assert!(lines[0].ends_with("(srp)"));
        assert!(lines[1].trim_start().starts_with("srp.employee"));
        assert!(lines[2].trim_start().starts_with("srp.handler"));
        assert!(text.contains("ocp.insurance") && text.contains("[random]"));
        assert!(lines.last().unwrap().trim_start().starts_with("dip.storage"));
    }
}
