mod cli;
mod invoke;
mod tools;

use anyhow::Result;
use cli::Cli;
use colored::*;
use tools::ToolRegistry;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let registry = ToolRegistry::with_default();

    if cli.list {
        println!("{}", "Available tools:".bold());
        for spec in registry.list() {
            let marker = if spec.read_only { " [read-only]" } else { "" };
            println!("- {} ({}){}", spec.name, spec.description, marker);
        }
        return Ok(());
    }

    if cli.spec {
        let spec = registry.spec(&cli.tool)?;
        println!("{}", serde_json::to_string(&spec)?);
        return Ok(());
    }

    println!("{}", invoke::run_tool(&registry, &cli.tool, cli.args.as_deref()));
    Ok(())
}
