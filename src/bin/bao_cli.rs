//! `bao` — adds Bao UI components to a consumer project.
//!
//! The binary stays a thin shell over the library: it parses the two
//! subcommands, loads the selected registry, resolves the install set, and
//! renders the outcome with the colored prefixes users expect. Every failure
//! path prints the error chain to stderr and exits 1.

use anyhow::{Context, Result};
use bao::{
    ComponentName, InstallOptions, ItemKind, RegistrySource, bundled_registry_schema_path,
    find_bao_root, install_components, registry_schema_path, resolve_install_set,
};
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use std::env;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "bao",
    version,
    about = "CLI for adding Bao UI components to your project"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add components to your project
    Add {
        /// Component names to add
        #[arg(required = true)]
        components: Vec<String>,
        /// Overwrite existing files
        #[arg(long)]
        overwrite: bool,
    },
    /// List all available components
    #[command(alias = "ls")]
    List,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{} {err:#}", "error:".red());
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Add {
            components,
            overwrite,
        } => add_components(&components, overwrite),
        Commands::List => list_components(),
    }
}

/// Load the registry for this invocation, reporting which source was used.
fn load_registry(bao_root: Option<&PathBuf>) -> Result<bao::RegistryIndex> {
    let source = RegistrySource::from_env();
    if source == RegistrySource::Builtin {
        println!("{}", "Using local registry...".dimmed());
    } else {
        println!("{}", format!("Using {source}...").dimmed());
    }

    let schema_path = match bao_root {
        Some(root) => registry_schema_path(root),
        None => bundled_registry_schema_path(),
    };
    source.load(&schema_path)
}

fn add_components(requested: &[String], overwrite: bool) -> Result<()> {
    println!("{}", "Fetching registry...".blue());
    let bao_root = find_bao_root().ok();
    let index = load_registry(bao_root.as_ref())?;

    let requested: Vec<ComponentName> =
        requested.iter().map(|name| ComponentName::from(name.as_str())).collect();
    let plan = resolve_install_set(&index, &requested)?;

    println!(
        "{}",
        format!("Installing {} component(s)...", plan.components.len()).blue()
    );

    let project_root = env::current_dir().context("resolving current directory")?;
    let report = install_components(
        &index,
        &plan,
        &project_root,
        bao_root.as_deref(),
        InstallOptions { overwrite },
    )?;

    for path in report.written() {
        println!("{}", path.display().green());
    }
    for path in report.skipped() {
        println!(
            "{}",
            format!(
                "{} already exists. Use --overwrite to replace.",
                path.display()
            )
            .yellow()
        );
    }

    if !plan.packages.is_empty() {
        let packages = plan.packages.join(" ");
        println!("\n{}", "Install the following dependencies:".blue());
        println!("{}", format!("npm install {packages}").dimmed());
        println!("{}", "# or".dimmed());
        println!("{}", format!("pnpm add {packages}").dimmed());
        println!("{}", "# or".dimmed());
        println!("{}", format!("yarn add {packages}").dimmed());
    }

    let added = requested
        .iter()
        .map(ComponentName::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    println!(
        "\n{}",
        format!("Done! Added {added} to your project.").green()
    );
    Ok(())
}

fn list_components() -> Result<()> {
    println!("{}", "Fetching registry...".blue());
    let bao_root = find_bao_root().ok();
    let index = load_registry(bao_root.as_ref())?;

    println!("\n{}\n", "Available components:".green());
    for item in &index.registry().items {
        if item.kind != ItemKind::Ui {
            continue;
        }
        let description = item.description.as_deref().unwrap_or("");
        println!(
            "{} {}",
            format!("{:<15}", item.name).blue(),
            description.dimmed()
        );
    }

    println!("\n{}", "Usage: bao add <component-name>".dimmed());
    println!("{}", "Example: bao add button badge input".dimmed());
    Ok(())
}
