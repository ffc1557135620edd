//! STIXView - interactive graphs of STIX 2.1 threat intelligence
//!
//! Main entry point for the STIXView CLI.

mod commands;

use anyhow::Context;
use clap::Parser;
use commands::{Cli, Commands};
use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use stixview::config::{validate_config_result, StixViewConfig};
use stixview::icons::IconStyle;
use stixview::render::ButtonPanel;
use stixview::{style, Diagnostic, StixGraph};

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    if let Err(e) = stixview::logging::init(level) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", style::error("Error:"), e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Init { force } => handle_init_command(cli.config.as_deref(), force)?,

        Commands::Styles => {
            for style in IconStyle::ALL {
                println!("{}", style);
            }
        }

        Commands::Render {
            files,
            output,
            style: style_arg,
            embed,
            buttons,
            open,
        } => {
            let config = load_config(cli.config.as_deref(), cli.icons, style_arg)?;
            let mut graph = load_graph(&config, &files)?;
            print_diagnostics(&graph.take_diagnostics());

            let mut options = config.render_options();
            if !buttons.is_empty() {
                options = options.with_buttons(buttons.into_iter().map(ButtonPanel::from));
            }
            if embed {
                options = options.embedded();
            }

            let diagnostics = graph
                .write_html(&output, &config.graph.style, &options)
                .with_context(|| format!("Failed to render {}", output.display()))?;
            print_diagnostics(&diagnostics);

            println!(
                "{} Rendered {} nodes and {} edges to {}",
                style::success("✓"),
                graph.node_count(),
                graph.edge_count(),
                style::path(&output.display().to_string())
            );

            if open {
                open::that(&output)
                    .with_context(|| format!("Failed to open {}", output.display()))?;
            }
        }

        Commands::Export { files, output } => {
            let config = load_config(cli.config.as_deref(), cli.icons, None)?;
            let mut graph = load_graph(&config, &files)?;
            print_diagnostics(&graph.take_diagnostics());

            let json = graph.export_json()?;
            match output {
                Some(path) => {
                    fs::write(&path, json)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    println!(
                        "{} Exported graph to {}",
                        style::success("✓"),
                        style::path(&path.display().to_string())
                    );
                }
                None => println!("{}", json),
            }
        }

        Commands::Stats { files, json } => {
            let config = load_config(cli.config.as_deref(), cli.icons, None)?;
            let mut graph = load_graph(&config, &files)?;
            let diagnostics = graph.take_diagnostics();
            let summary = graph.summary();

            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
                return Ok(());
            }

            println!("{}", style::header("STIX Graph Statistics"));
            println!();
            println!("  Nodes:    {}", style::count(summary.nodes));
            for (category, n) in &summary.by_category {
                println!("    {} {}", style::category_style(category), style::count(*n));
            }
            println!();
            println!("  Edges:    {}", style::count(summary.edges));
            for (relation, n) in &summary.by_relation {
                println!("    {} {}", style::relation_style(relation), style::count(*n));
            }
            println!();
            println!("  Warnings: {}", style::count_warnings(diagnostics.len()));
            print_diagnostics(&diagnostics);
        }
    }

    Ok(())
}

/// Load the configuration, apply the `--icons`/`--style` overrides, then validate
fn load_config(
    path: Option<&Path>,
    icons: Option<PathBuf>,
    style: Option<String>,
) -> anyhow::Result<StixViewConfig> {
    let config = StixViewConfig::load_or_default(path)?.with_overrides(icons, style);
    validate_config_result(&config)?;

    tracing::info!(
        icons_root = %config.icons_root.display(),
        custom_types = config.custom_types.len(),
        "Configuration loaded"
    );
    Ok(config)
}

/// Build a graph from the configured custom types and the given files
fn load_graph(config: &StixViewConfig, files: &[PathBuf]) -> anyhow::Result<StixGraph> {
    let mut graph = StixGraph::from_config(config)?;

    for file in files {
        let content = fs::read_to_string(file)
            .with_context(|| format!("Failed to read {}", file.display()))?;
        graph
            .ingest(content)
            .with_context(|| format!("Failed to load STIX content from {}", file.display()))?;
        tracing::debug!(file = %file.display(), nodes = graph.node_count(), "Loaded file");
    }

    Ok(graph)
}

fn print_diagnostics(diagnostics: &[Diagnostic]) {
    for diagnostic in diagnostics {
        eprintln!("{} {}", style::warning("warning:"), diagnostic);
    }
}

fn handle_init_command(config_path: Option<&Path>, force: bool) -> anyhow::Result<()> {
    let config_file = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(StixViewConfig::default_path);

    // Check if already initialized
    if config_file.exists() && !force {
        println!("Configuration already exists at {}", config_file.display());
        println!();
        println!("To overwrite it, run:");
        println!("  stixview init --force");
        return Ok(());
    }

    let config = StixViewConfig::new();
    let saved = match config_path {
        Some(path) => config.save(path),
        None => config.save_default(),
    };
    saved.with_context(|| format!("Failed to write {}", config_file.display()))?;

    println!(
        "{} Created configuration at {}",
        style::success("✓"),
        style::path(&config_file.display().to_string())
    );
    println!();
    println!("Next steps:");
    println!("  1. Place the icon set under:");
    println!("     {}", style::dim(&config.icons_root.display().to_string()));
    println!();
    println!("  2. Render a bundle:");
    println!("     stixview render bundle.json -o graph.html --open");

    Ok(())
}
