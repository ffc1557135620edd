//! CLI command definitions
//!
//! All CLI structs and subcommand enums are defined here.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// STIXView - interactive graphs of STIX 2.1 threat intelligence
#[derive(Parser, Debug)]
#[command(name = "stixview")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to config file (default: ~/.config/stixview/config.yaml)
    #[arg(short, long, global = true, env = "STIXVIEW_CONFIG")]
    pub config: Option<PathBuf>,

    /// Icon directory (overrides icons_root from the config file)
    #[arg(long, global = true, env = "STIXVIEW_ICONS")]
    pub icons: Option<PathBuf>,

    /// Enable verbose/debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a default configuration file
    Init {
        /// Overwrite an existing configuration
        #[arg(long)]
        force: bool,
    },

    /// Render STIX files as an interactive HTML graph
    Render {
        /// STIX JSON files (bundles, relationships or single objects)
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Output HTML file
        #[arg(short, long, default_value = "stix-graph.html")]
        output: PathBuf,

        /// Icon style (default: graph.style from the config file)
        #[arg(short, long)]
        style: Option<String>,

        /// Write an embeddable fragment instead of a full page
        #[arg(long)]
        embed: bool,

        /// Configuration panels to show under the graph
        #[arg(long, value_enum, value_delimiter = ',')]
        buttons: Vec<ButtonArg>,

        /// Open the rendered graph in the default browser
        #[arg(long)]
        open: bool,
    },

    /// Export the graph data (nodes and edges) as JSON
    Export {
        /// STIX JSON files
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show node and edge statistics
    Stats {
        /// STIX JSON files
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// List the available icon styles
    Styles,
}

/// Configuration panel names accepted by `--buttons`
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonArg {
    Physics,
    Nodes,
    Edges,
}

impl From<ButtonArg> for stixview::render::ButtonPanel {
    fn from(arg: ButtonArg) -> Self {
        match arg {
            ButtonArg::Physics => Self::Physics,
            ButtonArg::Nodes => Self::Nodes,
            ButtonArg::Edges => Self::Edges,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_render_args() {
        let cli = Cli::try_parse_from([
            "stixview",
            "render",
            "bundle.json",
            "-o",
            "out.html",
            "--style",
            "round-flat",
            "--buttons",
            "physics,edges",
        ])
        .unwrap();

        match cli.command {
            Commands::Render {
                files,
                output,
                style,
                buttons,
                embed,
                open,
            } => {
                assert_eq!(files, vec![PathBuf::from("bundle.json")]);
                assert_eq!(output, PathBuf::from("out.html"));
                assert_eq!(style.as_deref(), Some("round-flat"));
                assert_eq!(buttons, vec![ButtonArg::Physics, ButtonArg::Edges]);
                assert!(!embed);
                assert!(!open);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_render_requires_files() {
        assert!(Cli::try_parse_from(["stixview", "render"]).is_err());
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::try_parse_from(["stixview", "styles", "-v", "--icons", "/opt/icons"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.icons, Some(PathBuf::from("/opt/icons")));
    }
}
