//! Quizit CLI
//!
//! The `quizit` command runs the ordering generator over a JSON file of
//! components, the same list the authoring app sends for a concept card.
//!
//! ## Commands
//!
//! - `generate`: print valid, diverse orderings
//! - `check`: validate references and acyclicity

mod telemetry;

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use quizit_core::{
    find_cycle, scenario_components, Component, DependencyGraph, GeneratorConfig,
    OrderingGenerator, OrderingsResult, PermutationPalette,
};
use serde::Deserialize;
use tracing::{debug, Level};

#[derive(Parser)]
#[command(name = "quizit")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Generate valid quizit orderings from scenario components", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit JSON-formatted log lines
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print valid orderings, one per line in wire form ("A C B D")
    Generate {
        /// Components file (JSON array, or an object with a `components` array)
        input: PathBuf,

        /// Maximum orderings to return (default: $QUIZIT_MAX_PERMUTATIONS or 3)
        #[arg(short, long)]
        max: Option<usize>,

        /// Print every valid ordering, skipping diversity selection
        #[arg(long, conflicts_with = "max")]
        all: bool,

        /// Keep reasoning components instead of filtering to scenarios
        #[arg(long)]
        include_reasoning: bool,

        /// Annotate each ordering with a stable color index from a palette of N
        #[arg(long, value_name = "N")]
        colors: Option<usize>,

        /// Prefix each ordering with its fingerprint
        #[arg(long)]
        keys: bool,

        /// Print the `{validOrderings, error}` JSON shape instead of lines
        #[arg(long, conflicts_with_all = ["colors", "keys"])]
        json: bool,
    },

    /// Validate prerequisite references and report any cycle
    Check {
        /// Components file
        input: PathBuf,

        /// Keep reasoning components instead of filtering to scenarios
        #[arg(long)]
        include_reasoning: bool,
    },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ComponentsFile {
    List(Vec<Component>),
    Wrapped { components: Vec<Component> },
}

struct GenerateArgs {
    max: Option<usize>,
    all: bool,
    include_reasoning: bool,
    colors: Option<usize>,
    keys: bool,
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    telemetry::init_tracing(cli.log_json, level);

    let output = match cli.command {
        Commands::Generate {
            input,
            max,
            all,
            include_reasoning,
            colors,
            keys,
            json,
        } => cmd_generate(
            &input,
            &GenerateArgs {
                max,
                all,
                include_reasoning,
                colors,
                keys,
                json,
            },
        )?,
        Commands::Check {
            input,
            include_reasoning,
        } => cmd_check(&input, include_reasoning)?,
    };

    print!("{output}");
    Ok(())
}

fn load_components(path: &Path, include_reasoning: bool) -> Result<Vec<Component>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read components from {:?}", path))?;
    let file: ComponentsFile = serde_json::from_str(&content)
        .with_context(|| format!("Invalid components JSON in {:?}", path))?;
    let components = match file {
        ComponentsFile::List(components) => components,
        ComponentsFile::Wrapped { components } => components,
    };

    let total = components.len();
    let components = if include_reasoning {
        components
    } else {
        scenario_components(&components)
    };
    debug!(
        path = %path.display(),
        total = total,
        used = components.len(),
        "components loaded"
    );
    Ok(components)
}

fn resolve_config(max: Option<usize>) -> Result<GeneratorConfig> {
    let config = match max {
        Some(max) => GeneratorConfig::new(max)?,
        None => GeneratorConfig::from_env()?,
    };
    Ok(config)
}

fn cmd_generate(input: &Path, args: &GenerateArgs) -> Result<String> {
    let components = load_components(input, args.include_reasoning)?;
    let generator = OrderingGenerator::new(resolve_config(args.max)?);

    let result = if args.all {
        generator.all_orderings(&components)
    } else {
        generator.generate(&components)
    };

    if args.json {
        let shape = OrderingsResult::from(result);
        return Ok(format!("{}\n", serde_json::to_string_pretty(&shape)?));
    }

    let orderings = result?;
    let palette = match args.colors {
        Some(size) => Some(PermutationPalette::new(
            &generator.all_orderings(&components)?,
            size,
        )?),
        None => None,
    };

    let mut out = String::new();
    for ordering in &orderings {
        if args.keys {
            write!(out, "{} ", ordering.fingerprint())?;
        }
        write!(out, "{ordering}")?;
        if let Some(color) = palette.as_ref().and_then(|p| p.color_index(ordering)) {
            write!(out, "\tcolor={color}")?;
        }
        out.push('\n');
    }
    Ok(out)
}

fn cmd_check(input: &Path, include_reasoning: bool) -> Result<String> {
    let components = load_components(input, include_reasoning)?;
    let graph = DependencyGraph::from_components(&components)?;

    if let Some(cycle) = find_cycle(&graph) {
        anyhow::bail!("Circular dependency detected: {}", cycle.join(" → "));
    }

    let total = OrderingGenerator::default()
        .all_orderings(&components)?
        .len();
    Ok(format!(
        "✓ {} components, {} edges, {} valid orderings\n",
        graph.len(),
        graph.edge_count(),
        total
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_input(dir: &tempfile::TempDir, json: &str) -> PathBuf {
        let path = dir.path().join("components.json");
        std::fs::write(&path, json).unwrap();
        path
    }

    fn args() -> GenerateArgs {
        GenerateArgs {
            max: Some(3),
            all: false,
            include_reasoning: false,
            colors: None,
            keys: false,
            json: false,
        }
    }

    const DIAMOND: &str = r#"[
        {"id": "A", "text": "start", "type": "scenario", "prerequisites": []},
        {"id": "B", "type": "scenario", "prerequisites": ["A"]},
        {"id": "C", "type": "scenario", "prerequisites": ["A"]},
        {"id": "D", "type": "scenario", "prerequisites": ["B", "C"]},
        {"id": "R", "type": "reasoning", "prerequisites": ["Q"]}
    ]"#;

    #[test]
    fn test_generate_prints_wire_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_input(&dir, DIAMOND);
        let out = cmd_generate(&path, &args()).unwrap();
        assert_eq!(out, "A B C D\nA C B D\n");
    }

    #[test]
    fn test_generate_with_reasoning_reports_dangling_reference() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_input(&dir, DIAMOND);
        let err = cmd_generate(
            &path,
            &GenerateArgs {
                include_reasoning: true,
                ..args()
            },
        )
        .unwrap_err();
        assert!(err.to_string().contains("\"Q\""));
    }

    #[test]
    fn test_generate_json_shape_carries_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_input(
            &dir,
            r#"{"components": [
                {"id": "A", "prerequisites": ["B"]},
                {"id": "B", "prerequisites": ["A"]}
            ]}"#,
        );
        let out = cmd_generate(
            &path,
            &GenerateArgs {
                json: true,
                ..args()
            },
        )
        .unwrap();
        let shape: OrderingsResult = serde_json::from_str(&out).unwrap();
        assert!(shape.valid_orderings.is_empty());
        assert_eq!(shape.error.as_deref(), Some("Circular dependency detected"));
    }

    #[test]
    fn test_generate_all_with_colors_and_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_input(&dir, r#"[{"id": "A"}, {"id": "B"}, {"id": "C"}]"#);
        let out = cmd_generate(
            &path,
            &GenerateArgs {
                all: true,
                colors: Some(4),
                keys: true,
                ..args()
            },
        )
        .unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 6);
        assert!(lines[0].ends_with("A B C\tcolor=0"));
        assert!(lines[5].ends_with("C B A\tcolor=1"));
        assert_eq!(lines[0].split(' ').next().unwrap().len(), 64);
    }

    #[test]
    fn test_check_reports_cycle_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_input(
            &dir,
            r#"[{"id": "A", "prerequisites": ["B"]}, {"id": "B", "prerequisites": ["A"]}]"#,
        );
        let err = cmd_check(&path, false).unwrap_err();
        assert!(err.to_string().contains("A → B → A"));
    }

    #[test]
    fn test_check_summarises_valid_graph() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_input(&dir, DIAMOND);
        let out = cmd_check(&path, false).unwrap();
        assert_eq!(out, "✓ 4 components, 4 edges, 2 valid orderings\n");
    }

    #[test]
    fn test_invalid_json_has_context() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_input(&dir, "not json");
        let err = cmd_check(&path, false).unwrap_err();
        assert!(err.to_string().contains("Invalid components JSON"));
    }

    #[test]
    fn test_zero_max_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_input(&dir, DIAMOND);
        let result = cmd_generate(
            &path,
            &GenerateArgs {
                max: Some(0),
                ..args()
            },
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parses_generate_flags() {
        let cli = Cli::try_parse_from([
            "quizit", "--verbose", "generate", "cards.json", "--max", "5", "--colors", "8",
        ])
        .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Generate { max, colors, .. } => {
                assert_eq!(max, Some(5));
                assert_eq!(colors, Some(8));
            }
            _ => panic!("Expected generate command"),
        }
    }

    #[test]
    fn test_cli_rejects_conflicting_generate_flags() {
        for flags in [
            ["--json", "--colors", "4"].as_slice(),
            ["--json", "--keys"].as_slice(),
            ["--all", "--max", "2"].as_slice(),
        ] {
            let argv = ["quizit", "generate", "cards.json"].iter().chain(flags);
            assert!(Cli::try_parse_from(argv).is_err(), "accepted {:?}", flags);
        }
    }
}
