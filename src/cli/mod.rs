//! CLI subcommands — run, list, validate.

use crate::core::executor::Runner;
use crate::core::graph::DEFAULT_TARGET;
use crate::core::parser::{self, ParsedRecipe};
use clap::Subcommand;
use std::path::{Path, PathBuf};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a target and its dependencies
    Run {
        /// Target to build
        #[arg(default_value = "all")]
        target: String,

        /// Path to the recipe file
        #[arg(short, long, default_value = "Recipe")]
        file: PathBuf,

        /// Print each action before running it
        #[arg(short, long)]
        verbose: bool,
    },

    /// List targets and their dependencies
    List {
        /// Path to the recipe file
        #[arg(short, long, default_value = "Recipe")]
        file: PathBuf,
    },

    /// Parse the recipe and report format and reference problems
    Validate {
        /// Path to the recipe file
        #[arg(short, long, default_value = "Recipe")]
        file: PathBuf,
    },
}

/// Dispatch a CLI command.
pub fn dispatch(cmd: Commands) -> Result<(), String> {
    match cmd {
        Commands::Run {
            target,
            file,
            verbose,
        } => cmd_run(&file, &target, verbose),
        Commands::List { file } => cmd_list(&file),
        Commands::Validate { file } => cmd_validate(&file),
    }
}

/// Parse the recipe file and report non-fatal line diagnostics.
fn load_recipe(file: &Path) -> Result<ParsedRecipe, String> {
    let parsed = parser::parse_recipe_file(file)?;
    for d in &parsed.diagnostics {
        eprintln!("{}: {}", file.display(), d);
    }
    Ok(parsed)
}

fn cmd_run(file: &Path, target: &str, verbose: bool) -> Result<(), String> {
    let parsed = load_recipe(file)?;
    let mut runner = Runner::new(parsed.graph, verbose);
    runner.run(target)
}

fn cmd_list(file: &Path) -> Result<(), String> {
    let parsed = load_recipe(file)?;

    for (name, target) in parsed.graph.iter() {
        if name == DEFAULT_TARGET {
            continue;
        }
        let depends: Vec<&str> = target
            .depends
            .iter()
            .filter(|d| d.as_str() != DEFAULT_TARGET)
            .map(String::as_str)
            .collect();
        if depends.is_empty() {
            println!("{}", name);
        } else {
            println!("{} > {}", name, depends.join(" "));
        }
    }
    Ok(())
}

fn cmd_validate(file: &Path) -> Result<(), String> {
    let parsed = load_recipe(file)?;
    let errors = parser::validate_graph(&parsed.graph);

    let findings = parsed.diagnostics.len() + errors.len();
    if findings == 0 {
        println!("OK: {} ({} targets)", file.display(), parsed.graph.len());
        return Ok(());
    }

    for e in &errors {
        eprintln!("  ERROR: {}", e);
    }
    Err(format!("{} problem(s) in {}", findings, file.display()))
}
