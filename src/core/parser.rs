//! Recipe parsing — line-oriented grammar to target graph.
//!
//! ```text
//! # comment
//! > TARGET > dep1 dep2
//! \taction token token
//! ```
//!
//! Lines before any header are actions on `#default#`. A header without
//! a dependency segment depends on `#default#`. Action tokens are split
//! on single spaces; there is no quoting or escaping.

use super::graph::{Action, RecipeGraph, Target, DEFAULT_TARGET};
use std::path::Path;

/// Non-fatal parse finding: the line is skipped, parsing continues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDiagnostic {
    pub line: usize,
    pub message: String,
}

impl std::fmt::Display for ParseDiagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

/// Result of a parse: the graph is always populated; diagnostics carry
/// the malformed lines that were skipped.
#[derive(Debug, Clone)]
pub struct ParsedRecipe {
    pub graph: RecipeGraph,
    pub diagnostics: Vec<ParseDiagnostic>,
}

/// Parse a recipe file from disk. Fatal if the file cannot be read.
pub fn parse_recipe_file(path: &Path) -> Result<ParsedRecipe, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read recipe {}: {}", path.display(), e))?;
    Ok(parse_recipe(&content))
}

/// Parse recipe text. Single pass, never fails; malformed lines become
/// diagnostics.
pub fn parse_recipe(text: &str) -> ParsedRecipe {
    let mut graph = RecipeGraph::new();
    let mut diagnostics = Vec::new();
    let mut current = DEFAULT_TARGET.to_string();

    for (idx, line) in text.lines().enumerate() {
        let line_nr = idx + 1;
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        if let Some(header) = trimmed.strip_prefix('>') {
            // `> name > dep dep` — segments past the second are ignored.
            let segments: Vec<&str> = header.split('>').collect();
            current = segments[0].trim().to_string();

            let depends = match segments.get(1) {
                Some(deps) => deps.trim().split(' ').map(str::to_string).collect(),
                None => vec![DEFAULT_TARGET.to_string()],
            };
            graph.insert(current.clone(), Target::new(depends));
            continue;
        }

        if line.starts_with('\t') || line.starts_with(' ') || current == DEFAULT_TARGET {
            let tokens = trimmed.split(' ').map(str::to_string).collect();
            // The current target always exists: it is either seeded or
            // was inserted by its own header line.
            if let Some(target) = graph.get_mut(&current) {
                target.actions.push(Action::new(tokens));
            }
            continue;
        }

        diagnostics.push(ParseDiagnostic {
            line: line_nr,
            message: "wrong format: action lines must start with a tab or space".to_string(),
        });
    }

    ParsedRecipe { graph, diagnostics }
}

/// Reference error found by [`validate_graph`].
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Check that every dependency names a declared target. Returns a list
/// of errors (empty = valid). Advisory: the runner performs its own
/// fatal check when it actually reaches an undefined dependency.
pub fn validate_graph(graph: &RecipeGraph) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (name, target) in graph.iter() {
        for dep in &target.depends {
            if !graph.contains(dep) {
                errors.push(ValidationError {
                    message: format!("target '{}' depends on undefined target '{}'", name, dep),
                });
            }
            if dep == name {
                errors.push(ValidationError {
                    message: format!("target '{}' depends on itself", name),
                });
            }
        }
    }

    errors
}
