//! Runner — depth-first dependency resolution and action execution.
//!
//! A goal target is built after all of its dependencies, each exactly
//! once per run (memoized through the `made` flag). Everything is
//! synchronous and single-threaded; `do cd` mutates the process working
//! directory in place and subsequent relative paths observe it.

use super::graph::{Action, RecipeGraph, DEFAULT_TARGET};
use super::vars::VarStore;
use crate::builtins::{Builtin, Dispatcher, Verb};
use crate::process;

/// Executes targets against a parsed graph.
pub struct Runner {
    graph: RecipeGraph,
    vars: VarStore,
    dispatcher: Dispatcher,
    verbose: bool,
}

impl Runner {
    pub fn new(graph: RecipeGraph, verbose: bool) -> Self {
        Self {
            graph,
            vars: VarStore::new(),
            dispatcher: Dispatcher::new(),
            verbose,
        }
    }

    /// Build `goal` and its transitive dependencies.
    ///
    /// A goal absent from the graph is reported and ignored (nothing is
    /// built, the run still succeeds). Failures below this level —
    /// failing actions, undefined dependencies, cycles — are fatal and
    /// propagate as `Err`.
    pub fn run(&mut self, goal: &str) -> Result<(), String> {
        if !self.graph.contains(goal) {
            eprintln!("Error: Target '{}' not available!", goal);
            return Ok(());
        }
        let mut stack = Vec::new();
        self.build(goal, &mut stack)
    }

    /// Access to the graph after a run, mainly for inspecting `made`.
    pub fn graph(&self) -> &RecipeGraph {
        &self.graph
    }

    fn build(&mut self, name: &str, stack: &mut Vec<String>) -> Result<(), String> {
        // Memoized: a target is built at most once per run.
        if self.graph.get(name).is_some_and(|t| t.made) {
            return Ok(());
        }

        if stack.iter().any(|s| s == name) {
            return Err(format!(
                "dependency cycle detected: {} -> {}",
                stack.join(" -> "),
                name
            ));
        }
        stack.push(name.to_string());

        let depends = match self.graph.get(name) {
            Some(target) => target.depends.clone(),
            None => {
                let needed_by = stack.iter().rev().nth(1).map(String::as_str).unwrap_or("?");
                return Err(format!(
                    "target '{}' (needed by '{}') is not defined",
                    name, needed_by
                ));
            }
        };

        for dep in &depends {
            if !self.graph.get(dep).is_some_and(|t| t.made) {
                self.build(dep, stack)?;
            }
        }

        if name != DEFAULT_TARGET {
            println!("Building target {}...", name);
        }

        let actions = self
            .graph
            .get(name)
            .map(|t| t.actions.clone())
            .unwrap_or_default();
        for action in &actions {
            self.run_action(action, name)?;
        }

        if name != DEFAULT_TARGET {
            println!("\t...done!");
        }

        if let Some(target) = self.graph.get_mut(name) {
            target.made = true;
        }
        stack.pop();
        Ok(())
    }

    /// Execute one action: substitute every token, then dispatch on the
    /// resolved first token.
    fn run_action(&mut self, action: &Action, target_name: &str) -> Result<(), String> {
        let tokens: Vec<String> = action
            .tokens
            .iter()
            .map(|t| self.vars.substitute(t, target_name))
            .collect();

        if self.verbose {
            eprintln!("\tRunning {:?}...", tokens);
        }

        let Some(first) = tokens.first() else {
            return Ok(());
        };

        if first == "set" {
            self.run_set(&tokens);
            return Ok(());
        }

        if let Some(verb) = Verb::from_token(first) {
            return self.run_builtin(verb, &tokens);
        }

        self.run_external(&tokens)
    }

    /// `set NAME VALUE...` — too few arguments is a warning, not a
    /// failure.
    fn run_set(&mut self, tokens: &[String]) {
        if tokens.len() < 3 {
            eprintln!("\tError running {:?}: Too few arguments!", tokens);
            return;
        }
        self.vars.set(&tokens[1], tokens[2..].join(" "));
    }

    fn run_builtin(&mut self, verb: Verb, tokens: &[String]) -> Result<(), String> {
        let Some(command) = tokens.get(1) else {
            eprintln!("\tError running {:?}: Missing command name!", tokens);
            return Ok(());
        };
        let args = &tokens[2..];

        match self.dispatcher.lookup(verb, command) {
            Some(Builtin::Do(f)) => {
                if f(args) {
                    Ok(())
                } else {
                    Err(format!(
                        "error running {:?}: internal command failed",
                        tokens
                    ))
                }
            }
            Some(Builtin::Get(f)) => match f(args) {
                Some(value) => {
                    self.vars.set(command, value);
                    Ok(())
                }
                None => Err(format!(
                    "error running {:?}: internal command failed",
                    tokens
                )),
            },
            None => Err(format!(
                "error running {:?}: internal command '{} {}' not available",
                tokens, verb, command
            )),
        }
    }

    /// Spawn the token sequence as an external program. Non-zero exit
    /// surfaces the captured stderr; spawn failure surfaces the OS
    /// error. Both are fatal.
    fn run_external(&self, tokens: &[String]) -> Result<(), String> {
        let out = process::run_command(&tokens[0], &tokens[1..])
            .map_err(|e| format!("error running {:?}: {}", tokens, e))?;

        if out.success() {
            Ok(())
        } else {
            Err(format!(
                "error running {:?}: {}",
                tokens,
                out.stderr.trim_end()
            ))
        }
    }
}
