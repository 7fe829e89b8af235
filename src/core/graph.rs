//! Target graph — the data model populated by the parser and walked by
//! the runner.
//!
//! Two reserved targets always exist: `#default#` (actions before any
//! header land here; it runs as an implicit prerequisite of everything)
//! and `all` (the default goal, depending on `#default#`).

use indexmap::IndexMap;

/// Reserved target collecting actions that appear before any header.
pub const DEFAULT_TARGET: &str = "#default#";

/// Reserved default goal.
pub const ALL_TARGET: &str = "all";

/// One recipe line: whitespace-separated tokens, verbatim.
/// The first token selects the action kind (`set`, `do`, `get`, or an
/// external program name).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    pub tokens: Vec<String>,
}

impl Action {
    pub fn new(tokens: Vec<String>) -> Self {
        Self { tokens }
    }
}

/// A named unit of work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// Ordered dependency names. Duplicates and self-references are not
    /// rejected here; the runner deals with them.
    pub depends: Vec<String>,

    /// Ordered action list.
    pub actions: Vec<Action>,

    /// Completion flag. Set exactly once per run, never reset.
    pub made: bool,
}

impl Target {
    pub fn new(depends: Vec<String>) -> Self {
        Self {
            depends,
            actions: Vec::new(),
            made: false,
        }
    }
}

/// All targets by name, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeGraph {
    targets: IndexMap<String, Target>,
}

impl RecipeGraph {
    /// An empty graph seeded with the reserved targets.
    pub fn new() -> Self {
        let mut targets = IndexMap::new();
        targets.insert(DEFAULT_TARGET.to_string(), Target::new(Vec::new()));
        targets.insert(
            ALL_TARGET.to_string(),
            Target::new(vec![DEFAULT_TARGET.to_string()]),
        );
        Self { targets }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.targets.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Target> {
        self.targets.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Target> {
        self.targets.get_mut(name)
    }

    /// Insert a target, replacing any prior entry of the same name.
    pub fn insert(&mut self, name: String, target: Target) {
        self.targets.insert(name, target);
    }

    /// Target names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.targets.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Target)> {
        self.targets.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

impl Default for RecipeGraph {
    fn default() -> Self {
        Self::new()
    }
}
