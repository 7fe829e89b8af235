//! Built-in command dispatch — the fixed `(verb, command)` table
//! recipes reach through `do`/`get` action lines.
//!
//! `do` commands perform an effect and report success or failure.
//! `get` commands fetch a string for the variable store; `None` means
//! the fetch failed. Both tables are populated once at construction;
//! an unknown pair is the caller's fatal error.

pub mod fs;
pub mod git;

use rustc_hash::FxHashMap;

/// The two built-in invocation verbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Do,
    Get,
}

impl Verb {
    /// Parse a first token into a verb, if it is one.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "do" => Some(Self::Do),
            "get" => Some(Self::Get),
            _ => None,
        }
    }
}

impl std::fmt::Display for Verb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Do => write!(f, "do"),
            Self::Get => write!(f, "get"),
        }
    }
}

/// An effectful command: true = success.
pub type DoFn = fn(&[String]) -> bool;

/// A fetching command: `Some(value)` = success (the empty string is a
/// valid fetched value), `None` = failure.
pub type GetFn = fn(&[String]) -> Option<String>;

/// A command resolved from the dispatch table.
pub enum Builtin {
    Do(DoFn),
    Get(GetFn),
}

/// The dispatch table.
pub struct Dispatcher {
    do_cmds: FxHashMap<&'static str, DoFn>,
    get_cmds: FxHashMap<&'static str, GetFn>,
}

impl Dispatcher {
    pub fn new() -> Self {
        let mut do_cmds: FxHashMap<&'static str, DoFn> = FxHashMap::default();
        do_cmds.insert("print", fs::print);
        do_cmds.insert("write", fs::write);
        do_cmds.insert("append", fs::append);
        do_cmds.insert("rm", fs::rm);
        do_cmds.insert("cd", fs::cd);
        do_cmds.insert("mkdir", fs::mkdir);
        do_cmds.insert("rmdir", fs::rmdir);

        let mut get_cmds: FxHashMap<&'static str, GetFn> = FxHashMap::default();
        get_cmds.insert("git_tag", git::git_tag);
        get_cmds.insert("git_branch", git::git_branch);
        get_cmds.insert("git_modified", git::git_modified);

        Self { do_cmds, get_cmds }
    }

    /// Look up a `(verb, command)` pair. `None` means the built-in does
    /// not exist — a fatal configuration error at execution time.
    pub fn lookup(&self, verb: Verb, command: &str) -> Option<Builtin> {
        match verb {
            Verb::Do => self.do_cmds.get(command).map(|f| Builtin::Do(*f)),
            Verb::Get => self.get_cmds.get(command).map(|f| Builtin::Get(*f)),
        }
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}
