//! Git query built-ins — `get` commands that fetch repository state
//! into the variable store.

use crate::process;

/// Run a git subcommand, returning trimmed stdout on exit 0.
fn git_query(args: &[&str]) -> Option<String> {
    let argv: Vec<String> = args.iter().map(|a| a.to_string()).collect();
    match process::run_command("git", &argv) {
        Ok(out) if out.success() => Some(out.stdout.replace('\r', "").trim().to_string()),
        _ => None,
    }
}

/// `get git_tag` — `git describe --tags`.
pub fn git_tag(_args: &[String]) -> Option<String> {
    git_query(&["describe", "--tags"])
}

/// `get git_branch` — current branch name, with `master` mapped to the
/// empty string so recipes can suffix artifact names with the branch
/// only when off the main line.
pub fn git_branch(_args: &[String]) -> Option<String> {
    git_query(&["rev-parse", "--abbrev-ref", "HEAD"]).map(normalize_branch)
}

fn normalize_branch(branch: String) -> String {
    if branch == "master" {
        String::new()
    } else {
        branch
    }
}

/// `get git_modified` — `"Modified"` when the work tree has unstaged
/// changes, otherwise the empty string.
pub fn git_modified(_args: &[String]) -> Option<String> {
    let diff = git_query(&["diff", "--name-only"])?;
    if diff.is_empty() {
        Some(String::new())
    } else {
        Some("Modified".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The git_* fetchers shell out to git against whatever repository
    // surrounds the test run, so assertions stick to the failure
    // contract rather than repository contents.

    #[test]
    fn test_git_query_bad_subcommand_is_none() {
        assert_eq!(git_query(&["definitely-not-a-subcommand"]), None);
    }

    #[test]
    fn test_normalize_branch_maps_master_to_empty() {
        assert_eq!(normalize_branch("master".to_string()), "");
        assert_eq!(normalize_branch("feature/x".to_string()), "feature/x");
        assert_eq!(normalize_branch("main".to_string()), "main");
    }
}
