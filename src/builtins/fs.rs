//! Filesystem and console built-ins.
//!
//! `rm` and `rmdir` treat an already-absent path as success, so recipes
//! with cleanup targets stay idempotent. `cd` mutates the process-wide
//! working directory; it persists across targets and is never restored.

use std::fs::OpenOptions;
use std::io::Write as _;

/// `do print ...` — join and print the arguments. Never fails.
pub fn print(args: &[String]) -> bool {
    println!("{}", args.join(" "));
    true
}

/// `do write FILE TEXT...` — overwrite FILE with the joined text plus a
/// trailing newline.
pub fn write(args: &[String]) -> bool {
    let Some((file, text)) = args.split_first() else {
        return false;
    };
    if text.is_empty() {
        return false;
    }
    std::fs::write(file, format!("{}\n", text.join(" "))).is_ok()
}

/// `do append FILE TEXT...` — append the joined text plus a trailing
/// newline.
pub fn append(args: &[String]) -> bool {
    let Some((file, text)) = args.split_first() else {
        return false;
    };
    if text.is_empty() {
        return false;
    }
    let Ok(mut f) = OpenOptions::new().create(true).append(true).open(file) else {
        return false;
    };
    writeln!(f, "{}", text.join(" ")).is_ok()
}

/// `do rm PATTERN` — remove every file matching a glob pattern.
/// A pattern matching nothing, or a file vanishing before removal, is
/// success.
pub fn rm(args: &[String]) -> bool {
    let Some(pattern) = args.first() else {
        return false;
    };
    let Ok(paths) = glob::glob(pattern) else {
        return false;
    };
    for entry in paths {
        match entry {
            Ok(path) => match std::fs::remove_file(&path) {
                Ok(()) => {}
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(_) => return false,
            },
            Err(_) => return false,
        }
    }
    true
}

/// `do cd PATH` — change the process working directory.
pub fn cd(args: &[String]) -> bool {
    let Some(path) = args.first() else {
        return false;
    };
    std::env::set_current_dir(path).is_ok()
}

/// `do mkdir PATH` — create a directory and any missing parents. An
/// existing directory is success.
pub fn mkdir(args: &[String]) -> bool {
    let Some(path) = args.first() else {
        return false;
    };
    std::fs::create_dir_all(path).is_ok()
}

/// `do rmdir PATH` — remove an empty directory. Already absent is
/// success.
pub fn rmdir(args: &[String]) -> bool {
    let Some(path) = args.first() else {
        return false;
    };
    match std::fs::remove_dir(path) {
        Ok(()) => true,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => true,
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(args: &[&str]) -> Vec<String> {
        args.iter().map(|a| a.to_string()).collect()
    }

    #[test]
    fn test_print_never_fails() {
        assert!(print(&s(&["hello", "world"])));
        assert!(print(&[]));
    }

    #[test]
    fn test_write_creates_file_with_newline() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let args = s(&[path.to_str().unwrap(), "hi", "there"]);
        assert!(write(&args));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "hi there\n");
    }

    #[test]
    fn test_write_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let p = path.to_str().unwrap();
        assert!(write(&s(&[p, "first"])));
        assert!(write(&s(&[p, "second"])));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "second\n");
    }

    #[test]
    fn test_write_too_few_args() {
        assert!(!write(&[]));
        assert!(!write(&s(&["only-a-file"])));
    }

    #[test]
    fn test_append_accumulates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.txt");
        let p = path.to_str().unwrap();
        assert!(append(&s(&[p, "one"])));
        assert!(append(&s(&[p, "two"])));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "one\ntwo\n");
    }

    #[test]
    fn test_append_too_few_args() {
        assert!(!append(&s(&["only-a-file"])));
    }

    #[test]
    fn test_rm_glob_pattern() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.tmp"), "x").unwrap();
        std::fs::write(dir.path().join("b.tmp"), "x").unwrap();
        std::fs::write(dir.path().join("keep.txt"), "x").unwrap();

        let pattern = dir.path().join("*.tmp");
        assert!(rm(&s(&[pattern.to_str().unwrap()])));
        assert!(!dir.path().join("a.tmp").exists());
        assert!(!dir.path().join("b.tmp").exists());
        assert!(dir.path().join("keep.txt").exists());
    }

    #[test]
    fn test_rm_nonexistent_is_success() {
        let dir = tempfile::tempdir().unwrap();
        let pattern = dir.path().join("nothing-here-*.tmp");
        assert!(rm(&s(&[pattern.to_str().unwrap()])));
    }

    #[test]
    fn test_rm_no_args() {
        assert!(!rm(&[]));
    }

    #[test]
    fn test_mkdir_with_parents() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a/b/c");
        assert!(mkdir(&s(&[nested.to_str().unwrap()])));
        assert!(nested.is_dir());
    }

    #[test]
    fn test_mkdir_existing_is_success() {
        let dir = tempfile::tempdir().unwrap();
        assert!(mkdir(&s(&[dir.path().to_str().unwrap()])));
    }

    #[test]
    fn test_rmdir_removes_empty_dir() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("sub");
        std::fs::create_dir(&sub).unwrap();
        assert!(rmdir(&s(&[sub.to_str().unwrap()])));
        assert!(!sub.exists());
    }

    #[test]
    fn test_rmdir_nonexistent_is_success() {
        let dir = tempfile::tempdir().unwrap();
        let ghost = dir.path().join("ghost");
        assert!(rmdir(&s(&[ghost.to_str().unwrap()])));
    }

    #[test]
    fn test_rmdir_nonempty_fails() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("sub");
        std::fs::create_dir(&sub).unwrap();
        std::fs::write(sub.join("file"), "x").unwrap();
        assert!(!rmdir(&s(&[sub.to_str().unwrap()])));
    }

    #[test]
    fn test_cd_changes_working_directory() {
        // Mutates process-wide state; restore before returning so other
        // tests keep a valid cwd.
        let original = std::env::current_dir().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let canonical = dir.path().canonicalize().unwrap();

        assert!(cd(&s(&[canonical.to_str().unwrap()])));
        assert_eq!(std::env::current_dir().unwrap(), canonical);

        assert!(cd(&s(&[original.to_str().unwrap()])));
    }

    #[test]
    fn test_cd_missing_path_fails() {
        assert!(!cd(&s(&["/nonexistent/path/for/boiler"])));
        assert!(!cd(&[]));
    }
}
