//! Variable store and `{placeholder}` token substitution.
//!
//! Lookup of an absent key returns the key itself, so placeholders
//! degrade to literal text instead of failing when nothing has been
//! `set` or fetched yet.

use rustc_hash::FxHashMap;

/// Synthetic variable bound to the current target's name during
/// substitution. Shadows any stored variable of the same name.
pub const TARGET_VAR: &str = "target";

/// String → string mapping with a default-to-key-on-miss lookup.
#[derive(Debug, Clone, Default)]
pub struct VarStore {
    vars: FxHashMap<String, String>,
}

impl VarStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored value, or the key itself when absent. Never fails.
    pub fn get<'a>(&'a self, key: &'a str) -> &'a str {
        self.vars.get(key).map(String::as_str).unwrap_or(key)
    }

    /// Unconditional overwrite.
    pub fn set(&mut self, key: &str, value: String) {
        self.vars.insert(key.to_string(), value);
    }

    /// Expand `{name}` placeholders in one token.
    ///
    /// `{target}` resolves to `target_name`. `{{` and `}}` escape to
    /// literal braces. An unclosed `{` leaves the rest of the token
    /// unchanged.
    pub fn substitute(&self, token: &str, target_name: &str) -> String {
        let mut out = String::with_capacity(token.len());
        let mut chars = token.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '{' if chars.peek() == Some(&'{') => {
                    chars.next();
                    out.push('{');
                }
                '}' if chars.peek() == Some(&'}') => {
                    chars.next();
                    out.push('}');
                }
                '{' => {
                    let mut key = String::new();
                    let mut closed = false;
                    for c in chars.by_ref() {
                        if c == '}' {
                            closed = true;
                            break;
                        }
                        key.push(c);
                    }
                    if !closed {
                        out.push('{');
                        out.push_str(&key);
                    } else if key == TARGET_VAR {
                        out.push_str(target_name);
                    } else {
                        out.push_str(self.get(&key));
                    }
                }
                _ => out.push(c),
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_vars_missing_key_returns_key() {
        let vars = VarStore::new();
        assert_eq!(vars.get("never_set"), "never_set");
        assert_eq!(vars.get(""), "");
    }

    #[test]
    fn test_vars_set_and_overwrite() {
        let mut vars = VarStore::new();
        vars.set("FOO", "bar".to_string());
        assert_eq!(vars.get("FOO"), "bar");
        vars.set("FOO", "baz".to_string());
        assert_eq!(vars.get("FOO"), "baz");
    }

    #[test]
    fn test_substitute_basic() {
        let mut vars = VarStore::new();
        vars.set("FOO", "bar".to_string());
        assert_eq!(vars.substitute("{FOO}", "t"), "bar");
        assert_eq!(vars.substitute("pre-{FOO}-post", "t"), "pre-bar-post");
    }

    #[test]
    fn test_substitute_unset_placeholder_is_literal_key() {
        let vars = VarStore::new();
        assert_eq!(vars.substitute("{UNSET}", "t"), "UNSET");
    }

    #[test]
    fn test_substitute_target_synthetic() {
        let vars = VarStore::new();
        assert_eq!(vars.substitute("{target}", "release"), "release");
    }

    #[test]
    fn test_substitute_target_shadows_stored_var() {
        let mut vars = VarStore::new();
        vars.set("target", "stored".to_string());
        assert_eq!(vars.substitute("{target}", "release"), "release");
    }

    #[test]
    fn test_substitute_escaped_braces() {
        let vars = VarStore::new();
        assert_eq!(vars.substitute("{{literal}}", "t"), "{literal}");
    }

    #[test]
    fn test_substitute_unclosed_brace_left_literal() {
        let vars = VarStore::new();
        assert_eq!(vars.substitute("open{brace", "t"), "open{brace");
    }

    #[test]
    fn test_substitute_multiple_placeholders() {
        let mut vars = VarStore::new();
        vars.set("A", "1".to_string());
        vars.set("B", "2".to_string());
        assert_eq!(vars.substitute("{A}/{B}/{target}", "t"), "1/2/t");
    }

    #[test]
    fn test_substitute_plain_token_unchanged() {
        let vars = VarStore::new();
        assert_eq!(vars.substitute("gcc", "t"), "gcc");
        assert_eq!(vars.substitute("", "t"), "");
    }

    proptest! {
        /// Lookup of any never-set key equals the key.
        #[test]
        fn prop_missing_key_is_identity(key in "[a-zA-Z0-9_]{0,24}") {
            let vars = VarStore::new();
            prop_assert_eq!(vars.get(&key), key.as_str());
        }

        /// Tokens without braces pass through substitution untouched.
        #[test]
        fn prop_braceless_token_unchanged(token in "[a-zA-Z0-9_./ -]{0,32}") {
            let vars = VarStore::new();
            prop_assert_eq!(vars.substitute(&token, "t"), token.clone());
        }
    }
}
