//! Glob Expansion
//!
//! Filesystem matching for argument glob sites and redirection targets, and
//! the cartesian product that turns several glob sites into one argument
//! list per combination.

use glob::{glob_with, MatchOptions};

use crate::interpreter::word_expansion::ExpandedWord;

/// Wildcards never match a leading `.`; hidden files need it spelled out.
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: false,
    require_literal_leading_dot: true,
};

/// Match `pattern` against the filesystem. Paths come back in the order the
/// `glob` crate yields them, which is sorted. Entries that cannot be read
/// are skipped, and a malformed pattern matches nothing.
pub fn expand_glob(pattern: &str) -> Vec<String> {
    let paths = match glob_with(pattern, MATCH_OPTIONS) {
        Ok(paths) => paths,
        Err(e) => {
            tracing::trace!(target: "glob", "{} is not a valid pattern: {}", pattern, e);
            return Vec::new();
        }
    };

    let matches: Vec<String> = paths
        .filter_map(Result::ok)
        .map(|path| path.display().to_string())
        .collect();

    tracing::trace!(target: "glob", "{} matched {} path(s)", pattern, matches.len());
    matches
}

/// Every combination taking one value from each set, in odometer order:
/// the last set varies fastest.
pub fn cartesian_product(sets: &[Vec<String>]) -> Vec<Vec<String>> {
    let mut product: Vec<Vec<String>> = vec![Vec::new()];
    for set in sets {
        product = product
            .into_iter()
            .flat_map(|prefix| {
                set.iter().map(move |value| {
                    let mut combination = prefix.clone();
                    combination.push(value.clone());
                    combination
                })
            })
            .collect();
    }
    product
}

/// Turn resolved words into the argument lists to invoke the application
/// with. Without glob sites this is the single list of word texts.
/// A site matching nothing contributes its literal text.
pub fn expand_arguments(words: &[ExpandedWord]) -> Vec<Vec<String>> {
    let mut sites = Vec::new();
    for word in words {
        if let Some(pattern) = &word.pattern {
            let mut matches = expand_glob(pattern);
            if matches.is_empty() {
                matches.push(word.text.clone());
            }
            sites.push(matches);
        }
    }

    cartesian_product(&sites)
        .into_iter()
        .map(|combination| {
            let mut matched = combination.into_iter();
            words
                .iter()
                .map(|word| match &word.pattern {
                    Some(_) => matched.next().unwrap_or_else(|| word.text.clone()),
                    None => word.text.clone(),
                })
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn plain(text: &str) -> ExpandedWord {
        ExpandedWord {
            text: text.to_string(),
            pattern: None,
        }
    }

    fn site(pattern: &str) -> ExpandedWord {
        ExpandedWord {
            text: pattern.to_string(),
            pattern: Some(pattern.to_string()),
        }
    }

    #[test]
    fn test_cartesian_product_order() {
        let sets = vec![strings(&["a", "b"]), strings(&["1", "2"])];
        assert_eq!(
            cartesian_product(&sets),
            vec![
                strings(&["a", "1"]),
                strings(&["a", "2"]),
                strings(&["b", "1"]),
                strings(&["b", "2"]),
            ]
        );
    }

    #[test]
    fn test_cartesian_product_edges() {
        assert_eq!(cartesian_product(&[]), vec![Vec::<String>::new()]);
        assert!(cartesian_product(&[strings(&["a"]), vec![]]).is_empty());
    }

    #[test]
    fn test_expand_glob_sorted() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.txt"), "").unwrap();
        fs::write(dir.path().join("a.txt"), "").unwrap();
        fs::write(dir.path().join("c.py"), "").unwrap();
        let root = dir.path().display();

        let matches = expand_glob(&format!("{}/*.txt", root));
        assert_eq!(
            matches,
            vec![format!("{}/a.txt", root), format!("{}/b.txt", root)]
        );
        assert!(expand_glob(&format!("{}/*.rs", root)).is_empty());
    }

    #[test]
    fn test_malformed_pattern_matches_nothing() {
        assert!(expand_glob("a[*").is_empty());
        let invocations = expand_arguments(&[site("a[*")]);
        assert_eq!(invocations, vec![strings(&["a[*"])]);
    }

    #[test]
    fn test_wildcards_skip_hidden_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(".hidden"), "").unwrap();
        fs::write(dir.path().join("a.txt"), "").unwrap();
        let root = dir.path().display();

        assert_eq!(expand_glob(&format!("{}/*", root)), vec![format!("{}/a.txt", root)]);
        assert_eq!(
            expand_glob(&format!("{}/.h*", root)),
            vec![format!("{}/.hidden", root)]
        );
    }

    #[test]
    fn test_expand_arguments_without_sites() {
        let words = vec![plain("x"), plain("y")];
        assert_eq!(expand_arguments(&words), vec![strings(&["x", "y"])]);
        assert_eq!(expand_arguments(&[]), vec![Vec::<String>::new()]);
    }

    #[test]
    fn test_expand_arguments_product_keeps_positions() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["a.txt", "b.txt", "c.py", "d.py"] {
            fs::write(dir.path().join(name), "").unwrap();
        }
        let root = dir.path().display().to_string();
        let words = vec![
            site(&format!("{}/*.txt", root)),
            plain("-"),
            site(&format!("{}/*.py", root)),
        ];

        let invocations = expand_arguments(&words);
        let path = |name: &str| format!("{}/{}", root, name);
        assert_eq!(
            invocations,
            vec![
                vec![path("a.txt"), "-".to_string(), path("c.py")],
                vec![path("a.txt"), "-".to_string(), path("d.py")],
                vec![path("b.txt"), "-".to_string(), path("c.py")],
                vec![path("b.txt"), "-".to_string(), path("d.py")],
            ]
        );
    }

    #[test]
    fn test_unmatched_site_keeps_literal() {
        let dir = tempfile::tempdir().unwrap();
        let pattern = format!("{}/*.none", dir.path().display());
        let invocations = expand_arguments(&[site(&pattern)]);
        assert_eq!(invocations, vec![vec![pattern]]);
    }
}
