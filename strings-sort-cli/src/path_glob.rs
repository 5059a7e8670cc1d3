use std::collections::HashSet;
use std::path::{Path, PathBuf};

use globset::{Glob, GlobBuilder, GlobMatcher};
use ignore::WalkBuilder;
use rayon::prelude::*;

use crate::error::CliError;

/// Expand glob patterns in a list of inputs into concrete file paths.
///
/// Inputs keep their relative order: a literal path stays where it was given, and a
/// pattern is replaced by its matches sorted by path. Walking is `.gitignore`-aware and
/// patterns are walked in parallel. A pattern that matches nothing is kept as-is so the
/// missing file is reported when it is opened.
pub fn expand_input_globs(inputs: &[String]) -> Result<Vec<String>, CliError> {
    let expanded: Vec<Vec<String>> = inputs
        .par_iter()
        .map(|input| {
            if has_glob_meta(input) {
                expand_pattern(input)
            } else {
                Ok(vec![input.clone()])
            }
        })
        .collect::<Result<_, _>>()?;

    // Deduplicate while preserving order
    let mut seen: HashSet<String> = HashSet::new();
    let mut results: Vec<String> = Vec::new();
    for path in expanded.into_iter().flatten() {
        if seen.insert(path.clone()) {
            results.push(path);
        }
    }
    Ok(results)
}

fn has_glob_meta(s: &str) -> bool {
    s.bytes().any(|b| matches!(b, b'*' | b'?' | b'[' | b'{'))
}

// Directory part of the pattern before the first glob meta-character. The prefix is cut
// at the last `/`, since a partial component like `values` in `values*` is not a root.
fn static_prefix_dir(pattern: &str) -> PathBuf {
    let idx = pattern
        .bytes()
        .position(|b| matches!(b, b'*' | b'?' | b'[' | b'{'))
        .unwrap_or(pattern.len());
    match pattern[..idx].rfind('/') {
        Some(0) => PathBuf::from("/"),
        Some(slash) => PathBuf::from(&pattern[..slash]),
        None => PathBuf::from("."),
    }
}

fn build_matcher(pattern: &str) -> Result<GlobMatcher, CliError> {
    // literal_separator keeps `*` from crossing `/`
    let glob: Glob = GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()
        .map_err(|e| CliError::Glob(format!("Invalid glob pattern '{}': {}", pattern, e)))?;
    Ok(glob.compile_matcher())
}

fn expand_pattern(pattern: &str) -> Result<Vec<String>, CliError> {
    let matcher = build_matcher(pattern)?;
    let root = static_prefix_dir(pattern);
    let relative_root = root == Path::new(".") && !pattern.starts_with("./");

    let walker = WalkBuilder::new(&root)
        .git_ignore(true)
        .git_global(true)
        .git_exclude(true)
        .hidden(false)
        .ignore(true)
        .parents(true)
        .build();

    let mut out: Vec<String> = Vec::new();
    for dent in walker {
        let dent = match dent {
            Ok(d) => d,
            Err(e) => {
                tracing::debug!(error = %e, "skipping unreadable entry");
                continue;
            }
        };
        if !dent.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }
        let path = if relative_root {
            dent.path().strip_prefix(".").unwrap_or(dent.path())
        } else {
            dent.path()
        };
        if matcher.is_match(path) {
            out.push(path.to_string_lossy().into_owned());
        }
    }

    if out.is_empty() {
        tracing::warn!(pattern, "pattern matched no files");
        return Ok(vec![pattern.to_string()]);
    }
    out.sort();
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(root: &Path, relative: &str) -> String {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "<resources></resources>").unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_literal_paths_pass_through() {
        let inputs = vec!["missing/strings.xml".to_string(), "other.xml".to_string()];
        assert_eq!(expand_input_globs(&inputs).unwrap(), inputs);
    }

    #[test]
    fn test_pattern_expands_sorted_in_place() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let fr = touch(root, "res/values-fr/strings.xml");
        let de = touch(root, "res/values-de/strings.xml");
        let base = touch(root, "res/values/strings.xml");
        touch(root, "res/values/colors.xml");

        let pattern = root.join("res/values-*/strings.xml").to_string_lossy().into_owned();
        let inputs = vec![base.clone(), pattern];
        let expanded = expand_input_globs(&inputs).unwrap();

        assert_eq!(expanded, vec![base, de, fr]);
    }

    #[test]
    fn test_duplicates_removed() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let base = touch(root, "res/values/strings.xml");

        let pattern = root.join("res/*/strings.xml").to_string_lossy().into_owned();
        let expanded = expand_input_globs(&[base.clone(), pattern]).unwrap();
        assert_eq!(expanded, vec![base]);
    }

    #[test]
    fn test_unmatched_pattern_kept() {
        let temp_dir = TempDir::new().unwrap();
        let pattern = temp_dir
            .path()
            .join("nothing-*/strings.xml")
            .to_string_lossy()
            .into_owned();
        let expanded = expand_input_globs(&[pattern.clone()]).unwrap();
        assert_eq!(expanded, vec![pattern]);
    }

    #[test]
    fn test_invalid_pattern_is_error() {
        let err = expand_input_globs(&["res/[values/strings.xml".to_string()]).unwrap_err();
        assert!(err.to_string().contains("Invalid glob pattern"));
    }

    #[test]
    fn test_static_prefix_dir() {
        assert_eq!(static_prefix_dir("*.xml"), PathBuf::from("."));
        assert_eq!(
            static_prefix_dir("no/such/dir/values-*/strings.xml"),
            PathBuf::from("no/such/dir")
        );
        assert_eq!(
            static_prefix_dir("res/values*/strings.xml"),
            PathBuf::from("res")
        );
        assert_eq!(static_prefix_dir("/*.xml"), PathBuf::from("/"));
    }

    #[test]
    fn test_pattern_matches_siblings_of_prefix_dir() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let base = touch(root, "res/values/strings.xml");
        let de = touch(root, "res/values-de/strings.xml");

        let pattern = root.join("res/values*/strings.xml").to_string_lossy().into_owned();
        let expanded = expand_input_globs(&[pattern]).unwrap();

        assert_eq!(expanded, vec![de, base]);
    }
}
