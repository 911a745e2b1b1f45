//! Ignores taken from the project's `.gitignore`.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::fragment::Fragment;

/// One ignore-only fragment built from `<cwd>/.gitignore`, or nothing when
/// the file is absent or has no patterns.
pub fn gitignore(cwd: &Path) -> Result<Vec<Fragment>> {
    let path = cwd.join(".gitignore");
    if !path.is_file() {
        debug!(path = %path.display(), "No .gitignore to convert");
        return Ok(Vec::new());
    }

    let globs = gitignore_to_globs(&fs::read_to_string(&path)?);
    if globs.is_empty() {
        return Ok(Vec::new());
    }
    Ok(vec![Fragment::new("lintweave/gitignore").with_ignores(globs)])
}

/// Convert `.gitignore` content into ignore globs.
pub fn gitignore_to_globs(content: &str) -> Vec<String> {
    content.lines().filter_map(convert_line).collect()
}

fn convert_line(line: &str) -> Option<String> {
    let line = line.trim_end();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let (negated, pattern) = match line.strip_prefix('!') {
        Some(rest) => (true, rest),
        None => (false, line.strip_prefix('\\').unwrap_or(line)),
    };

    let (pattern, directory_only) = match pattern.strip_suffix('/') {
        Some(rest) => (rest, true),
        None => (pattern, false),
    };
    if pattern.is_empty() {
        return None;
    }

    // A separator at the start or in the middle anchors the pattern to the root.
    let mut glob = if let Some(rooted) = pattern.strip_prefix('/') {
        rooted.to_string()
    } else if pattern.contains('/') || pattern.starts_with("**") {
        pattern.to_string()
    } else {
        format!("**/{}", pattern)
    };
    if directory_only {
        glob.push_str("/**");
    }

    Some(if negated { format!("!{}", glob) } else { glob })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn converts_common_patterns() {
        let globs = gitignore_to_globs(
            "# build output\n\
             dist/\n\
             /coverage\n\
             *.log\n\
             \n\
             docs/generated\n\
             !keep.log\n",
        );

        assert_eq!(
            globs,
            vec![
                "**/dist/**",
                "coverage",
                "**/*.log",
                "docs/generated",
                "!**/keep.log",
            ]
        );
    }

    #[test]
    fn escaped_hash_is_literal() {
        assert_eq!(gitignore_to_globs(r"\#notes"), vec!["**/#notes"]);
    }

    #[test]
    fn missing_file_produces_nothing() {
        let temp = TempDir::new().unwrap();
        assert!(gitignore(temp.path()).unwrap().is_empty());
    }

    #[test]
    fn file_becomes_ignore_only_fragment() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".gitignore"), "node_modules\n.env\n").unwrap();

        let fragments = gitignore(temp.path()).unwrap();

        assert_eq!(fragments.len(), 1);
        assert_eq!(fragments[0].name, "lintweave/gitignore");
        assert_eq!(fragments[0].ignores, vec!["**/node_modules", "**/.env"]);
        assert!(fragments[0].is_ignore_only());
    }

    #[test]
    fn comment_only_file_produces_nothing() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".gitignore"), "# nothing\n\n").unwrap();

        assert!(gitignore(temp.path()).unwrap().is_empty());
    }
}
