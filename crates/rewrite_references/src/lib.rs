// crates/rewrite_references/src/lib.rs

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use marker_prefix::MARKER_PREFIX;
use walkdir::WalkDir;

/// File-name suffixes eligible for reference rewriting. Exact, case-sensitive
/// matches only; `.htm`, `.jsx` and upper-case variants do not qualify.
const TEXT_SUFFIXES: &[&str] = &[".js", ".html"];

/// Replaces every literal occurrence of each problem filename in `contents`
/// with its marker-prefixed form, in the order the names were scanned.
///
/// This is a plain substring replace, not a regular-expression or
/// word-boundary match: a problem filename that happens to be a substring of
/// a longer name is altered inside that longer name's occurrences too.
pub fn apply_replacements(contents: &str, problem_files: &[String]) -> String {
    let mut result = contents.to_string();
    for problem_filename in problem_files {
        let replacement = format!("{}{}", MARKER_PREFIX, problem_filename);
        result = result.replace(problem_filename.as_str(), &replacement);
    }
    result
}

/// Walks the tree rooted at `root` and patches every `.js`/`.html` file so
/// that references to the scanned problem filenames point at their
/// marker-prefixed replacements.
///
/// Each candidate file is read as UTF-8, transformed with
/// [`apply_replacements`], and written back in place. Files with no matches
/// are rewritten unchanged. The base name of every visited candidate file and
/// a `....<name>` line per problem filename are printed to stdout as
/// progress.
///
/// # Errors
///
/// Fails on the first traversal error, on a candidate file that cannot be
/// read as UTF-8, or on a failed write-back. Whatever rewrites preceded the
/// failure remain applied.
pub fn rewrite_references(root: &Path, problem_files: &[String]) -> Result<()> {
    for entry in WalkDir::new(root) {
        let entry =
            entry.with_context(|| format!("Error traversing {}", root.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        let name = match path.file_name().and_then(|s| s.to_str()) {
            Some(name) => name,
            None => continue,
        };
        if !is_candidate_text_file(name) {
            continue;
        }

        println!("{}", name);
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Error reading {}", path.display()))?;
        for problem_filename in problem_files {
            println!("....{}", problem_filename);
        }
        let rewritten = apply_replacements(&contents, problem_files);
        if rewritten != contents {
            log::debug!("{}: references patched", path.display());
        }
        fs::write(path, rewritten)
            .with_context(|| format!("Error writing {}", path.display()))?;
    }
    Ok(())
}

fn is_candidate_text_file(name: &str) -> bool {
    TEXT_SUFFIXES.iter().any(|suffix| name.ends_with(suffix))
}
