// crates/scan_problem_files/src/lib.rs

use std::fs;
use std::io;
use std::path::Path;

/// Lists the immediate children of `dir` that are regular files whose name
/// begins with an underscore.
///
/// Subdirectories are never entered (even underscore-prefixed ones are
/// skipped), and entries that are not regular files are ignored. Names that
/// are not valid UTF-8 are skipped as well, since they can never occur
/// inside UTF-8 text content. The returned names follow the directory
/// listing order, which is not guaranteed stable across platforms.
///
/// # Arguments
///
/// * `dir` - The directory whose direct children are examined.
///
/// # Errors
///
/// Returns the underlying `io::Error` if `dir` cannot be read or an entry's
/// file type cannot be determined.
pub fn scan_problem_files(dir: &Path) -> io::Result<Vec<String>> {
    let mut problem_files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let file_name = entry.file_name();
        if let Some(name) = file_name.to_str() {
            if name.starts_with('_') {
                problem_files.push(name.to_string());
            }
        }
    }
    Ok(problem_files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_returns_only_underscore_prefixed_files() {
        let dir = tempdir().expect("Failed to create temp dir");
        fs::write(dir.path().join("_a.html"), "a").unwrap();
        fs::write(dir.path().join("_b.js"), "b").unwrap();
        fs::write(dir.path().join("index.html"), "index").unwrap();
        fs::write(dir.path().join("main.js"), "main").unwrap();

        let mut result = scan_problem_files(dir.path()).unwrap();
        result.sort();
        assert_eq!(result, vec!["_a.html".to_string(), "_b.js".to_string()]);
    }

    #[test]
    fn test_ignores_underscore_prefixed_directories() {
        let dir = tempdir().expect("Failed to create temp dir");
        fs::create_dir(dir.path().join("_search")).unwrap();
        fs::write(dir.path().join("_page.html"), "page").unwrap();

        let result = scan_problem_files(dir.path()).unwrap();
        assert_eq!(result, vec!["_page.html".to_string()]);
    }

    #[test]
    fn test_does_not_recurse_into_subdirectories() {
        let dir = tempdir().expect("Failed to create temp dir");
        let sub = dir.path().join("search");
        fs::create_dir(&sub).unwrap();
        // An underscore-prefixed file below the top level must not be reported.
        fs::write(sub.join("_nested.js"), "nested").unwrap();
        fs::write(dir.path().join("_top.js"), "top").unwrap();

        let result = scan_problem_files(dir.path()).unwrap();
        assert_eq!(result, vec!["_top.js".to_string()]);
    }

    #[test]
    fn test_empty_when_nothing_matches() {
        let dir = tempdir().expect("Failed to create temp dir");
        fs::write(dir.path().join("index.html"), "index").unwrap();

        let result = scan_problem_files(dir.path()).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_empty_directory() {
        let dir = tempdir().expect("Failed to create temp dir");
        let result = scan_problem_files(dir.path()).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let dir = tempdir().expect("Failed to create temp dir");
        let missing = dir.path().join("does_not_exist");
        let result = scan_problem_files(&missing);
        assert!(result.is_err());
    }

    #[test]
    fn test_underscore_only_name_matches() {
        let dir = tempdir().expect("Failed to create temp dir");
        fs::write(dir.path().join("_"), "").unwrap();

        let result = scan_problem_files(dir.path()).unwrap();
        assert_eq!(result, vec!["_".to_string()]);
    }
}
