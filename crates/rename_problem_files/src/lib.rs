// crates/rename_problem_files/src/lib.rs

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use marker_prefix::MARKER_PREFIX;

/// Renames each scanned problem file from `dir/<name>` to
/// `dir/TTT<name>`, in scan order, printing each name to stdout.
///
/// Only direct children of `dir` are renamed; the caller is expected to run
/// this after all reference rewriting has completed. If the target name
/// already exists, platform rename semantics apply (no explicit collision
/// handling).
///
/// # Errors
///
/// Fails on the first rename that the file system rejects, leaving earlier
/// renames applied.
pub fn rename_problem_files(dir: &Path, problem_files: &[String]) -> Result<()> {
    for problem_filename in problem_files {
        println!("{}", problem_filename);
        let from = dir.join(problem_filename);
        let to = dir.join(format!("{}{}", MARKER_PREFIX, problem_filename));
        fs::rename(&from, &to).with_context(|| {
            format!("Error renaming {} to {}", from.display(), to.display())
        })?;
    }
    Ok(())
}
