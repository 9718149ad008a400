use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Arg, Command};

// Library dependencies.
use rename_problem_files::rename_problem_files;
use rewrite_references::rewrite_references;
use scan_problem_files::scan_problem_files;

fn print_usage() {
    println!();
    println!("Usage:  prefix_fixer directory");
    println!();
}

fn main() -> Result<()> {
    println!("This tool renames files with leading underscores in");
    println!("a doxygen output folder and patches references to them");
    println!();
    println!("{}", env::args().count());

    let matches = Command::new("prefix_fixer")
        .version("0.1.0")
        .about("Renames leading-underscore files in a documentation output folder and patches references to them")
        .arg(
            Arg::new("directory")
                .value_name("DIRECTORY")
                .help("Documentation output directory to process")
                .num_args(1),
        )
        .try_get_matches();

    // Anything other than exactly one directory argument prints usage and
    // exits 0, so callers that check for a zero exit keep working.
    let folder = match matches {
        Ok(ref matches) => match matches.get_one::<String>("directory") {
            Some(directory) => PathBuf::from(directory),
            None => {
                print_usage();
                return Ok(());
            }
        },
        Err(_) => {
            print_usage();
            return Ok(());
        }
    };

    println!("Process folder: {}", folder.display());

    // 1. Snapshot the problem files before anything mutates the tree.
    let problem_files = scan_problem_files(&folder)
        .with_context(|| format!("Failed to list {}", folder.display()))?;
    for problem_filename in &problem_files {
        println!("{}", problem_filename);
    }

    // 2. Patch references in every .js/.html file under the tree.
    rewrite_references(&folder, &problem_files)?;

    // 3. Rename the problem files themselves.
    rename_problem_files(&folder, &problem_files)?;

    Ok(())
}
