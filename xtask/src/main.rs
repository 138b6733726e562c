//! Custom cargo commands for the typeahead crate.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests
//!   cargo xtask check     - Quick check
//!   cargo xtask bench     - Run benchmarks
//!   cargo xtask fuzz      - Run every fuzz target briefly

use anyhow::{bail, Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

const FUZZ_TARGETS: &[&str] = &["edit_distance", "highlight_segments", "suggest_queries"];

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("fuzz") => fuzz()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify    Run full verification suite (invariant references + tests + clippy)
  test      Run all Rust tests
  check     Quick check (cargo check + test + clippy)
  bench     Run benchmarks
  fuzz      Run each fuzz target for 30 seconds (needs cargo-fuzz)
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("Typeahead Verification Suite");
    println!("==========================================\n");

    println!("[1/4] Checking invariant references...");
    let checked = check_verified_by_references()?;
    println!("✓ {} invariant references resolve\n", checked);

    println!("[2/4] Running Rust tests...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ All Rust tests passed\n");

    println!("[3/4] Running tests without default features...");
    run_cargo(&["test", "--quiet", "--lib", "--no-default-features"])?;
    println!("✓ Library builds without cli/shared\n");

    println!("[4/4] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test"])
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check", "--all-targets"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

/// Run every fuzz target for a short, fixed time
fn fuzz() -> Result<()> {
    let fuzz_dir = project_root()?.join("fuzz");
    for target in FUZZ_TARGETS {
        println!("Fuzzing {}...", target);
        let status = Command::new("cargo")
            .args(["+nightly", "fuzz", "run", target, "--", "-max_total_time=30"])
            .current_dir(&fuzz_dir)
            .status()
            .with_context(|| format!("Failed to run cargo fuzz for {}", target))?;
        if !status.success() {
            bail!("fuzz target {} failed", target);
        }
    }
    Ok(())
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

/// Every `**Verified by**` entry in a module doc must point at something
/// that exists: a test function in the named file, or a fuzz target.
///
/// Entries look like either
///   //! - `prop_name` (tests/property/file.rs)
///   //! - `fuzz_targets/target.rs`
fn check_verified_by_references() -> Result<usize> {
    let root = project_root()?;
    let mut checked = 0;
    let mut sources = Vec::new();
    collect_rust_files(&root.join("src"), &mut sources)?;

    for source in sources {
        let content = std::fs::read_to_string(&source)
            .with_context(|| format!("Failed to read {}", source.display()))?;
        let mut in_block = false;

        for line in content.lines() {
            let line = line.trim();
            if line.starts_with("//! **Verified by**") {
                in_block = true;
                continue;
            }
            if !in_block {
                continue;
            }
            let Some(entry) = line.strip_prefix("//! - ") else {
                in_block = false;
                continue;
            };

            let name = entry.split('`').nth(1).unwrap_or("");
            let file = entry
                .split('(')
                .nth(1)
                .and_then(|rest| rest.split(')').next());

            match file {
                Some(file) => {
                    let test_file = std::fs::read_to_string(root.join(file))
                        .with_context(|| format!("{}: missing {}", source.display(), file))?;
                    if !test_file.contains(&format!("fn {}(", name)) {
                        bail!("{}: `{}` not found in {}", source.display(), name, file);
                    }
                }
                None => {
                    if !root.join("fuzz").join(name).exists() {
                        bail!("{}: fuzz target {} not found", source.display(), name);
                    }
                }
            }
            checked += 1;
        }
    }

    if checked == 0 {
        bail!("No invariant references found. Someone may have removed the Verified by blocks!");
    }
    Ok(checked)
}

fn collect_rust_files(dir: &Path, out: &mut Vec<PathBuf>) -> Result<()> {
    for entry in std::fs::read_dir(dir).with_context(|| format!("Failed to read {}", dir.display()))? {
        let path = entry?.path();
        if path.is_dir() {
            collect_rust_files(&path, out)?;
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            out.push(path);
        }
    }
    Ok(())
}
