//! Custom cargo commands for jobsift.
//!
//! Usage:
//!   cargo xtask verify           - Run full verification suite
//!   cargo xtask test             - Run all tests
//!   cargo xtask check            - Quick check (check + test + clippy)
//!   cargo xtask bench            - Run benchmarks
//!   cargo xtask fuzz <target>    - Run one fuzz target for 60 seconds

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

/// Fuzz targets under fuzz/fuzz_targets.
const FUZZ_TARGETS: &[&str] = &["cosine_score", "weighted_score", "pagination", "menu_input"];

/// Search-score weight constants in src/scoring/relevance.rs.
const SEARCH_WEIGHTS: &[&str] = &[
    "TITLE_WEIGHT",
    "KEYWORDS_WEIGHT",
    "CATEGORIES_WEIGHT",
    "DESCRIPTION_WEIGHT",
];

fn main() -> Result<()> {
    let mut args = env::args().skip(1);
    let task = args.next();
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("fuzz") => fuzz(args.next().as_deref())?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify    Run full verification suite (markers + weights + tests + clippy)
  test      Run all Rust tests
  check     Quick check (cargo check + test + clippy)
  bench     Run benchmarks
  fuzz      Run a fuzz target for 60s (needs nightly + cargo-fuzz)
            targets: {}
"#,
        FUZZ_TARGETS.join(", ")
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("jobsift Verification Suite");
    println!("==========================================\n");

    println!("[1/4] Checking invariant markers...");
    check_invariant_markers()?;
    println!("✓ Invariant markers present\n");

    println!("[2/4] Checking search weight table...");
    verify_search_weights()?;
    println!("✓ Search weights sum to 100\n");

    println!("[3/4] Running Rust tests...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ All Rust tests passed\n");

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
    run_cargo(&["check"])?;

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

/// Run one fuzz target
fn fuzz(target: Option<&str>) -> Result<()> {
    let Some(target) = target else {
        bail!("missing fuzz target (one of: {})", FUZZ_TARGETS.join(", "));
    };
    if !FUZZ_TARGETS.contains(&target) {
        bail!("unknown fuzz target {:?} (one of: {})", target, FUZZ_TARGETS.join(", "));
    }

    let status = Command::new("cargo")
        .args(["+nightly", "fuzz", "run", target, "--", "-max_total_time=60"])
        .current_dir(project_root()?)
        .status()
        .context("Failed to run cargo fuzz (is cargo-fuzz installed?)")?;

    if !status.success() {
        bail!("fuzz target {} failed", target);
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

fn check_invariant_markers() -> Result<()> {
    let root = project_root()?;
    let src_dir = root.join("src");

    let output = Command::new("grep")
        .args(["-r", "INVARIANT:", "--include=*.rs"])
        .current_dir(&src_dir)
        .output()
        .context("Failed to run grep")?;

    let count = output.stdout.split(|&b| b == b'\n').filter(|l| !l.is_empty()).count();

    if count < 5 {
        bail!(
            "Expected at least 5 INVARIANT markers, found {}. Someone may have removed safety comments!",
            count
        );
    }

    Ok(())
}

fn verify_search_weights() -> Result<()> {
    let root = project_root()?;
    let relevance = std::fs::read_to_string(root.join("src/scoring/relevance.rs"))
        .context("Failed to read src/scoring/relevance.rs")?;

    let mut sum = 0;
    for name in SEARCH_WEIGHTS {
        let weight = extract_const(&relevance, name)
            .with_context(|| format!("{} not found in relevance.rs", name))?;
        println!("  {:<20} {}", name, weight);
        sum += weight;
    }

    if sum != 100 {
        bail!("search weights sum to {}, expected 100", sum);
    }

    Ok(())
}

fn extract_const(content: &str, name: &str) -> Option<u32> {
    // Look for "pub const TITLE_WEIGHT: u32 = 50;"
    let prefix = format!("pub const {}:", name);
    content
        .lines()
        .map(str::trim)
        .find(|line| line.starts_with(&prefix))
        .and_then(|line| line.split('=').nth(1))
        .and_then(|value| value.trim().trim_end_matches(';').trim().replace('_', "").parse().ok())
}
