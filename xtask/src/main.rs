use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::path::Path;
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "x")]
#[command(about = "Development automation for pixel-home")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Format check, clippy, build and the full test suite
    Ci,
    /// Run tests, optionally limited to library modules
    Test {
        /// Only the room model and home layout
        #[arg(long)]
        room: bool,
        /// Only the sprite routines and compositor
        #[arg(long)]
        render: bool,
        /// Only the frame buffer, palette and window config
        #[arg(long)]
        display: bool,
    },
    /// Render the home room headlessly to a PNG
    Snapshot {
        /// Output PNG path
        #[arg(default_value = "home.png")]
        output: String,
        /// Build in release mode
        #[arg(long)]
        release: bool,
    },
}

/// One cargo invocation with a display label
struct Step {
    label: String,
    args: Vec<String>,
}

impl Step {
    fn new(label: impl Into<String>, args: &[&str]) -> Self {
        Self {
            label: label.into(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Ci => run_steps("CI", &ci_steps()),
        Commands::Test {
            room,
            render,
            display,
        } => run_steps("Tests", &test_steps(room, render, display)),
        Commands::Snapshot { output, release } => snapshot(&output, release),
    }
}

fn ci_steps() -> Vec<Step> {
    vec![
        Step::new("Format", &["fmt", "--all", "--", "--check"]),
        Step::new(
            "Clippy",
            &["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"],
        ),
        Step::new("Build", &["build", "--workspace"]),
        Step::new("Test", &["test"]),
        Step::new("Bench build", &["bench", "--no-run"]),
    ]
}

fn test_steps(room: bool, render: bool, display: bool) -> Vec<Step> {
    let filters: Vec<&str> = [(room, "room"), (render, "render"), (display, "display")]
        .into_iter()
        .filter_map(|(on, module)| on.then_some(module))
        .collect();

    if filters.is_empty() {
        return vec![Step::new("All tests", &["test"])];
    }

    // Library unit tests are named after their module path
    filters
        .into_iter()
        .map(|module| Step::new(format!("{} tests", module), &["test", "--lib", module]))
        .collect()
}

/// Run steps in order, stopping at the first failure
fn run_steps(title: &str, steps: &[Step]) -> Result<()> {
    println!("{}", format!("=== {} ===", title).bold().blue());
    let start = Instant::now();

    for step in steps {
        println!("{} {}", "→".blue(), step.label.bold());
        if let Err(e) = cargo(&step.args) {
            println!("{} {} failed", "✗".red().bold(), step.label);
            return Err(e);
        }
    }

    println!(
        "\n{} {} in {}",
        "✓".green().bold(),
        format!("{} passed", title).green().bold(),
        format!("{:.2}s", start.elapsed().as_secs_f64()).bold()
    );
    Ok(())
}

fn snapshot(output: &str, release: bool) -> Result<()> {
    if !output.to_lowercase().ends_with(".png") {
        println!("{} Output does not have .png extension", "⚠".yellow().bold());
    }

    if let Some(parent) = Path::new(output).parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            bail!("Output directory not found: {}", parent.display());
        }
    }

    let mut args = vec!["run".to_string()];
    if release {
        args.push("--release".to_string());
    }
    args.extend(["--", "--screenshot", output].map(String::from));

    run_steps("Snapshot", &[Step { label: format!("Render {}", output), args }])
}

fn cargo(args: &[String]) -> Result<()> {
    let status = Command::new("cargo").args(args).status()?;
    if !status.success() {
        bail!("cargo {} exited with {}", args.join(" "), status);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_without_filters_runs_everything() {
        let steps = test_steps(false, false, false);
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].args, ["test"]);
    }

    #[test]
    fn test_filters_map_to_lib_modules() {
        let steps = test_steps(true, false, true);
        let args: Vec<_> = steps.iter().map(|s| s.args.join(" ")).collect();
        assert_eq!(args, ["test --lib room", "test --lib display"]);
    }

    #[test]
    fn test_ci_ends_with_tests_and_benches() {
        let labels: Vec<_> = ci_steps().into_iter().map(|s| s.label).collect();
        assert_eq!(labels.first().map(String::as_str), Some("Format"));
        assert!(labels.contains(&"Test".to_string()));
        assert_eq!(labels.last().map(String::as_str), Some("Bench build"));
    }
}
