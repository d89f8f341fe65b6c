use anyhow::Result;
use clap::{Parser, Subcommand};
use std::process::Command;

#[derive(Parser)]
#[command(name = "xtask", about = "Workspace automation for cubepick")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run all checks: fmt, clippy, tests, doc
    Check,
    /// Run cargo fmt --check on all crates
    Fmt,
    /// Run clippy on all crates
    Clippy,
    /// Run all tests
    Test,
    /// Run the picking timing bench
    Bench,
    /// Build rustdoc for the workspace
    Doc,
    /// Build the entire workspace
    Build,
}

impl Commands {
    /// The cargo invocation for a single step. `Check` has none of its own.
    fn cargo_args(&self) -> &'static [&'static str] {
        match self {
            Self::Check => &[],
            Self::Fmt => &["fmt", "--all", "--", "--check"],
            Self::Clippy => &[
                "clippy",
                "--workspace",
                "--all-targets",
                "--",
                "-D",
                "warnings",
            ],
            Self::Test => &["test", "--workspace"],
            Self::Bench => &["bench", "-p", "cubepick-picking"],
            Self::Doc => &["doc", "--workspace", "--no-deps"],
            Self::Build => &["build", "--workspace"],
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check => {
            for step in [
                Commands::Fmt,
                Commands::Clippy,
                Commands::Test,
                Commands::Doc,
            ] {
                cargo(step.cargo_args())?;
            }
        }
        step => cargo(step.cargo_args())?,
    }

    Ok(())
}

fn cargo(args: &[&str]) -> Result<()> {
    println!("==> Running cargo {}", args.join(" "));
    let status = Command::new("cargo").args(args).status()?;
    if !status.success() {
        anyhow::bail!("cargo {} failed", args[0]);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_step_invokes_cargo() {
        for step in [
            Commands::Fmt,
            Commands::Clippy,
            Commands::Test,
            Commands::Bench,
            Commands::Doc,
            Commands::Build,
        ] {
            assert!(!step.cargo_args().is_empty());
        }
        assert!(Commands::Check.cargo_args().is_empty());
    }
}
