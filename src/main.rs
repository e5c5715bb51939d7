// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `querygen` command line.

use std::{path::PathBuf, process::ExitCode};

use anyhow::Context;
use clap::Parser;
use querygen::{Generator, GeneratorConfig};
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Default log filter when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "querygen=info";

#[derive(Debug, Parser)]
#[command(name = "querygen")]
#[command(author, version, about = "Generate typed SQL query builders for model structs", long_about = None)]
struct Cli {
    /// Source file or directory to scan
    #[arg(env = "QUERYGEN_PATH", default_value = ".")]
    path: PathBuf,

    /// SQL dialect: mysql, sqlite or postgres
    #[arg(short, long, env = "QUERYGEN_DIALECT", default_value = "mysql")]
    dialect: String,

    /// Write raw token text instead of pretty-printed code
    #[arg(long)]
    no_format: bool
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
        )
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = GeneratorConfig::new(&cli.path, &cli.dialect)
        .context("invalid configuration")?
        .with_pretty(!cli.no_format);

    Generator::new(config)
        .run()
        .with_context(|| format!("generation failed under {}", cli.path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::ffi::OsString;

    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["querygen"]).unwrap();
        assert_eq!(cli.path, PathBuf::from("."));
        assert!(!cli.no_format);
    }

    #[test]
    fn flags() {
        let cli = Cli::try_parse_from(["querygen", "src/models", "-d", "postgres", "--no-format"])
            .unwrap();
        assert_eq!(cli.path, PathBuf::from("src/models"));
        assert_eq!(cli.dialect, "postgres");
        assert!(cli.no_format);
    }

    #[test]
    fn unknown_dialect_fails_before_scanning() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("user.rs"), "pub struct UserModel { pub id: i64 }")
            .unwrap();
        let args: Vec<OsString> = vec![
            "querygen".into(),
            dir.path().into(),
            "--dialect".into(),
            "oracle".into(),
        ];
        let cli = Cli::try_parse_from(args).unwrap();

        let err = run(cli).unwrap_err();
        assert!(format!("{err:#}").contains("unknown dialect 'oracle'"));
        assert!(!dir.path().join("user_model_gen.rs").exists());
    }
}
