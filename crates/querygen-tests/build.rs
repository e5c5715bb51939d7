// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Generates query builders for the fixtures, once per dialect.
//!
//! Fixtures are copied to `$OUT_DIR/{dialect}/` and the generator runs over
//! each copy, leaving `{stem}_model_gen.rs` next to every fixture.

use std::{env, fs, path::PathBuf};

use anyhow::Context;
use querygen::{Dialect, Generator, GeneratorConfig};

const FIXTURES: &str = "fixtures";

fn main() -> anyhow::Result<()> {
    println!("cargo:rerun-if-changed={FIXTURES}");

    let out_dir = PathBuf::from(env::var("OUT_DIR").context("OUT_DIR is not set")?);

    for dialect in Dialect::ALL {
        let target = out_dir.join(dialect.name());
        fs::create_dir_all(&target)
            .with_context(|| format!("creating {}", target.display()))?;

        for entry in fs::read_dir(FIXTURES).context("reading fixtures")? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "rs")
                && let Some(name) = path.file_name()
            {
                fs::copy(&path, target.join(name))
                    .with_context(|| format!("copying {}", path.display()))?;
            }
        }

        let config = GeneratorConfig::new(&target, dialect.name())?;
        Generator::new(config)
            .run()
            .with_context(|| format!("generating {dialect} builders"))?;
    }

    Ok(())
}
