//! Fixture data providers
//!
//! The dashboard only ever reads records through [`FixtureSource`], so a live
//! backend can replace the static files without touching the core.

use std::path::{Path, PathBuf};

use color_eyre::eyre::{Result, WrapErr};

use crate::domain::fixtures::Fixtures;

const DEFAULT_FIXTURES: &str = include_str!("../../fixtures/default.json5");

/// Supplies the records displayed by the dashboard
pub trait FixtureSource {
    fn load(&self) -> Result<Fixtures>;

    /// Human readable origin, used in logs
    fn describe(&self) -> String;
}

/// Records compiled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedFixtures;

impl FixtureSource for EmbeddedFixtures {
    fn load(&self) -> Result<Fixtures> {
        parse(DEFAULT_FIXTURES).wrap_err("built-in fixtures are invalid")
    }

    fn describe(&self) -> String {
        "built-in fixtures".to_string()
    }
}

/// Records read from a JSON5 file
#[derive(Debug, Clone)]
pub struct FileFixtures {
    path: PathBuf,
}

impl FileFixtures {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FixtureSource for FileFixtures {
    fn load(&self) -> Result<Fixtures> {
        let raw = std::fs::read_to_string(&self.path)
            .wrap_err_with(|| format!("failed to read {}", self.path.display()))?;
        parse(&raw).wrap_err_with(|| format!("invalid fixtures in {}", self.path.display()))
    }

    fn describe(&self) -> String {
        format!("fixtures from {}", self.path.display())
    }
}

/// Picks the file given on the command line, then the configured file, then
/// the built-in records.
pub fn select_source(
    cli_path: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Box<dyn FixtureSource> {
    match cli_path.or(config_path) {
        Some(path) => Box::new(FileFixtures::new(path)),
        None => Box::new(EmbeddedFixtures),
    }
}

fn parse(raw: &str) -> Result<Fixtures> {
    let fixtures: Fixtures = json5::from_str(raw)?;
    fixtures.validate()?;
    Ok(fixtures)
}
