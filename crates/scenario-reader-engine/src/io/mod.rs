use crate::models::{Chapter, Scenario};
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// File looked up when a scenario path names a directory.
pub const SCENARIO_FILE: &str = "scenario.toml";

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Scenario has no chapters")]
    NoChapters,
    #[error("Duplicate chapter id: {0}")]
    DuplicateChapter(String),
}

/// Load a scenario from a TOML file, or from `scenario.toml` in a directory.
///
/// Chapter files listed under `include` are resolved relative to the
/// scenario file and appended after the inline chapters, in order.
pub fn load_scenario(path: &Path) -> Result<Scenario, LoadError> {
    let scenario_file = if path.is_dir() {
        path.join(SCENARIO_FILE)
    } else {
        path.to_path_buf()
    };

    let mut scenario: Scenario = read_toml(&scenario_file)?;
    let base = scenario_file.parent().unwrap_or(Path::new(""));

    for include in std::mem::take(&mut scenario.include) {
        let chapter: Chapter = read_toml(&base.join(&include))?;
        scenario.chapters.push(chapter);
    }

    validate_scenario(&scenario)?;
    log::debug!(
        "loaded scenario {:?} from {} with {} chapters",
        scenario.title,
        scenario_file.display(),
        scenario.chapters.len()
    );
    Ok(scenario)
}

/// A scenario needs at least one chapter, and chapter ids must be unique.
pub fn validate_scenario(scenario: &Scenario) -> Result<(), LoadError> {
    if scenario.chapters.is_empty() {
        return Err(LoadError::NoChapters);
    }

    let mut seen = HashSet::new();
    for chapter in &scenario.chapters {
        if !seen.insert(chapter.id.as_str()) {
            return Err(LoadError::DuplicateChapter(chapter.id.clone()));
        }
    }

    Ok(())
}

fn read_toml<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    if !path.exists() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
