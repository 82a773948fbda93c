//! classdesk configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::quiz::DEFAULT_QUESTIONS;

/// Top-level classdesk configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassdeskConfig {
    /// Student marks file.
    #[serde(default = "default_students_file")]
    pub students_file: PathBuf,
    /// CSV file of jokes.
    #[serde(default = "default_jokes_file")]
    pub jokes_file: PathBuf,
    #[serde(default)]
    pub quiz: QuizConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizConfig {
    /// Questions per quiz.
    #[serde(default = "default_questions")]
    pub max_questions: u32,
    /// Difficulty level (1, 2 or 3) when none is given on the command line.
    #[serde(default = "default_difficulty")]
    pub default_difficulty: u8,
}

fn default_students_file() -> PathBuf {
    PathBuf::from("studentMarks.txt")
}
fn default_jokes_file() -> PathBuf {
    PathBuf::from("shortjokes.csv")
}
fn default_questions() -> u32 {
    DEFAULT_QUESTIONS
}
fn default_difficulty() -> u8 {
    1
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            max_questions: default_questions(),
            default_difficulty: default_difficulty(),
        }
    }
}

impl Default for ClassdeskConfig {
    fn default() -> Self {
        Self {
            students_file: default_students_file(),
            jokes_file: default_jokes_file(),
            quiz: QuizConfig::default(),
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
fn resolve_env_vars(s: &str) -> String {
    let mut result = s.to_string();
    let mut cursor = 0;
    // Substituted values are not rescanned.
    while let Some(offset) = result[cursor..].find("${") {
        let start = cursor + offset;
        let Some(end) = result[start..].find('}') else {
            break;
        };
        let var_name = &result[start + 2..start + end];
        let value = std::env::var(var_name).unwrap_or_default();
        result = format!("{}{}{}", &result[..start], value, &result[start + end + 1..]);
        cursor = start + value.len();
    }
    result
}

fn resolve_path(path: &Path) -> PathBuf {
    PathBuf::from(resolve_env_vars(&path.to_string_lossy()))
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `classdesk.toml` in the current directory
/// 2. `~/.config/classdesk/config.toml`
///
/// Environment variable overrides: `CLASSDESK_STUDENTS_FILE`, `CLASSDESK_JOKES_FILE`.
pub fn load_config_from(path: Option<&Path>) -> Result<ClassdeskConfig> {
    let config_path = match path {
        Some(p) if p.exists() => Some(p.to_path_buf()),
        Some(p) => anyhow::bail!("config file not found: {}", p.display()),
        None => {
            let local = PathBuf::from("classdesk.toml");
            if local.exists() {
                Some(local)
            } else {
                dirs_path()
                    .map(|dir| dir.join("config.toml"))
                    .filter(|global| global.exists())
            }
        }
    };

    let mut config = match config_path {
        Some(path) => {
            tracing::debug!("using config {}", path.display());
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            parse_config(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => ClassdeskConfig::default(),
    };

    if let Ok(file) = std::env::var("CLASSDESK_STUDENTS_FILE") {
        config.students_file = PathBuf::from(file);
    }
    if let Ok(file) = std::env::var("CLASSDESK_JOKES_FILE") {
        config.jokes_file = PathBuf::from(file);
    }

    config.students_file = resolve_path(&config.students_file);
    config.jokes_file = resolve_path(&config.jokes_file);

    Ok(config)
}

/// Parse a TOML config string.
pub fn parse_config(content: &str) -> Result<ClassdeskConfig> {
    Ok(toml::from_str(content)?)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("classdesk"))
}
