use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::generation::scoring::{MAX_MATCH_SCORE, MIN_MATCH_SCORE};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_STORE_DIR: &str = "./data";
const DEFAULT_SYNTHESIS_DELAY_MS: u64 = 3000;

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed numbers fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Directory holding the single stored profile file.
    pub store_dir: PathBuf,
    /// Fixed pause before a generated CV is returned.
    pub synthesis_delay: Duration,
    /// Where the profile lives.
    pub store_backend: StoreBackend,
    /// Pins every match score to this value instead of drawing one. Demo use.
    pub fixed_match_score: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    File,
    /// Lost on restart.
    Memory,
}

impl std::str::FromStr for StoreBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "file" => Ok(StoreBackend::File),
            "memory" => Ok(StoreBackend::Memory),
            other => Err(anyhow::anyhow!(
                "unsupported store backend `{other}`; expected file|memory"
            )),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .ok()
                .map(|v| v.parse::<u16>())
                .transpose()
                .context("PORT must be a valid port number")?
                .unwrap_or(DEFAULT_PORT),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            store_dir: std::env::var("STORE_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_STORE_DIR)),
            synthesis_delay: Duration::from_millis(
                std::env::var("SYNTHESIS_DELAY_MS")
                    .ok()
                    .map(|v| v.parse::<u64>())
                    .transpose()
                    .context("SYNTHESIS_DELAY_MS must be a whole number of milliseconds")?
                    .unwrap_or(DEFAULT_SYNTHESIS_DELAY_MS),
            ),
            store_backend: std::env::var("STORE_BACKEND")
                .ok()
                .map(|v| v.parse::<StoreBackend>())
                .transpose()
                .context("STORE_BACKEND is invalid")?
                .unwrap_or(StoreBackend::File),
            fixed_match_score: std::env::var("FIXED_MATCH_SCORE")
                .ok()
                .map(|v| parse_fixed_match_score(&v))
                .transpose()
                .context("FIXED_MATCH_SCORE is invalid")?,
        })
    }
}

/// A pinned score must still fall in the range the random draw covers.
fn parse_fixed_match_score(raw: &str) -> Result<u32> {
    let value = raw
        .trim()
        .parse::<u32>()
        .with_context(|| format!("`{raw}` is not a whole number"))?;
    if !(MIN_MATCH_SCORE..=MAX_MATCH_SCORE).contains(&value) {
        anyhow::bail!("{value} is outside {MIN_MATCH_SCORE}..={MAX_MATCH_SCORE}");
    }
    Ok(value)
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: DEFAULT_PORT,
            rust_log: "info".to_string(),
            store_dir: PathBuf::from(DEFAULT_STORE_DIR),
            synthesis_delay: Duration::from_millis(DEFAULT_SYNTHESIS_DELAY_MS),
            store_backend: StoreBackend::File,
            fixed_match_score: None,
        }
    }
}
