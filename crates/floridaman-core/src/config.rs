//! Lightweight configuration loader, typed engine settings and path helpers.
//!
//! Uses Figment to merge `config.toml` + `config.<env>.toml` + `APP_*` env vars.
//! Every settings struct has a `Default` carrying the tuned constants, so the
//! engines run without any configuration file present.
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use crate::error::Error;

/// BM25 and fallback tuning for the headline search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    pub k1: f64,
    pub b: f64,
    pub substring_bonus: f64,
    pub max_results: usize,
    pub fuzzy_max_results: usize,
    pub fuzzy_edit_score: f64,
    /// Matched terms shorter than this are not displayed.
    pub min_match_len: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            k1: 1.5,
            b: 0.75,
            substring_bonus: 0.2,
            max_results: 7,
            fuzzy_max_results: 5,
            fuzzy_edit_score: 0.5,
            min_match_len: 4,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsSettings {
    pub sample_capacity: usize,
    /// Location hint that names the whole state and is not counted.
    pub excluded_location: String,
}

impl Default for StatsSettings {
    fn default() -> Self {
        Self { sample_capacity: 6, excluded_location: "Florida".to_string() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    pub top_locations: usize,
    pub top_words: usize,
    pub pure_favorites: usize,
    pub pure_randoms: usize,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self { top_locations: 20, top_words: 20, pure_favorites: 2, pure_randoms: 3 }
    }
}

/// All engine settings, extracted in one go.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    pub search: SearchSettings,
    pub stats: StatsSettings,
    pub report: ReportSettings,
}

pub struct Config {
    figment: Figment,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());
        Self::load_from(Path::new("."), &env_name)
    }

    /// Load `config.toml` and `config.<env>.toml` from `dir`, then `APP_*` env vars.
    pub fn load_from(dir: &Path, env_name: &str) -> anyhow::Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(EngineSettings::default()))
            .merge(Toml::file(dir.join("config.toml")));
        match env_name {
            "dev" | "development" => figment = figment.merge(Toml::file(dir.join("config.dev.toml"))),
            "prod" | "production" => figment = figment.merge(Toml::file(dir.join("config.prod.toml"))),
            "test" | "testing" => figment = figment.merge(Toml::file(dir.join("config.test.toml"))),
            _ => {}
        }
        figment = figment.merge(Env::prefixed("APP_").split("__"));

        let config = Self { figment };
        config.validate()?;
        Ok(config)
    }

    pub fn get<T>(&self, key: &str) -> anyhow::Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.figment
            .extract_inner(key)
            .map_err(|e| anyhow::anyhow!("Failed to get '{}': {}", key, e))
    }

    pub fn settings(&self) -> anyhow::Result<EngineSettings> {
        self.figment
            .extract()
            .map_err(|e| anyhow::anyhow!("Failed to read engine settings: {}", e))
    }

    fn validate(&self) -> anyhow::Result<()> {
        let settings = self.settings()?;
        if settings.stats.sample_capacity == 0 {
            return Err(Error::InvalidConfig("stats.sample_capacity must be at least 1".into()).into());
        }
        if !(0.0..=1.0).contains(&settings.search.b) {
            return Err(Error::InvalidConfig(format!("search.b must lie in [0, 1], got {}", settings.search.b)).into());
        }
        if settings.search.k1 < 0.0 {
            return Err(Error::InvalidConfig(format!("search.k1 must be non-negative, got {}", settings.search.k1)).into());
        }
        Ok(())
    }
}

/// Expand a user-provided path string:
/// - Expands leading '~' to the user's home directory
/// - Expands ${VAR} and $VAR environment variables
/// - Returns a PathBuf without attempting to canonicalize
pub fn expand_path<S: AsRef<str>>(input: S) -> PathBuf {
    let s = input.as_ref();
    let expanded_env = shellexpand::env(s).unwrap_or(std::borrow::Cow::Borrowed(s));
    let expanded = shellexpand::tilde(&expanded_env);
    PathBuf::from(expanded.as_ref())
}
