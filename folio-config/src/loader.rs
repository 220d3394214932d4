use anyhow::{Context, anyhow};
use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::models::ShowcaseConfig;

pub const ENV_CONFIG_PATH: &str = "FOLIO_CONFIG_PATH";
pub const ENV_CONFIG_JSON: &str = "FOLIO_CONFIG_JSON";
pub const ENV_CONTENT_ROOT: &str = "FOLIO_CONTENT_ROOT";

const DEFAULT_CANDIDATES: &[&str] =
    &["folio.toml", "config/folio.toml", "folio.json"];

/// Source that produced the showcase configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    #[default]
    Default,
    EnvPath(PathBuf),
    EnvInline,
    File(PathBuf),
}

impl ShowcaseConfig {
    /// Load configuration from the process environment, reading `.env` first
    /// when present.
    pub fn load_from_env() -> anyhow::Result<(Self, ConfigSource)> {
        if let Err(err) = dotenvy::dotenv()
            && !err.not_found()
        {
            log::warn!("ignoring unreadable .env file: {err}");
        }
        Self::load_with(|name| env::var(name).ok(), Path::new("."))
    }

    /// Load configuration using `lookup` for environment variables and
    /// `base_dir` for the default file candidates.
    ///
    /// Evaluation order:
    /// 1) `$FOLIO_CONFIG_PATH` (TOML or JSON file),
    /// 2) `$FOLIO_CONFIG_JSON` (inline JSON),
    /// 3) the first of `folio.toml`, `config/folio.toml`, `folio.json`,
    /// 4) defaults.
    ///
    /// `$FOLIO_CONTENT_ROOT` then overrides the content root, and the result
    /// is validated.
    pub fn load_with<F>(
        lookup: F,
        base_dir: &Path,
    ) -> anyhow::Result<(Self, ConfigSource)>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty =
            |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let (mut config, source) = if let Some(path) =
            non_empty(ENV_CONFIG_PATH)
        {
            let path = PathBuf::from(path);
            (Self::load_from_file(&path)?, ConfigSource::EnvPath(path))
        } else if let Some(raw) = non_empty(ENV_CONFIG_JSON) {
            let parsed = Self::parse_json(&raw)
                .with_context(|| format!("failed to parse {ENV_CONFIG_JSON}"))?;
            (parsed, ConfigSource::EnvInline)
        } else if let Some(path) = Self::find_default_file(base_dir) {
            (Self::load_from_file(&path)?, ConfigSource::File(path))
        } else {
            (Self::default(), ConfigSource::Default)
        };

        if let Some(root) = non_empty(ENV_CONTENT_ROOT) {
            config.content_root = PathBuf::from(root);
        }

        config.validate()?;
        log::debug!("showcase config loaded from {source:?}");
        Ok((config, source))
    }

    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path).with_context(|| {
            format!("failed to read showcase config from {}", path.display())
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::parse_json(&contents).with_context(|| {
                format!("invalid showcase config {}", path.display())
            }),
            Some("toml") | Some("tml") => {
                toml::from_str(&contents).map_err(|err| {
                    anyhow!(
                        "invalid showcase config {}: {}",
                        path.display(),
                        err
                    )
                })
            }
            _ => Self::parse_from_str(&contents, &path.display().to_string()),
        }
    }

    pub fn parse_from_str(
        contents: &str,
        origin: &str,
    ) -> anyhow::Result<Self> {
        // Try TOML first, then JSON for convenience.
        toml::from_str(contents).or_else(|toml_err| {
            serde_json::from_str(contents).map_err(|json_err| {
                anyhow!(
                    "failed to parse showcase config {}: toml error: {}; json error: {}",
                    origin,
                    toml_err,
                    json_err
                )
            })
        })
    }

    pub fn parse_json(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw)
            .map_err(|err| anyhow!("invalid showcase config json: {err}"))
    }

    fn find_default_file(base_dir: &Path) -> Option<PathBuf> {
        DEFAULT_CANDIDATES
            .iter()
            .map(|candidate| base_dir.join(candidate))
            .find(|path| path.is_file())
    }
}
