// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow, bail};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_VERSION: i64 = 1;
const APP_NAME: &str = "dinefilter";
pub const CONFIG_PATH_ENV: &str = "DINEFILTER_CONFIG_PATH";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub version: i64,
    #[serde(default)]
    pub dataset: Dataset,
    #[serde(default)]
    pub ui: Ui,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            dataset: Dataset::default(),
            ui: Ui::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Dataset {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Ui {
    pub start_expanded: Option<bool>,
}

impl Default for Ui {
    fn default() -> Self {
        Self {
            start_expanded: Some(false),
        }
    }
}

impl Config {
    pub fn default_path() -> Result<PathBuf> {
        if let Some(path) = env::var_os(CONFIG_PATH_ENV) {
            return Ok(PathBuf::from(path));
        }

        let config_root = dirs::config_dir().ok_or_else(|| {
            anyhow!("cannot resolve config directory; set {CONFIG_PATH_ENV} to the config file")
        })?;

        let app_dir = config_root.join(APP_NAME);
        fs::create_dir_all(&app_dir)
            .with_context(|| format!("create config directory {}", app_dir.display()))?;
        Ok(app_dir.join("config.toml"))
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        let value: toml::Value = toml::from_str(&raw)
            .with_context(|| format!("parse TOML config {}", path.display()))?;

        let version = value
            .get("version")
            .and_then(toml::Value::as_integer)
            .ok_or_else(|| {
                anyhow!(
                    "config file {} is not versioned. Add `version = 1` and move values under [dataset] and [ui]",
                    path.display()
                )
            })?;

        if version != CONFIG_VERSION {
            bail!(
                "unsupported config version {} in {}; expected version = 1",
                version,
                path.display()
            );
        }

        let config: Config = value
            .try_into()
            .with_context(|| format!("decode config {}", path.display()))?;
        config.validate(path)?;
        Ok(config)
    }

    fn validate(&self, path: &Path) -> Result<()> {
        if let Some(dataset_path) = &self.dataset.path {
            if dataset_path.contains("://") {
                bail!(
                    "dataset.path in {} looks like a URI, expected a filesystem path: {}",
                    path.display(),
                    dataset_path
                );
            }
            if dataset_path.trim().is_empty() {
                bail!("dataset.path in {} must not be empty", path.display());
            }
        }
        Ok(())
    }

    pub fn dataset_path(&self) -> Option<PathBuf> {
        self.dataset.path.as_deref().map(PathBuf::from)
    }

    pub fn start_expanded(&self) -> bool {
        self.ui.start_expanded.unwrap_or(false)
    }

    pub fn example_config(path: &Path) -> String {
        format!(
            "# dinefilter config\n# Place this file at: {}\n\nversion = 1\n\n[dataset]\n# Optional. Default is the embedded sample dataset; DINEFILTER_DATASET_PATH\n# also overrides when set.\n# path = \"/absolute/path/to/filters.json\"\n\n[ui]\nstart_expanded = false\n",
            path.display(),
        )
    }
}
