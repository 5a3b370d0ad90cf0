use std::{fs, path::Path};

use anyhow::Context;
use serde::Deserialize;

pub const DEFAULT_CONFIG_FILE: &str = "demo.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub log_filter: String,
    pub signal_queue_capacity: usize,
    pub emit_json: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_filter: "info".into(),
            signal_queue_capacity: 64,
            emit_json: false,
        }
    }
}

/// Every key is optional; absent keys keep the current value.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileSettings {
    log_filter: Option<String>,
    signal_queue_capacity: Option<usize>,
    emit_json: Option<bool>,
}

/// Defaults, then the config file (an explicit path must exist, the default
/// one may be absent), then `APP__*` environment variables.
pub fn load_settings(path: Option<&Path>) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    match path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read config file '{}'", path.display()))?;
            apply_file(&mut settings, &raw)
                .with_context(|| format!("invalid config file '{}'", path.display()))?;
        }
        None => {
            if let Ok(raw) = fs::read_to_string(DEFAULT_CONFIG_FILE) {
                apply_file(&mut settings, &raw)
                    .with_context(|| format!("invalid config file '{DEFAULT_CONFIG_FILE}'"))?;
            }
        }
    }

    apply_env(&mut settings, |key| std::env::var(key).ok());
    Ok(settings)
}

fn apply_file(settings: &mut Settings, raw: &str) -> anyhow::Result<()> {
    let file_cfg: FileSettings = toml::from_str(raw)?;
    if let Some(v) = file_cfg.log_filter {
        settings.log_filter = v;
    }
    if let Some(v) = file_cfg.signal_queue_capacity {
        settings.signal_queue_capacity = v;
    }
    if let Some(v) = file_cfg.emit_json {
        settings.emit_json = v;
    }
    Ok(())
}

/// Unparseable values are ignored and the previous value kept.
fn apply_env(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = lookup("APP__LOG_FILTER") {
        settings.log_filter = v;
    }
    if let Some(v) = lookup("APP__SIGNAL_QUEUE_CAPACITY") {
        if let Ok(parsed) = v.parse::<usize>() {
            settings.signal_queue_capacity = parsed;
        }
    }
    if let Some(v) = lookup("APP__EMIT_JSON") {
        if let Ok(parsed) = v.parse::<bool>() {
            settings.emit_json = parsed;
        }
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
