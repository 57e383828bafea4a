use std::{collections::HashMap, fs};

use frontcontroller::{view, ViewResolver};
use serde::Deserialize;

const SETTINGS_FILE: &str = "server.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    pub server_bind: String,
    pub log_filter: String,
    pub view_prefix: String,
    pub view_suffix: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_bind: "127.0.0.1:8080".into(),
            log_filter: "info".into(),
            view_prefix: view::DEFAULT_VIEW_PREFIX.into(),
            view_suffix: view::DEFAULT_VIEW_SUFFIX.into(),
        }
    }
}

impl Settings {
    pub fn view_resolver(&self) -> ViewResolver {
        ViewResolver::new(self.view_prefix.as_str(), self.view_suffix.as_str())
    }
}

pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(SETTINGS_FILE) {
        apply_file(&mut settings, &raw);
    }
    apply_env(&mut settings, |key| std::env::var(key).ok());

    settings
}

fn apply_file(settings: &mut Settings, raw: &str) {
    let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(raw) else {
        return;
    };

    if let Some(v) = file_cfg.get("bind_addr") {
        settings.server_bind = v.clone();
    }
    if let Some(v) = file_cfg.get("log_filter") {
        settings.log_filter = v.clone();
    }
    if let Some(v) = file_cfg.get("view_prefix") {
        settings.view_prefix = v.clone();
    }
    if let Some(v) = file_cfg.get("view_suffix") {
        settings.view_suffix = v.clone();
    }
}

fn apply_env(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = lookup("SERVER_BIND") {
        settings.server_bind = v;
    }
    if let Some(v) = lookup("APP__BIND_ADDR") {
        settings.server_bind = v;
    }

    if let Some(v) = lookup("RUST_LOG") {
        settings.log_filter = v;
    }
    if let Some(v) = lookup("APP__LOG_FILTER") {
        settings.log_filter = v;
    }

    if let Some(v) = lookup("APP__VIEW_PREFIX") {
        settings.view_prefix = v;
    }
    if let Some(v) = lookup("APP__VIEW_SUFFIX") {
        settings.view_suffix = v;
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
