use std::{collections::HashMap, fs};

use anyhow::Context;
use landing_core::contact_form::contact_endpoint;
use serde::Deserialize;
use shared::protocol::CONTACT_ROUTE;

pub const DEFAULT_PORT: u16 = 3001;
pub const SETTINGS_FILE: &str = "site.toml";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server_bind: String,
    /// Resend API key; the relay answers 500 while it is unset.
    pub resend_api_key: Option<String>,
    pub resend_api_url: String,
    pub contact_email: String,
    pub contact_from: String,
    /// Public base of the relay when the page is served from elsewhere.
    pub api_base_url: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_bind: format!("0.0.0.0:{DEFAULT_PORT}"),
            resend_api_key: None,
            resend_api_url: "https://api.resend.com".into(),
            contact_email: "info@noletandrews.ca".into(),
            contact_from: "Site Web GNA <noreply@noletandrews.ca>".into(),
            api_base_url: None,
        }
    }
}

impl Settings {
    /// Where rendered contact forms post to.
    pub fn contact_form_endpoint(&self) -> anyhow::Result<String> {
        match self.api_base_url.as_deref() {
            Some(base) => Ok(contact_endpoint(base)
                .with_context(|| format!("invalid API_BASE_URL '{base}'"))?
                .to_string()),
            None => Ok(CONTACT_ROUTE.to_string()),
        }
    }
}

pub fn load_settings() -> Settings {
    let file = fs::read_to_string(SETTINGS_FILE).ok();
    load_settings_from(file.as_deref(), |key| std::env::var(key).ok())
}

/// Defaults, then the flat `site.toml` map, then the environment.
pub fn load_settings_from(file: Option<&str>, env: impl Fn(&str) -> Option<String>) -> Settings {
    let mut settings = Settings::default();

    if let Some(raw) = file {
        if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(raw) {
            if let Some(v) = file_cfg.get("bind_addr") {
                settings.server_bind = v.clone();
            }
            if let Some(v) = file_cfg.get("resend_api_url") {
                settings.resend_api_url = v.clone();
            }
            if let Some(v) = file_cfg.get("contact_email") {
                settings.contact_email = v.clone();
            }
            if let Some(v) = file_cfg.get("contact_from") {
                settings.contact_from = v.clone();
            }
            if let Some(v) = file_cfg.get("api_base_url") {
                settings.api_base_url = Some(v.clone());
            }
        }
    }

    if let Some(v) = env("PORT") {
        if let Ok(port) = v.trim().parse::<u16>() {
            settings.server_bind = format!("0.0.0.0:{port}");
        }
    }
    if let Some(v) = env("SERVER_BIND") {
        settings.server_bind = v;
    }
    if let Some(v) = env("APP__BIND_ADDR") {
        settings.server_bind = v;
    }

    if let Some(v) = env("API_KEY_RESEND") {
        settings.resend_api_key = Some(v).filter(|key| !key.trim().is_empty());
    }
    if let Some(v) = env("RESEND_API_URL") {
        settings.resend_api_url = v;
    }
    if let Some(v) = env("CONTACT_EMAIL").filter(|email| !email.trim().is_empty()) {
        settings.contact_email = v;
    }
    if let Some(v) = env("CONTACT_FROM") {
        settings.contact_from = v;
    }
    if let Some(v) = env("API_BASE_URL") {
        settings.api_base_url = Some(v);
    }

    settings
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
