//! Locale trees and dotted-key lookup.

mod locale_cookie;

use std::sync::Arc;

use serde_json::Value;
use shared::domain::Locale;
use thiserror::Error;

use crate::catalog::GridItem;

pub use locale_cookie::{
    locale_from_cookie, locale_from_cookie_header, LocaleCookie, LOCALE_COOKIE,
    LOCALE_COOKIE_MAX_AGE,
};

const FR_SOURCE: &str = include_str!("../../locales/fr.json");
const EN_SOURCE: &str = include_str!("../../locales/en.json");

#[derive(Debug, Error)]
pub enum I18nError {
    #[error("failed to parse `{locale}` translations: {source}")]
    Parse {
        locale: Locale,
        #[source]
        source: serde_json::Error,
    },
    #[error("`{locale}` translations must be a JSON object at the root")]
    NotAnObject { locale: Locale },
}

/// Result of a lookup. `Missing` carries the requested key, which doubles as
/// the text shown in its place.
#[derive(Debug, Clone, PartialEq)]
pub enum Translation {
    Text(String),
    Structured(Value),
    Missing(String),
}

impl Translation {
    pub fn is_missing(&self) -> bool {
        matches!(self, Translation::Missing(_))
    }

    /// Display text. Structured leaves have no single text form and yield "".
    pub fn text(&self) -> &str {
        match self {
            Translation::Text(text) => text,
            Translation::Missing(key) => key,
            Translation::Structured(_) => "",
        }
    }

    pub fn into_text(self) -> Option<String> {
        match self {
            Translation::Text(text) => Some(text),
            _ => None,
        }
    }

    /// String items of an array leaf; anything else is empty.
    pub fn strings(&self) -> Vec<String> {
        match self {
            Translation::Structured(Value::Array(items)) => items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect(),
            _ => Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Translation::Structured(Value::Array(items)) => items.len(),
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone)]
pub struct Translations {
    fr: Value,
    en: Value,
}

impl Translations {
    /// Trees compiled into the binary.
    pub fn embedded() -> Result<Self, I18nError> {
        let translations = Self::from_sources(FR_SOURCE, EN_SOURCE)?;
        tracing::debug!(locales = ?Locale::ALL, "loaded embedded translations");
        Ok(translations)
    }

    pub fn from_sources(fr: &str, en: &str) -> Result<Self, I18nError> {
        Ok(Self {
            fr: parse_tree(Locale::Fr, fr)?,
            en: parse_tree(Locale::En, en)?,
        })
    }

    fn tree(&self, locale: Locale) -> &Value {
        match locale {
            Locale::Fr => &self.fr,
            Locale::En => &self.en,
        }
    }

    /// Walks `key` segment by segment. Objects are entered by name and arrays
    /// by numeric index; a dead end or an empty leaf yields `Missing`.
    pub fn translate(&self, key: &str, locale: Locale) -> Translation {
        let mut node = self.tree(locale);
        for segment in key.split('.') {
            let next = match node {
                Value::Object(map) => map.get(segment),
                Value::Array(items) => segment
                    .parse::<usize>()
                    .ok()
                    .and_then(|index| items.get(index)),
                _ => None,
            };
            match next {
                Some(child) => node = child,
                None => return Translation::Missing(key.to_string()),
            }
        }
        match node {
            Value::String(text) if !text.is_empty() => Translation::Text(text.clone()),
            Value::Object(_) | Value::Array(_) => Translation::Structured(node.clone()),
            Value::Number(number) => Translation::Text(number.to_string()),
            _ => Translation::Missing(key.to_string()),
        }
    }
}

fn parse_tree(locale: Locale, source: &str) -> Result<Value, I18nError> {
    let tree: Value =
        serde_json::from_str(source).map_err(|source| I18nError::Parse { locale, source })?;
    if !tree.is_object() {
        return Err(I18nError::NotAnObject { locale });
    }
    Ok(tree)
}

/// Per-request locale provider over shared translation trees.
#[derive(Debug, Clone)]
pub struct I18n {
    translations: Arc<Translations>,
    locale: Locale,
}

impl I18n {
    pub fn new(translations: Arc<Translations>, locale: Locale) -> Self {
        Self {
            translations,
            locale,
        }
    }

    /// Locale from a raw `Cookie:` header, default when absent or unknown.
    pub fn from_cookie_header(translations: Arc<Translations>, header: Option<&str>) -> Self {
        let locale = header
            .and_then(locale_from_cookie_header)
            .unwrap_or(Locale::DEFAULT);
        Self::new(translations, locale)
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Switches locale and returns the cookie that persists the choice.
    pub fn set_locale(&mut self, locale: Locale) -> LocaleCookie {
        self.locale = locale;
        LocaleCookie::new(locale, time::OffsetDateTime::now_utc())
    }

    pub fn translate(&self, key: &str) -> Translation {
        self.translations.translate(key, self.locale)
    }

    /// Display text for `key`; the key itself when missing.
    pub fn t(&self, key: &str) -> String {
        self.translate(key).text().to_string()
    }

    /// Lookup scoped to a namespace such as a tile id. A bare key that the
    /// namespace lacks is looked up under `common`.
    pub fn translate_in(&self, namespace: &str, key: &str) -> Translation {
        let scoped = self.translate(&format!("{namespace}.{key}"));
        if scoped.is_missing() && !key.contains('.') {
            let common = self.translate(&format!("common.{key}"));
            if !common.is_missing() {
                return common;
            }
        }
        scoped
    }

    /// Translated text or `fallback` when the key is missing.
    pub fn text_or(&self, key: &str, fallback: &str) -> String {
        self.translate(key)
            .into_text()
            .unwrap_or_else(|| fallback.to_string())
    }

    pub fn item_title(&self, item: &GridItem) -> String {
        self.text_or(&format!("{}.title", item.id), item.title)
    }

    pub fn item_subtitle(&self, item: &GridItem) -> Option<String> {
        self.translate(&format!("{}.subtitle", item.id))
            .into_text()
            .or_else(|| item.subtitle.map(str::to_string))
    }

    pub fn item_description(&self, item: &GridItem) -> String {
        self.text_or(&format!("{}.description", item.id), item.description)
    }
}
