//! Locales and translation lookup
//!
//! Message bundles live in `messages/<locale>.json` as nested objects and are
//! embedded at compile time. Lookups use dotted keys (`nav.about`) and fall
//! back to English, then to the key itself.

pub mod detect;

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use detect::{detect_locale, negotiate_accept_language, split_locale, switch_locale_path};

/// Cookie remembering the visitor's explicit locale choice
pub const LOCALE_COOKIE: &str = "locale";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Fr,
    Ar,
}

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::En, Locale::Fr, Locale::Ar];

    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Fr => "fr",
            Locale::Ar => "ar",
        }
    }

    /// Text direction for the `dir` attribute
    pub fn dir(&self) -> &'static str {
        match self {
            Locale::Ar => "rtl",
            _ => "ltr",
        }
    }

    /// Name of the language in that language, for the switcher
    pub fn native_name(&self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Fr => "Français",
            Locale::Ar => "العربية",
        }
    }

    /// Parse a BCP 47 tag by its primary subtag (`fr-CA` -> `fr`)
    pub fn from_tag(tag: &str) -> Option<Locale> {
        let primary = tag.trim().split(['-', '_']).next()?.to_ascii_lowercase();
        Locale::ALL.into_iter().find(|l| l.as_str() == primary)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported locale: {0}")]
pub struct UnsupportedLocale(pub String);

/// Strict parse used by the router: only exact lowercase codes match
impl FromStr for Locale {
    type Err = UnsupportedLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::ALL
            .into_iter()
            .find(|l| l.as_str() == s)
            .ok_or_else(|| UnsupportedLocale(s.to_string()))
    }
}

fn parse_bundle(locale: Locale, raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|e| {
        tracing::error!(locale = locale.as_str(), "Invalid message bundle: {}", e);
        Value::Null
    })
}

static BUNDLES: Lazy<[Value; 3]> = Lazy::new(|| {
    [
        parse_bundle(Locale::En, include_str!("../../messages/en.json")),
        parse_bundle(Locale::Fr, include_str!("../../messages/fr.json")),
        parse_bundle(Locale::Ar, include_str!("../../messages/ar.json")),
    ]
});

fn bundle(locale: Locale) -> &'static Value {
    match locale {
        Locale::En => &BUNDLES[0],
        Locale::Fr => &BUNDLES[1],
        Locale::Ar => &BUNDLES[2],
    }
}

/// Walk a dotted key through nested objects (numeric segments index arrays)
fn lookup<'a>(root: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.').try_fold(root, |node, segment| match node {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}

fn lookup_str(locale: Locale, key: &str) -> Option<&'static str> {
    lookup(bundle(locale), key).and_then(Value::as_str)
}

/// Translate `key`; never empty, never panics
pub fn t(locale: Locale, key: &str) -> String {
    lookup_str(locale, key)
        .or_else(|| lookup_str(Locale::En, key))
        .map(str::to_string)
        .unwrap_or_else(|| {
            tracing::debug!(locale = locale.as_str(), key = key, "Missing translation");
            key.to_string()
        })
}

/// Translate and replace `{name}` placeholders
pub fn t_args(locale: Locale, key: &str, args: &[(&str, &str)]) -> String {
    args.iter().fold(t(locale, key), |text, (name, value)| {
        text.replace(&format!("{{{}}}", name), value)
    })
}

/// Array-valued entry (e.g. FAQ items), falling back to English
pub fn t_list(locale: Locale, key: &str) -> Vec<Value> {
    lookup(bundle(locale), key)
        .and_then(Value::as_array)
        .or_else(|| lookup(bundle(Locale::En), key).and_then(Value::as_array))
        .cloned()
        .unwrap_or_default()
}
