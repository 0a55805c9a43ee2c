//! Locale negotiation for requests that carry no locale prefix
//!
//! Order: `?lang=` query override, `locale` cookie, `Accept-Language`,
//! then the default.

use super::{Locale, LOCALE_COOKIE};
use crate::shared::utils::cookies::cookie_value;

/// Supported locales from an `Accept-Language` header, best first
pub fn negotiate_accept_language(header: &str) -> Option<Locale> {
    let mut candidates: Vec<(f32, usize, Locale)> = header
        .split(',')
        .enumerate()
        .filter_map(|(position, part)| {
            let mut pieces = part.trim().split(';');
            let tag = pieces.next()?.trim();
            let quality = pieces
                .find_map(|p| p.trim().strip_prefix("q="))
                .and_then(|q| q.trim().parse::<f32>().ok())
                .unwrap_or(1.0);
            if quality <= 0.0 {
                return None;
            }
            Locale::from_tag(tag).map(|locale| (quality, position, locale))
        })
        .collect();

    // Highest quality first; header order breaks ties
    candidates.sort_by(|a, b| b.0.total_cmp(&a.0).then(a.1.cmp(&b.1)));
    candidates.first().map(|(_, _, locale)| *locale)
}

fn query_locale(query: &str) -> Option<Locale> {
    query.split('&').find_map(|kv| {
        let mut it = kv.splitn(2, '=');
        let key = it.next()?;
        let value = it.next()?;
        if key == "lang" { Locale::from_tag(value) } else { None }
    })
}

pub fn detect_locale(
    query: Option<&str>,
    cookie_header: Option<&str>,
    accept_language: Option<&str>,
    default: Locale,
) -> Locale {
    query
        .and_then(query_locale)
        .or_else(|| {
            cookie_header
                .and_then(|h| cookie_value(h, LOCALE_COOKIE))
                .and_then(|v| Locale::from_tag(&v))
        })
        .or_else(|| accept_language.and_then(negotiate_accept_language))
        .unwrap_or(default)
}

/// Split `/fr/about` into `(Some(Fr), "/about")`; unprefixed paths are returned whole
pub fn split_locale(path: &str) -> (Option<Locale>, &str) {
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    let (first, rest) = match trimmed.find('/') {
        Some(i) => (&trimmed[..i], &trimmed[i..]),
        None => (trimmed, ""),
    };
    match first.parse::<Locale>() {
        Ok(locale) => (Some(locale), if rest.is_empty() { "/" } else { rest }),
        Err(_) => (None, path),
    }
}

/// Same page in another locale
pub fn switch_locale_path(path: &str, target: Locale) -> String {
    let (_, rest) = split_locale(path);
    if rest == "/" || rest.is_empty() {
        format!("/{}", target)
    } else {
        format!("/{}{}", target, rest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accept_language_quality_order() {
        assert_eq!(negotiate_accept_language("de-DE,fr;q=0.8,ar;q=0.9"), Some(Locale::Ar));
        assert_eq!(negotiate_accept_language("fr-FR,fr;q=0.9,en;q=0.8"), Some(Locale::Fr));
        assert_eq!(negotiate_accept_language("de,es"), None);
        assert_eq!(negotiate_accept_language("fr;q=0,en;q=0.1"), Some(Locale::En));
        assert_eq!(negotiate_accept_language(""), None);
    }

    #[test]
    fn test_accept_language_ties_keep_header_order() {
        assert_eq!(negotiate_accept_language("ar;q=0.5,fr;q=0.5"), Some(Locale::Ar));
    }

    #[test]
    fn test_detect_locale_precedence() {
        let cookie = "theme=dark; locale=fr";
        assert_eq!(
            detect_locale(Some("lang=ar"), Some(cookie), Some("en"), Locale::En),
            Locale::Ar
        );
        assert_eq!(detect_locale(None, Some(cookie), Some("ar"), Locale::En), Locale::Fr);
        assert_eq!(detect_locale(None, None, Some("ar-MA"), Locale::En), Locale::Ar);
        assert_eq!(detect_locale(None, Some("locale=xx"), None, Locale::Fr), Locale::Fr);
    }

    #[test]
    fn test_split_locale() {
        assert_eq!(split_locale("/fr/about"), (Some(Locale::Fr), "/about"));
        assert_eq!(split_locale("/ar"), (Some(Locale::Ar), "/"));
        assert_eq!(split_locale("/about"), (None, "/about"));
        assert_eq!(split_locale("/"), (None, "/"));
        assert_eq!(split_locale("/france/x"), (None, "/france/x"));
    }

    #[test]
    fn test_switch_locale_path() {
        assert_eq!(switch_locale_path("/fr/about", Locale::Ar), "/ar/about");
        assert_eq!(switch_locale_path("/en", Locale::Fr), "/fr");
        assert_eq!(switch_locale_path("/faq", Locale::Fr), "/fr/faq");
        assert_eq!(
            switch_locale_path("/en/diagnosis/42", Locale::Fr),
            "/fr/diagnosis/42"
        );
    }
}
