//! Redirect rules shared by the server middleware and the client guards

use crate::i18n::{detect_locale, split_locale, Locale};

/// Pages that need a session
const PROTECTED_SECTIONS: &[&str] = &["diagnosis", "profile"];
/// Pages a logged-in user has no business seeing
const GUEST_SECTIONS: &[&str] = &["login", "register"];

const NON_PAGE_PREFIXES: &[&str] = &["/api", "/assets", "/wasm", "/_dioxus"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    Protected,
    GuestOnly,
}

/// Rendered page (as opposed to API routes and static files)
pub fn is_page_path(path: &str) -> bool {
    let under_prefix = NON_PAGE_PREFIXES
        .iter()
        .any(|p| path == *p || path.starts_with(&format!("{}/", p)));
    let last_segment = path.rsplit('/').next().unwrap_or_default();
    !under_prefix && !last_segment.contains('.')
}

/// First segment after the locale prefix, e.g. `diagnosis` for `/fr/diagnosis/42`
fn section(rest: &str) -> &str {
    rest.trim_start_matches('/').split('/').next().unwrap_or_default()
}

pub fn access_for(path: &str) -> Access {
    let (_, rest) = split_locale(path);
    let section = section(rest);
    if PROTECTED_SECTIONS.contains(&section) {
        Access::Protected
    } else if GUEST_SECTIONS.contains(&section) {
        Access::GuestOnly
    } else {
        Access::Public
    }
}

pub fn login_path(locale: Locale, next: Option<&str>) -> String {
    match next {
        Some(next) => format!("/{}/login?next={}", locale, urlencoding::encode(next)),
        None => format!("/{}/login", locale),
    }
}

pub fn home_after_login(locale: Locale) -> String {
    format!("/{}/diagnosis", locale)
}

/// Target for a page request without a supported locale prefix
pub fn locale_redirect_target(
    path: &str,
    query: Option<&str>,
    cookie_header: Option<&str>,
    accept_language: Option<&str>,
    default: Locale,
) -> Option<String> {
    if !is_page_path(path) || split_locale(path).0.is_some() {
        return None;
    }

    let locale = detect_locale(query, cookie_header, accept_language, default);
    let rest = if path == "/" { "" } else { path };
    let mut target = format!("/{}{}", locale, rest);
    if let Some(query) = query.filter(|q| !q.is_empty()) {
        target.push('?');
        target.push_str(query);
    }
    Some(target)
}

/// Target when the auth cookie state does not match the page's access rule
pub fn auth_redirect_target(path: &str, query: Option<&str>, has_session: bool) -> Option<String> {
    let locale = split_locale(path).0?;

    match (access_for(path), has_session) {
        (Access::Protected, false) => {
            let next = match query.filter(|q| !q.is_empty()) {
                Some(q) => format!("{}?{}", path, q),
                None => path.to_string(),
            };
            Some(login_path(locale, Some(&next)))
        }
        (Access::GuestOnly, true) => Some(home_after_login(locale)),
        _ => None,
    }
}

/// Where to go after logging in: `next` only if it is a local absolute path
pub fn sanitize_next(next: &str, locale: Locale) -> String {
    let decoded = urlencoding::decode(next).map(|d| d.into_owned()).unwrap_or_default();
    let candidate = decoded.trim();
    let is_local = candidate.starts_with('/')
        && !candidate.starts_with("//")
        && !candidate.contains('\\')
        && !candidate.contains("://");

    if is_local && access_for(candidate) != Access::GuestOnly {
        candidate.to_string()
    } else {
        home_after_login(locale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_page_path() {
        assert!(is_page_path("/"));
        assert!(is_page_path("/fr/about"));
        assert!(is_page_path("/apiary"));
        assert!(!is_page_path("/api/chats"));
        assert!(!is_page_path("/api"));
        assert!(!is_page_path("/assets/dist/bundle.css"));
        assert!(!is_page_path("/favicon.ico"));
        assert!(!is_page_path("/_dioxus/hot-reload"));
    }

    #[test]
    fn test_locale_redirect_target() {
        assert_eq!(
            locale_redirect_target("/", None, None, Some("fr-FR,fr;q=0.9"), Locale::En).as_deref(),
            Some("/fr")
        );
        assert_eq!(
            locale_redirect_target("/faq", Some("x=1"), Some("locale=ar"), None, Locale::En).as_deref(),
            Some("/ar/faq?x=1")
        );
        assert_eq!(
            locale_redirect_target("/about", None, None, None, Locale::Fr).as_deref(),
            Some("/fr/about")
        );
        assert_eq!(locale_redirect_target("/en/about", None, None, None, Locale::En), None);
        assert_eq!(locale_redirect_target("/api/health", None, None, None, Locale::En), None);
    }

    #[test]
    fn test_access_for() {
        assert_eq!(access_for("/en/diagnosis"), Access::Protected);
        assert_eq!(access_for("/fr/diagnosis/42"), Access::Protected);
        assert_eq!(access_for("/ar/profile"), Access::Protected);
        assert_eq!(access_for("/en/login"), Access::GuestOnly);
        assert_eq!(access_for("/en/register"), Access::GuestOnly);
        assert_eq!(access_for("/en/about"), Access::Public);
        assert_eq!(access_for("/en"), Access::Public);
        assert_eq!(access_for("/en/diagnosis-guide"), Access::Public);
    }

    #[test]
    fn test_auth_redirect_target() {
        assert_eq!(
            auth_redirect_target("/fr/diagnosis/42", None, false).as_deref(),
            Some("/fr/login?next=%2Ffr%2Fdiagnosis%2F42")
        );
        assert_eq!(
            auth_redirect_target("/en/profile", Some("tab=appointments"), false).as_deref(),
            Some("/en/login?next=%2Fen%2Fprofile%3Ftab%3Dappointments")
        );
        assert_eq!(auth_redirect_target("/fr/diagnosis", None, true), None);
        assert_eq!(auth_redirect_target("/ar/login", None, true).as_deref(), Some("/ar/diagnosis"));
        assert_eq!(auth_redirect_target("/ar/login", None, false), None);
        assert_eq!(auth_redirect_target("/en/faq", None, false), None);
        assert_eq!(auth_redirect_target("/diagnosis", None, false), None);
    }

    #[test]
    fn test_sanitize_next() {
        assert_eq!(sanitize_next("/fr/diagnosis/42", Locale::Fr), "/fr/diagnosis/42");
        assert_eq!(sanitize_next("%2Fen%2Fprofile", Locale::En), "/en/profile");
        assert_eq!(sanitize_next("https://evil.example", Locale::En), "/en/diagnosis");
        assert_eq!(sanitize_next("//evil.example/x", Locale::En), "/en/diagnosis");
        assert_eq!(sanitize_next("/\\evil.example", Locale::En), "/en/diagnosis");
        assert_eq!(sanitize_next("", Locale::Ar), "/ar/diagnosis");
        assert_eq!(sanitize_next("/en/login", Locale::En), "/en/diagnosis");
    }
}
