//! Cookie header helpers shared by the server middleware and handlers

/// HTTP-only cookie holding the backend bearer token
pub const AUTH_COOKIE: &str = "auth_token";

/// Lifetime of the auth cookie (7 days)
pub const AUTH_COOKIE_MAX_AGE_SECS: i64 = 7 * 24 * 60 * 60;

/// Value of cookie `name` in a `Cookie` request header
pub fn cookie_value(header: &str, name: &str) -> Option<String> {
    header.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        if key.trim() == name {
            let value = value.trim().trim_matches('"');
            (!value.is_empty()).then(|| value.to_string())
        } else {
            None
        }
    })
}

/// Attributes of a `Set-Cookie` header
#[derive(Debug, Clone, PartialEq)]
pub struct CookieSpec<'a> {
    pub name: &'a str,
    pub value: &'a str,
    pub max_age_secs: i64,
    pub http_only: bool,
    pub secure: bool,
}

impl CookieSpec<'_> {
    pub fn to_header_value(&self) -> String {
        let mut header = format!(
            "{}={}; Path=/; SameSite=Lax; Max-Age={}",
            self.name, self.value, self.max_age_secs
        );
        if self.http_only {
            header.push_str("; HttpOnly");
        }
        if self.secure {
            header.push_str("; Secure");
        }
        header
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cookie_value() {
        let header = "theme=dark; auth_token=abc.def; locale=\"fr\"";
        assert_eq!(cookie_value(header, "auth_token").as_deref(), Some("abc.def"));
        assert_eq!(cookie_value(header, "locale").as_deref(), Some("fr"));
        assert_eq!(cookie_value(header, "missing"), None);
        assert_eq!(cookie_value("auth_token=", "auth_token"), None);
        assert_eq!(cookie_value("xauth_token=1", "auth_token"), None);
    }

    #[test]
    fn test_set_cookie_header() {
        let spec = CookieSpec {
            name: "auth_token",
            value: "t0k",
            max_age_secs: 604800,
            http_only: true,
            secure: true,
        };
        assert_eq!(
            spec.to_header_value(),
            "auth_token=t0k; Path=/; SameSite=Lax; Max-Age=604800; HttpOnly; Secure"
        );

        let plain = CookieSpec { http_only: false, secure: false, ..spec };
        assert_eq!(plain.to_header_value(), "auth_token=t0k; Path=/; SameSite=Lax; Max-Age=604800");
    }
}
