//! `localStorage` mirror of the logged-in user
//!
//! The session token lives in an HttpOnly cookie; this copy only lets the
//! UI render the right navbar and guards before `/api/auth/me` answers.

use crate::domain::models::User;

const USER_KEY: &str = "user";
const LOGGED_IN_KEY: &str = "isLoggedIn";

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Save user to localStorage
#[cfg(target_arch = "wasm32")]
pub fn save_session_user(user: &User) {
    let Some(storage) = local_storage() else { return };
    match serde_json::to_string(user) {
        Ok(json) => {
            let _ = storage.set_item(USER_KEY, &json);
            let _ = storage.set_item(LOGGED_IN_KEY, "true");
        }
        Err(e) => tracing::warn!("Failed to serialize session user: {}", e),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn save_session_user(_user: &User) {
    // No-op on server
}

/// Stored user, only when the logged-in flag is set and the JSON is valid
#[cfg(target_arch = "wasm32")]
pub fn load_session_user() -> Option<User> {
    let storage = local_storage()?;
    let logged_in = storage.get_item(LOGGED_IN_KEY).ok().flatten();
    if logged_in.as_deref() != Some("true") {
        return None;
    }
    let json = storage.get_item(USER_KEY).ok().flatten()?;
    parse_user(&json)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_session_user() -> Option<User> {
    None
}

#[cfg(target_arch = "wasm32")]
pub fn clear_session() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(USER_KEY);
        let _ = storage.remove_item(LOGGED_IN_KEY);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn clear_session() {
    // No-op on server
}

fn parse_user(json: &str) -> Option<User> {
    serde_json::from_str(json).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_user() {
        let user = parse_user(r#"{"id":"1","name":"Amina","email":"a@b.co"}"#);
        assert_eq!(user.map(|u| u.name), Some("Amina".to_string()));
        assert!(parse_user("not json").is_none());
    }

    #[test]
    fn test_server_side_mirror_is_empty() {
        clear_session();
        assert!(load_session_user().is_none());
    }
}
