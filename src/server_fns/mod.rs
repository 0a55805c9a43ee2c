//! Server functions for Dioxus Fullstack
//! These functions run on the server and are callable from the client

use dioxus::prelude::*;

use crate::domain::models::Doctor;

// ============================================================
// Doctor directory cache (server-side only)
// ============================================================
#[cfg(not(target_arch = "wasm32"))]
pub(crate) mod cache {
    use dashmap::DashMap;
    use once_cell::sync::Lazy;
    use std::time::{Duration, Instant};

    use crate::domain::models::{known_specialty, Doctor};
    use crate::shared::logging::log_cache_hit;

    pub struct CachedDoctors {
        pub doctors: Vec<Doctor>,
        pub cached_at: Instant,
    }

    /// Keyed by `cache_key`, so it holds at most one entry per known specialty
    pub static DOCTOR_CACHE: Lazy<DashMap<String, CachedDoctors>> = Lazy::new(DashMap::new);

    /// Cache TTL: 5 minutes
    pub const CACHE_TTL: Duration = Duration::from_secs(300);

    /// `*` for the unfiltered list, the canonical id for a known specialty,
    /// `None` (not cached) for anything else
    pub fn cache_key(specialty: Option<&str>) -> Option<String> {
        match specialty {
            None => Some("*".to_string()),
            Some(s) => known_specialty(s).map(str::to_string),
        }
    }

    /// Get from cache if not expired
    pub fn get_cached(key: &str, now: Instant) -> Option<Vec<Doctor>> {
        if let Some(entry) = DOCTOR_CACHE.get(key) {
            if now.saturating_duration_since(entry.cached_at) < CACHE_TTL {
                log_cache_hit(key, true);
                return Some(entry.doctors.clone());
            } else {
                // Expired, remove from cache
                drop(entry);
                DOCTOR_CACHE.remove(key);
            }
        }
        log_cache_hit(key, false);
        None
    }

    pub fn set_cached(key: &str, doctors: Vec<Doctor>, now: Instant) {
        DOCTOR_CACHE.retain(|_, entry| now.saturating_duration_since(entry.cached_at) < CACHE_TTL);
        DOCTOR_CACHE.insert(key.to_string(), CachedDoctors { doctors, cached_at: now });
    }
}

/// Doctor directory, optionally filtered by specialty.
/// Public data: rendered on the server and cached for five minutes.
#[server]
pub async fn get_doctors(specialty: Option<String>) -> Result<Vec<Doctor>, ServerFnError> {
    use crate::infrastructure::backend::shared_backend;
    use std::time::Instant;

    let specialty = specialty
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .map(|s| crate::domain::models::known_specialty(&s).map(str::to_string).unwrap_or(s));
    let key = cache::cache_key(specialty.as_deref());

    if let Some(doctors) = key.as_deref().and_then(|k| cache::get_cached(k, Instant::now())) {
        return Ok(doctors);
    }

    let backend = shared_backend().map_err(|e| ServerFnError::new(e.to_string()))?;
    let doctors = backend.list_doctors(specialty.as_deref()).await.map_err(|e| {
        tracing::error!("Failed to load doctor directory: {}", e);
        ServerFnError::new(e.to_string())
    })?;

    match key {
        Some(key) => cache::set_cached(&key, doctors.clone(), Instant::now()),
        None => tracing::debug!(specialty = ?specialty, "Unknown specialty, not cached"),
    }
    Ok(doctors)
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::cache::*;
    use crate::domain::models::Doctor;
    use std::time::{Duration, Instant};

    fn doctor(id: &str) -> Doctor {
        Doctor {
            id: id.to_string(),
            name: format!("Dr {}", id),
            specialty: "pediatrics".to_string(),
            bio: None,
            rating: None,
            photo_url: None,
            languages: vec![],
            available: true,
        }
    }

    #[test]
    fn test_cache_key() {
        assert_eq!(cache_key(None).as_deref(), Some("*"));
        assert_eq!(cache_key(Some("cardiology")).as_deref(), Some("cardiology"));
        assert_eq!(cache_key(Some("NEUROLOGY")).as_deref(), Some("neurology"));
    }

    #[test]
    fn test_unknown_specialties_are_not_cached() {
        assert_eq!(cache_key(Some("x-0001")), None);
        assert_eq!(cache_key(Some("cardiology-and-more")), None);
    }

    #[test]
    fn test_insert_purges_expired_entries() {
        let now = Instant::now();
        // Entries of other tests are fresh, only this one is old enough to go
        let Some(long_ago) = now.checked_sub(CACHE_TTL * 2) else { return };
        set_cached("test-purge-old", vec![doctor("p1")], long_ago);
        set_cached("test-purge-new", vec![doctor("p2")], now);

        assert!(!DOCTOR_CACHE.contains_key("test-purge-old"));
        assert!(DOCTOR_CACHE.contains_key("test-purge-new"));
    }

    #[test]
    fn test_cache_ttl() {
        let key = "test-ttl-pediatrics";
        let start = Instant::now();
        set_cached(key, vec![doctor("p1")], start);

        let hit = get_cached(key, start + Duration::from_secs(60)).unwrap();
        assert_eq!(hit[0].id, "p1");

        assert!(get_cached(key, start + CACHE_TTL + Duration::from_secs(1)).is_none());
        // Expired entries are evicted
        assert!(get_cached(key, start).is_none());
    }
}
