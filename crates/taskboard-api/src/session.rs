use std::sync::{Mutex, PoisonError};

use taskboard_domain::{AuthResponse, UserProfile};

/// The client's two opaque storage slots: the bearer token and the signed-in
/// user's profile.
///
/// Injected by `Arc` wherever credentials are needed; nothing reads an
/// ambient global.
#[derive(Debug, Default)]
pub struct SessionStore {
    inner: Mutex<Slots>,
}

#[derive(Debug, Default)]
struct Slots {
    token: Option<String>,
    user: Option<UserProfile>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn slots(&self) -> std::sync::MutexGuard<'_, Slots> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn set_token(&self, token: impl Into<String>) {
        self.slots().token = Some(token.into());
    }

    pub fn token(&self) -> Option<String> {
        self.slots().token.clone()
    }

    pub fn set_user(&self, user: UserProfile) {
        self.slots().user = Some(user);
    }

    pub fn user(&self) -> Option<UserProfile> {
        self.slots().user.clone()
    }

    /// Store both slots from a successful login or registration.
    pub fn store(&self, response: &AuthResponse) {
        let mut slots = self.slots();
        slots.token = Some(response.token.clone());
        slots.user = Some(response.user.clone());
    }

    /// Wipe both slots, signing the user out.
    pub fn clear(&self) {
        let mut slots = self.slots();
        slots.token = None;
        slots.user = None;
    }

    pub fn is_authenticated(&self) -> bool {
        self.slots().token.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> UserProfile {
        UserProfile {
            user_id: 5,
            email: "ada@example.com".to_string(),
            role_id: 2,
        }
    }

    #[test]
    fn test_empty_session() {
        let session = SessionStore::new();
        assert!(session.token().is_none());
        assert!(session.user().is_none());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_store_and_clear() {
        let session = SessionStore::new();
        session.store(&AuthResponse {
            user: profile(),
            token: "abc.def.ghi".to_string(),
        });

        assert!(session.is_authenticated());
        assert_eq!(session.token().as_deref(), Some("abc.def.ghi"));
        assert_eq!(session.user().map(|u| u.user_id), Some(5));

        session.clear();
        assert!(!session.is_authenticated());
        assert!(session.user().is_none());
    }

    #[test]
    fn test_set_token_overwrites() {
        let session = SessionStore::new();
        session.set_token("first");
        session.set_token("second");
        assert_eq!(session.token().as_deref(), Some("second"));
    }
}
