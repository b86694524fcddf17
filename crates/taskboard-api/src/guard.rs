use crate::session::SessionStore;
use crate::token::is_token_expired;

/// What a page guard should do with the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    Allow,
    RedirectToLogin,
    RedirectToBoard,
}

/// Guard for pages that require a signed-in user.
///
/// An expired token is wiped from the session before redirecting so a stale
/// credential cannot bounce the user back.
pub fn check_protected(session: &SessionStore) -> RouteDecision {
    match session.token() {
        None => RouteDecision::RedirectToLogin,
        Some(token) if is_token_expired(&token) => {
            tracing::debug!("stored token expired, clearing session");
            session.clear();
            RouteDecision::RedirectToLogin
        }
        Some(_) => RouteDecision::Allow,
    }
}

/// Guard for login/register pages: an already signed-in user goes straight
/// to the board.
pub fn check_public(session: &SessionStore) -> RouteDecision {
    match session.token() {
        Some(token) if !is_token_expired(&token) => RouteDecision::RedirectToBoard,
        Some(_) => {
            session.clear();
            RouteDecision::Allow
        }
        None => RouteDecision::Allow,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine as _;

    fn jwt_expiring_at(exp: i64) -> String {
        let encode = |s: &str| base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(s);
        format!(
            "{}.{}.{}",
            encode(r#"{"alg":"HS256"}"#),
            encode(&format!(r#"{{"exp":{exp}}}"#)),
            encode("sig")
        )
    }

    fn session_with_token(token: &str) -> SessionStore {
        let session = SessionStore::new();
        session.set_token(token);
        session
    }

    #[test]
    fn test_protected_without_token_redirects() {
        let session = SessionStore::new();
        assert_eq!(check_protected(&session), RouteDecision::RedirectToLogin);
    }

    #[test]
    fn test_protected_with_valid_token_allows() {
        let session = session_with_token(&jwt_expiring_at(chrono::Utc::now().timestamp() + 600));
        assert_eq!(check_protected(&session), RouteDecision::Allow);
    }

    #[test]
    fn test_protected_with_expired_token_clears_and_redirects() {
        let session = session_with_token(&jwt_expiring_at(chrono::Utc::now().timestamp() - 600));
        assert_eq!(check_protected(&session), RouteDecision::RedirectToLogin);
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_public_with_valid_token_redirects_to_board() {
        let session = session_with_token(&jwt_expiring_at(chrono::Utc::now().timestamp() + 600));
        assert_eq!(check_public(&session), RouteDecision::RedirectToBoard);
    }

    #[test]
    fn test_public_with_expired_token_clears_and_allows() {
        let session = session_with_token(&jwt_expiring_at(chrono::Utc::now().timestamp() - 600));
        assert_eq!(check_public(&session), RouteDecision::Allow);
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_public_without_token_allows() {
        let session = SessionStore::new();
        assert_eq!(check_public(&session), RouteDecision::Allow);
    }
}
