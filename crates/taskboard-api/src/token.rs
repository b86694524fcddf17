use base64::Engine as _;
use serde::Deserialize;

/// Claims we read out of a compact JWT payload. The signature is NOT
/// verified here; the server remains the authority on token validity.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenClaims {
    #[serde(default)]
    pub sub: Option<String>,
    #[serde(default)]
    pub exp: Option<i64>,
}

/// Best-effort decode of a compact JWT's payload segment.
///
/// Returns `None` for anything that is not three dot-separated segments of
/// base64url JSON.
pub fn decode_claims(token: &str) -> Option<TokenClaims> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return None;
    }
    let payload = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(parts[1])
        .ok()?;
    serde_json::from_slice(&payload).ok()
}

/// Whether a stored token should be treated as expired.
///
/// Any decode failure or missing `exp` claim counts as expired; an
/// undecodable credential must never keep a session alive.
pub fn is_token_expired(token: &str) -> bool {
    let Some(claims) = decode_claims(token) else {
        return true;
    };
    let Some(exp) = claims.exp else {
        return true;
    };
    exp < chrono::Utc::now().timestamp()
}
