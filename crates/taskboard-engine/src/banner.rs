use std::time::{Duration, Instant};

/// How long a transient banner stays visible.
pub const TRANSIENT_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BannerVariant {
    Error,
    Success,
}

/// A transient error/success signal. The host reaps expired banners through
/// [`crate::BoardController::tick`]; context-scoped errors (open create/edit
/// surfaces) do not expire and live on their context instead.
#[derive(Debug, Clone)]
pub struct Banner {
    pub message: String,
    pub variant: BannerVariant,
    pub created_at: Instant,
}

impl Banner {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            variant: BannerVariant::Error,
            created_at: Instant::now(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            variant: BannerVariant::Success,
            created_at: Instant::now(),
        }
    }

    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.created_at.elapsed() > ttl
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variants() {
        assert_eq!(Banner::error("boom").variant, BannerVariant::Error);
        assert_eq!(Banner::success("saved").variant, BannerVariant::Success);
    }

    #[test]
    fn test_fresh_banner_is_not_expired() {
        let banner = Banner::error("boom");
        assert!(!banner.is_expired(TRANSIENT_TTL));
    }

    #[test]
    fn test_backdated_banner_expires() {
        let mut banner = Banner::success("saved");
        banner.created_at = Instant::now() - (TRANSIENT_TTL + Duration::from_millis(100));
        assert!(banner.is_expired(TRANSIENT_TTL));
    }
}
