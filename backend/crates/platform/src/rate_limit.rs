//! Rate Limiting Infrastructure
//!
//! A fixed-policy, in-process sliding-window limiter. Request history is
//! tracked per opaque client key (in practice the client IP) and pruned
//! lazily on access; there is no background sweeper and no eviction, so
//! keys live for the life of the process.

use chrono::{DateTime, TimeDelta, Utc};
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

/// Rate limit configuration
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    /// Maximum requests allowed in the window
    pub max_requests: u32,
    /// Time window duration
    pub window: Duration,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: 5,
            window: Duration::from_secs(3600),
        }
    }
}

impl RateLimitConfig {
    pub fn new(max_requests: u32, window_secs: u64) -> Self {
        Self {
            max_requests,
            window: Duration::from_secs(window_secs),
        }
    }
}

/// Rate limit check result
#[derive(Debug, Clone)]
pub struct RateLimitResult {
    pub allowed: bool,
    pub remaining: u32,
    pub reset_at: DateTime<Utc>,
}

/// Per-client sliding-window rate limiter.
///
/// The window slides continuously with each call: a request is counted
/// against the trailing `window` interval ending at "now", never against
/// clock-aligned buckets. Rejected requests are not recorded and do not
/// extend the window.
///
/// A single mutex guards the whole key map. `is_allowed` is
/// check-and-record; concurrent callers for the same key cannot
/// interleave the prune-then-append sequence.
pub struct SlidingWindowLimiter {
    config: RateLimitConfig,
    window: TimeDelta,
    clients: Mutex<HashMap<String, Vec<DateTime<Utc>>>>,
}

impl SlidingWindowLimiter {
    pub fn new(config: RateLimitConfig) -> Self {
        let window = TimeDelta::from_std(config.window).unwrap_or(TimeDelta::MAX);
        Self {
            config,
            window,
            clients: Mutex::new(HashMap::new()),
        }
    }

    pub fn max_requests(&self) -> u32 {
        self.config.max_requests
    }

    /// Check whether `client_id` may make a request, recording it if so.
    ///
    /// Prunes the client's stored history to the live window, then either
    /// rejects (at or over the cap, nothing recorded) or appends "now"
    /// and admits. The pruned history is persisted even on rejection.
    pub fn is_allowed(&self, client_id: &str) -> bool {
        self.is_allowed_at(client_id, Utc::now())
    }

    /// Remaining quota for `client_id` under the current window.
    ///
    /// Read-only: staleness is recomputed fresh on every call and the
    /// stored history is left untouched.
    pub fn remaining_requests(&self, client_id: &str) -> u32 {
        self.remaining_at(client_id, Utc::now())
    }

    /// The instant at which the oldest stored request falls out of the
    /// window.
    ///
    /// Reads the raw stored history, not a freshly pruned one. Because
    /// pruning is lazy, the oldest entry may already have aged out, in
    /// which case the returned instant lies in the past; callers treat
    /// it as "retry no later than this". Unknown or empty clients get
    /// "now".
    pub fn reset_time(&self, client_id: &str) -> DateTime<Utc> {
        self.reset_at(client_id, Utc::now())
    }

    /// Combined check for callers that need the diagnostic state along
    /// with the admission decision.
    pub fn check(&self, client_id: &str) -> RateLimitResult {
        let now = Utc::now();
        RateLimitResult {
            allowed: self.is_allowed_at(client_id, now),
            remaining: self.remaining_at(client_id, now),
            reset_at: self.reset_at(client_id, now),
        }
    }

    fn is_allowed_at(&self, client_id: &str, now: DateTime<Utc>) -> bool {
        let mut clients = self.clients.lock().expect("rate limiter mutex poisoned");
        let history = clients.entry(client_id.to_string()).or_default();

        history.retain(|&t| now - t < self.window);

        if history.len() as u32 >= self.config.max_requests {
            return false;
        }

        history.push(now);
        true
    }

    fn remaining_at(&self, client_id: &str, now: DateTime<Utc>) -> u32 {
        let clients = self.clients.lock().expect("rate limiter mutex poisoned");
        let Some(history) = clients.get(client_id) else {
            return self.config.max_requests;
        };

        let live = history.iter().filter(|&&t| now - t < self.window).count() as u32;
        self.config.max_requests.saturating_sub(live)
    }

    fn reset_at(&self, client_id: &str, now: DateTime<Utc>) -> DateTime<Utc> {
        let clients = self.clients.lock().expect("rate limiter mutex poisoned");
        let oldest = clients
            .get(client_id)
            .and_then(|history| history.iter().min())
            .copied();

        match oldest {
            Some(t) => t
                .checked_add_signed(self.window)
                .unwrap_or(DateTime::<Utc>::MAX_UTC),
            None => now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn limiter() -> SlidingWindowLimiter {
        SlidingWindowLimiter::new(RateLimitConfig::default())
    }

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_default_config() {
        let config = RateLimitConfig::default();
        assert_eq!(config.max_requests, 5);
        assert_eq!(config.window, Duration::from_secs(3600));
    }

    #[test]
    fn test_allows_up_to_max_then_rejects() {
        let limiter = limiter();
        let now = t0();

        for _ in 0..5 {
            assert!(limiter.is_allowed_at("1.2.3.4", now));
        }
        assert!(!limiter.is_allowed_at("1.2.3.4", now));
        assert_eq!(limiter.remaining_at("1.2.3.4", now), 0);
    }

    #[test]
    fn test_rejection_is_not_recorded() {
        let limiter = limiter();
        let now = t0();

        for _ in 0..5 {
            assert!(limiter.is_allowed_at("1.2.3.4", now));
        }

        // Repeated rejected attempts must not extend the window: once the
        // original five age out, the client is admitted again.
        for _ in 0..10 {
            assert!(!limiter.is_allowed_at("1.2.3.4", now));
        }

        let later = now + TimeDelta::seconds(3601);
        assert!(limiter.is_allowed_at("1.2.3.4", later));
    }

    #[test]
    fn test_window_slides() {
        let limiter = limiter();
        let now = t0();

        for _ in 0..5 {
            assert!(limiter.is_allowed_at("1.2.3.4", now));
        }
        assert!(!limiter.is_allowed_at("1.2.3.4", now));
        assert_eq!(limiter.remaining_at("1.2.3.4", now), 0);

        // At t0 + 1h + 1s all five have expired; one new admission leaves
        // four remaining.
        let later = now + TimeDelta::seconds(3601);
        assert!(limiter.is_allowed_at("1.2.3.4", later));
        assert_eq!(limiter.remaining_at("1.2.3.4", later), 4);
    }

    #[test]
    fn test_partial_expiry_slides_not_resets() {
        let limiter = limiter();
        let base = t0();

        // One admission per minute for five minutes.
        for i in 0..5 {
            assert!(limiter.is_allowed_at("1.2.3.4", base + TimeDelta::minutes(i)));
        }

        // Just past one hour only the first admission has expired.
        let later = base + TimeDelta::seconds(3630);
        assert!(limiter.is_allowed_at("1.2.3.4", later));
        assert!(!limiter.is_allowed_at("1.2.3.4", later));
    }

    #[test]
    fn test_unseen_client_has_full_quota() {
        let limiter = limiter();
        assert_eq!(limiter.remaining_requests("unseen"), 5);
    }

    #[test]
    fn test_remaining_is_read_only() {
        let limiter = limiter();
        let now = t0();

        assert!(limiter.is_allowed_at("1.2.3.4", now));

        // Reading remaining after expiry neither prunes nor records.
        let later = now + TimeDelta::seconds(3601);
        assert_eq!(limiter.remaining_at("1.2.3.4", later), 5);

        // The stale entry is still stored, so reset_at reflects it.
        assert_eq!(
            limiter.reset_at("1.2.3.4", later),
            now + TimeDelta::seconds(3600)
        );
    }

    #[test]
    fn test_reset_time_unseen_client_is_now() {
        let limiter = limiter();
        let now = t0();
        assert_eq!(limiter.reset_at("unseen", now), now);
    }

    #[test]
    fn test_reset_time_is_oldest_plus_window() {
        let limiter = limiter();
        let now = t0();

        assert!(limiter.is_allowed_at("1.2.3.4", now));
        assert!(limiter.is_allowed_at("1.2.3.4", now + TimeDelta::minutes(10)));

        assert_eq!(
            limiter.reset_at("1.2.3.4", now + TimeDelta::minutes(10)),
            now + TimeDelta::seconds(3600)
        );
    }

    #[test]
    fn test_reset_time_may_lie_in_the_past() {
        // Pruning is lazy: a read-only path leaves stale entries in
        // place, and reset_time reports them as-is.
        let limiter = limiter();
        let now = t0();

        assert!(limiter.is_allowed_at("1.2.3.4", now));

        let much_later = now + TimeDelta::hours(2);
        let reset = limiter.reset_at("1.2.3.4", much_later);
        assert_eq!(reset, now + TimeDelta::hours(1));
        assert!(reset < much_later);
    }

    #[test]
    fn test_rejection_persists_pruned_history() {
        let limiter = limiter();
        let now = t0();

        for _ in 0..5 {
            assert!(limiter.is_allowed_at("1.2.3.4", now));
        }

        // An admitting call after expiry prunes in place; the stored
        // history then holds exactly the new admission.
        let later = now + TimeDelta::seconds(3601);
        assert!(limiter.is_allowed_at("1.2.3.4", later));
        assert_eq!(limiter.reset_at("1.2.3.4", later), later + TimeDelta::seconds(3600));
    }

    #[test]
    fn test_clients_are_independent() {
        let limiter = limiter();
        let now = t0();

        for _ in 0..5 {
            assert!(limiter.is_allowed_at("1.2.3.4", now));
        }
        assert!(!limiter.is_allowed_at("1.2.3.4", now));

        assert!(limiter.is_allowed_at("5.6.7.8", now));
        assert_eq!(limiter.remaining_at("5.6.7.8", now), 4);
    }

    #[test]
    fn test_check_reports_state_on_rejection() {
        let limiter = SlidingWindowLimiter::new(RateLimitConfig::new(2, 3600));

        assert!(limiter.check("1.2.3.4").allowed);
        assert!(limiter.check("1.2.3.4").allowed);

        let result = limiter.check("1.2.3.4");
        assert!(!result.allowed);
        assert_eq!(result.remaining, 0);
        assert!(result.reset_at > Utc::now() - TimeDelta::seconds(1));
    }

    #[test]
    fn test_shared_across_threads() {
        use std::sync::Arc;

        let limiter = Arc::new(SlidingWindowLimiter::new(RateLimitConfig::new(50, 3600)));
        let mut handles = Vec::new();

        for _ in 0..4 {
            let limiter = Arc::clone(&limiter);
            handles.push(std::thread::spawn(move || {
                let mut admitted = 0u32;
                for _ in 0..25 {
                    if limiter.is_allowed("9.9.9.9") {
                        admitted += 1;
                    }
                }
                admitted
            }));
        }

        let total: u32 = handles.into_iter().map(|h| h.join().unwrap()).sum();
        assert_eq!(total, 50);
        assert_eq!(limiter.remaining_requests("9.9.9.9"), 0);
    }
}
