//! Per-client request rate limiting.
//!
//! [`RateLimiter`] is the injected port; [`FixedWindowRateLimiter`] keeps a
//! `{count, reset_at}` window per client identifier in a `DashMap`. Each
//! check runs under the map's entry lock, so the read-modify-write on a
//! client's counter is atomic.

use std::time::{Duration, Instant};

use dashmap::DashMap;

/// Longest window a limiter will track. Longer windows are clamped to it.
pub const MAX_WINDOW: Duration = Duration::from_secs(365 * 24 * 60 * 60);

/// Outcome of a rate-limit check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RateDecision {
    /// Request admitted; `remaining` more are allowed in the current window.
    Allowed { remaining: u32 },
    /// Request rejected until the window resets.
    Limited {
        limit: u32,
        window: Duration,
        retry_after: Duration,
    },
}

impl RateDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, RateDecision::Allowed { .. })
    }
}

/// Injected rate-limit service.
pub trait RateLimiter: Send + Sync {
    /// Count one request for `client_id` and decide whether to admit it.
    fn check(&self, client_id: &str) -> RateDecision;

    /// Drop state for clients whose window has expired. Returns how many
    /// entries were removed.
    fn purge_expired(&self) -> usize {
        0
    }
}

#[derive(Debug, Clone, Copy)]
struct Window {
    count: u32,
    reset_at: Instant,
}

/// Fixed-window counter keyed by client identifier.
#[derive(Debug)]
pub struct FixedWindowRateLimiter {
    windows: DashMap<String, Window>,
    max_requests: u32,
    window: Duration,
}

impl FixedWindowRateLimiter {
    /// `window` is clamped to [`MAX_WINDOW`].
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            windows: DashMap::new(),
            max_requests,
            window: window.min(MAX_WINDOW),
        }
    }

    pub fn max_requests(&self) -> u32 {
        self.max_requests
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// End of a window opened at `now`. Falls back to `now` if the clock
    /// cannot represent it.
    fn window_end(&self, now: Instant) -> Instant {
        now.checked_add(self.window).unwrap_or(now)
    }

    /// [`RateLimiter::check`] against an explicit clock reading.
    pub fn check_at(&self, client_id: &str, now: Instant) -> RateDecision {
        let mut entry = self
            .windows
            .entry(client_id.to_string())
            .or_insert_with(|| Window {
                count: 0,
                reset_at: self.window_end(now),
            });

        if now > entry.reset_at {
            entry.count = 0;
            entry.reset_at = self.window_end(now);
        }

        if entry.count >= self.max_requests {
            return RateDecision::Limited {
                limit: self.max_requests,
                window: self.window,
                retry_after: entry.reset_at.saturating_duration_since(now),
            };
        }

        entry.count += 1;
        RateDecision::Allowed {
            remaining: self.max_requests - entry.count,
        }
    }

    /// Drop windows that have already expired. Returns how many were removed.
    pub fn purge_expired_at(&self, now: Instant) -> usize {
        let mut removed = 0;
        self.windows.retain(|_, w| {
            let keep = w.reset_at >= now;
            if !keep {
                removed += 1;
            }
            keep
        });
        removed
    }

    /// Number of clients currently tracked.
    pub fn tracked_clients(&self) -> usize {
        self.windows.len()
    }
}

impl RateLimiter for FixedWindowRateLimiter {
    fn check(&self, client_id: &str) -> RateDecision {
        self.check_at(client_id, Instant::now())
    }

    fn purge_expired(&self) -> usize {
        self.purge_expired_at(Instant::now())
    }
}

/// Human-readable window length, e.g. `1 hour`, `15 minutes`, `30 seconds`.
pub fn describe_window(window: Duration) -> String {
    let secs = window.as_secs();
    let (amount, unit) = if secs >= 3600 && secs % 3600 == 0 {
        (secs / 3600, "hour")
    } else if secs >= 60 && secs % 60 == 0 {
        (secs / 60, "minute")
    } else {
        (secs, "second")
    };
    if amount == 1 {
        format!("1 {unit}")
    } else {
        format!("{amount} {unit}s")
    }
}
