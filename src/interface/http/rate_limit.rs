use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use tokio::sync::Mutex;

const WINDOW_LENGTH: Duration = Duration::from_secs(1);

/// Fixed-window request limiter: up to `permit_limit` requests per one-second
/// window, no queueing. Over-limit requests are rejected before they reach a
/// handler.
#[derive(Debug)]
pub struct FixedWindowLimiter {
    permit_limit: u32,
    window: Mutex<Window>,
}

#[derive(Debug)]
struct Window {
    started_at: Instant,
    used: u32,
}

impl FixedWindowLimiter {
    pub fn new(permit_limit: u32) -> Self {
        Self {
            permit_limit,
            window: Mutex::new(Window {
                started_at: Instant::now(),
                used: 0,
            }),
        }
    }

    pub async fn try_acquire(&self) -> bool {
        let mut window = self.window.lock().await;

        let now = Instant::now();
        if now.duration_since(window.started_at) >= WINDOW_LENGTH {
            window.started_at = now;
            window.used = 0;
        }

        if window.used < self.permit_limit {
            window.used += 1;
            true
        } else {
            false
        }
    }
}

pub async fn enforce(
    State(limiter): State<Arc<FixedWindowLimiter>>,
    request: Request,
    next: Next,
) -> Response {
    if limiter.try_acquire().await {
        next.run(request).await
    } else {
        StatusCode::TOO_MANY_REQUESTS.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn exhausts_permits_within_one_window() {
        let limiter = FixedWindowLimiter::new(2);
        assert!(limiter.try_acquire().await);
        assert!(limiter.try_acquire().await);
        assert!(!limiter.try_acquire().await);
    }

    #[tokio::test]
    async fn zero_permit_limit_rejects_everything() {
        let limiter = FixedWindowLimiter::new(0);
        assert!(!limiter.try_acquire().await);
    }

    #[tokio::test]
    async fn window_expiry_replenishes_permits() {
        let limiter = FixedWindowLimiter::new(1);
        assert!(limiter.try_acquire().await);
        assert!(!limiter.try_acquire().await);

        tokio::time::sleep(WINDOW_LENGTH + Duration::from_millis(50)).await;
        assert!(limiter.try_acquire().await);
    }
}
