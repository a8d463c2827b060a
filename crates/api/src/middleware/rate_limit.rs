//! Per-client-address rate limiting for the `/api` subtree.
//!
//! Rolling window: a request is admitted while the client has fewer than
//! `max_requests` admissions younger than `window`. State is in-memory and
//! per-process, matching the single-instance deployment model.

use std::collections::{HashMap, VecDeque};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::extract::{ConnectInfo, Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tokio::sync::Mutex;

use crate::error::AppError;
use crate::state::AppState;

/// Rolling-window request budget keyed by client IP.
#[derive(Clone)]
pub struct RateLimiter {
    max_requests: usize,
    window: Duration,
    hits: Arc<Mutex<HashMap<IpAddr, VecDeque<Instant>>>>,
}

impl RateLimiter {
    pub fn new(max_requests: usize, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            hits: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Admit or reject one request from `addr`, recording it when admitted.
    pub async fn try_acquire(&self, addr: IpAddr) -> bool {
        let now = Instant::now();
        let mut hits = self.hits.lock().await;
        let stamps = hits.entry(addr).or_default();

        while stamps
            .front()
            .is_some_and(|t| now.duration_since(*t) >= self.window)
        {
            stamps.pop_front();
        }

        if stamps.len() >= self.max_requests {
            return false;
        }
        stamps.push_back(now);
        true
    }
}

/// Axum middleware enforcing the limiter on every request it wraps.
///
/// The client address comes from [`ConnectInfo`] when the server was started
/// with connect info (as `main.rs` does); requests without it (e.g. router
/// `oneshot` calls in tests) fall back to localhost.
pub async fn enforce(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let addr = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|info| info.0.ip())
        .unwrap_or(IpAddr::V4(Ipv4Addr::LOCALHOST));

    if state.rate_limiter.try_acquire(addr).await {
        next.run(request).await
    } else {
        tracing::warn!(%addr, "Rate limit exceeded");
        AppError::RateLimited.into_response()
    }
}
