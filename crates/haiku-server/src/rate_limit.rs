use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::task::{Context, Poll};
use std::time::{Duration, Instant};

use dashmap::DashMap;
use tower::{Layer, Service};
use tracing::warn;

const LOG_INTERVAL: Duration = Duration::from_secs(60);

/// Per-client token buckets refilled continuously at a fixed rate.
#[derive(Clone)]
pub struct RateLimitLayer {
    refill_per_sec: f64,
    burst: f64,
}

impl RateLimitLayer {
    pub fn new(refill_per_sec: u32, burst: u32) -> Self {
        Self {
            refill_per_sec: f64::from(refill_per_sec),
            burst: f64::from(burst),
        }
    }
}

impl<S> Layer<S> for RateLimitLayer {
    type Service = RateLimit<S>;

    fn layer(&self, inner: S) -> Self::Service {
        RateLimit {
            inner,
            buckets: Arc::new(DashMap::new()),
            dropped: Arc::new(AtomicU64::new(0)),
            last_log: Arc::new(std::sync::Mutex::new(Instant::now())),
            refill_per_sec: self.refill_per_sec,
            burst: self.burst,
        }
    }
}

#[derive(Clone)]
pub struct RateLimit<S> {
    inner: S,
    buckets: Arc<DashMap<String, Bucket>>,
    dropped: Arc<AtomicU64>,
    last_log: Arc<std::sync::Mutex<Instant>>,
    refill_per_sec: f64,
    burst: f64,
}

#[derive(Debug, Clone)]
struct Bucket {
    tokens: f64,
    refilled_at: Instant,
}

impl<S, ReqBody> Service<axum::http::Request<ReqBody>> for RateLimit<S>
where
    S: Service<axum::http::Request<ReqBody>, Response = axum::http::Response<axum::body::Body>>
        + Send
        + 'static,
    S::Future: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: axum::http::Request<ReqBody>) -> Self::Future {
        if let Some(client) = client_ip(&req)
            && !self.take_token(&client)
        {
            self.dropped.fetch_add(1, Ordering::Relaxed);
            self.log_drops();
            return Box::pin(async move {
                Ok(axum::http::Response::builder()
                    .status(axum::http::StatusCode::TOO_MANY_REQUESTS)
                    .body(axum::body::Body::from("rate limited"))
                    .expect("static response"))
            });
        }

        let fut = self.inner.call(req);
        Box::pin(fut)
    }
}

/// First hop of `X-Forwarded-For`; absent when the service is hit directly,
/// in which case no limit applies.
fn client_ip<B>(req: &axum::http::Request<B>) -> Option<String> {
    req.headers()
        .get("x-forwarded-for")
        .and_then(|h| h.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

impl<S> RateLimit<S> {
    fn take_token(&self, client: &str) -> bool {
        let mut bucket = self.buckets.entry(client.to_string()).or_insert(Bucket {
            tokens: self.burst,
            refilled_at: Instant::now(),
        });
        let now = Instant::now();
        let elapsed = now.saturating_duration_since(bucket.refilled_at).as_secs_f64();
        if elapsed > 0.0 {
            bucket.tokens = (bucket.tokens + elapsed * self.refill_per_sec).min(self.burst);
            bucket.refilled_at = now;
        }
        if bucket.tokens >= 1.0 {
            bucket.tokens -= 1.0;
            true
        } else {
            false
        }
    }

    fn log_drops(&self) {
        let now = Instant::now();
        let Ok(mut last) = self.last_log.lock() else {
            return;
        };
        if now.saturating_duration_since(*last) >= LOG_INTERVAL {
            let dropped = self.dropped.swap(0, Ordering::Relaxed);
            if dropped > 0 {
                warn!("rate limiter dropped {dropped} requests in the last minute");
            }
            *last = now;
        }
    }
}
