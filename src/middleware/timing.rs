//! Per-request timing middleware.

use std::time::Instant;

use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};

pub const PROCESS_TIME_HEADER: &str = "x-process-time";

/// Stamps every response with `X-Process-Time`, the wall-clock duration of
/// the request in fractional seconds. Outermost layer, so the value covers
/// the gate wait as well.
pub async fn process_time_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let mut res = next.run(req).await;
    let elapsed = start.elapsed().as_secs_f64();
    if let Ok(value) = HeaderValue::from_str(&format!("{:.6}", elapsed)) {
        res.headers_mut().insert(HeaderName::from_static(PROCESS_TIME_HEADER), value);
    }
    res
}
