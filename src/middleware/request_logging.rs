use std::time::Instant;

use http::{Extensions, HeaderValue};
use reqwest::{Request, Response};
use reqwest_middleware::{Middleware, Next};
use uuid::Uuid;

/// Outgoing-request middleware tagging every API call with an `X-Request-ID`
/// and logging method, url, status and elapsed time
pub struct RequestLogging;

#[async_trait::async_trait]
impl Middleware for RequestLogging {
    async fn handle(
        &self,
        mut req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        let request_id = req
            .headers()
            .get("X-Request-ID")
            .and_then(|h| h.to_str().ok())
            .map(|s| s.to_string())
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        if let Ok(value) = HeaderValue::from_str(&request_id) {
            req.headers_mut().insert("X-Request-ID", value);
        }

        let method = req.method().clone();
        let url = req.url().clone();
        let started = Instant::now();

        tracing::debug!(
            request_id = %request_id,
            method = %method,
            url = %url,
            "Sending API request"
        );

        let result = next.run(req, extensions).await;
        let elapsed_ms = started.elapsed().as_millis() as u64;

        match &result {
            Ok(res) if res.status().is_success() => tracing::debug!(
                request_id = %request_id,
                status = %res.status(),
                elapsed_ms,
                "API request completed"
            ),
            Ok(res) => tracing::warn!(
                request_id = %request_id,
                method = %method,
                url = %url,
                status = %res.status(),
                elapsed_ms,
                "API request returned error status"
            ),
            Err(e) => tracing::warn!(
                request_id = %request_id,
                method = %method,
                url = %url,
                error = %e,
                elapsed_ms,
                "API request failed"
            ),
        }

        result
    }
}
