use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// Route label for a request that matched no API route.
const STATIC_ROUTE: &str = "static";

/// Logs one line per request, tagged with the matched route template. The
/// query string stays out of the log; only whether `search` was sent is
/// recorded.
pub async fn request_logger(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| STATIC_ROUTE.to_owned());
    let search = search_supplied(request.uri().query());
    let start = Instant::now();

    let response = next.run(request).await;

    let elapsed_ms = start.elapsed().as_millis() as u64;
    let status = response.status().as_u16();

    match status {
        500.. => error!(%method, %route, %path, status, search, elapsed_ms, "request failed"),
        400..=499 => warn!(%method, %route, %path, status, search, elapsed_ms, "request rejected"),
        _ if route == STATIC_ROUTE => debug!(%method, %path, status, elapsed_ms, "static file"),
        _ => info!(%method, %route, status, search, elapsed_ms, "request served"),
    }

    response
}

fn search_supplied(query: Option<&str>) -> bool {
    query.is_some_and(|q| {
        q.split('&')
            .any(|pair| pair == "search" || pair.starts_with("search="))
    })
}
