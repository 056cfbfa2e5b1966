use axum::body::Body;
use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Log method, path, status and timing for every request
pub async fn log_request(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    let duration = start.elapsed();
    tracing::info!(
        "{:>5}ms | {} {:>6} {}",
        duration.as_millis(),
        response.status().as_u16(),
        method,
        path
    );

    response
}
