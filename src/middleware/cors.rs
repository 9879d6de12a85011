// CORS configuration

use axum::http::HeaderValue;
use tower_http::cors::{Any, CorsLayer};

/// Build the CORS layer from configured origins; "*" (the default) opens
/// the API to any origin, matching the original deployment.
pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if allowed_origins.iter().any(|o| o == "*") {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();
    layer.allow_origin(origins)
}
