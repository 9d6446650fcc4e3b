use anyhow::{Context, bail};
use axum::http::{HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Cross-origin policy for every route: allow-listed origins are reflected
/// back, anything else gets no `Access-Control-Allow-Origin` at all.
/// Preflight `OPTIONS` requests are answered here without reaching a handler.
pub fn layer(allowed_origins: &[String]) -> anyhow::Result<CorsLayer> {
    let origins = allowed_origins
        .iter()
        .map(|origin| {
            if origin == "*" {
                bail!("wildcard origin is not allowed in CORS_ALLOWED_ORIGINS");
            }
            HeaderValue::from_str(origin).with_context(|| format!("invalid origin {origin:?}"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]))
}
