use actix_cors::Cors;
use actix_web::http::{header, Method};

const PREFLIGHT_MAX_AGE_SECS: usize = 3600;

/// Cross-origin policy for the API.
///
/// Requests without an `Origin` header pass through untouched. Requests whose
/// origin is not on the allow-list are rejected by the middleware before any
/// handler runs. A `*` entry allows every origin.
pub fn build_cors(allowed_origins: &[String]) -> Cors {
    let base = Cors::default()
        .allowed_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION])
        .supports_credentials()
        .max_age(PREFLIGHT_MAX_AGE_SECS);

    if allowed_origins.iter().any(|o| o == "*") {
        return base.allow_any_origin();
    }

    let allowed: Vec<String> = allowed_origins
        .iter()
        .map(|o| o.trim_end_matches('/').to_string())
        .collect();

    base.allowed_origin_fn(move |origin, _req_head| {
        origin
            .to_str()
            .map(|o| is_allowed_origin(&allowed, o))
            .unwrap_or(false)
    })
}

pub fn is_allowed_origin(allowed: &[String], origin: &str) -> bool {
    let origin = origin.trim_end_matches('/');
    allowed.iter().any(|o| o == origin)
}
