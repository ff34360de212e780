use actix_web::{
    error::JsonPayloadError,
    web,
    HttpRequest,
};

use crate::errors::AppError;

const JSON_BODY_LIMIT: usize = 64 * 1024;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .limit(JSON_BODY_LIMIT)
            .error_handler(json_error_handler)
    );
}

fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::debug!(path = %req.path(), "Rejected JSON body: {}", err);

    let message = match &err {
        JsonPayloadError::ContentType => "Content-Type must be application/json".to_string(),
        JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
            "Request body is too large".to_string()
        }
        JsonPayloadError::Deserialize(e) => format!("Invalid JSON payload: {}", e),
        _ => format!("Invalid request body: {}", err),
    };

    AppError::BadRequest(message).into()
}
