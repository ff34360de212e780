use actix_web::{get, HttpResponse, Responder};

use crate::constants::LIVENESS_TEXT;

#[get("/")]
pub async fn home() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(LIVENESS_TEXT)
}
