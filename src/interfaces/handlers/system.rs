use actix_web::{get, web, HttpResponse, Responder};

use crate::AppState;

#[get("/health")]
pub async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let report = state.health_handler.report().await;

    if report.is_up() {
        HttpResponse::Ok().json(report)
    } else {
        HttpResponse::ServiceUnavailable().json(report)
    }
}
