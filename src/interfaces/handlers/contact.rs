use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{entities::message::ContactForm, errors::AppError, AppState};

#[instrument(skip(state, form))]
pub async fn submit_contact(
    state: web::Data<AppState>,
    form: web::Json<ContactForm>,
) -> Result<impl Responder, AppError> {
    let receipt = state.contact_handler
        .submit_contact_message(form.into_inner())
        .await?;

    // The notification task keeps running after its handle is dropped
    Ok(HttpResponse::Created().json(receipt.response))
}
