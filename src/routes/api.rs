use actix_web::{HttpResponse, Responder, get, web};
use chrono::Local;
use log::error;
use serde_json::json;

use crate::domain::booking::SlotRequest;
use crate::forms::bookings::SlotForm;
use crate::repository::DieselRepository;
use crate::services::ServiceError;
use crate::services::bookings::{check_availability, list_bookings};

#[get("/v1/bookings")]
pub async fn api_v1_bookings(repo: web::Data<DieselRepository>) -> impl Responder {
    match list_bookings(repo.get_ref()) {
        Ok(bookings) => HttpResponse::Ok().json(bookings),
        Err(e) => {
            error!("Failed to list bookings: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/v1/availability")]
pub async fn api_v1_availability(
    params: web::Query<SlotForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let request = match SlotRequest::try_from(params.into_inner()) {
        Ok(request) => request,
        Err(e) => return HttpResponse::BadRequest().json(json!({ "message": e.to_string() })),
    };

    let now = Local::now().naive_local();
    match check_availability(&request, now, repo.get_ref()) {
        Ok(outcome) => HttpResponse::Ok().json(json!({
            "outcome": outcome,
            "message": outcome.message(),
        })),
        Err(ServiceError::Internal) => HttpResponse::InternalServerError().finish(),
        Err(e) => HttpResponse::BadRequest().json(json!({ "message": e.to_string() })),
    }
}
