use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use chrono::Local;
use tera::Tera;

use crate::domain::booking::SlotRequest;
use crate::dto::bookings::{BOOKING_TABLE_HEADERS, BookingRow};
use crate::forms::bookings::{SlotForm, UpdateBookingForm, UpdateBookingFormPayload};
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::ServiceError;
use crate::services::bookings::{
    BookingOutcome, book_hall as book_hall_service, cancel_booking as cancel_booking_service,
    check_availability as check_availability_service, list_bookings as list_bookings_service,
    update_booking as update_booking_service,
};

/// Flash the outcome of a booking operation and redirect back to `location`.
fn respond(result: Result<BookingOutcome, ServiceError>, location: &str) -> HttpResponse {
    match result {
        Ok(BookingOutcome::Unavailable) => {
            FlashMessage::warning(BookingOutcome::Unavailable.message()).send()
        }
        Ok(outcome) => FlashMessage::success(outcome.message()).send(),
        Err(ServiceError::Internal) => return HttpResponse::InternalServerError().finish(),
        Err(err) => FlashMessage::error(err.to_string()).send(),
    }

    redirect(location)
}

fn show_slot_form(
    flash_messages: &IncomingFlashMessages,
    tera: &Tera,
    page: &str,
    title: &str,
    submit: &str,
) -> HttpResponse {
    let mut context = base_context(flash_messages, page);
    context.insert("title", title);
    context.insert("action", &format!("/bookings/{page}"));
    context.insert("submit", submit);
    render_template(tera, "bookings/slot_form.html", &context)
}

fn slot_request(form: SlotForm, location: &str) -> Result<SlotRequest, HttpResponse> {
    SlotRequest::try_from(form).map_err(|e| {
        FlashMessage::error(e.to_string()).send();
        redirect(location)
    })
}

#[get("/bookings")]
pub async fn show_bookings(
    flash_messages: IncomingFlashMessages,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match list_bookings_service(repo.get_ref()) {
        Ok(bookings) => {
            let rows = bookings
                .into_iter()
                .map(BookingRow::from)
                .collect::<Vec<_>>();
            let mut context = base_context(&flash_messages, "bookings");
            context.insert("headers", &BOOKING_TABLE_HEADERS);
            context.insert("bookings", &rows);
            render_template(&tera, "bookings/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to render bookings page: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/bookings/book")]
pub async fn show_book_form(
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    show_slot_form(&flash_messages, &tera, "book", "Book a Hall", "Book")
}

#[post("/bookings/book")]
pub async fn book_hall(
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<SlotForm>,
) -> impl Responder {
    let request = match slot_request(form, "/bookings/book") {
        Ok(request) => request,
        Err(response) => return response,
    };

    let now = Local::now().naive_local();
    respond(
        book_hall_service(&request, now, repo.get_ref()),
        "/bookings/book",
    )
}

#[get("/bookings/cancel")]
pub async fn show_cancel_form(
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    show_slot_form(&flash_messages, &tera, "cancel", "Cancel a Booking", "Cancel")
}

#[post("/bookings/cancel")]
pub async fn cancel_booking(
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<SlotForm>,
) -> impl Responder {
    let request = match slot_request(form, "/bookings/cancel") {
        Ok(request) => request,
        Err(response) => return response,
    };

    respond(
        cancel_booking_service(&request, repo.get_ref()),
        "/bookings/cancel",
    )
}

#[get("/bookings/availability")]
pub async fn show_availability_form(
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    show_slot_form(
        &flash_messages,
        &tera,
        "availability",
        "Check Availability",
        "Check",
    )
}

#[post("/bookings/availability")]
pub async fn check_availability(
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<SlotForm>,
) -> impl Responder {
    let request = match slot_request(form, "/bookings/availability") {
        Ok(request) => request,
        Err(response) => return response,
    };

    let now = Local::now().naive_local();
    respond(
        check_availability_service(&request, now, repo.get_ref()),
        "/bookings/availability",
    )
}

#[get("/bookings/update")]
pub async fn show_update_form(
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let context = base_context(&flash_messages, "update");
    render_template(&tera, "bookings/update.html", &context)
}

#[post("/bookings/update")]
pub async fn update_booking(
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<UpdateBookingForm>,
) -> impl Responder {
    let payload: UpdateBookingFormPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => {
            FlashMessage::error(e.to_string()).send();
            return redirect("/bookings/update");
        }
    };

    let now = Local::now().naive_local();
    respond(
        update_booking_service(&payload.old, &payload.new, now, repo.get_ref()),
        "/bookings/update",
    )
}
