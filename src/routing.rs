use crate::{
    application::ApplicationState,
    dto::{input, output},
    error::Error,
    service::{
        pdf_service::PdfService, qr_codes_service::QR_CODES_URL_PATH,
        tickets_service::TicketsService,
    },
    view,
};
use axum::{
    extract::{Path, State},
    http::{
        header::{CONTENT_DISPOSITION, CONTENT_TYPE},
        HeaderValue, StatusCode,
    },
    response::{IntoResponse, Response},
    routing::get,
    Form, Router,
};
use maud::Markup;
use std::sync::Arc;
use tower_http::services::ServeDir;

pub fn routing(qr_codes: ServeDir) -> Router<ApplicationState> {
    Router::new()
        .route("/", get(index).post(issue_ticket))
        .route("/verify/:ticket_id", get(verify_ticket))
        .route("/get", get(find_tickets))
        .route("/about", get(about))
        .route("/pdf/:ticket_id", get(ticket_pdf))
        .nest_service(QR_CODES_URL_PATH, qr_codes)
}

async fn index() -> Markup {
    view::index(None)
}

async fn issue_ticket(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    Form(form): Form<input::TicketForm>,
) -> Result<Markup, Error> {
    let ticket = tickets_service.issue_ticket(form).await?;

    Ok(view::success(&ticket))
}

async fn verify_ticket(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    Path(ticket_id): Path<String>,
) -> Result<(StatusCode, Markup), Error> {
    let verification = tickets_service.verify_ticket(&ticket_id).await?;

    let response = match verification {
        output::TicketVerification::Verified(ticket) => (StatusCode::OK, view::verified(&ticket)),
        output::TicketVerification::AlreadyUsed { ticket_id } => {
            (StatusCode::CONFLICT, view::used(&ticket_id))
        }
    };

    Ok(response)
}

async fn find_tickets(
    State(tickets_service): State<Arc<dyn TicketsService>>,
) -> Result<Markup, Error> {
    let tickets = tickets_service.find_tickets().await?;

    Ok(view::tickets(&tickets))
}

async fn about() -> Markup {
    view::about()
}

async fn ticket_pdf(
    State(pdf_service): State<Arc<dyn PdfService>>,
    Path(ticket_id): Path<String>,
) -> Result<Response, Error> {
    let pdf = pdf_service.create_ticket_pdf(&ticket_id).await?;

    let status = match pdf.ticket_found {
        true => StatusCode::OK,
        false => StatusCode::NOT_FOUND,
    };

    let filename_safe = pdf
        .filename
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.' || c == '-');
    let content_disposition = match filename_safe {
        true => HeaderValue::from_str(&format!("attachment; filename=\"{}\"", pdf.filename)).ok(),
        false => None,
    }
    .unwrap_or(HeaderValue::from_static(
        "attachment; filename=\"ticket.pdf\"",
    ));

    let headers = [
        (CONTENT_TYPE, HeaderValue::from_static("application/pdf")),
        (CONTENT_DISPOSITION, content_disposition),
    ];

    Ok((status, headers, pdf.content).into_response())
}
