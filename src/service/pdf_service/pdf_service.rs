use crate::{dto::output, error::Error};
use axum::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PdfService: Send + Sync {
    async fn create_ticket_pdf(&self, ticket_id: &str) -> Result<output::TicketPdf, Error>;
}
