use crate::{
    dto::{input, output},
    error::Error,
};
use axum::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketsService: Send + Sync {
    async fn issue_ticket(&self, form: input::TicketForm) -> Result<output::IssuedTicket, Error>;

    async fn verify_ticket(&self, ticket_id: &str) -> Result<output::TicketVerification, Error>;

    async fn find_tickets(&self) -> Result<Vec<output::Ticket>, Error>;
}
