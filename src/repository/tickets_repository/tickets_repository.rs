use super::Ticket;
use crate::repository;
use axum::async_trait;
use bson::oid::ObjectId;
use time::{Date, OffsetDateTime};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketsRepository: Send + Sync {
    async fn insert(
        &self,
        ticket_id: &str,
        first_name: &str,
        last_name: &str,
        date_of_birth: Date,
        phone_number: &str,
        issued_at: OffsetDateTime,
    ) -> Result<ObjectId, repository::Error>;

    async fn find(&self, ticket_id: &str) -> Result<Option<Ticket>, repository::Error>;

    async fn find_all(&self) -> Result<Vec<Ticket>, repository::Error>;

    ///
    /// Marks ticket as used only if it has not been used yet.
    ///
    /// ### Errors
    /// - [repository::Error::NoDocumentUpdated] when ticket does not exist
    ///   or another call has already marked it as used
    ///
    async fn update_used(
        &self,
        ticket_id: &str,
        used_at: OffsetDateTime,
    ) -> Result<(), repository::Error>;
}
