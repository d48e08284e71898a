use super::{TicketsService, TicketsServiceConfig};
use crate::{
    dto::{input, output},
    error::Error,
    repository::{self, TicketsRepository},
    service::qr_codes_service::QrCodesService,
};
use axum::async_trait;
use rand::Rng;
use std::sync::Arc;
use time::{macros::format_description, Date, OffsetDateTime};

pub struct TicketsServiceImpl {
    config: TicketsServiceConfig,
    repository: Arc<dyn TicketsRepository>,
    qr_codes_service: Arc<dyn QrCodesService>,
}

impl TicketsServiceImpl {
    pub fn new(
        config: TicketsServiceConfig,
        repository: Arc<dyn TicketsRepository>,
        qr_codes_service: Arc<dyn QrCodesService>,
    ) -> Self {
        Self {
            config,
            repository,
            qr_codes_service,
        }
    }

    ///
    /// ### Returns
    /// parsed date of birth
    ///
    fn validate_ticket_form(&self, form: &input::TicketForm) -> Result<Date, Error> {
        if form.first_name.trim().is_empty() {
            return Err(Error::Validation("First name is required"));
        }
        if form.last_name.trim().is_empty() {
            return Err(Error::Validation("Last name is required"));
        }

        let len = form.phone_number.chars().count();
        if len > self.config.max_phone_number_len {
            return Err(Error::ValidationPhoneNumberTooLong {
                len,
                max_len: self.config.max_phone_number_len,
            });
        }

        Date::parse(
            form.date_of_birth.trim(),
            format_description!("[year]-[month padding:none]-[day padding:none]"),
        )
        .map_err(|_| Error::Validation("Date of birth must be a YYYY-MM-DD date"))
    }

    fn generate_ticket_id(len: usize) -> String {
        let mut rng = rand::thread_rng();
        (0..len)
            .map(|_| char::from(b'0' + rng.gen_range(0..10)))
            .collect()
    }

    ///
    /// Unique index on ticket id makes the database the single source of truth,
    /// colliding ids are regenerated
    ///
    async fn insert_with_unique_ticket_id(
        &self,
        form: &input::TicketForm,
        date_of_birth: Date,
    ) -> Result<String, Error> {
        for attempt in 1..=self.config.ticket_id_max_attempts {
            let ticket_id = Self::generate_ticket_id(self.config.ticket_id_len);

            let insert_result = self
                .repository
                .insert(
                    &ticket_id,
                    &form.first_name,
                    &form.last_name,
                    date_of_birth,
                    &form.phone_number,
                    OffsetDateTime::now_utc(),
                )
                .await;

            match insert_result {
                Ok(id) => {
                    tracing::info!(%id, %ticket_id, "inserted ticket");
                    return Ok(ticket_id);
                }
                Err(repository::Error::InsertUniqueViolation) => {
                    tracing::warn!(attempt, %ticket_id, "ticket id already taken");
                }
                Err(err) => return Err(Error::Database(err)),
            }
        }

        Err(Error::TicketIdExhausted(self.config.ticket_id_max_attempts))
    }
}

#[async_trait]
impl TicketsService for TicketsServiceImpl {
    ///
    /// Saves new ticket and renders its QR code
    ///
    /// ### Returns
    /// [output::IssuedTicket]
    ///
    /// ### Errors
    /// - [Error::Validation] and [Error::ValidationPhoneNumberTooLong] when form is invalid,
    ///   nothing is saved in that case
    /// - [Error::TicketIdExhausted] when every generated ticket id was already taken
    ///
    async fn issue_ticket(&self, form: input::TicketForm) -> Result<output::IssuedTicket, Error> {
        tracing::info!("issuing ticket");
        tracing::trace!(?form);

        let date_of_birth = self.validate_ticket_form(&form)?;

        let ticket_id = self
            .insert_with_unique_ticket_id(&form, date_of_birth)
            .await?;

        self.qr_codes_service.create_qr_code(&ticket_id).await?;
        tracing::info!(%ticket_id, "issued ticket");

        Ok(output::IssuedTicket {
            qr_code_url: self.qr_codes_service.qr_code_url(&ticket_id),
            verification_url: self.qr_codes_service.verification_url(&ticket_id),
            ticket_id,
        })
    }

    ///
    /// Redeems ticket. Only one call can ever observe [output::TicketVerification::Verified]
    /// for a given ticket, every other gets [output::TicketVerification::AlreadyUsed]
    ///
    /// ### Errors
    /// - [Error::TicketNotExist] when ticket does not exist
    ///
    async fn verify_ticket(&self, ticket_id: &str) -> Result<output::TicketVerification, Error> {
        tracing::info!(ticket_id, "verifying ticket");

        let mut ticket = self
            .repository
            .find(ticket_id)
            .await?
            .ok_or(Error::TicketNotExist)?;

        if ticket.used {
            tracing::info!(ticket_id, "ticket already used");
            return Ok(output::TicketVerification::AlreadyUsed {
                ticket_id: ticket.ticket_id,
            });
        }

        let now = OffsetDateTime::now_utc();
        match self.repository.update_used(ticket_id, now).await {
            Ok(()) => {
                tracing::info!(ticket_id, "verified ticket");
                ticket.used = true;
                ticket.used_at = Some(now);
                Ok(output::TicketVerification::Verified(ticket.into()))
            }
            Err(repository::Error::NoDocumentUpdated) => {
                tracing::info!(ticket_id, "ticket used concurrently");
                Ok(output::TicketVerification::AlreadyUsed {
                    ticket_id: ticket.ticket_id,
                })
            }
            Err(err) => Err(Error::Database(err)),
        }
    }

    async fn find_tickets(&self) -> Result<Vec<output::Ticket>, Error> {
        tracing::info!("finding tickets");

        let tickets = self.repository.find_all().await?;
        tracing::info!(count = tickets.len(), "found tickets");

        let tickets = tickets.into_iter().map(output::Ticket::from).collect();

        Ok(tickets)
    }
}
