use crate::repository;
use time::{Date, OffsetDateTime};

#[derive(Debug, Clone, PartialEq)]
pub struct Ticket {
    pub ticket_id: String,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Date,
    pub phone_number: String,
    pub used: bool,
    pub issued_at: OffsetDateTime,
    pub used_at: Option<OffsetDateTime>,
}

impl From<repository::Ticket> for Ticket {
    fn from(value: repository::Ticket) -> Self {
        Self {
            ticket_id: value.ticket_id,
            first_name: value.first_name,
            last_name: value.last_name,
            date_of_birth: value.date_of_birth,
            phone_number: value.phone_number,
            used: value.used,
            issued_at: value.issued_at,
            used_at: value.used_at,
        }
    }
}
