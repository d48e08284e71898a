use crate::repository::tickets_repository::entity::TicketFindEntity;
use bson::oid::ObjectId;
use time::{Date, OffsetDateTime};

#[derive(Debug, Clone, PartialEq)]
pub struct Ticket {
    pub _id: ObjectId,

    pub ticket_id: String,

    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Date,
    pub phone_number: String,

    pub used: bool,

    pub issued_at: OffsetDateTime,
    pub used_at: Option<OffsetDateTime>,
}

impl From<TicketFindEntity> for Ticket {
    fn from(value: TicketFindEntity) -> Self {
        Self {
            _id: value._id,
            ticket_id: value.ticket_id,
            first_name: value.first_name,
            last_name: value.last_name,
            date_of_birth: OffsetDateTime::from(value.date_of_birth).date(),
            phone_number: value.phone_number,
            used: value.used,
            issued_at: value.issued_at.into(),
            used_at: value.used_at.map(OffsetDateTime::from),
        }
    }
}
