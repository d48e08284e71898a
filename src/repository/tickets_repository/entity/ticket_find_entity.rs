use bson::{oid::ObjectId, DateTime};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct TicketFindEntity {
    pub _id: ObjectId,

    pub ticket_id: String,

    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: DateTime,
    pub phone_number: String,

    pub used: bool,

    pub issued_at: DateTime,
    pub used_at: Option<DateTime>,
}
