use bson::DateTime;
use serde::Serialize;

#[derive(Serialize)]
pub struct TicketInsertEntity<'a> {
    pub ticket_id: &'a str,

    pub first_name: &'a str,
    pub last_name: &'a str,
    /// Midnight UTC of the date of birth
    pub date_of_birth: DateTime,
    pub phone_number: &'a str,

    pub used: bool,

    pub issued_at: DateTime,
    pub used_at: Option<DateTime>,
}
