use serde::Deserialize;

///
/// Fields are kept as submitted, validation happens in the tickets service
/// so the form can be rendered again with a message
///
#[derive(Debug, Clone, Deserialize)]
pub struct TicketForm {
    #[serde(rename = "f_name")]
    pub first_name: String,
    #[serde(rename = "l_name")]
    pub last_name: String,
    /// ISO date `YYYY-MM-DD`
    #[serde(rename = "dob")]
    pub date_of_birth: String,
    pub phone_number: String,
}
