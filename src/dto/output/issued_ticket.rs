#[derive(Debug, Clone, PartialEq)]
pub struct IssuedTicket {
    pub ticket_id: String,
    /// Public path of the QR code image
    pub qr_code_url: String,
    pub verification_url: String,
}
