#[derive(Debug, Clone)]
pub struct TicketPdf {
    pub filename: String,
    pub content: Vec<u8>,
    /// `false` when the document was rendered without ticket data
    pub ticket_found: bool,
}
