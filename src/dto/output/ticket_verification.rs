use super::Ticket;

#[derive(Debug, Clone, PartialEq)]
pub enum TicketVerification {
    /// This call performed the unused -> used transition
    Verified(Ticket),
    AlreadyUsed { ticket_id: String },
}
