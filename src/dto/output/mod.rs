mod issued_ticket;
mod ticket;
mod ticket_pdf;
mod ticket_verification;

pub use issued_ticket::*;
pub use ticket::*;
pub use ticket_pdf::*;
pub use ticket_verification::*;
