mod ticket_form;

pub use ticket_form::*;
