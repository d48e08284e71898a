mod error;

pub mod pdf_service;
pub mod qr_codes_service;
pub mod tickets_service;

pub use error::*;
