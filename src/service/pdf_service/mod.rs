mod dto;
mod pdf_service;
mod pdf_service_impl;
mod ticket_document;

pub use dto::PdfServiceConfig;
pub use pdf_service::*;
pub use pdf_service_impl::*;
