mod pdf_service_config;

pub use pdf_service_config::*;
