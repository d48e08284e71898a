mod dto;
mod qr_codes_service;
mod qr_codes_service_impl;

pub use dto::QrCodesServiceConfig;
pub use qr_codes_service::*;
pub use qr_codes_service_impl::*;
