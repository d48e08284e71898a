mod qr_codes_service_config;

pub use qr_codes_service_config::*;
