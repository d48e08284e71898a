use anyhow::anyhow;
use std::{net::SocketAddr, path::PathBuf};
use tracing::level_filters::LevelFilter;

pub struct ApplicationEnv {
    pub log_directory: String,
    pub log_filename: String,
    /// Used when `RUST_LOG` is not set
    pub log_level: LevelFilter,

    pub bind_address: SocketAddr,

    pub db_connection_string: String,
    pub db_name: String,

    pub max_http_content_len: usize,

    /// Public address used to build verification links encoded in QR codes
    pub base_url: String,
    pub qr_code_directory: PathBuf,
    pub pdf_directory: PathBuf,

    pub ticket_id_max_attempts: u32,
}

impl ApplicationEnv {
    pub fn parse() -> anyhow::Result<Self> {
        let log_directory = Self::env_var("QR_TICKETING_LOG_DIRECTORY")?;
        let log_filename = Self::env_var("QR_TICKETING_LOG_FILENAME")?;
        let log_level = Self::env_var("QR_TICKETING_LOG_LEVEL")?.parse()?;
        let bind_address = Self::env_var("QR_TICKETING_BIND_ADDRESS")?.parse()?;
        let db_connection_string = Self::env_var("QR_TICKETING_DB_CONNECTION_STRING")?;
        let db_name = Self::env_var("QR_TICKETING_DB_NAME")?;
        let max_http_content_len = Self::env_var("QR_TICKETING_MAX_HTTP_CONTENT_LEN")?.parse()?;
        let base_url = Self::env_var("QR_TICKETING_BASE_URL")?;
        let qr_code_directory = Self::env_var("QR_TICKETING_QR_CODE_DIRECTORY")?.into();
        let pdf_directory = Self::env_var("QR_TICKETING_PDF_DIRECTORY")?.into();
        let ticket_id_max_attempts =
            Self::env_var("QR_TICKETING_TICKET_ID_MAX_ATTEMPTS")?.parse()?;
        if ticket_id_max_attempts == 0 {
            return Err(anyhow!(
                "QR_TICKETING_TICKET_ID_MAX_ATTEMPTS need to be at least 1"
            ));
        }

        Ok(Self {
            log_directory,
            log_filename,
            log_level,
            bind_address,
            db_connection_string,
            db_name,
            max_http_content_len,
            base_url,
            qr_code_directory,
            pdf_directory,
            ticket_id_max_attempts,
        })
    }

    fn env_var(name: &'static str) -> anyhow::Result<String> {
        std::env::var(name).map_err(|_| anyhow!("environment variable {name} not set"))
    }
}
