use crate::service::ArtifactError;
use axum::async_trait;
use std::path::PathBuf;

/// Path under which QR code images are publicly served
pub const QR_CODES_URL_PATH: &str = "/qrcodes";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QrCodesService: Send + Sync {
    /// `<base-url>/verify/<ticket_id>`
    fn verification_url(&self, ticket_id: &str) -> String;

    fn qr_code_url(&self, ticket_id: &str) -> String;

    fn qr_code_path(&self, ticket_id: &str) -> PathBuf;

    async fn create_qr_code(&self, ticket_id: &str) -> Result<PathBuf, ArtifactError>;
}
