use super::{QrCodesService, QrCodesServiceConfig, QR_CODES_URL_PATH};
use crate::service::ArtifactError;
use axum::async_trait;
use image::{DynamicImage, ImageOutputFormat, Luma};
use qrcode::QrCode;
use std::{io::Cursor, path::PathBuf};

pub struct QrCodesServiceImpl {
    config: QrCodesServiceConfig,
}

impl QrCodesServiceImpl {
    pub fn new(config: QrCodesServiceConfig) -> Self {
        Self { config }
    }

    fn encode_png(content: &str) -> Result<Vec<u8>, ArtifactError> {
        let code = QrCode::new(content.as_bytes())?;
        let image = code.render::<Luma<u8>>().build();

        let mut png = Vec::new();
        DynamicImage::ImageLuma8(image)
            .write_to(&mut Cursor::new(&mut png), ImageOutputFormat::Png)?;

        Ok(png)
    }
}

#[async_trait]
impl QrCodesService for QrCodesServiceImpl {
    fn verification_url(&self, ticket_id: &str) -> String {
        let base_url = self.config.base_url.trim_end_matches('/');
        format!("{base_url}/verify/{ticket_id}")
    }

    fn qr_code_url(&self, ticket_id: &str) -> String {
        format!("{QR_CODES_URL_PATH}/{ticket_id}.png")
    }

    fn qr_code_path(&self, ticket_id: &str) -> PathBuf {
        self.config.directory.join(format!("{ticket_id}.png"))
    }

    ///
    /// Renders QR code with verification URL of the ticket and saves it as PNG.
    /// Existing image of the same ticket is overwritten.
    ///
    async fn create_qr_code(&self, ticket_id: &str) -> Result<PathBuf, ArtifactError> {
        let url = self.verification_url(ticket_id);
        let png = Self::encode_png(&url)?;

        tokio::fs::create_dir_all(&self.config.directory).await?;
        let path = self.qr_code_path(ticket_id);
        tokio::fs::write(&path, png).await?;
        tracing::debug!(ticket_id, path = %path.display(), "saved qr code");

        Ok(path)
    }
}
