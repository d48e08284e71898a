use super::{ticket_document::TicketDocument, PdfService, PdfServiceConfig};
use crate::{
    dto::output,
    error::Error,
    repository::TicketsRepository,
    service::{qr_codes_service::QrCodesService, ArtifactError},
};
use axum::async_trait;
use image::DynamicImage;
use std::{io::ErrorKind, sync::Arc};

pub struct PdfServiceImpl {
    config: PdfServiceConfig,
    repository: Arc<dyn TicketsRepository>,
    qr_codes_service: Arc<dyn QrCodesService>,
}

impl PdfServiceImpl {
    pub fn new(
        config: PdfServiceConfig,
        repository: Arc<dyn TicketsRepository>,
        qr_codes_service: Arc<dyn QrCodesService>,
    ) -> Self {
        Self {
            config,
            repository,
            qr_codes_service,
        }
    }

    async fn load_qr_code(&self, ticket_id: &str) -> Result<Option<DynamicImage>, ArtifactError> {
        let path = self.qr_codes_service.qr_code_path(ticket_id);

        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(Some(image::load_from_memory(&bytes)?)),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::warn!(ticket_id, path = %path.display(), "qr code not found");
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }

    async fn save(&self, filename: &str, content: &[u8]) -> Result<(), ArtifactError> {
        tokio::fs::create_dir_all(&self.config.directory).await?;
        let path = self.config.directory.join(filename);
        tokio::fs::write(&path, content).await?;
        tracing::debug!(path = %path.display(), "saved pdf");

        Ok(())
    }
}

#[async_trait]
impl PdfService for PdfServiceImpl {
    ///
    /// Renders printable ticket. Unknown ticket still produces a document,
    /// without any ticket data, and with [output::TicketPdf::ticket_found] unset
    ///
    async fn create_ticket_pdf(&self, ticket_id: &str) -> Result<output::TicketPdf, Error> {
        tracing::info!(ticket_id, "creating ticket pdf");

        let filename = format!("ticket_{ticket_id}.pdf");
        let ticket = self.repository.find(ticket_id).await?;

        let Some(ticket) = ticket else {
            tracing::warn!(ticket_id, "ticket not exist, rendering empty document");
            let content = TicketDocument::new(None).render(None)?;

            return Ok(output::TicketPdf {
                filename,
                content,
                ticket_found: false,
            });
        };

        let qr_code = self.load_qr_code(ticket_id).await?;
        let content = TicketDocument::new(Some(&ticket)).render(qr_code.as_ref())?;
        self.save(&filename, &content).await?;
        tracing::info!(ticket_id, "created ticket pdf");

        Ok(output::TicketPdf {
            filename,
            content,
            ticket_found: true,
        })
    }
}
