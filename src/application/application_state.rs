use super::ApplicationEnv;
use crate::{
    repository::TicketsRepositoryImpl,
    service::{
        pdf_service::{PdfService, PdfServiceConfig, PdfServiceImpl},
        qr_codes_service::{QrCodesServiceConfig, QrCodesServiceImpl},
        tickets_service::{TicketsService, TicketsServiceConfig, TicketsServiceImpl},
    },
};
use axum::extract::FromRef;
use mongodb::{options::ClientOptions, Client};
use std::sync::Arc;

#[derive(Clone, FromRef)]
pub struct ApplicationState {
    pub tickets_service: Arc<dyn TicketsService>,
    pub pdf_service: Arc<dyn PdfService>,
}

pub struct ApplicationStateToClose {
    pub db_client: Client,
}

pub async fn create_state(
    env: &ApplicationEnv,
) -> anyhow::Result<(ApplicationState, ApplicationStateToClose)> {
    tracing::info!("connecting to database");
    let db_client_options = ClientOptions::parse(&env.db_connection_string).await?;
    let db_client = Client::with_options(db_client_options)?;
    let db = db_client.database(&env.db_name);

    tracing::info!("creating repositories");
    let tickets_repository = TicketsRepositoryImpl::new(db).await?;
    let tickets_repository = Arc::new(tickets_repository);

    tracing::info!("creating services");
    let config = QrCodesServiceConfig {
        base_url: env.base_url.clone(),
        directory: env.qr_code_directory.clone(),
    };
    let qr_codes_service = QrCodesServiceImpl::new(config);
    let qr_codes_service = Arc::new(qr_codes_service);

    let config = TicketsServiceConfig {
        ticket_id_max_attempts: env.ticket_id_max_attempts,
        ..Default::default()
    };
    let tickets_service = TicketsServiceImpl::new(
        config,
        tickets_repository.clone(),
        qr_codes_service.clone(),
    );
    let tickets_service = Arc::new(tickets_service);

    let config = PdfServiceConfig {
        directory: env.pdf_directory.clone(),
    };
    let pdf_service = PdfServiceImpl::new(config, tickets_repository, qr_codes_service);
    let pdf_service = Arc::new(pdf_service);

    Ok((
        ApplicationState {
            tickets_service,
            pdf_service,
        },
        ApplicationStateToClose { db_client },
    ))
}
