use crate::{repository, service::ArtifactError, view};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

pub const TICKET_INVALID_MESSAGE: &str = "Ticket no válido.";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("ticket not exist")]
    TicketNotExist,

    #[error("validation error: {0}")]
    Validation(&'static str),

    #[error("validation error: phone number too long {len}/{max_len}")]
    ValidationPhoneNumberTooLong { len: usize, max_len: usize },

    #[error("no unique ticket id generated after {0} attempts")]
    TicketIdExhausted(u32),

    #[error("database error: {0}")]
    Database(#[from] repository::Error),

    #[error("artifact error: {0}")]
    Artifact(#[from] ArtifactError),
}

impl Error {
    ///
    /// Message that can be shown to the user without leaking internals
    ///
    pub fn user_message(&self) -> String {
        match self {
            Error::TicketNotExist => TICKET_INVALID_MESSAGE.to_string(),
            Error::Validation(message) => message.to_string(),
            Error::ValidationPhoneNumberTooLong { max_len, .. } => {
                format!("Phone number cannot be longer than {max_len} digits")
            }
            Error::TicketIdExhausted(_) | Error::Database(_) | Error::Artifact(_) => {
                "Something went wrong, please try again later".to_string()
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::warn!(err = %self);

        let message = self.user_message();
        match self {
            Error::Validation(_) | Error::ValidationPhoneNumberTooLong { .. } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                view::index(Some(message.as_str())),
            ),
            Error::TicketNotExist => (StatusCode::NOT_FOUND, view::error(&message)),
            Error::TicketIdExhausted(_) | Error::Database(_) | Error::Artifact(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, view::error(&message))
            }
        }
        .into_response()
    }
}
