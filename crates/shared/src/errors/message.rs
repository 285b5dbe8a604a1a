use crate::errors::ServiceError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Sv,
    En,
}

impl ServiceError {
    /// Text shown to the visitor. Server-provided messages win, since the
    /// API already localizes them.
    pub fn user_message(&self, locale: Locale) -> String {
        match (self, locale) {
            (ServiceError::Authentication(msg), _) | (ServiceError::Api { message: msg, .. }, _)
                if !msg.is_empty() =>
            {
                msg.clone()
            }
            (ServiceError::Validation(errors), _) if !errors.is_empty() => errors.join("; "),

            (ServiceError::Decode(_), Locale::Sv) => {
                "Din session har gått ut. Logga in igen.".to_string()
            }
            (ServiceError::Decode(_), Locale::En) => {
                "Your session has expired. Please log in again.".to_string()
            }

            (ServiceError::Authentication(_), Locale::Sv) => {
                "Ett oväntat fel uppstod vid inloggning.".to_string()
            }
            (ServiceError::Authentication(_), Locale::En) => {
                "An unexpected error occurred while logging in.".to_string()
            }

            (ServiceError::Authorization(_), Locale::Sv) => {
                "Du har inte behörighet att se denna sida.".to_string()
            }
            (ServiceError::Authorization(_), Locale::En) => {
                "You are not authorized to view this page.".to_string()
            }

            (ServiceError::Network(_), Locale::Sv) => {
                "Kunde inte nå servern. Försök igen senare.".to_string()
            }
            (ServiceError::Network(_), Locale::En) => {
                "Could not reach the server. Please try again later.".to_string()
            }

            (ServiceError::InProgress, Locale::Sv) => "En begäran pågår redan.".to_string(),
            (ServiceError::InProgress, Locale::En) => {
                "A request is already in progress.".to_string()
            }

            (_, Locale::Sv) => "Ett fel uppstod.".to_string(),
            (_, Locale::En) => "Something went wrong.".to_string(),
        }
    }
}
