//! Error types and handling for the `EcoPortal` site

use thiserror::Error;

/// Main error type for the `EcoPortal` site
#[derive(Error, Debug)]
pub enum EcoError {
    /// Configuration-related errors, including absent credentials
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// The upstream API answered with a non-success status
    #[error("Upstream error fetching {resource} for '{query}': HTTP {status}")]
    Upstream {
        resource: &'static str,
        query: String,
        status: u16,
    },

    /// The upstream API could not be reached
    #[error("Transport error fetching {resource} for '{query}': {message}")]
    Transport {
        resource: &'static str,
        query: String,
        message: String,
    },

    /// The upstream API answered with a body we could not decode
    #[error("Invalid {resource} response for '{query}': {message}")]
    InvalidResponse {
        resource: &'static str,
        query: String,
        message: String,
    },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },
}

impl EcoError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new upstream status error
    pub fn upstream<S: Into<String>>(resource: &'static str, query: S, status: u16) -> Self {
        Self::Upstream {
            resource,
            query: query.into(),
            status,
        }
    }

    /// Create a new transport error
    pub fn transport<S: Into<String>, M: Into<String>>(
        resource: &'static str,
        query: S,
        message: M,
    ) -> Self {
        Self::Transport {
            resource,
            query: query.into(),
            message: message.into(),
        }
    }

    /// Create a new invalid-response error
    pub fn invalid_response<S: Into<String>, M: Into<String>>(
        resource: &'static str,
        query: S,
        message: M,
    ) -> Self {
        Self::InvalidResponse {
            resource,
            query: query.into(),
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// The city or search term the failed request was made for, if any
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        match self {
            EcoError::Upstream { query, .. }
            | EcoError::Transport { query, .. }
            | EcoError::InvalidResponse { query, .. } => Some(query),
            _ => None,
        }
    }

    /// Get the message shown to visitors of the site
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            EcoError::Config { message } | EcoError::Validation { message } => message.clone(),
            EcoError::Upstream {
                resource,
                query,
                status,
            } => format!("Error al obtener {resource} para {query}: {status}"),
            EcoError::Transport {
                resource,
                query,
                message,
            } => format!("Error de conexión al obtener {resource} para {query}: {message}"),
            EcoError::InvalidResponse {
                resource, query, ..
            } => format!("Respuesta inválida al obtener {resource} para {query}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let config_err = EcoError::config("missing API key");
        assert!(matches!(config_err, EcoError::Config { .. }));

        let upstream_err = EcoError::upstream("datos del clima", "Madrid", 404);
        assert!(matches!(upstream_err, EcoError::Upstream { status: 404, .. }));

        let validation_err = EcoError::validation("not a number");
        assert!(matches!(validation_err, EcoError::Validation { .. }));
    }

    #[test]
    fn test_user_messages_carry_query_and_status() {
        let err = EcoError::upstream("datos del clima", "Atlantis", 404);
        assert_eq!(
            err.user_message(),
            "Error al obtener datos del clima para Atlantis: 404"
        );
        assert_eq!(err.query(), Some("Atlantis"));

        let err = EcoError::transport("coordenadas", "Lima", "connection refused");
        assert!(err.user_message().contains("Lima"));
        assert!(err.user_message().contains("connection refused"));
    }

    #[test]
    fn test_config_message_is_shown_verbatim() {
        let err = EcoError::config("Error: API key no configurada.");
        assert_eq!(err.user_message(), "Error: API key no configurada.");
        assert_eq!(err.query(), None);
    }
}
