// ============================================================================
// ERRORES - Clasificación de resultados del API y de la persistencia
// ============================================================================

/// Resultado clasificado de una llamada al API.
/// `Unauthorized` obliga a limpiar la sesión; el resto la deja intacta.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// HTTP 401: token inválido o expirado
    #[error("Unauthorized{}", fmt_message(.message))]
    Unauthorized { message: Option<String> },
    /// Cualquier otro status fuera de 2xx
    #[error("HTTP {status}{}", fmt_message(.message))]
    Failure { status: u16, message: Option<String> },
    /// No hubo respuesta (fallo de red / CORS / DNS)
    #[error("Network error: {0}")]
    Network(String),
    /// 2xx cuyo cuerpo no tiene la forma esperada
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

fn fmt_message(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|m| format!(": {}", m))
        .unwrap_or_default()
}

impl ApiError {
    /// Mensaje devuelto por el servidor, si lo hubo
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Unauthorized { message } | ApiError::Failure { message, .. } => {
                message.as_deref()
            }
            ApiError::Network(_) | ApiError::MalformedResponse(_) => None,
        }
    }
}

/// Errores de la persistencia local (solo se loguean, nunca llegan al usuario)
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("localStorage no disponible: {0}")]
    Unavailable(String),
    #[error("valor persistido corrupto: {0}")]
    Corrupt(String),
    #[error("error serializando: {0}")]
    Serialization(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_server_message() {
        let err = ApiError::Failure { status: 500, message: Some("boom".into()) };
        assert_eq!(err.to_string(), "HTTP 500: boom");
        assert_eq!(err.server_message(), Some("boom"));

        let err = ApiError::Unauthorized { message: None };
        assert_eq!(err.to_string(), "Unauthorized");
        assert_eq!(err.server_message(), None);
    }
}
