use serde::{Deserialize, Serialize};

/// Envoltorio común de las respuestas exitosas: `{ data, message }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub data: T,
    #[serde(default)]
    pub message: Option<String>,
}
