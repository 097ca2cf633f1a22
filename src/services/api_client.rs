// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// Adjunta headers, envía y clasifica la respuesta. NO tiene lógica de negocio:
// qué hacer con cada resultado lo decide la pantalla.
// ============================================================================

use std::rc::Rc;
use serde::de::DeserializeOwned;
use serde_json::Value;
use crate::config::CONFIG;
use crate::services::error::ApiError;
use crate::services::transport::{GlooTransport, HttpRequest, HttpResponse, HttpTransport, Method};

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    token_header: String,
    transport: Rc<dyn HttpTransport>,
}

impl ApiClient {
    /// Cliente del navegador con la configuración global
    pub fn new() -> Self {
        Self::with_transport(CONFIG.backend_url(), Rc::new(GlooTransport))
            .token_header(&CONFIG.token_header)
    }

    pub fn with_transport(base_url: &str, transport: Rc<dyn HttpTransport>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token_header: crate::utils::constants::DEFAULT_TOKEN_HEADER.to_string(),
            transport,
        }
    }

    pub fn token_header(mut self, name: &str) -> Self {
        self.token_header = name.to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Envía la petición y clasifica: 2xx → JSON tal cual, 401 → Unauthorized,
    /// otro status → Failure, sin respuesta → Network.
    pub async fn request(
        &self,
        path: &str,
        method: Method,
        body: Option<&Value>,
        token: Option<&str>,
    ) -> Result<Value, ApiError> {
        let mut headers = vec![("Content-Type".to_string(), "application/json".to_string())];
        if let Some(token) = token {
            headers.push((self.token_header.clone(), token.to_string()));
        }
        let request = HttpRequest {
            method,
            url: format!("{}{}", self.base_url, path),
            headers,
            body: body.map(Value::to_string),
        };

        log::info!("🌐 [API] {} {}", method.as_str(), path);

        let response = self.transport.send(request).await.map_err(|e| {
            log::error!("❌ [API] Network error en {} {}: {}", method.as_str(), path, e);
            ApiError::Network(e.0)
        })?;

        let result = classify_response(response);
        if let Err(e) = &result {
            log::warn!("⚠️ [API] {} {} → {}", method.as_str(), path, e);
        }
        result
    }

    /// Igual que `request` pero deserializa a un registro tipado
    pub async fn request_as<T: DeserializeOwned>(
        &self,
        path: &str,
        method: Method,
        body: Option<&Value>,
        token: Option<&str>,
    ) -> Result<T, ApiError> {
        let value = self.request(path, method, body, token).await?;
        serde_json::from_value(value).map_err(|e| {
            log::error!("❌ [API] Respuesta inesperada en {}: {}", path, e);
            ApiError::MalformedResponse(e.to_string())
        })
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Clasificación en exactamente tres resultados (+ cuerpo ilegible)
pub fn classify_response(response: HttpResponse) -> Result<Value, ApiError> {
    let status = response.status;
    if status == 401 {
        return Err(ApiError::Unauthorized {
            message: server_message(&response.body),
        });
    }
    if !(200..300).contains(&status) {
        return Err(ApiError::Failure {
            status,
            message: server_message(&response.body),
        });
    }
    serde_json::from_str(&response.body).map_err(|e| ApiError::MalformedResponse(e.to_string()))
}

/// Campo `message` del cuerpo de error, si el servidor mandó JSON
fn server_message(body: &str) -> Option<String> {
    serde_json::from_str::<Value>(body)
        .ok()?
        .get("message")?
        .as_str()
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use serde_json::json;
    use crate::test_support::StubTransport;

    #[test]
    fn classifies_statuses() {
        assert_eq!(
            classify_response(HttpResponse::new(200, r#"{"data":[1]}"#)),
            Ok(json!({"data": [1]}))
        );
        assert_eq!(
            classify_response(HttpResponse::new(401, r#"{"message":"jwt expired"}"#)),
            Err(ApiError::Unauthorized { message: Some("jwt expired".into()) })
        );
        assert_eq!(
            classify_response(HttpResponse::new(500, "Internal Server Error")),
            Err(ApiError::Failure { status: 500, message: None })
        );
        assert_eq!(
            classify_response(HttpResponse::new(404, r#"{"message":"nope"}"#)),
            Err(ApiError::Failure { status: 404, message: Some("nope".into()) })
        );
        assert!(matches!(
            classify_response(HttpResponse::new(201, "<html>")),
            Err(ApiError::MalformedResponse(_))
        ));
    }

    #[test]
    fn attaches_json_content_type_and_token() {
        let stub = StubTransport::new();
        stub.respond(200, r#"{"data":[]}"#);
        let api = ApiClient::with_transport("http://api.test/v1/", stub.clone());

        let body = json!({"date": "2030-01-01T00:00:00.000Z"});
        block_on(api.request("/hotels/view", Method::Post, Some(&body), Some("tok"))).unwrap();

        let sent = stub.last_request().unwrap();
        assert_eq!(sent.url, "http://api.test/v1/hotels/view");
        assert_eq!(sent.method, Method::Post);
        assert_eq!(sent.header("content-type"), Some("application/json"));
        assert_eq!(sent.header("x-access-token"), Some("tok"));
        assert_eq!(sent.body.as_deref().map(|b| serde_json::from_str::<Value>(b).unwrap()), Some(body));
    }

    #[test]
    fn omits_token_header_when_absent() {
        let stub = StubTransport::new();
        stub.respond(200, "{}");
        let api = ApiClient::with_transport("http://api.test", stub.clone()).token_header("x-custom");

        block_on(api.request("/auth/login", Method::Post, None, None)).unwrap();

        let sent = stub.last_request().unwrap();
        assert_eq!(sent.header("x-custom"), None);
        assert_eq!(sent.header("x-access-token"), None);
        assert_eq!(sent.body, None);
    }

    #[test]
    fn transport_failure_is_network_error() {
        let stub = StubTransport::new();
        stub.fail("connection refused");
        let api = ApiClient::with_transport("http://api.test", stub);

        let result = block_on(api.request("/bookings", Method::Get, None, Some("tok")));
        assert_eq!(result, Err(ApiError::Network("connection refused".into())));
    }

    #[test]
    fn request_as_reports_shape_mismatch() {
        #[derive(Debug, serde::Deserialize)]
        struct Expected {
            #[allow(dead_code)]
            data: Vec<String>,
        }

        let stub = StubTransport::new();
        stub.respond(200, r#"{"data":{"unexpected":true}}"#);
        let api = ApiClient::with_transport("http://api.test", stub);

        let result = block_on(api.request_as::<Expected>("/bookings", Method::Get, None, None));
        assert!(matches!(result, Err(ApiError::MalformedResponse(_))));
    }
}
