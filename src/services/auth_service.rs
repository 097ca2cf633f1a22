use serde_json::json;
use crate::models::{AuthResponse, SignInRequest, SignUpRequest};
use crate::services::api_client::ApiClient;
use crate::services::error::ApiError;
use crate::services::transport::Method;

/// Sign in: `POST /auth/login` (sin token)
pub async fn sign_in(api: &ApiClient, request: &SignInRequest) -> Result<AuthResponse, ApiError> {
    log::info!("🔐 [AUTH] Iniciando sesión para: {}", request.email);
    let body = json!(request);
    api.request_as("/auth/login", Method::Post, Some(&body), None).await
}

/// Sign up: `POST /auth/signup` (sin token)
pub async fn sign_up(api: &ApiClient, request: &SignUpRequest) -> Result<AuthResponse, ApiError> {
    log::info!("📝 [AUTH] Registrando usuario: {}", request.email);
    let body = json!(request);
    api.request_as("/auth/signup", Method::Post, Some(&body), None).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use serde_json::Value;
    use crate::test_support::StubTransport;

    #[test]
    fn sign_up_sends_all_fields_without_token() {
        let stub = StubTransport::new();
        stub.respond(200, r#"{"data":{"name":"Ann","accessToken":"tok"},"message":"created"}"#);
        let api = ApiClient::with_transport("http://api.test", stub.clone());

        let request = SignUpRequest {
            email: "ann@test.com".into(),
            password: "Passw0rd".into(),
            name: "Ann".into(),
            user_id: "ann01".into(),
        };
        let response = block_on(sign_up(&api, &request)).unwrap();

        assert_eq!(response.message.as_deref(), Some("created"));
        let sent = stub.last_request().unwrap();
        assert!(sent.url.ends_with("/auth/signup"));
        assert_eq!(sent.header("x-access-token"), None);
        let body: Value = serde_json::from_str(sent.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["userId"], "ann01");
        assert_eq!(body["name"], "Ann");
    }

    #[test]
    fn sign_in_tolerates_null_data() {
        let stub = StubTransport::new();
        stub.respond(200, r#"{"data":null,"message":"Invalid password"}"#);
        let api = ApiClient::with_transport("http://api.test", stub);

        let request = SignInRequest { email: "a@b.co".into(), password: "Passw0rd".into() };
        let response = block_on(sign_in(&api, &request)).unwrap();
        assert_eq!(response.data, None);
        assert_eq!(response.message.as_deref(), Some("Invalid password"));
    }
}
