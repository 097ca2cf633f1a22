use serde::{Deserialize, Serialize};
use crate::models::session::User;

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    pub name: String,
    pub user_id: String,
}

/// Respuesta de `/auth/login` y `/auth/signup`: `data` es null si el API rechaza
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct AuthResponse {
    #[serde(default)]
    pub data: Option<User>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Datos del formulario de login/signup
#[derive(Clone, PartialEq, Debug, Default)]
pub struct LoginForm {
    pub name: String,
    pub user_id: String,
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn sign_in_request(&self) -> SignInRequest {
        SignInRequest {
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }

    pub fn sign_up_request(&self) -> SignUpRequest {
        SignUpRequest {
            email: self.email.clone(),
            password: self.password.clone(),
            name: self.name.clone(),
            user_id: self.user_id.clone(),
        }
    }
}
