// ============================================================================
// SESSION - Usuario autenticado + token (persistido en localStorage)
// ============================================================================

use serde::{Deserialize, Serialize};

/// Usuario autenticado tal como lo devuelve `/auth/login` o `/auth/signup`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Id del documento en el backend (`_id` en Mongo)
    #[serde(default, alias = "_id")]
    pub id: String,
    /// Identificador elegido en el signup
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    /// Token opaco, se reenvía tal cual en cada llamada autenticada
    #[serde(default)]
    pub access_token: String,
}

impl User {
    /// `"data": {}` deserializa a un usuario sin ningún campo: no cuenta como login
    pub fn is_empty(&self) -> bool {
        self.id.is_empty()
            && self.user_id.is_empty()
            && self.name.is_empty()
            && self.email.is_empty()
            && self.access_token.is_empty()
    }
}

/// Sesión del cliente. `user` solo existe tras un login/signup exitoso.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub user: Option<User>,
    pub is_login: bool,
    pub message: Option<String>,
}

/// Estado de la máquina de auth, derivado siempre de la sesión
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    Unauthenticated,
    Authenticated,
}

impl AuthState {
    pub fn of(session: &Session) -> Self {
        if session.user.is_some() {
            AuthState::Authenticated
        } else {
            AuthState::Unauthenticated
        }
    }
}

impl Session {
    /// Sesión autenticada tras una respuesta exitosa del API
    pub fn authenticated(user: User, message: Option<String>) -> Self {
        Self {
            user: Some(user),
            is_login: true,
            message,
        }
    }

    pub fn auth_state(&self) -> AuthState {
        AuthState::of(self)
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth_state() == AuthState::Authenticated
    }

    /// Token a adjuntar; None si no hay usuario o el token está vacío
    pub fn access_token(&self) -> Option<&str> {
        self.user
            .as_ref()
            .map(|u| u.access_token.as_str())
            .filter(|t| !t.is_empty())
    }
}
