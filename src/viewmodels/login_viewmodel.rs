// ============================================================================
// LOGIN VIEWMODEL - Sign in / Sign up
// ============================================================================

use std::cell::RefCell;
use crate::models::auth::{AuthResponse, LoginForm};
use crate::models::session::Session;
use crate::router::Route;
use crate::services::auth_service;
use crate::services::error::ApiError;
use crate::state::reactivity::ReactiveState;
use crate::utils::constants::{MSG_AUTH_FAILED, MSG_NETWORK_ERROR};
use crate::utils::validation::check_valid_data;
use crate::viewmodels::auth_guard::redirect_if_authenticated;
use crate::viewmodels::context::{Loadable, LoadingGuard, MountFlag, ScreenContext};

#[derive(Debug, Clone, PartialEq)]
pub struct LoginViewState {
    pub is_sign_in_form: bool,
    /// Error inline (validación o rechazo del servidor)
    pub error_message: Option<String>,
    pub loading: bool,
}

impl Default for LoginViewState {
    fn default() -> Self {
        Self {
            is_sign_in_form: true,
            error_message: None,
            loading: false,
        }
    }
}

impl Loadable for LoginViewState {
    fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }
}

pub struct LoginViewModel {
    ctx: ScreenContext,
    pub state: ReactiveState<LoginViewState>,
    /// Valores tecleados; no notifican (sobreviven a los re-renders)
    draft: RefCell<LoginForm>,
    mounted: MountFlag,
}

impl LoginViewModel {
    pub fn new(ctx: ScreenContext) -> Self {
        Self {
            ctx,
            state: ReactiveState::new(LoginViewState::default()),
            draft: RefCell::new(LoginForm::default()),
            mounted: MountFlag::default(),
        }
    }

    pub fn draft(&self) -> LoginForm {
        self.draft.borrow().clone()
    }

    pub fn edit_draft(&self, edit: impl FnOnce(&mut LoginForm)) {
        edit(&mut self.draft.borrow_mut());
    }

    /// Devuelve false si ya había sesión (se redirige a /browse)
    pub fn mount(&self) -> bool {
        self.mounted.activate();
        !redirect_if_authenticated(&self.ctx)
    }

    pub fn unmount(&self) {
        self.mounted.deactivate();
    }

    pub fn toggle_form(&self) {
        self.state.update(|s| {
            s.is_sign_in_form = !s.is_sign_in_form;
            s.error_message = None;
        });
    }

    pub async fn submit(&self, form: LoginForm) {
        let validation = check_valid_data(&form.email, &form.password);
        self.state.update(|s| s.error_message = validation.map(|e| e.to_string()));
        if let Some(error) = validation {
            log::info!("⚠️ [LOGIN] Validación local: {}", error);
            return;
        }

        let sign_in = self.state.with(|s| s.is_sign_in_form);
        let _loading = LoadingGuard::start(&self.state, &self.mounted);
        let result = if sign_in {
            auth_service::sign_in(&self.ctx.api, &form.sign_in_request()).await
        } else {
            auth_service::sign_up(&self.ctx.api, &form.sign_up_request()).await
        };

        if !self.mounted.is_active() {
            log::info!("🔕 [LOGIN] Respuesta ignorada: pantalla desmontada");
            return;
        }

        match result {
            Ok(AuthResponse { data: Some(user), message }) if !user.is_empty() => {
                log::info!("✅ [LOGIN] Autenticado como {}", user.name);
                self.ctx.session.set(Session::authenticated(user, message.clone()));
                if let Some(message) = message {
                    self.ctx.notifier.alert(&message);
                }
                self.ctx.navigator.navigate(Route::Browse);
            }
            // data null o vacío: no hay a quién autenticar
            Ok(AuthResponse { message, .. }) => {
                let message = message.unwrap_or_else(|| MSG_AUTH_FAILED.to_string());
                log::warn!("⚠️ [LOGIN] Rechazado: {}", message);
                self.show_error(message);
            }
            Err(ApiError::Network(reason)) => {
                log::error!("❌ [LOGIN] Error de red: {}", reason);
                self.show_error(MSG_NETWORK_ERROR.to_string());
            }
            // Aquí un 401 son credenciales incorrectas, no una sesión expirada
            Err(e) => {
                log::warn!("⚠️ [LOGIN] {}", e);
                let message = e.server_message().unwrap_or(MSG_AUTH_FAILED).to_string();
                self.show_error(message);
            }
        }
    }

    fn show_error(&self, message: String) {
        self.ctx.notifier.alert(&message);
        self.state.update(|s| s.error_message = Some(message));
    }
}
