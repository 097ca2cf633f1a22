// ============================================================================
// AUTH GUARD - Gating de sesión compartido por todas las pantallas
// ============================================================================
// Unauthenticated → Authenticated: solo tras login/signup con `data` no nulo.
// Authenticated → Unauthenticated: sign-out explícito o cualquier 401.
// ============================================================================

use crate::models::session::User;
use crate::router::Route;
use crate::services::error::ApiError;
use crate::utils::constants::{MSG_LOGIN_EXPIRED, MSG_NETWORK_ERROR};
use crate::viewmodels::context::ScreenContext;

/// Pantallas protegidas: sin sesión → redirige a `/` y devuelve None
pub fn require_authenticated(ctx: &ScreenContext) -> Option<User> {
    match ctx.session.get().user {
        Some(user) => Some(user),
        None => {
            log::info!("🔒 [GUARD] Sin sesión, redirigiendo a login");
            ctx.navigator.navigate(Route::Login);
            None
        }
    }
}

/// Pantalla de login: con sesión → redirige a `/browse`. Devuelve true si redirigió.
pub fn redirect_if_authenticated(ctx: &ScreenContext) -> bool {
    if ctx.session.is_authenticated() {
        log::info!("🔓 [GUARD] Ya autenticado, redirigiendo a browse");
        ctx.navigator.navigate(Route::Browse);
        true
    } else {
        false
    }
}

/// Sign-out explícito
pub fn sign_out(ctx: &ScreenContext) {
    log::info!("👋 [GUARD] Sign out");
    ctx.session.clear();
    ctx.navigator.navigate(Route::Login);
}

/// Manejo uniforme de errores del API en todas las pantallas protegidas.
/// Solo `Unauthorized` limpia la sesión; nada se reintenta.
pub fn handle_api_error(ctx: &ScreenContext, error: &ApiError, failure_notice: &str) {
    match error {
        ApiError::Unauthorized { .. } => {
            log::warn!("⚠️ [GUARD] Token inválido o expirado, cerrando sesión");
            ctx.notifier.alert(MSG_LOGIN_EXPIRED);
            ctx.session.clear();
            ctx.navigator.navigate(Route::Login);
        }
        ApiError::Failure { .. } | ApiError::MalformedResponse(_) => {
            log::error!("❌ [GUARD] {}", error);
            ctx.notifier.alert(failure_notice);
        }
        ApiError::Network(reason) => {
            log::error!("❌ [GUARD] Error de red: {}", reason);
            ctx.notifier.alert(MSG_NETWORK_ERROR);
        }
    }
}
