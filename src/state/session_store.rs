// ============================================================================
// SESSION STORE - Único dueño de la sesión (set/clear/subscribe + persistencia)
// ============================================================================
// Las pantallas leen con get() y piden cambios con set()/clear(); nunca mutan
// la sesión directamente.
// ============================================================================

use std::rc::Rc;
use crate::models::session::{AuthState, Session};
use crate::services::session_persistence::SessionPersistence;
use crate::state::reactivity::{ReactiveState, SubscriptionId};

#[derive(Clone)]
pub struct SessionStore {
    state: ReactiveState<Session>,
    persistence: Rc<dyn SessionPersistence>,
}

impl SessionStore {
    /// Store vacío (sin leer lo persistido)
    #[cfg(test)]
    pub fn new(persistence: Rc<dyn SessionPersistence>) -> Self {
        Self {
            state: ReactiveState::new(Session::default()),
            persistence,
        }
    }

    /// Rehidratar al arrancar. Best-effort: un valor ausente o corrupto da una sesión vacía.
    pub fn rehydrate(persistence: Rc<dyn SessionPersistence>) -> Self {
        let session = match persistence.load() {
            Ok(Some(session)) => {
                log::info!("💾 [SESSION] Sesión restaurada (autenticado: {})", session.is_authenticated());
                session
            }
            Ok(None) => {
                log::info!("📋 [SESSION] No hay sesión guardada");
                Session::default()
            }
            Err(e) => {
                log::warn!("⚠️ [SESSION] Ignorando sesión persistida: {}", e);
                Session::default()
            }
        };
        Self {
            state: ReactiveState::new(session),
            persistence,
        }
    }

    /// Snapshot actual
    pub fn get(&self) -> Session {
        self.state.get()
    }

    /// Reemplaza la sesión, la persiste y notifica (síncrono) antes de volver
    pub fn set(&self, session: Session) {
        if let Err(e) = self.persistence.save(&session) {
            log::error!("❌ [SESSION] Error guardando sesión: {}", e);
        }
        self.state.set(session);
    }

    /// Logout / 401: equivalente a set() con una sesión vacía
    pub fn clear(&self) {
        log::info!("🗑️ [SESSION] Limpiando sesión");
        self.set(Session::default());
    }

    pub fn subscribe<F>(&self, observer: F) -> SubscriptionId
    where
        F: Fn(&Session) + 'static,
    {
        self.state.subscribe(observer)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.state.unsubscribe(id)
    }

    pub fn auth_state(&self) -> AuthState {
        self.state.with(AuthState::of)
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth_state() == AuthState::Authenticated
    }

    pub fn access_token(&self) -> Option<String> {
        self.state.with(|s| s.access_token().map(str::to_string))
    }
}
