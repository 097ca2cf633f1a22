// ============================================================================
// SCREEN CONTEXT - Dependencias compartidas por todas las pantallas
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;
use crate::router::Navigator;
use crate::services::api_client::ApiClient;
use crate::services::notifier::Notifier;
use crate::state::reactivity::ReactiveState;
use crate::state::session_store::SessionStore;

#[derive(Clone)]
pub struct ScreenContext {
    pub session: SessionStore,
    pub api: ApiClient,
    pub navigator: Rc<dyn Navigator>,
    pub notifier: Rc<dyn Notifier>,
}

/// Marca si la pantalla sigue montada. Las respuestas que llegan después
/// de `deactivate()` se descartan.
#[derive(Clone, Default)]
pub struct MountFlag(Rc<Cell<bool>>);

impl MountFlag {
    pub fn activate(&self) {
        self.0.set(true);
    }

    pub fn deactivate(&self) {
        self.0.set(false);
    }

    pub fn is_active(&self) -> bool {
        self.0.get()
    }
}

/// Estado de vista con spinner
pub trait Loadable {
    fn set_loading(&mut self, loading: bool);
}

/// Equivalente a `finally`: el spinner se apaga al salir del scope,
/// sea cual sea el resultado (si la pantalla sigue montada).
pub struct LoadingGuard<T: Loadable + Clone + 'static> {
    state: ReactiveState<T>,
    mounted: MountFlag,
}

impl<T: Loadable + Clone + 'static> LoadingGuard<T> {
    pub fn start(state: &ReactiveState<T>, mounted: &MountFlag) -> Self {
        state.update(|s| s.set_loading(true));
        Self {
            state: state.clone(),
            mounted: mounted.clone(),
        }
    }
}

impl<T: Loadable + Clone + 'static> Drop for LoadingGuard<T> {
    fn drop(&mut self) {
        if self.mounted.is_active() {
            self.state.update(|s| s.set_loading(false));
        }
    }
}
