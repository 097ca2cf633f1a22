// ============================================================================
// NOTIFIER - Avisos modales al usuario (window.alert)
// ============================================================================

pub trait Notifier {
    fn alert(&self, message: &str);
}

/// `window.alert()` del navegador
#[derive(Clone, Default)]
pub struct WindowNotifier;

impl Notifier for WindowNotifier {
    fn alert(&self, message: &str) {
        match web_sys::window() {
            Some(window) => {
                if let Err(e) = window.alert_with_message(message) {
                    log::warn!("⚠️ [ALERT] No se pudo mostrar alert: {:?}", e);
                }
            }
            None => log::warn!("⚠️ [ALERT] Sin window, mensaje: {}", message),
        }
    }
}
