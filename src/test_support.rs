// Dobles de prueba compartidos por los tests unitarios (solo cfg(test))

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use async_trait::async_trait;
use futures::channel::oneshot;
use crate::models::session::{Session, User};
use crate::router::{Navigator, Route};
use crate::services::api_client::ApiClient;
use crate::services::notifier::Notifier;
use crate::services::session_persistence::MemoryPersistence;
use crate::services::transport::{HttpRequest, HttpResponse, HttpTransport, TransportError};
use crate::state::session_store::SessionStore;
use crate::viewmodels::ScreenContext;

enum Scripted {
    Ready(Result<HttpResponse, TransportError>),
    Deferred(oneshot::Receiver<HttpResponse>),
}

/// Transporte con respuestas en cola; registra cada petición enviada
#[derive(Default)]
pub struct StubTransport {
    responses: RefCell<VecDeque<Scripted>>,
    requests: RefCell<Vec<HttpRequest>>,
}

impl StubTransport {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn respond(&self, status: u16, body: &str) {
        self.responses
            .borrow_mut()
            .push_back(Scripted::Ready(Ok(HttpResponse::new(status, body))));
    }

    pub fn fail(&self, reason: &str) {
        self.responses
            .borrow_mut()
            .push_back(Scripted::Ready(Err(TransportError(reason.to_string()))));
    }

    /// Respuesta que llega cuando el test decide (para simular desmontajes)
    pub fn respond_later(&self) -> oneshot::Sender<HttpResponse> {
        let (tx, rx) = oneshot::channel();
        self.responses.borrow_mut().push_back(Scripted::Deferred(rx));
        tx
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }

    pub fn last_request(&self) -> Option<HttpRequest> {
        self.requests.borrow().last().cloned()
    }
}

#[async_trait(?Send)]
impl HttpTransport for StubTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.borrow_mut().push(request);
        let next = self.responses.borrow_mut().pop_front();
        match next {
            Some(Scripted::Ready(result)) => result,
            Some(Scripted::Deferred(rx)) => rx
                .await
                .map_err(|_| TransportError("deferred response dropped".to_string())),
            None => Err(TransportError("no scripted response".to_string())),
        }
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    pub routes: RefCell<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn routes(&self) -> Vec<Route> {
        self.routes.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.routes.borrow_mut().push(route);
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub alerts: RefCell<Vec<String>>,
}

impl RecordingNotifier {
    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }
}

/// Todo lo que una pantalla necesita, con dobles inspeccionables
pub struct Harness {
    pub transport: Rc<StubTransport>,
    pub navigator: Rc<RecordingNavigator>,
    pub notifier: Rc<RecordingNotifier>,
    pub persistence: Rc<MemoryPersistence>,
    pub ctx: ScreenContext,
}

impl Harness {
    pub fn new() -> Self {
        let transport = StubTransport::new();
        let navigator = Rc::new(RecordingNavigator::default());
        let notifier = Rc::new(RecordingNotifier::default());
        let persistence = Rc::new(MemoryPersistence::new());
        let ctx = ScreenContext {
            session: SessionStore::new(persistence.clone()),
            api: ApiClient::with_transport("http://api.test/v1", transport.clone()),
            navigator: navigator.clone(),
            notifier: notifier.clone(),
        };
        Self { transport, navigator, notifier, persistence, ctx }
    }

    /// Harness con un usuario ya autenticado (token "tok")
    pub fn logged_in() -> Self {
        let harness = Self::new();
        harness.ctx.session.set(logged_in_session());
        harness
    }

    pub fn routes(&self) -> Vec<Route> {
        self.navigator.routes()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.notifier.alerts()
    }
}

pub fn logged_in_session() -> Session {
    Session::authenticated(
        User {
            id: "u1".into(),
            user_id: "ann01".into(),
            name: "Ann".into(),
            email: "ann@test.com".into(),
            access_token: "tok".into(),
        },
        Some("ok".into()),
    )
}
