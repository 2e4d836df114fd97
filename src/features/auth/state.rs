//! Session context for the frontend. The provider builds the cookie store once
//! and shares it with guards, the login form, and logout buttons. Only a
//! signed-in flag is mirrored into a signal; the token stays in the cookie.

use hireboard::AppError;
use hireboard::config::AppConfig;
use hireboard::paths;
use hireboard::session::{
    CookieSessionStore, Navigator, SessionCredential, SessionStore, end_session,
    establish_session,
};
use leptos::prelude::*;
use std::sync::Arc;

/// Session context shared through Leptos.
#[derive(Clone)]
pub struct SessionContext {
    store: Arc<dyn SessionStore + Send + Sync>,
    pub signed_in: RwSignal<bool>,
}

impl SessionContext {
    fn new(store: Arc<dyn SessionStore + Send + Sync>) -> Self {
        let signed_in = RwSignal::new(store.get().is_some());
        Self { store, signed_in }
    }

    fn from_config() -> Self {
        let config = AppConfig::load();
        Self::new(Arc::new(CookieSessionStore::from_config(&config)))
    }

    pub fn store(&self) -> &(dyn SessionStore + Send + Sync) {
        &*self.store
    }

    pub fn credential(&self) -> Option<SessionCredential> {
        self.store.get()
    }

    /// Stores the token returned by a successful login.
    pub fn establish(&self, token: &str) -> Result<SessionCredential, AppError> {
        let credential = establish_session(self.store(), token)?;
        self.signed_in.set(true);
        Ok(credential)
    }

    /// Logs out and returns to the login route.
    pub fn end(&self, navigator: &impl Navigator) {
        end_session(self.store(), navigator, paths::LOGIN);
        self.signed_in.set(false);
    }

    /// Re-reads the store after something outside this context changed it.
    pub fn refresh(&self) {
        self.signed_in.set(self.store.get().is_some());
    }
}

/// Provides the session context backed by the configured cookie.
#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    provide_context(SessionContext::from_config());

    view! { {children()} }
}

/// Returns the current session context or a fresh cookie-backed one.
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_else(SessionContext::from_config)
}
