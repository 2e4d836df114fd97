//! The session store capability and its implementations.

use super::credential::SessionCredential;
use crate::errors::AppError;
use std::sync::{Arc, Mutex, PoisonError};

/// Read/write access to the stored session credential.
///
/// Implementations use interior mutability so a single store can be shared
/// between the guard, the login form, and logout handlers.
pub trait SessionStore {
    /// Returns the stored credential, if any.
    fn get(&self) -> Option<SessionCredential>;

    /// Replaces the stored credential.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Session` when the backing storage rejects the write.
    fn set(&self, credential: &SessionCredential) -> Result<(), AppError>;

    /// Removes the stored credential. Clearing an empty store is a no-op.
    fn clear(&self);
}

impl<S: SessionStore + ?Sized> SessionStore for &S {
    fn get(&self) -> Option<SessionCredential> {
        (**self).get()
    }

    fn set(&self, credential: &SessionCredential) -> Result<(), AppError> {
        (**self).set(credential)
    }

    fn clear(&self) {
        (**self).clear();
    }
}

impl<S: SessionStore + ?Sized> SessionStore for Arc<S> {
    fn get(&self) -> Option<SessionCredential> {
        (**self).get()
    }

    fn set(&self, credential: &SessionCredential) -> Result<(), AppError> {
        (**self).set(credential)
    }

    fn clear(&self) {
        (**self).clear();
    }
}

/// In-memory store for tests and non-browser hosts.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    slot: Mutex<Option<SessionCredential>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a credential, as if login had already happened.
    pub fn with_credential(credential: SessionCredential) -> Self {
        Self {
            slot: Mutex::new(Some(credential)),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self) -> Option<SessionCredential> {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set(&self, credential: &SessionCredential) -> Result<(), AppError> {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(credential.clone());
        Ok(())
    }

    fn clear(&self) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

/// Browser store keeping the credential in a first-party cookie.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Debug)]
pub struct CookieSessionStore {
    name: String,
    max_age_secs: u64,
    secure: bool,
}

#[cfg(target_arch = "wasm32")]
impl CookieSessionStore {
    pub fn new(name: impl Into<String>, max_age_secs: u64, secure: bool) -> Self {
        Self {
            name: name.into(),
            max_age_secs,
            secure,
        }
    }

    pub fn from_config(config: &crate::config::AppConfig) -> Self {
        Self::new(
            config.session_cookie.clone(),
            config.session_max_age_secs(),
            config.cookie_secure,
        )
    }

    fn document() -> Option<web_sys::HtmlDocument> {
        use wasm_bindgen::JsCast;

        web_sys::window()?
            .document()?
            .dyn_into::<web_sys::HtmlDocument>()
            .ok()
    }

    fn write(&self, assignment: &str) -> Result<(), AppError> {
        let document = Self::document()
            .ok_or_else(|| AppError::Session("Document is not available.".to_string()))?;
        document
            .set_cookie(assignment)
            .map_err(|_| AppError::Session("Browser rejected the session cookie.".to_string()))
    }
}

#[cfg(target_arch = "wasm32")]
impl SessionStore for CookieSessionStore {
    fn get(&self) -> Option<SessionCredential> {
        let cookies = Self::document()?.cookie().ok()?;
        let value = super::cookie::read_cookie(&cookies, &self.name)?;
        match SessionCredential::new(value) {
            Ok(credential) => Some(credential),
            Err(err) => {
                log::warn!("ignoring unusable session cookie: {err}");
                None
            }
        }
    }

    fn set(&self, credential: &SessionCredential) -> Result<(), AppError> {
        self.write(&super::cookie::session_cookie(
            &self.name,
            credential.as_str(),
            self.max_age_secs,
            self.secure,
        ))
    }

    fn clear(&self) {
        if let Err(err) = self.write(&super::cookie::expired_cookie(&self.name)) {
            log::warn!("failed to clear session cookie: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credential(token: &str) -> SessionCredential {
        SessionCredential::new(token).expect("valid token")
    }

    #[test]
    fn memory_store_round_trips_and_clears() {
        let store = MemorySessionStore::new();
        assert_eq!(store.get(), None);

        store.set(&credential("first")).expect("set");
        assert_eq!(store.get(), Some(credential("first")));

        store.set(&credential("second")).expect("set");
        assert_eq!(store.get(), Some(credential("second")));

        store.clear();
        assert_eq!(store.get(), None);
        store.clear();
        assert_eq!(store.get(), None);
    }

    #[test]
    fn shared_handles_see_the_same_credential() {
        let store: Arc<dyn SessionStore + Send + Sync> = Arc::new(MemorySessionStore::new());
        let other = Arc::clone(&store);

        store.set(&credential("shared")).expect("set");
        assert_eq!(other.get(), Some(credential("shared")));

        other.clear();
        assert_eq!(store.get(), None);
    }
}
