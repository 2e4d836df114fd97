//! Backend re-verification of a stored credential.
//!
//! The check fails closed: a rejected, malformed, or unverifiable credential is
//! cleared and the user is sent to the login route.

use super::{credential::SessionCredential, guard::Navigator, store::SessionStore};
use crate::errors::AppError;
use serde::Deserialize;
use std::future::Future;

/// Identity record returned by `GET /auth/:userId`.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct Identity {
    #[serde(default, alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub role: Option<String>,
}

/// Source of identity records for a credential.
pub trait IdentityProvider {
    fn fetch_identity(
        &self,
        user_id: &str,
        credential: &SessionCredential,
    ) -> impl Future<Output = Result<Identity, AppError>>;
}

/// Why a session ended up unauthenticated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RejectReason {
    Missing,
    Malformed,
    Rejected,
    Unreachable,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verification {
    Authenticated(Identity),
    Unauthenticated(RejectReason),
}

impl Verification {
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Verification::Authenticated(identity) => Some(identity),
            Verification::Unauthenticated(_) => None,
        }
    }
}

/// Confirms the stored credential still maps to a live account.
///
/// Every unauthenticated outcome redirects to `login_path`; all but
/// [`RejectReason::Missing`] also clear the store first.
pub async fn verify_session<S, P, N>(
    store: &S,
    provider: &P,
    navigator: &N,
    login_path: &str,
) -> Verification
where
    S: SessionStore + ?Sized,
    P: IdentityProvider + ?Sized,
    N: Navigator + ?Sized,
{
    let Some(credential) = store.get() else {
        navigator.navigate(login_path);
        return Verification::Unauthenticated(RejectReason::Missing);
    };

    let claims = match credential.claims() {
        Ok(claims) => claims,
        Err(err) => {
            log::warn!("discarding session credential: {err}");
            return reject(store, navigator, login_path, RejectReason::Malformed);
        }
    };

    match provider.fetch_identity(&claims.user_id, &credential).await {
        Ok(identity) => Verification::Authenticated(identity),
        Err(err) if err.is_unreachable() => {
            log::warn!("identity check could not reach the backend: {err}");
            reject(store, navigator, login_path, RejectReason::Unreachable)
        }
        Err(err) => {
            log::info!("identity check rejected the session: {err}");
            reject(store, navigator, login_path, RejectReason::Rejected)
        }
    }
}

fn reject<S, N>(store: &S, navigator: &N, login_path: &str, reason: RejectReason) -> Verification
where
    S: SessionStore + ?Sized,
    N: Navigator + ?Sized,
{
    store.clear();
    navigator.navigate(login_path);
    Verification::Unauthenticated(reason)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemorySessionStore;
    use crate::session::credential::tests::jwt_with_payload;
    use futures::executor::block_on;
    use std::cell::RefCell;

    struct StubProvider {
        response: Result<Identity, AppError>,
        calls: RefCell<Vec<(String, String)>>,
    }

    impl StubProvider {
        fn new(response: Result<Identity, AppError>) -> Self {
            Self {
                response,
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl IdentityProvider for StubProvider {
        async fn fetch_identity(
            &self,
            user_id: &str,
            credential: &SessionCredential,
        ) -> Result<Identity, AppError> {
            self.calls
                .borrow_mut()
                .push((user_id.to_string(), credential.bearer()));
            self.response.clone()
        }
    }

    fn recruiter() -> Identity {
        Identity {
            id: "u-1".to_string(),
            username: "recruiter".to_string(),
            role: Some("admin".to_string()),
        }
    }

    fn signed_in_store() -> (MemorySessionStore, String) {
        let token = jwt_with_payload(r#"{"userId":"u-1"}"#);
        let store =
            MemorySessionStore::with_credential(SessionCredential::new(token.clone()).expect("token"));
        (store, token)
    }

    #[test]
    fn verified_session_keeps_credential() {
        let (store, token) = signed_in_store();
        let provider = StubProvider::new(Ok(recruiter()));
        let visited = RefCell::new(Vec::<String>::new());
        let navigator = |path: &str| visited.borrow_mut().push(path.to_string());

        let outcome = block_on(verify_session(&store, &provider, &navigator, "/login"));

        assert_eq!(outcome, Verification::Authenticated(recruiter()));
        assert!(store.get().is_some());
        assert!(visited.borrow().is_empty());
        assert_eq!(
            *provider.calls.borrow(),
            vec![("u-1".to_string(), format!("Bearer {token}"))]
        );
    }

    #[test]
    fn rejected_session_is_cleared_and_redirected() {
        let (store, _) = signed_in_store();
        let provider = StubProvider::new(Err(AppError::Http {
            status: 401,
            message: "Unauthorized".to_string(),
        }));
        let visited = RefCell::new(Vec::<String>::new());
        let navigator = |path: &str| visited.borrow_mut().push(path.to_string());

        let outcome = block_on(verify_session(&store, &provider, &navigator, "/login"));

        assert_eq!(outcome, Verification::Unauthenticated(RejectReason::Rejected));
        assert_eq!(store.get(), None);
        assert_eq!(*visited.borrow(), vec!["/login".to_string()]);
    }

    #[test]
    fn unreachable_backend_fails_closed() {
        let (store, _) = signed_in_store();
        let provider = StubProvider::new(Err(AppError::Network("offline".to_string())));
        let navigator = |_: &str| {};

        let outcome = block_on(verify_session(&store, &provider, &navigator, "/login"));

        assert_eq!(
            outcome,
            Verification::Unauthenticated(RejectReason::Unreachable)
        );
        assert_eq!(store.get(), None);
    }

    #[test]
    fn malformed_credential_never_reaches_backend() {
        let store = MemorySessionStore::with_credential(
            SessionCredential::new("not-a-jwt").expect("token"),
        );
        let provider = StubProvider::new(Ok(recruiter()));
        let navigator = |_: &str| {};

        let outcome = block_on(verify_session(&store, &provider, &navigator, "/login"));

        assert_eq!(outcome, Verification::Unauthenticated(RejectReason::Malformed));
        assert!(provider.calls.borrow().is_empty());
        assert_eq!(store.get(), None);
    }

    #[test]
    fn missing_credential_redirects_without_calling_backend() {
        let store = MemorySessionStore::new();
        let provider = StubProvider::new(Ok(recruiter()));
        let visited = RefCell::new(Vec::<String>::new());
        let navigator = |path: &str| visited.borrow_mut().push(path.to_string());

        let outcome = block_on(verify_session(&store, &provider, &navigator, "/login"));

        assert_eq!(outcome, Verification::Unauthenticated(RejectReason::Missing));
        assert!(provider.calls.borrow().is_empty());
        assert_eq!(*visited.borrow(), vec!["/login".to_string()]);
    }

    #[test]
    fn identity_accepts_mongo_style_id() {
        let identity: Identity =
            serde_json::from_str(r#"{"_id":"abc","username":"sketch","role":"admin"}"#)
                .expect("identity");
        assert_eq!(identity.id, "abc");
        assert_eq!(identity.username, "sketch");
        assert_eq!(identity.role.as_deref(), Some("admin"));

        let bare: Identity = serde_json::from_str(r#"{"id":"abc"}"#).expect("identity");
        assert_eq!(bare.role, None);
    }
}
