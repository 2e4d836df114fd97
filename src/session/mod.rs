//! Session credential handling and the view gate built on top of it.
//!
//! The credential lives behind the [`SessionStore`] capability and is passed
//! explicitly to every reader and writer: login sets it, the guard reads it,
//! and logout or a failed identity check clears it. Nothing here talks to the
//! DOM except the wasm-only [`CookieSessionStore`].
//!
//! Flow Overview: [`guard`] wraps a [`View`] and resolves
//! `Unknown -> {Authenticated, Unauthenticated}` once per render. The dashboard
//! additionally runs [`verify_session`], which fails closed when the backend
//! rejects the credential or cannot be reached.

mod cookie;
mod credential;
mod guard;
mod identity;
mod lifecycle;
mod store;

pub use credential::{CredentialClaims, SessionCredential};
pub use guard::{
    Gate, GuardState, Guarded, Navigator, View, ViewFn, check_session, guard, view_fn,
};
pub use identity::{Identity, IdentityProvider, RejectReason, Verification, verify_session};
pub use lifecycle::{
    LoginRequest, end_session, establish_session, interpret_login_response, login_failure_message,
    redirect_if_signed_in,
};
#[cfg(target_arch = "wasm32")]
pub use store::CookieSessionStore;
pub use store::{MemorySessionStore, SessionStore};
