//! Session feature: login against the backend, the cookie-backed session
//! context, and the route guard. This module touches the trust boundary and
//! must never log token material.
//!
//! Flow Overview: Login posts credentials and stores the returned token in
//! the session cookie. Protected routes render through `RequireSession`. The
//! dashboard re-verifies the token with `GET /auth/:userId` and clears it on
//! any failure.

pub(crate) mod client;
mod guards;
pub(crate) mod state;

pub(crate) use guards::{CheckingSession, RequireSession, use_navigator};
