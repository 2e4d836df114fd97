//! Hireboard client core.
//!
//! Everything the browser app needs that does not touch the DOM lives here so
//! it can be exercised natively: the session guard and credential store, the
//! identity check, configuration, the shared error type, and the job-board
//! domain types with their view logic.
//!
//! ## Session lifecycle
//!
//! 1. **Login:** `POST /auth/login` returns `201 { token }`; the token is
//!    stored through a [`session::SessionStore`] for seven days.
//! 2. **Gate:** protected views are wrapped with [`session::guard`], which
//!    redirects to `/login` when no credential is stored.
//! 3. **Re-verify:** the dashboard decodes the `userId` claim and calls
//!    `GET /auth/:userId`; any failure clears the credential.
//! 4. **Logout:** the credential is cleared and the user lands on `/login`.
//!
//! The gate is a UX convenience. The API remains the only access control, and
//! token material must never be logged.

pub mod config;
pub mod errors;
pub mod jobs;
pub mod paths;
pub mod session;

pub use errors::AppError;
