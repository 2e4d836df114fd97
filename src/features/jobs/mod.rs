//! Job posting endpoints.

pub(crate) mod client;
