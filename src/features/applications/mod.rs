//! Job application endpoints.

pub(crate) mod client;
