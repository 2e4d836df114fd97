//! Domain-level frontend features (session, jobs, applications) and their
//! API clients. Routes import these modules to keep view code focused while
//! keeping session handling and request setup in dedicated feature areas.

pub(crate) mod applications;
pub(crate) mod auth;
pub(crate) mod jobs;
