//! Browser-side utilities: HTTP helpers for the job board API and build
//! metadata.
//!
//! Centralizing these helpers keeps network behavior consistent (one timeout
//! policy, one error mapping) and keeps request setup out of routes. Bearer
//! credentials are attached only when a caller passes one, and are never
//! logged.

pub(crate) mod api;
#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub(crate) mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub(crate) const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub(crate) use api::{
    delete_with_bearer, get_json, get_json_with_bearer, patch_json, post_form, post_json,
    post_json_for_status,
};
