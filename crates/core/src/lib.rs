//! Domain logic for the talent booker backend.
//!
//! Nothing in this crate performs I/O against the store. It holds the error
//! taxonomy, the profile URL parser, field validation, and the
//! [`profile::ProfileSource`] capability used by the preview workflow.

pub mod artist;
pub mod error;
pub mod pagination;
pub mod profile;
pub mod spotify_url;
pub mod types;
