//! Domain records and pure rules for the FiveTv portal.
//!
//! Nothing here performs I/O: the API client and the web server both build
//! on these types, and every rule is unit-tested in place.

pub mod auth;
pub mod dashboard;
pub mod error;
pub mod format;
pub mod jenis;
pub mod konten;
pub mod member;
pub mod pagination;
pub mod search;
pub mod site_config;
pub mod upload;
