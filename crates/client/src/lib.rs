//! HTTP clients for the FiveTv backend API and the image object store.
//!
//! [`api::BackendClient`] covers every backend endpoint; the endpoint
//! groups are split across [`admin`], [`article`], [`member`], [`config`]
//! and [`user`]. [`storage::StorageClient`] talks to the storage bucket.

pub mod admin;
pub mod api;
pub mod article;
pub mod config;
pub mod envelope;
pub mod error;
pub mod member;
pub mod storage;
pub mod user;

pub use api::BackendClient;
pub use error::ClientError;
pub use storage::{StorageClient, StorageSettings};
