//! FiveTv web server library.
//!
//! Server-rendered public reader and admin dashboard on top of the
//! backend REST API. Exposes config, state, error handling and routes so
//! integration tests and the binary entrypoint can both access them.

pub mod config;
pub mod error;
pub mod handlers;
pub mod notice;
pub mod render;
pub mod routes;
pub mod session;
pub mod state;
