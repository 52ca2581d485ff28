//! HTTP server for the Menagerie animal catalogue.
//!
//! This crate provides an Axum HTTP server that exposes:
//!
//! - **HTML views** (`/animals`, `/animals/new`, `/animals/{id}`,
//!   `/animals/{id}/edit`) rendered with `minijinja`
//! - **Form-driven writes** (`POST /animals`, `PUT` and `DELETE` on
//!   `/animals/{id}`), reachable from plain HTML forms through the
//!   `_method` override
//! - **JSON API** (`/api/animals`, `/api/animals/{id}`)
//! - **Seeding** (`GET /animals/seed`) which resets the collection to a
//!   fixed five-record dataset
//! - **Static assets** under `/public`
//!
//! # Architecture
//!
//! Handlers hold no state of their own. Everything flows through the
//! [`AppState`], which carries the
//! [`AnimalStore`](menagerie_db::AnimalStore) gateway and the
//! [`ViewEngine`]. The store is either `PostgreSQL` or in-memory,
//! chosen at startup from [`ServerConfig`].

pub mod api;
pub mod config;
pub mod error;
pub mod form;
pub mod handlers;
pub mod method_override;
pub mod router;
pub mod server;
pub mod state;
pub mod views;

// Re-export primary types for convenience.
pub use config::{ConfigError, ServerConfig};
pub use error::WebError;
pub use router::build_router;
pub use server::{ServerError, start_server};
pub use state::AppState;
pub use views::ViewEngine;
