//! MW Back Office - data-sync library for MW Servicio Comercial.
//!
//! Everything between the UI layer and the remote Supabase backend lives
//! here: the row gateway, the identity exchange, the client-held session
//! record, image normalization for product uploads, dashboard aggregation,
//! and the optional AI insight adapter. The UI itself (a web front end, or
//! the `mw-cli` binary in this workspace) is an external collaborator that
//! calls into these contracts.
//!
//! # Modules
//!
//! - [`config`] - Environment configuration with graceful degradation
//! - [`store`] - Remote entity gateway over the PostgREST row API
//! - [`services`] - Auth flow, session store, AI insights, image normalizer
//! - [`cache`] - In-memory collections with optimistic mutation + rollback
//! - [`stats`] - Pure dashboard aggregation views
//! - [`state`] - Shared application context wiring the above together

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cache;
pub mod config;
pub mod services;
pub mod state;
pub mod stats;
pub mod store;

pub use cache::DataCache;
pub use config::AppConfig;
pub use state::AppState;
