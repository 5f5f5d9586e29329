//! MW Core - Shared types library.
//!
//! This crate provides common types used across all MW Servicio Comercial
//! components:
//! - `backoffice` - Data-sync library (store gateway, auth, sessions, AI)
//! - `cli` - Command-line front end for the back office
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. Anything
//! that talks to the Supabase backend lives in `mw-backoffice`.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, emails, and statuses
//! - [`entities`] - The five persisted record kinds and their payload types

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod entities;
pub mod types;

pub use entities::*;
pub use types::*;
