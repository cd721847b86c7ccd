//! Silva Core - Shared types library.
//!
//! This crate provides the types shared by the Silva components:
//! - `admin` - Web administration panel and its client-side state
//! - `cli` - Command-line front-end over the same state containers
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O and no HTTP
//! clients. Everything here mirrors what the remote shop API sends and
//! receives.
//!
//! # Modules
//!
//! - [`types`] - Type-safe ids and the loading indicator
//! - [`entities`] - Users, categories, products and cart items

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod entities;
pub mod types;

pub use entities::*;
pub use types::*;
