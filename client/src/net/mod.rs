//! Networking modules for the catalog endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the browser-side HTTP call, and `types` defines the remote
//! wire schema plus its mapping into display items.

pub mod api;
pub mod types;
