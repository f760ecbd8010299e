//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern: `catalog` is scoped to one activation of the
//! games view, `search` lives for the whole session in the header.

pub mod catalog;
pub mod search;
