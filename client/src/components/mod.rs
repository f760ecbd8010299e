//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the site chrome and list cards; pages compose them.

pub mod catalog_card;
pub mod nav_bar;
