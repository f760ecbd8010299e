//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! One module per `AppRoute`. Only `games` holds state or touches the
//! network; the rest are fixed content.

pub mod community;
pub mod explore;
pub mod games;
pub mod home;
pub mod news;
pub mod store;
