//! Fixed route table for the navigation shell.
//!
//! Every path maps to exactly one page. There are no parameters, nested
//! routes, or guards.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// A top-level page of the site.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Home,
    Games,
    Community,
    Store,
    News,
    Explore,
}

impl AppRoute {
    /// Routes linked from the header nav, in display order.
    pub const NAV: [Self; 4] = [Self::Games, Self::Community, Self::Store, Self::News];

    /// Path segment registered with the router (`""` for the root).
    pub const fn segment(self) -> &'static str {
        match self {
            Self::Home => "",
            Self::Games => "games",
            Self::Community => "community",
            Self::Store => "store",
            Self::News => "news",
            Self::Explore => "explore",
        }
    }

    /// Absolute href for links.
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Games => "/games",
            Self::Community => "/community",
            Self::Store => "/store",
            Self::News => "/news",
            Self::Explore => "/explore",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Games => "Games",
            Self::Community => "Community",
            Self::Store => "Store",
            Self::News => "News",
            Self::Explore => "Explore",
        }
    }
}
