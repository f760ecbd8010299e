//! Build-time site configuration.
//!
//! The site has no runtime settings: the catalog endpoint and asset paths are
//! fixed when the bundle is compiled.

/// Brand shown in the header and the document title.
pub const SITE_NAME: &str = "AnimeVerse";

/// Third-party catalog listing fetched by the games page.
pub const CATALOG_ENDPOINT: &str = "https://api.jikan.moe/v4/anime";

/// Hero background on the home page, served from the assets directory.
pub const HOME_BACKGROUND: &str = "/gaming-background.jpg";

/// Stylesheet emitted by the build under `/pkg`.
pub const STYLESHEET: &str = "/pkg/animeverse.css";

/// The only failure text a user ever sees from the catalog view.
pub const CATALOG_FAILED_MESSAGE: &str = "Failed to load anime list.";
