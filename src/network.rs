//! Network URL constants for the CoinCap SDK.

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "https://api.coincap.io/v2";

/// Asset icon CDN base URL.
pub const ICONS_URL: &str = "https://static.coincap.io/assets/icons";

/// Asset icon filename suffix (the 2x raster variant).
pub const ICONS_SUFFIX: &str = "@2x.png";
