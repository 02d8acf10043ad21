//! Naming of the two admin interfaces.

/// Internal name of the sectioned BuyItMe admin site.
pub const BUYITME_SITE_NAME: &str = "buyitme_admin";
/// Header shown by the sectioned BuyItMe admin site.
pub const BUYITME_SITE_HEADER: &str = "BuyItMe Administration";
/// Internal name of the default admin site.
pub const FALLBACK_SITE_NAME: &str = "admin";
/// Header shown by the default admin site.
pub const FALLBACK_SITE_HEADER: &str = "Site administration";
