//! Locations of user-uploaded media and collected static assets.
use std::{env::var, sync::LazyLock};

/// The URL prefix uploaded media is served under.
pub static MEDIA_URL: LazyLock<String> =
    LazyLock::new(|| var("MEDIA_URL").unwrap_or(String::from("/media/")));

/// The directory uploaded media is stored in.
pub static MEDIA_ROOT: LazyLock<String> =
    LazyLock::new(|| var("MEDIA_ROOT").unwrap_or(String::from("media")));

/// The URL prefix static assets are served under.
pub static STATIC_URL: LazyLock<String> =
    LazyLock::new(|| var("STATIC_URL").unwrap_or(String::from("/static/")));

/// The directory static assets are collected into.
pub static STATIC_ROOT: LazyLock<String> =
    LazyLock::new(|| var("STATIC_ROOT").unwrap_or(String::from("staticfiles")));
