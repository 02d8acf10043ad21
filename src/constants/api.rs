//! Constants related to the general configuration of the entire API and its deployment.

use std::{env::var, sync::LazyLock};

/// A prefix to prepend to any API paths to make them externally accessible.
pub static API_URI_PREFIX: LazyLock<String> =
    LazyLock::new(|| var("API_URI_PREFIX").unwrap_or(String::from("/")));

/// The socket address the HTTP listener binds to.
pub static LISTEN_ADDRESS: LazyLock<String> =
    LazyLock::new(|| var("LISTEN_ADDRESS").unwrap_or(String::from("0.0.0.0:8080")));

/// Whether the process runs in development mode. Left unparsed so that a
/// malformed value surfaces as a configuration error at start-up.
pub static DEBUG: LazyLock<String> =
    LazyLock::new(|| var("DEBUG").unwrap_or(String::from("false")));
