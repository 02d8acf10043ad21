//! Process configuration assembled from the environment constants.
use std::net::SocketAddr;

use crate::{
    constants::{api, files},
    routes::RESERVED_PREFIXES,
    services::media::FileMount,
};

/// Settings shared by every router, fixed for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Development mode. Enables serving media and static files directly.
    pub debug: bool,
    /// Where the HTTP listener binds.
    pub listen_address: SocketAddr,
    /// Deployment prefix every route is nested under.
    pub uri_prefix: String,
    /// Uploaded media.
    pub media: FileMount,
    /// Collected static assets.
    pub static_files: FileMount,
}

impl Settings {
    /// Read settings from the environment.
    pub fn from_env() -> Result<Self, errors::ConfigError> {
        let settings = Self {
            debug: parse_debug_flag(&api::DEBUG)?,
            listen_address: parse_listen_address(&api::LISTEN_ADDRESS)?,
            uri_prefix: api::API_URI_PREFIX.clone(),
            media: FileMount::new(files::MEDIA_URL.as_str(), files::MEDIA_ROOT.as_str()),
            static_files: FileMount::new(files::STATIC_URL.as_str(), files::STATIC_ROOT.as_str()),
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Check invariants that cannot be expressed in the types.
    pub fn validate(&self) -> Result<(), errors::ConfigError> {
        for mount in [&self.media, &self.static_files] {
            let prefix = mount.url_prefix.trim_matches('/');
            if prefix.is_empty() {
                return Err(errors::ConfigError::EmptyMountPrefix(
                    mount.document_root.display().to_string(),
                ));
            }
            if !mount.is_local() {
                continue;
            }
            // The prefix becomes part of an axum route path.
            if prefix.split('/').any(|segment| {
                segment.starts_with(':') || segment.contains(['{', '}', '*'])
            }) {
                return Err(errors::ConfigError::InvalidMountPrefix(
                    mount.url_prefix.clone(),
                ));
            }
            let first_segment = prefix.split('/').next().unwrap_or(prefix);
            if RESERVED_PREFIXES.contains(&first_segment) {
                return Err(errors::ConfigError::ReservedMountPrefix(
                    mount.url_prefix.clone(),
                ));
            }
        }
        if self.media.url_prefix.trim_matches('/') == self.static_files.url_prefix.trim_matches('/')
        {
            return Err(errors::ConfigError::SharedMountPrefix(
                self.media.url_prefix.clone(),
            ));
        }
        Ok(())
    }
}

/// Interpret the development mode flag.
fn parse_debug_flag(value: &str) -> Result<bool, errors::ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(errors::ConfigError::InvalidDebugFlag(value.to_owned())),
    }
}

/// Interpret the listen address.
fn parse_listen_address(value: &str) -> Result<SocketAddr, errors::ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| errors::ConfigError::InvalidListenAddress(value.to_owned()))
}

pub mod errors {
    use thiserror::Error;

    /// Errors raised while loading settings.
    #[derive(Debug, Error)]
    pub enum ConfigError {
        /// `LISTEN_ADDRESS` is not `host:port`.
        #[error("LISTEN_ADDRESS `{0}` is not a valid socket address")]
        InvalidListenAddress(String),
        /// `DEBUG` is not a boolean spelling.
        #[error("DEBUG `{0}` is not a recognised boolean")]
        InvalidDebugFlag(String),
        /// A file mount would be served at the root.
        #[error("the file mount for `{0}` has an empty URL prefix")]
        EmptyMountPrefix(String),
        /// A file mount prefix contains `{`, `}`, `*` or a `:segment`.
        #[error("the file mount prefix `{0}` contains route syntax")]
        InvalidMountPrefix(String),
        /// A file mount prefix starts with `admin`, `django-admin` or `api`.
        #[error("the file mount prefix `{0}` collides with a routed namespace")]
        ReservedMountPrefix(String),
        /// Media and static files share one prefix.
        #[error("MEDIA_URL and STATIC_URL must differ, both are `{0}`")]
        SharedMountPrefix(String),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn settings(media_url: &str) -> Settings {
        settings_with(media_url, "/static/")
    }

    fn settings_with(media_url: &str, static_url: &str) -> Settings {
        Settings {
            debug: true,
            listen_address: "127.0.0.1:0".parse().unwrap(),
            uri_prefix: String::from("/"),
            media: FileMount::new(media_url, "media"),
            static_files: FileMount::new(static_url, "staticfiles"),
        }
    }

    #[test]
    fn debug_flag_accepts_common_spellings() {
        for value in ["1", "true", "TRUE", "Yes", " on "] {
            assert!(parse_debug_flag(value).unwrap(), "{value}");
        }
        for value in ["", "0", "false", "No", "OFF"] {
            assert!(!parse_debug_flag(value).unwrap(), "{value}");
        }
    }

    #[test]
    fn debug_flag_rejects_garbage() {
        assert!(matches!(
            parse_debug_flag("maybe"),
            Err(errors::ConfigError::InvalidDebugFlag(_))
        ));
    }

    #[test]
    fn empty_mount_prefix_is_rejected() {
        assert!(settings("/media/").validate().is_ok());
        assert!(matches!(
            settings("/").validate(),
            Err(errors::ConfigError::EmptyMountPrefix(_))
        ));
        assert!(settings("").validate().is_err());
    }

    #[test]
    fn mount_prefixes_may_not_shadow_routed_namespaces() {
        for prefix in ["/api/", "/admin/uploads/", "django-admin"] {
            assert!(matches!(
                settings(prefix).validate(),
                Err(errors::ConfigError::ReservedMountPrefix(_))
            ));
        }
        assert!(settings("/apiary/").validate().is_ok());
        assert!(settings("https://cdn.example.com/api/").validate().is_ok());
    }

    #[test]
    fn mount_prefixes_may_not_contain_route_syntax() {
        for prefix in ["/me{dia/", "/media}/", "/files/:kind/", "/uploads/*/", "/{*rest}/"] {
            assert!(
                matches!(
                    settings(prefix).validate(),
                    Err(errors::ConfigError::InvalidMountPrefix(_))
                ),
                "{prefix}"
            );
        }
        assert!(settings("/user-media/2024/").validate().is_ok());
        assert!(settings("https://cdn.example.com/{bucket}/").validate().is_ok());
    }

    #[test]
    fn listen_address_must_be_a_socket_address() {
        assert_eq!(
            parse_listen_address("0.0.0.0:8080").unwrap(),
            SocketAddr::from(([0, 0, 0, 0], 8080))
        );
        assert_eq!(
            parse_listen_address("[::1]:3000").unwrap(),
            SocketAddr::from(([0, 0, 0, 0, 0, 0, 0, 1], 3000))
        );
        for value in ["localhost", "0.0.0.0", "0.0.0.0:99999", ""] {
            assert!(
                matches!(
                    parse_listen_address(value),
                    Err(errors::ConfigError::InvalidListenAddress(_))
                ),
                "{value}"
            );
        }
    }

    #[test]
    fn media_and_static_need_distinct_prefixes() {
        assert!(matches!(
            settings_with("/files/", "files").validate(),
            Err(errors::ConfigError::SharedMountPrefix(_))
        ));
    }
}
