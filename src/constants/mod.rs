//! Constants (primary environment variables) used across the application.
pub mod admin;
pub mod api;
pub mod files;
