//! Services backing the routers: admin site descriptions and file serving.
pub mod admin;
pub mod media;
