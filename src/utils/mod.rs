//! Small helpers shared by the routers.
pub mod httperror;
