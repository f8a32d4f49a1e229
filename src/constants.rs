//! Application constants and configuration

pub const APP_NAME: &str = "Personal Details";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Id of the container the application root is mounted into
pub const ROOT_CONTAINER_ID: &str = "root";
