//! Application-wide constants.

/// Application display name
pub const APP_NAME: &str = "MouseBind";

/// Binary name as invoked from the shell
pub const APP_BINARY_NAME: &str = "mousebind";
