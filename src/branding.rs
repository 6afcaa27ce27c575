//! Branding and application identity.
//!
//! Names and paths that identify the application live here so the binary,
//! the config location and the terminal title stay in sync.

/// The human-readable display name of the application.
///
/// Used in the terminal title bar and help text.
pub const APP_DISPLAY_NAME: &str = "Folio";

/// The binary/executable name (lowercase, no spaces).
pub const APP_BINARY_NAME: &str = "folio";

/// The directory name for application data.
///
/// Used in platform-specific paths:
/// - Linux: `~/.config/{APP_DATA_DIR}/`
/// - macOS: `~/Library/Application Support/{APP_DATA_DIR}/`
/// - Windows: `%APPDATA%\{APP_DATA_DIR}\`
pub const APP_DATA_DIR: &str = "Folio";

/// Short description for help text.
pub const APP_DESCRIPTION: &str = "Personal developer portfolio for the terminal";

/// Name of the config file inside [`APP_DATA_DIR`].
pub const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_branding_consistency() {
        assert_eq!(APP_BINARY_NAME, APP_BINARY_NAME.to_lowercase());
        assert!(!APP_BINARY_NAME.contains(' '));
        assert!(!APP_DATA_DIR.contains(' '));
        assert_eq!(APP_DISPLAY_NAME.to_lowercase(), APP_BINARY_NAME);
    }
}
